use super::*;

fn seen(completed: &[&str], dismissed: &[&str]) -> TourStatus {
    TourStatus {
        completed: completed.iter().map(|s| (*s).to_owned()).collect(),
        dismissed: dismissed.iter().map(|s| (*s).to_owned()).collect(),
    }
}

// =============================================================================
// valid_tour_name
// =============================================================================

#[test]
fn valid_names_accepted() {
    assert!(valid_tour_name("onboarding"));
    assert!(valid_tour_name("streaks-2"));
}

#[test]
fn empty_name_rejected() {
    assert!(!valid_tour_name(""));
}

#[test]
fn uppercase_and_symbols_rejected() {
    assert!(!valid_tour_name("Onboarding"));
    assert!(!valid_tour_name("tour_name"));
    assert!(!valid_tour_name("a b"));
}

#[test]
fn overlong_name_rejected() {
    let name = "a".repeat(65);
    assert!(!valid_tour_name(&name));
}

// =============================================================================
// tour_from_query
// =============================================================================

#[test]
fn extracts_tour_parameter() {
    assert_eq!(tour_from_query("?tour=onboarding"), Some("onboarding".to_owned()));
}

#[test]
fn works_without_leading_question_mark() {
    assert_eq!(tour_from_query("tour=streaks-2"), Some("streaks-2".to_owned()));
}

#[test]
fn finds_tour_among_other_parameters() {
    assert_eq!(
        tour_from_query("?utm_source=email&tour=onboarding&ref=1"),
        Some("onboarding".to_owned())
    );
}

#[test]
fn ignores_valueless_pairs() {
    assert_eq!(tour_from_query("?flag&tour=onboarding"), Some("onboarding".to_owned()));
}

#[test]
fn missing_parameter_yields_none() {
    assert_eq!(tour_from_query("?utm_source=email"), None);
    assert_eq!(tour_from_query(""), None);
}

#[test]
fn malformed_value_yields_none() {
    assert_eq!(tour_from_query("?tour=Bad%20Name"), None);
    assert_eq!(tour_from_query("?tour="), None);
}

// =============================================================================
// tour_to_launch
// =============================================================================

#[test]
fn explicit_request_always_launches() {
    let status = seen(&["streaks"], &[]);
    assert_eq!(tour_to_launch(Some("streaks"), &status), Some("streaks".to_owned()));
}

#[test]
fn onboarding_launches_for_new_user() {
    let status = TourStatus::default();
    assert_eq!(tour_to_launch(None, &status), Some(ONBOARDING_TOUR.to_owned()));
}

#[test]
fn onboarding_suppressed_after_completion() {
    let status = seen(&[ONBOARDING_TOUR], &[]);
    assert_eq!(tour_to_launch(None, &status), None);
}

#[test]
fn onboarding_suppressed_after_dismissal() {
    let status = seen(&[], &[ONBOARDING_TOUR]);
    assert_eq!(tour_to_launch(None, &status), None);
}
