use super::*;

// =============================================================================
// launch
// =============================================================================

#[test]
fn launch_starts_at_step_zero() {
    let mut state = TourState::default();
    state.launch("onboarding");
    assert_eq!(state.active, Some(ActiveTour { name: "onboarding".to_owned(), step: 0 }));
}

#[test]
fn launch_replaces_active_tour() {
    let mut state = TourState::default();
    state.launch("onboarding");
    state.advance(5);
    state.launch("streaks");
    let active = state.active.unwrap();
    assert_eq!(active.name, "streaks");
    assert_eq!(active.step, 0);
}

// =============================================================================
// advance
// =============================================================================

#[test]
fn advance_without_active_tour_is_noop() {
    let mut state = TourState::default();
    assert_eq!(state.advance(3), None);
    assert!(state.active.is_none());
}

#[test]
fn advance_steps_through_without_completing() {
    let mut state = TourState::default();
    state.launch("onboarding");
    assert_eq!(state.advance(3), None);
    assert_eq!(state.advance(3), None);
    assert_eq!(state.active.as_ref().unwrap().step, 2);
}

#[test]
fn advancing_past_last_step_completes() {
    let mut state = TourState::default();
    state.launch("onboarding");
    state.advance(2);
    assert_eq!(state.advance(2), Some("onboarding".to_owned()));
    assert!(state.active.is_none());
    assert!(state.status.unwrap().is_seen("onboarding"));
}

#[test]
fn single_step_tour_completes_on_first_advance() {
    let mut state = TourState::default();
    state.launch("badge");
    assert_eq!(state.advance(1), Some("badge".to_owned()));
}

// =============================================================================
// dismiss
// =============================================================================

#[test]
fn dismiss_without_active_tour_is_noop() {
    let mut state = TourState::default();
    assert_eq!(state.dismiss(), None);
}

#[test]
fn dismiss_records_and_clears() {
    let mut state = TourState::default();
    state.launch("onboarding");
    assert_eq!(state.dismiss(), Some("onboarding".to_owned()));
    assert!(state.active.is_none());
    let status = state.status.unwrap();
    assert!(status.dismissed.contains(&"onboarding".to_owned()));
    assert!(status.completed.is_empty());
}
