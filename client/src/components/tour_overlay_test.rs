use super::*;

#[test]
fn known_tours_have_multiple_steps() {
    assert_eq!(tour_step_count("onboarding"), 4);
    assert_eq!(tour_step_count("streaks"), 2);
}

#[test]
fn unknown_tour_defaults_to_single_step() {
    assert_eq!(tour_step_count("anything-else"), 1);
}
