use super::*;

// =============================================================================
// is_mobile_width
// =============================================================================

#[test]
fn narrow_width_is_mobile() {
    assert!(is_mobile_width(375.0));
}

#[test]
fn threshold_width_is_not_mobile() {
    assert!(!is_mobile_width(768.0));
}

#[test]
fn wide_width_is_not_mobile() {
    assert!(!is_mobile_width(1440.0));
}

// =============================================================================
// classify
// =============================================================================

#[test]
fn standalone_wins_over_width() {
    assert_eq!(classify(true, 375.0), DisplayMode::Standalone);
    assert_eq!(classify(true, 1440.0), DisplayMode::Standalone);
}

#[test]
fn narrow_browser_is_mobile_browser() {
    assert_eq!(classify(false, 375.0), DisplayMode::MobileBrowser);
}

#[test]
fn wide_browser_is_browser() {
    assert_eq!(classify(false, 1440.0), DisplayMode::Browser);
}

// =============================================================================
// pad_class
// =============================================================================

#[test]
fn pad_class_is_distinct_per_mode() {
    let classes = [
        pad_class(DisplayMode::Standalone),
        pad_class(DisplayMode::MobileBrowser),
        pad_class(DisplayMode::Browser),
    ];
    assert_eq!(classes[0], "page-container--pad-standalone");
    assert_eq!(classes[1], "page-container--pad-mobile");
    assert_eq!(classes[2], "page-container--pad-desktop");
    assert_ne!(classes[0], classes[1]);
    assert_ne!(classes[1], classes[2]);
}

#[test]
fn default_display_mode_is_browser() {
    assert_eq!(DisplayMode::default(), DisplayMode::Browser);
}
