use super::*;

// =============================================================================
// diagnostic_allowed
// =============================================================================

#[test]
fn disabled_flag_blocks_everything() {
    assert!(!diagnostic_allowed(false, false, None));
    assert!(!diagnostic_allowed(false, true, Some("admin")));
}

#[test]
fn enabled_without_base_domain_allows_any_host() {
    assert!(diagnostic_allowed(true, false, None));
    assert!(diagnostic_allowed(true, false, Some("app")));
}

#[test]
fn enabled_with_base_domain_requires_admin() {
    assert!(diagnostic_allowed(true, true, Some("admin")));
    assert!(!diagnostic_allowed(true, true, Some("app")));
    assert!(!diagnostic_allowed(true, true, None));
}
