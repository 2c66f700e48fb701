use super::*;

// =============================================================================
// strip_port
// =============================================================================

#[test]
fn strip_port_removes_port() {
    assert_eq!(strip_port("daybreak.example:443"), "daybreak.example");
}

#[test]
fn strip_port_leaves_bare_host() {
    assert_eq!(strip_port("daybreak.example"), "daybreak.example");
}

// =============================================================================
// subdomain_from_host
// =============================================================================

#[test]
fn apex_has_no_subdomain() {
    assert_eq!(subdomain_from_host("daybreak.example", "daybreak.example"), None);
}

#[test]
fn single_label_subdomain() {
    assert_eq!(
        subdomain_from_host("app.daybreak.example", "daybreak.example"),
        Some("app".to_owned())
    );
}

#[test]
fn admin_subdomain() {
    assert_eq!(
        subdomain_from_host("admin.daybreak.example", "daybreak.example"),
        Some("admin".to_owned())
    );
}

#[test]
fn nested_labels_are_preserved() {
    assert_eq!(
        subdomain_from_host("a.b.daybreak.example", "daybreak.example"),
        Some("a.b".to_owned())
    );
}

#[test]
fn unrelated_host_yields_none() {
    assert_eq!(subdomain_from_host("evil.example", "daybreak.example"), None);
}

#[test]
fn suffix_without_dot_is_not_a_subdomain() {
    // "notdaybreak.example" ends with the base string but is a different
    // registrable domain.
    assert_eq!(subdomain_from_host("notdaybreak.example", "daybreak.example"), None);
}

#[test]
fn port_is_ignored() {
    assert_eq!(
        subdomain_from_host("app.daybreak.example:8080", "daybreak.example"),
        Some("app".to_owned())
    );
}

#[test]
fn host_is_case_insensitive() {
    assert_eq!(
        subdomain_from_host("App.Daybreak.Example", "daybreak.example"),
        Some("app".to_owned())
    );
}

#[test]
fn empty_host_yields_none() {
    assert_eq!(subdomain_from_host("", "daybreak.example"), None);
}
