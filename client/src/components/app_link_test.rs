use super::*;

#[test]
fn http_and_https_are_external() {
    assert!(is_external_href("http://example.com"));
    assert!(is_external_href("https://example.com/path"));
}

#[test]
fn app_routes_are_internal() {
    assert!(!is_external_href("/"));
    assert!(!is_external_href("/login"));
    assert!(!is_external_href("/?tour=onboarding"));
}

#[test]
fn protocol_relative_is_internal() {
    assert!(!is_external_href("//example.com"));
}
