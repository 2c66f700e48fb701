use super::*;

// =============================================================================
// normalize_email
// =============================================================================

#[test]
fn normalize_email_lowercases_and_trims() {
    assert_eq!(
        normalize_email("  Alice@Example.COM  "),
        Some("alice@example.com".to_owned())
    );
}

#[test]
fn normalize_email_rejects_missing_at() {
    assert_eq!(normalize_email("alice.example.com"), None);
}

#[test]
fn normalize_email_rejects_empty_parts() {
    assert_eq!(normalize_email("@example.com"), None);
    assert_eq!(normalize_email("alice@"), None);
    assert_eq!(normalize_email(""), None);
}

#[test]
fn normalize_email_rejects_double_at() {
    assert_eq!(normalize_email("a@b@c.com"), None);
}

// =============================================================================
// normalize_code
// =============================================================================

#[test]
fn normalize_code_uppercases_and_trims() {
    assert_eq!(normalize_code(" ab2cd3 "), Some("AB2CD3".to_owned()));
}

#[test]
fn normalize_code_rejects_wrong_length() {
    assert_eq!(normalize_code("ABC23"), None);
    assert_eq!(normalize_code("ABC23XY"), None);
}

#[test]
fn normalize_code_rejects_ambiguous_chars() {
    // 0, 1, I, O are excluded from the alphabet.
    assert_eq!(normalize_code("ABC120"), None);
    assert_eq!(normalize_code("ABCIOX"), None);
}

// =============================================================================
// generate_login_code
// =============================================================================

#[test]
fn generated_code_has_expected_length() {
    assert_eq!(generate_login_code().len(), CODE_LEN);
}

#[test]
fn generated_code_stays_in_alphabet() {
    let code = generate_login_code();
    assert!(code.bytes().all(|b| CODE_ALPHABET.contains(&b)));
}

#[test]
fn generated_code_normalizes_to_itself() {
    let code = generate_login_code();
    assert_eq!(normalize_code(&code), Some(code));
}

// =============================================================================
// hash_login_code
// =============================================================================

#[test]
fn hash_is_hex_sha256() {
    let hash = hash_login_code("AB2CD3");
    assert_eq!(hash.len(), 64);
    assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn hash_is_deterministic() {
    assert_eq!(hash_login_code("AB2CD3"), hash_login_code("AB2CD3"));
}

#[test]
fn hash_differs_per_code() {
    assert_ne!(hash_login_code("AB2CD3"), hash_login_code("AB2CD4"));
}

// =============================================================================
// name_from_email / template
// =============================================================================

#[test]
fn name_from_email_uses_local_part() {
    assert_eq!(name_from_email("alice@example.com"), "alice");
}

#[test]
fn name_from_email_falls_back_for_empty_local() {
    assert_eq!(name_from_email(""), "member");
}

#[test]
fn template_substitutes_email_and_code() {
    let html = render_login_code_template("alice@example.com", "AB2CD3");
    assert!(html.contains("alice@example.com"));
    assert!(html.contains("AB2CD3"));
    assert!(!html.contains("{{EMAIL}}"));
    assert!(!html.contains("{{CODE}}"));
}

// =============================================================================
// EmailConfig
// =============================================================================

#[test]
fn email_config_from_env_missing_returns_none() {
    // Relies on these vars being unset in the test environment; use
    // obviously-unset names to avoid races with other tests.
    unsafe { std::env::remove_var("RESEND_API_KEY") };
    unsafe { std::env::remove_var("RESEND_FROM") };
    assert!(EmailConfig::from_env().is_none());
}
