use super::*;

// =============================================================================
// Form validation
// =============================================================================

#[test]
fn empty_email_is_rejected() {
    let errors = validate("", "secret1");
    assert_eq!(errors.email, Some(EMAIL_REQUIRED));
    assert!(errors.password.is_none());
    assert!(!errors.is_ok());
}

#[test]
fn whitespace_email_is_rejected() {
    let errors = validate("   ", "secret1");
    assert_eq!(errors.email, Some(EMAIL_REQUIRED));
}

#[test]
fn empty_password_is_rejected() {
    let errors = validate("a@b.com", "");
    assert_eq!(errors.password, Some(PASSWORD_REQUIRED));
}

#[test]
fn short_password_is_rejected() {
    let errors = validate("a@b.com", "12345");
    assert_eq!(errors.password, Some(PASSWORD_TOO_SHORT));
}

#[test]
fn both_fields_can_fail_at_once() {
    let errors = validate("", "");
    assert_eq!(errors.email, Some(EMAIL_REQUIRED));
    assert_eq!(errors.password, Some(PASSWORD_REQUIRED));
}

#[test]
fn valid_credentials_pass() {
    let errors = validate("a@b.com", "secret1");
    assert!(errors.is_ok());
}

#[test]
fn six_character_password_is_the_minimum() {
    assert!(validate("a@b.com", "123456").is_ok());
    assert!(!validate("a@b.com", "12345").is_ok());
}
