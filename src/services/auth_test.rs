use super::*;

// =============================================================================
// get_stored_token — storage bypass read
// =============================================================================

#[test]
fn stored_token_none_without_browser_storage() {
    // Native target has no localStorage; the read degrades to None
    // instead of raising.
    assert!(get_stored_token().is_none());
}

#[test]
fn stored_token_comes_from_persisted_record() {
    let mut state = AuthState::default();
    state.login(
        "tok-123".to_owned(),
        crate::net::types::User {
            id: "1".to_owned(),
            email: "a@b.com".to_owned(),
            username: "a".to_owned(),
            first_name: None,
            last_name: None,
        },
    );
    let record = PersistedSession::from(&state);
    // The field the bypass read returns.
    assert_eq!(record.token.as_deref(), Some("tok-123"));
}
