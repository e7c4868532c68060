use super::*;
use crate::net::types::User;

fn logged_in(token: &str) -> AuthState {
    let mut state = AuthState::default();
    state.login(
        token.to_owned(),
        User {
            id: "1".to_owned(),
            email: "a@b.com".to_owned(),
            username: "a".to_owned(),
            first_name: None,
            last_name: None,
        },
    );
    state
}

// =============================================================================
// Outbound stage — bearer header attachment
// =============================================================================

#[test]
fn bearer_attached_when_token_present() {
    let state = logged_in("tok-123");
    assert_eq!(bearer_value(&state).as_deref(), Some("Bearer tok-123"));
}

#[test]
fn no_bearer_when_logged_out() {
    assert_eq!(bearer_value(&AuthState::default()), None);
}

#[test]
fn bearer_reflects_arbitrary_tokens() {
    for token in ["t", "tok-123", "a.b.c-d_e"] {
        let state = logged_in(token);
        assert_eq!(bearer_value(&state), Some(format!("Bearer {token}")));
    }
}

// =============================================================================
// 401 redirect predicate
// =============================================================================

#[test]
fn redirects_from_app_pages() {
    assert!(should_redirect_to_login("/"));
    assert!(should_redirect_to_login("/electronics"));
    assert!(should_redirect_to_login("/deals"));
}

#[test]
fn no_redirect_when_already_on_login() {
    assert!(!should_redirect_to_login("/login"));
    assert!(!should_redirect_to_login("/login/"));
}
