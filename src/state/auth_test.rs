use super::*;

fn sample_user() -> User {
    User {
        id: "1".to_owned(),
        email: "a@b.com".to_owned(),
        username: "a".to_owned(),
        first_name: None,
        last_name: None,
    }
}

fn logged_in(token: &str) -> AuthState {
    let mut state = AuthState::default();
    state.login(token.to_owned(), sample_user());
    state
}

// =============================================================================
// Defaults
// =============================================================================

#[test]
fn default_is_empty_session() {
    let state = AuthState::default();
    assert!(state.token.is_none());
    assert!(state.user.is_none());
    assert!(!state.is_authenticated);
    assert!(!state.is_loading);
    assert!(state.error.is_none());
}

// =============================================================================
// login / logout transitions
// =============================================================================

#[test]
fn login_sets_token_user_and_flag_together() {
    let state = logged_in("tok-123");
    assert_eq!(state.token.as_deref(), Some("tok-123"));
    assert_eq!(state.user, Some(sample_user()));
    assert!(state.is_authenticated);
    assert!(state.error.is_none());
}

#[test]
fn login_clears_previous_error_and_loading() {
    let mut state = AuthState::default();
    state.set_error("old failure");
    state.begin_loading();
    state.login("tok-123".to_owned(), sample_user());
    assert!(state.error.is_none());
    assert!(!state.is_loading);
}

#[test]
fn logout_clears_everything() {
    let mut state = logged_in("tok-123");
    state.set_error("stale");
    state.logout();
    assert!(state.token.is_none());
    assert!(state.user.is_none());
    assert!(!state.is_authenticated);
    assert!(state.error.is_none());
    assert!(!state.is_loading);
}

#[test]
fn logout_is_idempotent() {
    let mut once = logged_in("tok-123");
    once.logout();
    let mut twice = once.clone();
    twice.logout();
    assert_eq!(once, twice);
}

#[test]
fn authenticated_flag_tracks_token_across_transitions() {
    let mut state = AuthState::default();
    assert_eq!(state.is_authenticated, state.token.is_some());
    state.login("tok-123".to_owned(), sample_user());
    assert_eq!(state.is_authenticated, state.token.is_some());
    state.set_error("anything");
    assert_eq!(state.is_authenticated, state.token.is_some());
    state.logout();
    assert_eq!(state.is_authenticated, state.token.is_some());
}

// =============================================================================
// set_error / clear_error
// =============================================================================

#[test]
fn set_error_leaves_session_fields_alone() {
    let mut state = logged_in("tok-123");
    state.set_error("something went wrong");
    assert_eq!(state.error.as_deref(), Some("something went wrong"));
    assert_eq!(state.token.as_deref(), Some("tok-123"));
    assert!(state.is_authenticated);
}

#[test]
fn clear_error_resets_only_error() {
    let mut state = logged_in("tok-123");
    state.set_error("oops");
    state.clear_error();
    assert!(state.error.is_none());
    assert!(state.is_authenticated);
}

// =============================================================================
// Loading flag lifecycle
// =============================================================================

#[test]
fn loading_clears_on_both_exit_paths() {
    let mut state = AuthState::default();
    state.begin_loading();
    assert!(state.is_loading);
    state.finish_loading();
    assert!(!state.is_loading);

    state.begin_loading();
    state.login("tok-123".to_owned(), sample_user());
    assert!(!state.is_loading);
}

// =============================================================================
// apply_failure — inbound failure dispatch
// =============================================================================

#[test]
fn failure_401_logs_out_and_sets_session_expired() {
    let mut state = logged_in("tok-123");
    state.apply_failure(&ApiError::Status { status: 401, message: None });
    assert!(state.token.is_none());
    assert!(!state.is_authenticated);
    assert_eq!(state.error.as_deref(), Some(SESSION_EXPIRED));
}

#[test]
fn failure_5xx_sets_error_but_keeps_session() {
    for status in [500, 502, 599] {
        let mut state = logged_in("tok-123");
        state.apply_failure(&ApiError::Status { status, message: None });
        assert_eq!(state.error.as_deref(), Some(SERVER_ERROR));
        assert_eq!(state.token.as_deref(), Some("tok-123"));
        assert!(state.is_authenticated, "5xx must not deauthenticate");
    }
}

#[test]
fn failure_network_sets_error_but_keeps_session() {
    let mut state = logged_in("tok-123");
    state.apply_failure(&ApiError::Network("offline".to_owned()));
    assert_eq!(state.error.as_deref(), Some(NETWORK_ERROR));
    assert!(state.is_authenticated);
}

#[test]
fn failure_other_status_leaves_store_untouched() {
    let before = logged_in("tok-123");
    let mut state = before.clone();
    state.apply_failure(&ApiError::Status { status: 404, message: Some("not found".to_owned()) });
    assert_eq!(state, before);
}

#[test]
fn failure_401_on_empty_session_is_harmless() {
    let mut state = AuthState::default();
    state.apply_failure(&ApiError::Status { status: 401, message: None });
    assert!(state.token.is_none());
    assert!(!state.is_authenticated);
    assert_eq!(state.error.as_deref(), Some(SESSION_EXPIRED));
}

// =============================================================================
// restore — persisted subset round-trip
// =============================================================================

#[test]
fn restore_round_trips_persisted_subset() {
    let state = logged_in("tok-123");
    let persisted = PersistedSession::from(&state);
    let restored = AuthState::restore(persisted.clone());
    assert_eq!(PersistedSession::from(&restored), persisted);
    assert!(!restored.is_loading);
    assert!(restored.error.is_none());
}

#[test]
fn restore_never_persists_loading_or_error() {
    let mut state = logged_in("tok-123");
    state.begin_loading();
    state.set_error("transient");
    let restored = AuthState::restore(PersistedSession::from(&state));
    assert!(!restored.is_loading);
    assert!(restored.error.is_none());
}

#[test]
fn restore_token_without_user_yields_empty_session() {
    let persisted = PersistedSession {
        token: Some("tok-123".to_owned()),
        user: None,
        is_authenticated: true,
    };
    assert_eq!(AuthState::restore(persisted), AuthState::default());
}

#[test]
fn restore_rederives_flag_instead_of_trusting_it() {
    let persisted = PersistedSession {
        token: Some("tok-123".to_owned()),
        user: Some(sample_user()),
        is_authenticated: false,
    };
    let restored = AuthState::restore(persisted);
    assert!(restored.is_authenticated);
    assert_eq!(restored.token.as_deref(), Some("tok-123"));
}
