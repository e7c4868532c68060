//! Authentication state: the single source of truth for the current session.
//!
//! DESIGN
//! ======
//! `AuthState` is a plain struct held in an `RwSignal` provided via context
//! (see `app.rs`). All mutation goes through the transition methods below so
//! the invariant `is_authenticated == token.is_some()` can never be broken
//! by a stray field write. The struct stays signal-free so transitions are
//! testable on the native target.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::error::ApiError;
use crate::net::types::User;

/// Error shown when a 401 invalidates the session.
pub const SESSION_EXPIRED: &str = "Session expired, please log in again";
/// Error shown for any 5xx response.
pub const SERVER_ERROR: &str = "Server error, please try again later";
/// Error shown when a request never reached the server.
pub const NETWORK_ERROR: &str = "Network error, please check your connection";

/// In-memory session state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    /// Bearer token — present iff authenticated.
    pub token: Option<String>,
    pub user: Option<User>,
    /// Derived: true iff `token` and `user` are both present.
    pub is_authenticated: bool,
    /// True only while a login call is in flight.
    pub is_loading: bool,
    /// Last failure message, for the login form and error banners.
    pub error: Option<String>,
}

impl AuthState {
    /// Enter the authenticated state. The only transition that sets `token`
    /// and `user` together; clears any previous error and the loading flag.
    pub fn login(&mut self, token: String, user: User) {
        self.token = Some(token);
        self.user = Some(user);
        self.is_authenticated = true;
        self.error = None;
        self.is_loading = false;
    }

    /// Clear the session. Observably idempotent.
    pub fn logout(&mut self) {
        self.token = None;
        self.user = None;
        self.is_authenticated = false;
        self.error = None;
        self.is_loading = false;
    }

    /// Record a failure message without touching the session fields.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Mark a login call as in flight. Cleared by `login` on success and by
    /// `finish_loading` on every failure path, so the flag cannot stick.
    pub fn begin_loading(&mut self) {
        self.is_loading = true;
    }

    pub fn finish_loading(&mut self) {
        self.is_loading = false;
    }

    /// Inbound-stage dispatch: mutate the session according to the failure
    /// class. The caller re-raises the error afterwards; this never swallows
    /// anything.
    ///
    /// - 401: the session is gone server-side — log out and record the
    ///   session-expired message.
    /// - 5xx: record the server-error message, session untouched.
    /// - no response: record the network-error message, session untouched.
    /// - anything else: no store mutation.
    pub fn apply_failure(&mut self, err: &ApiError) {
        if err.is_unauthorized() {
            self.logout();
            self.set_error(SESSION_EXPIRED);
        } else if err.is_server_error() {
            self.set_error(SERVER_ERROR);
        } else if matches!(err, ApiError::Network(_)) {
            self.set_error(NETWORK_ERROR);
        }
    }

    /// Rebuild a session from a persisted record, re-deriving
    /// `is_authenticated` rather than trusting the stored flag. A record
    /// with only one of token/user restores as the empty session.
    #[must_use]
    pub fn restore(persisted: PersistedSession) -> Self {
        let authenticated = persisted.token.is_some() && persisted.user.is_some();
        if authenticated {
            Self {
                token: persisted.token,
                user: persisted.user,
                is_authenticated: true,
                ..Self::default()
            }
        } else {
            Self::default()
        }
    }
}

/// The subset of the session that survives a page reload. `is_loading` and
/// `error` are session-local and deliberately absent.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedSession {
    pub token: Option<String>,
    pub user: Option<User>,
    pub is_authenticated: bool,
}

impl From<&AuthState> for PersistedSession {
    fn from(state: &AuthState) -> Self {
        Self {
            token: state.token.clone(),
            user: state.user.clone(),
            is_authenticated: state.is_authenticated,
        }
    }
}
