//! Authentication service: orchestrates the store, the gateway, and
//! durable storage for login/logout flows.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::{GetUntracked, RwSignal, Set, Update};

use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::{AuthResponse, LoginCredentials};
use crate::state::auth::{AuthState, PersistedSession};
use crate::state::persist;

/// Log in with email and password against `POST /api/auth/login`.
///
/// On success the store enters the authenticated state and the persisted
/// record is written. On failure only the loading flag is cleared here —
/// the gateway's inbound stage has already recorded any store-level error,
/// and the caller renders the failure.
///
/// # Errors
///
/// Propagates the gateway `ApiError` untouched.
pub async fn login(
    auth: RwSignal<AuthState>,
    credentials: &LoginCredentials,
) -> Result<AuthResponse, ApiError> {
    auth.update(AuthState::begin_loading);
    match api::post_json::<_, AuthResponse>(auth, "/auth/login", credentials).await {
        Ok(response) => {
            auth.update(|state| state.login(response.token.clone(), response.user.clone()));
            persist::save(&PersistedSession::from(&auth.get_untracked()));
            Ok(response)
        }
        Err(err) => {
            auth.update(AuthState::finish_loading);
            Err(err)
        }
    }
}

/// Log out: best-effort `POST /api/auth/logout`, then always clear the
/// local session and remove the durable record as the last step.
///
/// The endpoint call failing (or the server already having forgotten the
/// session) must never leave the client looking authenticated, so the
/// local cleanup is unconditional and this function never raises.
pub async fn logout(auth: RwSignal<AuthState>) {
    if let Err(err) = api::post_empty(auth, "/auth/logout").await {
        #[cfg(feature = "hydrate")]
        log::warn!("logout endpoint failed: {err}");
        #[cfg(not(feature = "hydrate"))]
        let _ = err;
    }
    auth.update(AuthState::logout);
    persist::save(&PersistedSession::from(&auth.get_untracked()));
    persist::clear();
}

/// Read the token straight from durable storage, bypassing the store.
/// Used before the store is initialized; absent or malformed storage is
/// simply `None`.
#[must_use]
pub fn get_stored_token() -> Option<String> {
    persist::load().and_then(|session| session.token)
}

/// Seed the auth signal from durable storage. Called once at startup,
/// before anything else reads the session.
pub fn restore_session(auth: RwSignal<AuthState>) {
    if let Some(session) = persist::load() {
        auth.set(AuthState::restore(session));
    }
}
