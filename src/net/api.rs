//! The API gateway: every HTTP call to the backend goes through here.
//!
//! Client-side (hydrate): real fetches via `gloo-net`. Server-side (SSR):
//! stubs returning a network error, since these endpoints are only
//! meaningful in the browser.
//!
//! INTERCEPTORS
//! ============
//! The outbound stage reads the auth store synchronously and stamps
//! `Authorization: Bearer <token>` when a token is present. The inbound
//! stage classifies failures into `ApiError`, mutates the store through
//! `AuthState::apply_failure` (re-reading the live signal, never a cached
//! snapshot), redirects to `/login` on 401, and then propagates the
//! original error to the caller — failures are annotated, never swallowed.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use leptos::prelude::RwSignal;

#[cfg(feature = "hydrate")]
use leptos::prelude::{GetUntracked, Update};

use crate::net::error::ApiError;
#[cfg(feature = "hydrate")]
use crate::net::types::ErrorBody;
use crate::state::auth::AuthState;
#[cfg(feature = "hydrate")]
use crate::state::auth::PersistedSession;
#[cfg(feature = "hydrate")]
use crate::state::persist;

/// All endpoints are same-origin under this prefix.
pub const API_BASE: &str = "/api";

#[cfg(not(feature = "hydrate"))]
const SSR_UNAVAILABLE: &str = "not available on server";

/// Outbound stage: the `Authorization` header value for the current
/// session, or `None` when logged out.
#[must_use]
pub fn bearer_value(state: &AuthState) -> Option<String> {
    state.token.as_deref().map(|token| format!("Bearer {token}"))
}

/// Whether a 401 on the given path should bounce the user to the login
/// page. No-op when the user is already there.
#[must_use]
pub fn should_redirect_to_login(current_path: &str) -> bool {
    !current_path.contains("/login")
}

/// `GET` a JSON resource through the gateway.
///
/// # Errors
///
/// Returns an `ApiError` for non-2xx responses or network failures, after
/// the inbound stage has updated the auth store.
pub async fn get_json<T>(auth: RwSignal<AuthState>, path: &str) -> Result<T, ApiError>
where
    T: serde::de::DeserializeOwned,
{
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{API_BASE}{path}");
        let mut builder = gloo_net::http::Request::get(&url);
        if let Some(bearer) = bearer_value(&auth.get_untracked()) {
            builder = builder.header("Authorization", &bearer);
        }
        let resp = match builder.send().await {
            Ok(resp) => resp,
            Err(e) => return Err(network_failure(auth, &e)),
        };
        let resp = check_status(auth, resp).await?;
        resp.json::<T>().await.map_err(|e| ApiError::Network(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, path);
        Err(ApiError::Network(SSR_UNAVAILABLE.to_owned()))
    }
}

/// `POST` a JSON body and parse a JSON response through the gateway.
///
/// # Errors
///
/// Returns an `ApiError` for non-2xx responses or network failures, after
/// the inbound stage has updated the auth store.
pub async fn post_json<B, T>(auth: RwSignal<AuthState>, path: &str, body: &B) -> Result<T, ApiError>
where
    B: serde::Serialize,
    T: serde::de::DeserializeOwned,
{
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{API_BASE}{path}");
        let mut builder = gloo_net::http::Request::post(&url);
        if let Some(bearer) = bearer_value(&auth.get_untracked()) {
            builder = builder.header("Authorization", &bearer);
        }
        let request = builder
            .header("Content-Type", "application/json")
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let resp = match request.send().await {
            Ok(resp) => resp,
            Err(e) => return Err(network_failure(auth, &e)),
        };
        let resp = check_status(auth, resp).await?;
        resp.json::<T>().await.map_err(|e| ApiError::Network(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, path, body);
        Err(ApiError::Network(SSR_UNAVAILABLE.to_owned()))
    }
}

/// `POST` with no body, discarding any response body. Used for
/// fire-and-forget endpoints like logout.
///
/// # Errors
///
/// Returns an `ApiError` for non-2xx responses or network failures, after
/// the inbound stage has updated the auth store.
pub async fn post_empty(auth: RwSignal<AuthState>, path: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{API_BASE}{path}");
        let mut builder = gloo_net::http::Request::post(&url);
        if let Some(bearer) = bearer_value(&auth.get_untracked()) {
            builder = builder.header("Authorization", &bearer);
        }
        let resp = match builder.send().await {
            Ok(resp) => resp,
            Err(e) => return Err(network_failure(auth, &e)),
        };
        check_status(auth, resp).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, path);
        Err(ApiError::Network(SSR_UNAVAILABLE.to_owned()))
    }
}

/// Inbound stage for responses that arrived: 2xx passes through, anything
/// else becomes an `ApiError` that has already been applied to the store.
#[cfg(feature = "hydrate")]
async fn check_status(
    auth: RwSignal<AuthState>,
    resp: gloo_net::http::Response,
) -> Result<gloo_net::http::Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let message = resp.json::<ErrorBody>().await.ok().map(|body| body.message);
    let err = ApiError::Status { status: resp.status(), message };
    handle_failure(auth, &err);
    Err(err)
}

/// Inbound stage for requests that produced no response at all.
#[cfg(feature = "hydrate")]
fn network_failure(auth: RwSignal<AuthState>, source: &gloo_net::Error) -> ApiError {
    let err = ApiError::Network(source.to_string());
    handle_failure(auth, &err);
    err
}

/// Apply a failure to the live store, persisting and redirecting when a
/// 401 tears the session down. The caller still propagates `err`.
#[cfg(feature = "hydrate")]
fn handle_failure(auth: RwSignal<AuthState>, err: &ApiError) {
    // Always the live signal: the store may have changed while the request
    // was in flight.
    auth.update(|state| state.apply_failure(err));
    if err.is_unauthorized() {
        persist::save(&PersistedSession::from(&auth.get_untracked()));
        redirect_to_login();
    }
}

/// Navigate to `/login` unless the current location is already there.
#[cfg(feature = "hydrate")]
fn redirect_to_login() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let location = window.location();
    let path = location.pathname().unwrap_or_default();
    if should_redirect_to_login(&path) {
        let _ = location.set_href("/login");
    }
}
