//! Durable session storage backed by `localStorage`.
//!
//! The persisted record lives under a single fixed key. Reads degrade to
//! `None` on anything unexpected (no browser, missing key, malformed JSON)
//! and writes are fire-and-forget: a storage failure is logged and the
//! in-memory transition completes regardless.

#[cfg(test)]
#[path = "persist_test.rs"]
mod persist_test;

use crate::state::auth::PersistedSession;

/// `localStorage` key holding the serialized session subset.
pub const STORAGE_KEY: &str = "auth-store";

/// Serialize a session record for storage.
///
/// # Errors
///
/// Returns a `serde_json` error if serialization fails (practically never
/// for this struct).
pub fn encode(session: &PersistedSession) -> Result<String, serde_json::Error> {
    serde_json::to_string(session)
}

/// Parse a stored record. Malformed input restores as `None` — the caller
/// falls back to the empty session, never an error.
#[must_use]
pub fn decode(raw: &str) -> Option<PersistedSession> {
    serde_json::from_str(raw).ok()
}

/// Read the persisted session from `localStorage`.
///
/// Returns `None` when there is no browser (SSR), no stored record, or the
/// record fails to parse.
#[must_use]
pub fn load() -> Option<PersistedSession> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()?.local_storage().ok()??;
        let raw = storage.get_item(STORAGE_KEY).ok()??;
        decode(&raw)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Write the persisted session to `localStorage`. Failures are logged and
/// swallowed so they never block the in-memory transition.
pub fn save(session: &PersistedSession) {
    #[cfg(feature = "hydrate")]
    {
        let Ok(raw) = encode(session) else {
            log::warn!("failed to serialize session for storage");
            return;
        };
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
        else {
            return;
        };
        if storage.set_item(STORAGE_KEY, &raw).is_err() {
            log::warn!("failed to write session to localStorage");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}

/// Remove the persisted session record entirely.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            if storage.remove_item(STORAGE_KEY).is_err() {
                log::warn!("failed to remove session from localStorage");
            }
        }
    }
}
