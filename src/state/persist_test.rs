use super::*;
use crate::net::types::User;
use crate::state::auth::AuthState;

fn sample_session() -> PersistedSession {
    PersistedSession {
        token: Some("tok-123".to_owned()),
        user: Some(User {
            id: "1".to_owned(),
            email: "a@b.com".to_owned(),
            username: "a".to_owned(),
            first_name: Some("Ada".to_owned()),
            last_name: None,
        }),
        is_authenticated: true,
    }
}

// =============================================================================
// Codec round-trip
// =============================================================================

#[test]
fn encode_decode_round_trips() {
    let session = sample_session();
    let raw = encode(&session).unwrap();
    assert_eq!(decode(&raw), Some(session));
}

#[test]
fn encode_uses_camel_case_wire_names() {
    let raw = encode(&sample_session()).unwrap();
    assert!(raw.contains("\"isAuthenticated\":true"));
    assert!(raw.contains("\"firstName\":\"Ada\""));
    // Transient fields never appear in the persisted record.
    assert!(!raw.contains("isLoading"));
    assert!(!raw.contains("error"));
}

#[test]
fn decode_empty_session() {
    let raw = encode(&PersistedSession::default()).unwrap();
    let decoded = decode(&raw).unwrap();
    assert!(decoded.token.is_none());
    assert!(!decoded.is_authenticated);
}

// =============================================================================
// Malformed storage degrades to None (and so to the empty session)
// =============================================================================

#[test]
fn decode_rejects_malformed_json() {
    assert_eq!(decode("not json at all"), None);
    assert_eq!(decode("{\"token\": 42}"), None);
    assert_eq!(decode(""), None);
}

#[test]
fn malformed_storage_restores_empty_session() {
    let restored = decode("{{corrupt").map_or_else(AuthState::default, AuthState::restore);
    assert_eq!(restored, AuthState::default());
}

#[test]
fn load_returns_none_without_browser() {
    // Native tests have no window; the SSR stub path must also be None.
    assert_eq!(load(), None);
}
