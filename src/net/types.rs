//! Wire types shared between the gateway and the auth service.
//!
//! Field names are camelCase on the wire to match the backend's JSON
//! contract (`firstName`, `isAuthenticated`, ...).

/// An authenticated user as returned by the login endpoint.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

/// Credentials submitted by the login form.
///
/// Field validation (non-empty email, password length) happens in the
/// form before this struct is ever built.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

/// Successful login payload: a bearer token plus the user it belongs to.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

/// Error body shape returned by the backend on 4xx/5xx responses.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct ErrorBody {
    pub message: String,
}
