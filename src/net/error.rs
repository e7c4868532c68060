//! Error taxonomy for calls that cross the network boundary.
//!
//! Two variants cover the classes the auth store reacts to: `Status` for
//! any HTTP response outside 2xx (401 and 5xx get special handling in the
//! store), and `Network` for requests that never produced a response.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a gateway call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-success status code.
    #[error("request failed with status {status}")]
    Status {
        status: u16,
        /// Message field from the error body, when one could be parsed.
        message: Option<String>,
    },
    /// No response was received at all (DNS, refused connection, offline).
    #[error("network error: {0}")]
    Network(String),
}

impl ApiError {
    /// HTTP status of the failure, if the server responded.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Network(_) => None,
        }
    }

    /// True for 401 responses — the session is no longer valid.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// True for 5xx responses.
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status().is_some_and(|s| (500..=599).contains(&s))
    }

    /// Human-readable message from the server's error body, if any.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref(),
            Self::Network(_) => None,
        }
    }
}
