//! Failure modes of auth-service calls.

/// Shown for a 401 whose body carries no message.
pub const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Please sign in again.";

/// Error returned by every `net::api` call. `Display` output is shown to the
/// user in a toast.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// HTTP 401: bad credentials, or a missing, invalid or expired token.
    #[error("{message}")]
    Unauthorized { message: String },
    /// Any other non-2xx response.
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out after {0}s")]
    Timeout(u64),
    #[error("unexpected response: {0}")]
    Decode(String),
    /// Called from a build without a browser (SSR).
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }
}
