//! Error taxonomy for backend calls.
//!
//! Every store action surfaces one of these instead of swallowing failures,
//! so callers can decide per call whether to show an error or retry by
//! re-dispatching.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failures from the authentication endpoints.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("account already exists")]
    AccountExists,
    #[error("auth request failed: {0}")]
    Network(String),
    #[error("not available on server")]
    Unavailable,
}

/// Failures from document-collection reads and writes.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("permission denied")]
    PermissionDenied,
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("request failed: {0}")]
    Network(String),
    #[error("not available on server")]
    Unavailable,
}
