//! Client error types

use thiserror::Error;

/// Error type for REST-driven operations
///
/// Request failures are surfaced to the caller and never retried
/// automatically; the screen decides whether to offer a retry.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (network error or timeout)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Authentication required
    #[error("Authentication required")]
    Unauthorized,

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error (caught before any network call, or a 400)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
