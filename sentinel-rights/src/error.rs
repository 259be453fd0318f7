//! Error types for rights administration
//!
//! This module defines the failures a remote authorization-service call can
//! surface. A single error aborts the current batch outright; no retries
//! are performed at this layer.

use thiserror::Error;

/// Authorization-service error types.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The caller lacks permission to change rights.
    #[error("Unauthorized: caller may not change rights")]
    Unauthorized,

    /// The target user or resource does not exist.
    #[error("Not found")]
    NotFound,

    /// HTTP transport failure (connection, timeout, protocol).
    #[error("Transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with an unexpected status.
    #[error("Unexpected response ({status}): {message}")]
    Unexpected {
        /// HTTP status code.
        status: u16,
        /// Response body, if any.
        message: String,
    },
}

/// Result type for authorization-service operations.
pub type AuthResult<T> = Result<T, AuthError>;

impl AuthError {
    /// Check if this error should be logged at error level.
    ///
    /// Unauthorized and NotFound are expected operator mistakes and
    /// should not be logged as errors.
    pub fn is_server_error(&self) -> bool {
        matches!(self, AuthError::Transport(_) | AuthError::Unexpected { .. })
    }
}
