//! Authorization-service abstraction
//!
//! This module defines the trait through which rights are queried and
//! modified. The production implementation is the HTTP client in
//! [`crate::client`]; tests substitute scripted fakes.

use async_trait::async_trait;

use crate::error::AuthResult;
use crate::rights::Right;

/// Opaque session credential forwarded on every mutating call.
///
/// The token's lifecycle (login, refresh, expiry) is owned by the
/// authentication collaborator; this crate only carries it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    /// Wrap a raw token string.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Get the raw token value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for SessionToken {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SessionToken {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Remote authorization service.
///
/// All calls are blocking from the caller's point of view: rights flows
/// await each call before issuing the next, in catalog order, with no
/// batching or pipelining. The service is the sole arbiter of consistency;
/// nothing is cached across calls.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Check whether `username` currently holds `right`.
    ///
    /// Queried live on every invocation; the answer is only valid at the
    /// instant of the query.
    async fn has_right(&self, username: &str, right: Right) -> AuthResult<bool>;

    /// Grant `right` to `username`.
    async fn grant(&self, username: &str, right: Right, token: &SessionToken) -> AuthResult<()>;

    /// Revoke `right` from `username`.
    async fn revoke(&self, username: &str, right: Right, token: &SessionToken) -> AuthResult<()>;
}
