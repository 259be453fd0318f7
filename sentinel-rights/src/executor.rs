//! # Bulk rights execution
//!
//! Executes staged [`PendingOperation`]s against the authorization service.
//! Execution is fail-fast: the first error aborts the batch and the
//! remaining operations are discarded, never attempted.

use thiserror::Error;
use tracing::{debug, warn};

use crate::diff::{PendingOperation, RightAction};
use crate::error::{AuthError, AuthResult};
use crate::service::{AuthService, SessionToken};

/// A batch aborted part-way through.
#[derive(Debug, Error)]
#[error("batch aborted after {completed} operation(s): {source}")]
pub struct BatchError {
    /// Operations that completed before the failure.
    pub completed: usize,

    /// The error that aborted the batch.
    #[source]
    pub source: AuthError,
}

/// Executes grant/revoke operations one at a time.
///
/// Each applied operation is an immediate side-effecting remote call, not a
/// staged change. No retries; no rollback of already-applied operations.
pub struct BulkRightsExecutor<'a, S: AuthService + ?Sized> {
    service: &'a S,
    token: &'a SessionToken,
}

impl<'a, S: AuthService + ?Sized> BulkRightsExecutor<'a, S> {
    /// Create an executor bound to a service and session token.
    pub fn new(service: &'a S, token: &'a SessionToken) -> Self {
        Self { service, token }
    }

    /// Apply a single operation immediately.
    pub async fn apply(&self, op: &PendingOperation) -> AuthResult<()> {
        debug!(username = %op.username, right = %op.right, kind = ?op.kind, "Applying operation");

        match op.kind {
            RightAction::Grant => self.service.grant(&op.username, op.right, self.token).await,
            RightAction::Revoke => self.service.revoke(&op.username, op.right, self.token).await,
        }
    }

    /// Apply every operation in order, aborting on the first failure.
    ///
    /// # Returns
    ///
    /// The number of operations applied, or a [`BatchError`] carrying how
    /// far the batch got before it was aborted. Operations after the
    /// failing one are never attempted.
    pub async fn apply_all(&self, ops: &[PendingOperation]) -> Result<usize, BatchError> {
        for (completed, op) in ops.iter().enumerate() {
            if let Err(source) = self.apply(op).await {
                if source.is_server_error() {
                    warn!(completed, "Batch aborted: {source}");
                }
                return Err(BatchError { completed, source });
            }
        }
        Ok(ops.len())
    }
}
