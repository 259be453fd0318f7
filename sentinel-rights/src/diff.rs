//! # Right-diff computation
//!
//! Computes which rights to act on for a target user. The computation is
//! pure with respect to rights state: it queries `has_right` once per
//! catalog entry, sequentially and in catalog order, and stages operations
//! without executing any of them. Execution is a separate phase
//! ([`crate::executor`]).

use serde::{Deserialize, Serialize};

use crate::error::AuthResult;
use crate::menu::MenuSpec;
use crate::rights::Right;
use crate::service::AuthService;

/// The two administrable actions on a right.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RightAction {
    /// Give the user a right.
    Grant,
    /// Take a right away from the user.
    Revoke,
}

/// Selection policy for the diff.
///
/// The two interactive entry points want materially different lists for
/// what looks like the same feature. They are kept as explicitly named
/// strategies rather than merged; whether the divergence is intentional
/// is an open question of the protocol, not of this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffPolicy {
    /// Every catalog right appears in the output: `Revoke` if the user
    /// holds it and the action is Revoke, otherwise `Grant`.
    Inclusive,

    /// Only actionable rights appear: `Grant` for rights the user lacks,
    /// `Revoke` for rights the user holds.
    Exclusive,
}

/// A planned unit of work: one grant or revoke against one user.
///
/// Created transiently by [`compute`], consumed by the executor, never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingOperation {
    /// Target username.
    pub username: String,

    /// The right to act on.
    pub right: Right,

    /// Grant or revoke.
    pub kind: RightAction,
}

/// The result of a diff: the ordered work list for one user and action.
///
/// Consistent with live rights state only at the instant of the query.
/// Remote state may change before execution; the authorization service is
/// the sole arbiter.
#[derive(Debug, Clone)]
pub struct RightsDiff {
    /// Target username.
    pub username: String,

    /// The action that produced this diff.
    pub action: RightAction,

    operations: Vec<PendingOperation>,
}

impl RightsDiff {
    /// The staged operations, in catalog order.
    pub fn operations(&self) -> &[PendingOperation] {
        &self.operations
    }

    /// Right names for presentation, parallel to [`Self::operations`].
    pub fn labels(&self) -> Vec<String> {
        self.operations
            .iter()
            .map(|op| op.right.as_str().to_string())
            .collect()
    }

    /// Check whether there is nothing to do.
    ///
    /// Callers must short-circuit on an empty diff and report it without
    /// issuing any remote calls.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Number of staged operations.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Build the menu for this diff.
    pub fn menu(&self, title: impl Into<String>) -> MenuSpec {
        MenuSpec {
            title: title.into(),
            items: self.labels(),
            operations: self.operations.clone(),
        }
    }
}

/// Compute the work list for `username` under `action` and `policy`.
///
/// Queries `has_right` for every catalog entry — five sequential round
/// trips, one per right, in catalog order. Performs no grants or revokes.
pub async fn compute<S>(
    service: &S,
    username: &str,
    action: RightAction,
    policy: DiffPolicy,
) -> AuthResult<RightsDiff>
where
    S: AuthService + ?Sized,
{
    let mut operations = Vec::new();

    for right in Right::all() {
        let held = service.has_right(username, right).await?;

        let kind = match policy {
            DiffPolicy::Inclusive => {
                if held && action == RightAction::Revoke {
                    RightAction::Revoke
                } else {
                    RightAction::Grant
                }
            }
            DiffPolicy::Exclusive => match action {
                RightAction::Revoke if held => RightAction::Revoke,
                RightAction::Grant if !held => RightAction::Grant,
                _ => continue,
            },
        };

        operations.push(PendingOperation {
            username: username.to_string(),
            right,
            kind,
        });
    }

    Ok(RightsDiff {
        username: username.to_string(),
        action,
        operations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AuthError, AuthResult};
    use crate::service::SessionToken;
    use async_trait::async_trait;
    use std::collections::HashSet;
    use std::sync::Mutex;

    /// Scripted service: fixed held-rights set, records every call.
    struct FakeAuthService {
        held: HashSet<Right>,
        queries: Mutex<usize>,
        mutations: Mutex<usize>,
    }

    impl FakeAuthService {
        fn holding(rights: &[Right]) -> Self {
            Self {
                held: rights.iter().copied().collect(),
                queries: Mutex::new(0),
                mutations: Mutex::new(0),
            }
        }
    }

    #[async_trait]
    impl AuthService for FakeAuthService {
        async fn has_right(&self, _username: &str, right: Right) -> AuthResult<bool> {
            *self.queries.lock().unwrap() += 1;
            Ok(self.held.contains(&right))
        }

        async fn grant(&self, _: &str, _: Right, _: &SessionToken) -> AuthResult<()> {
            *self.mutations.lock().unwrap() += 1;
            Ok(())
        }

        async fn revoke(&self, _: &str, _: Right, _: &SessionToken) -> AuthResult<()> {
            *self.mutations.lock().unwrap() += 1;
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_inclusive_always_returns_full_catalog() {
        let service = FakeAuthService::holding(&[Right::AdminUsers, Right::ViewReports]);

        let diff = compute(&service, "alice", RightAction::Revoke, DiffPolicy::Inclusive)
            .await
            .unwrap();

        assert_eq!(diff.len(), 5);
        assert_eq!(diff.labels(), vec![
            "AdminRights",
            "AdminUsers",
            "AdminRules",
            "AdminSensors",
            "ViewReports"
        ]);
        // Held rights become revokes, the rest fall back to grants.
        let kinds: Vec<RightAction> = diff.operations().iter().map(|op| op.kind).collect();
        assert_eq!(kinds, vec![
            RightAction::Grant,
            RightAction::Revoke,
            RightAction::Grant,
            RightAction::Grant,
            RightAction::Revoke
        ]);
    }

    #[tokio::test]
    async fn test_inclusive_grant_never_revokes() {
        let service = FakeAuthService::holding(&[Right::AdminRights]);

        let diff = compute(&service, "alice", RightAction::Grant, DiffPolicy::Inclusive)
            .await
            .unwrap();

        assert_eq!(diff.len(), 5);
        assert!(diff.operations().iter().all(|op| op.kind == RightAction::Grant));
    }

    #[tokio::test]
    async fn test_exclusive_grant_only_missing_rights() {
        let service = FakeAuthService::holding(&[Right::AdminUsers, Right::AdminRules]);

        let diff = compute(&service, "bob", RightAction::Grant, DiffPolicy::Exclusive)
            .await
            .unwrap();

        assert_eq!(diff.labels(), vec!["AdminRights", "AdminSensors", "ViewReports"]);
        assert!(diff.operations().iter().all(|op| op.kind == RightAction::Grant));
    }

    #[tokio::test]
    async fn test_exclusive_revoke_only_held_rights() {
        let service = FakeAuthService::holding(&[Right::AdminUsers, Right::AdminRules]);

        let diff = compute(&service, "bob", RightAction::Revoke, DiffPolicy::Exclusive)
            .await
            .unwrap();

        assert_eq!(diff.labels(), vec!["AdminUsers", "AdminRules"]);
        assert!(diff.operations().iter().all(|op| op.kind == RightAction::Revoke));
    }

    #[tokio::test]
    async fn test_exclusive_grant_with_all_rights_is_empty() {
        let service = FakeAuthService::holding(&Right::all());

        let diff = compute(&service, "bob", RightAction::Grant, DiffPolicy::Exclusive)
            .await
            .unwrap();

        assert!(diff.is_empty());
    }

    #[tokio::test]
    async fn test_exclusive_revoke_with_no_rights_is_empty() {
        let service = FakeAuthService::holding(&[]);

        let diff = compute(&service, "bob", RightAction::Revoke, DiffPolicy::Exclusive)
            .await
            .unwrap();

        assert!(diff.is_empty());
    }

    #[tokio::test]
    async fn test_compute_queries_once_per_right_and_mutates_nothing() {
        let service = FakeAuthService::holding(&[Right::AdminUsers]);

        compute(&service, "carol", RightAction::Revoke, DiffPolicy::Exclusive)
            .await
            .unwrap();

        assert_eq!(*service.queries.lock().unwrap(), 5);
        assert_eq!(*service.mutations.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_compute_propagates_query_failure() {
        struct FailingService;

        #[async_trait]
        impl AuthService for FailingService {
            async fn has_right(&self, _: &str, _: Right) -> AuthResult<bool> {
                Err(AuthError::Unauthorized)
            }
            async fn grant(&self, _: &str, _: Right, _: &SessionToken) -> AuthResult<()> {
                Ok(())
            }
            async fn revoke(&self, _: &str, _: Right, _: &SessionToken) -> AuthResult<()> {
                Ok(())
            }
        }

        let err = compute(&FailingService, "x", RightAction::Grant, DiffPolicy::Exclusive)
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Unauthorized));
    }
}
