//! # Interactive rights-administration sessions
//!
//! The two menu entry points for changing a user's rights. Both compute a
//! diff, present it through a [`MenuDriver`], and apply selected operations
//! immediately; they differ in diff policy and in loop shape:
//!
//! - [`GrantRevokeSession`] uses the exclusive policy and recomputes the
//!   diff after every applied operation, looping until the operator leaves
//!   or an error aborts the session.
//! - [`ModifyRightsSession`] uses the inclusive policy, computes the diff
//!   exactly once, and always hands control back to its parent view
//!   afterward — success, no-op, and caught error alike.
//!
//! All remote-call errors are caught here and converted to a fixed
//! operator-facing message; none propagate past this boundary.

use tracing::debug;

use crate::diff::{compute, DiffPolicy, RightAction};
use crate::error::AuthError;
use crate::executor::BulkRightsExecutor;
use crate::menu::MenuDriver;
use crate::service::{AuthService, SessionToken};

/// Fixed operator-facing messages.
///
/// Public so call sites and tests share the exact strings.
pub mod messages {
    /// The caller may not change rights.
    pub const UNAUTHORIZED: &str = "You do not have permission to change rights.";

    /// NotFound, as reported by the modify-rights entry point.
    pub const PAGE_NOT_FOUND: &str = "Error 404: page not found.";

    /// NotFound, as reported by the grant/revoke entry point.
    pub const USER_NOT_FOUND: &str = "Cannot modify rights of a nonexistent user.";

    /// Anything else, including transport failures.
    pub const UNEXPECTED: &str = "An unexpected error occurred.";

    /// Empty exclusive diff under Grant.
    pub const ALREADY_HAS_ALL: &str = "The user already has all rights.";

    /// Empty exclusive diff under Revoke.
    pub const HOLDS_NO_RIGHTS: &str = "The user holds no rights.";
}

/// Menu title shared by both entry points.
const RIGHTS_MENU_TITLE: &str = "RIGHTS";

/// Why a session was aborted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbortReason {
    /// The caller lacks permission to change rights.
    Unauthorized,
    /// The target user or page does not exist.
    NotFound,
    /// Any other failure, including transport errors.
    Unexpected,
}

impl AbortReason {
    fn from_error(err: &AuthError) -> Self {
        match err {
            AuthError::Unauthorized => AbortReason::Unauthorized,
            AuthError::NotFound => AbortReason::NotFound,
            AuthError::Transport(_) | AuthError::Unexpected { .. } => AbortReason::Unexpected,
        }
    }
}

/// Per-iteration control flow for the interactive loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    /// Run another iteration.
    Continue,
    /// Leave the session normally.
    Exit,
    /// Abort the session; remaining work is discarded.
    Abort(AbortReason),
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The operator finished or backed out; nothing went wrong.
    Completed,
    /// A remote call failed; the batch was discarded after the operator
    /// was shown the corresponding message.
    Aborted(AbortReason),
}

/// Which entry point is reporting — NotFound wording differs between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryPoint {
    GrantRevoke,
    ModifyRights,
}

fn message_for(err: &AuthError, entry: EntryPoint) -> &'static str {
    match err {
        AuthError::Unauthorized => messages::UNAUTHORIZED,
        AuthError::NotFound => match entry {
            EntryPoint::GrantRevoke => messages::USER_NOT_FOUND,
            EntryPoint::ModifyRights => messages::PAGE_NOT_FOUND,
        },
        _ => messages::UNEXPECTED,
    }
}

fn empty_diff_message(action: RightAction) -> &'static str {
    match action {
        RightAction::Grant => messages::ALREADY_HAS_ALL,
        RightAction::Revoke => messages::HOLDS_NO_RIGHTS,
    }
}

/// Grant/revoke session over the exclusive diff policy.
///
/// Prompts once for a username, then loops: recompute the diff, present
/// it, apply the selected operation, recompute. An empty diff reports the
/// no-op and exits without any remote mutation.
pub struct GrantRevokeSession<'a, S: AuthService + ?Sized> {
    service: &'a S,
    token: &'a SessionToken,
    action: RightAction,
}

impl<'a, S: AuthService + ?Sized> GrantRevokeSession<'a, S> {
    /// Create a session for one action (grant or revoke).
    pub fn new(service: &'a S, token: &'a SessionToken, action: RightAction) -> Self {
        Self {
            service,
            token,
            action,
        }
    }

    /// Run the session to completion.
    pub async fn run(&self, driver: &mut dyn MenuDriver) -> SessionOutcome {
        let Some(username) = driver.prompt_username() else {
            return SessionOutcome::Completed;
        };

        loop {
            match self.iteration(driver, &username).await {
                LoopControl::Continue => continue,
                LoopControl::Exit => return SessionOutcome::Completed,
                LoopControl::Abort(reason) => return SessionOutcome::Aborted(reason),
            }
        }
    }

    async fn iteration(&self, driver: &mut dyn MenuDriver, username: &str) -> LoopControl {
        let diff = match compute(self.service, username, self.action, DiffPolicy::Exclusive).await
        {
            Ok(diff) => diff,
            Err(err) => {
                driver.notify(message_for(&err, EntryPoint::GrantRevoke));
                return LoopControl::Abort(AbortReason::from_error(&err));
            }
        };

        if diff.is_empty() {
            driver.notify(empty_diff_message(self.action));
            return LoopControl::Exit;
        }

        let menu = diff.menu(RIGHTS_MENU_TITLE);
        let Some(index) = driver.choose(&menu) else {
            return LoopControl::Exit;
        };

        let executor = BulkRightsExecutor::new(self.service, self.token);
        match executor.apply(&menu.operations[index]).await {
            Ok(()) => {
                debug!(username, "Operation applied; recomputing diff");
                LoopControl::Continue
            }
            Err(err) => {
                driver.notify(message_for(&err, EntryPoint::GrantRevoke));
                LoopControl::Abort(AbortReason::from_error(&err))
            }
        }
    }
}

/// Modify-rights session over the inclusive diff policy.
///
/// Computes the diff exactly once per invocation. Whatever happens —
/// applied operations, an empty diff, or a caught error — control falls
/// back to the parent view when `run` returns; the outcome is
/// informational only and never propagates an error.
pub struct ModifyRightsSession<'a, S: AuthService + ?Sized> {
    service: &'a S,
    token: &'a SessionToken,
    action: RightAction,
}

impl<'a, S: AuthService + ?Sized> ModifyRightsSession<'a, S> {
    /// Create a session for one action (grant or revoke).
    pub fn new(service: &'a S, token: &'a SessionToken, action: RightAction) -> Self {
        Self {
            service,
            token,
            action,
        }
    }

    /// Run the session to completion.
    ///
    /// Never returns early and never panics on remote failure: every error
    /// is reported through the driver, and the caller unconditionally
    /// resumes its parent menu afterward.
    pub async fn run(&self, driver: &mut dyn MenuDriver) -> SessionOutcome {
        let Some(username) = driver.prompt_username() else {
            return SessionOutcome::Completed;
        };

        let diff = match compute(self.service, &username, self.action, DiffPolicy::Inclusive).await
        {
            Ok(diff) => diff,
            Err(err) => {
                driver.notify(message_for(&err, EntryPoint::ModifyRights));
                return SessionOutcome::Aborted(AbortReason::from_error(&err));
            }
        };

        // The inclusive policy emits the full catalog, but the empty-diff
        // contract is honored all the same.
        if diff.is_empty() {
            driver.notify(empty_diff_message(self.action));
            return SessionOutcome::Completed;
        }

        let menu = diff.menu(RIGHTS_MENU_TITLE);
        let executor = BulkRightsExecutor::new(self.service, self.token);

        while let Some(index) = driver.choose(&menu) {
            if let Err(err) = executor.apply(&menu.operations[index]).await {
                driver.notify(message_for(&err, EntryPoint::ModifyRights));
                return SessionOutcome::Aborted(AbortReason::from_error(&err));
            }
        }

        SessionOutcome::Completed
    }
}
