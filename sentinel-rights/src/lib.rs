//! # Sentinel Rights Administration
//!
//! This crate drives bulk grant/revoke operations against the Sentinel
//! authorization service.
//!
//! ## Overview
//!
//! The sentinel-rights crate handles:
//! - **Catalog**: The fixed set of five administrable rights
//! - **Diff**: Which rights a user is missing or holds, as a staged work list
//! - **Execution**: Sequential, fail-fast application of grants and revokes
//! - **Sessions**: The two interactive entry points over the ordered-menu seam
//!
//! ## Architecture
//!
//! ```text
//! username + action
//!       │
//!       ▼
//! diff::compute ── has_right × 5 ──► RightsDiff (staged, no side effects)
//!       │
//!       ▼
//! BulkRightsExecutor ── grant/revoke, one at a time, abort on first error
//! ```
//!
//! Diff computation and execution are deliberately separate phases: the
//! diff never mutates remote state, and the executor never re-queries it.
//! A diff is only consistent with the live service at the instant of its
//! query; concurrent administrators may race, and the authorization
//! service is the sole arbiter.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use sentinel_rights::{
//!     compute, BulkRightsExecutor, DiffPolicy, HttpAuthService, RightAction, SessionToken,
//! };
//! use std::time::Duration;
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let service = HttpAuthService::new("http://auth.local:8080", Duration::from_secs(10))?;
//! let token = SessionToken::new("session-token");
//!
//! let diff = compute(&service, "alice", RightAction::Grant, DiffPolicy::Exclusive).await?;
//! if diff.is_empty() {
//!     println!("alice already has all rights");
//! } else {
//!     let executor = BulkRightsExecutor::new(&service, &token);
//!     executor.apply_all(diff.operations()).await?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod diff;
pub mod error;
pub mod executor;
pub mod menu;
pub mod rights;
pub mod service;
pub mod session;

// Re-export main types for convenience
pub use client::HttpAuthService;
pub use diff::{compute, DiffPolicy, PendingOperation, RightAction, RightsDiff};
pub use error::{AuthError, AuthResult};
pub use executor::{BatchError, BulkRightsExecutor};
pub use menu::{MenuDriver, MenuSpec};
pub use rights::Right;
pub use service::{AuthService, SessionToken};
pub use session::{
    AbortReason, GrantRevokeSession, LoopControl, ModifyRightsSession, SessionOutcome,
};
