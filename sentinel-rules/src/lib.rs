//! # Sentinel Rule Lifecycle
//!
//! This crate provides the rule-resource lifecycle for Sentinel sensor
//! nodes: the REST-facing CRUD surface, the rule-manager abstraction, and
//! rule evaluation log records.
//!
//! ## Overview
//!
//! The sentinel-rules crate handles:
//! - **Resource**: REST handler translating domain errors to status codes
//! - **Manager**: Owner of rule and log state, behind a trait
//! - **Rule**: The administered entity with its stable JSON form
//! - **Log**: Append-only evaluation records, composite-keyed, cascading
//!   with their rule
//!
//! How rules are evaluated and scheduled is the rule engine's business;
//! this crate only administers them.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use sentinel_rules::{MemoryRuleManager, RuleResource};
//!
//! # async fn demo() {
//! let resource = RuleResource::new(MemoryRuleManager::new());
//!
//! let response = resource.create_rule("cpu-high", "threshold", "{\"limit\":90}", 60).await;
//! assert_eq!(response.status_code, 200);
//!
//! let listing = resource.get_all_rules().await;
//! assert!(listing.body.contains("cpu-high"));
//! # }
//! ```

pub mod error;
pub mod log;
pub mod manager;
pub mod resource;
pub mod response;
pub mod rule;

// Re-export main types for convenience
pub use error::{RuleError, RuleResult};
pub use log::RuleLogEntry;
pub use manager::{MemoryRuleManager, RuleManager};
pub use resource::RuleResource;
pub use response::RestResponse;
pub use rule::Rule;
