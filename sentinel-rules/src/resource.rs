//! # Rule REST resource
//!
//! CRUD surface for rules. Each operation delegates to the [`RuleManager`]
//! and translates domain errors into status codes; no domain error
//! propagates past this boundary.
//!
//! Two protocol quirks are contracts, not oversights, and are preserved
//! exactly:
//!
//! - **Status asymmetry**: `get_rule` maps both invalid input and an
//!   absent rule to 400, while `delete_rule` distinguishes them (400 vs
//!   404).
//! - **Encoding asymmetry**: `get_rule` re-encodes the rule's JSON form as
//!   a JSON string literal (double-encoded), while `get_all_rules` emits
//!   the JSON forms as bare array elements.

use tracing::{debug, instrument};

use crate::error::RuleError;
use crate::log::RuleLogEntry;
use crate::manager::RuleManager;
use crate::response::RestResponse;

/// REST handler for rule lifecycle requests.
pub struct RuleResource<M: RuleManager> {
    rule_manager: M,
}

impl<M: RuleManager> RuleResource<M> {
    /// Create a resource over a rule manager.
    pub fn new(rule_manager: M) -> Self {
        Self { rule_manager }
    }

    /// Get the rule manager in use.
    pub fn rule_manager(&self) -> &M {
        &self.rule_manager
    }

    /// Get all rules.
    ///
    /// 200 with a JSON array of the rules' JSON forms; `[]` for an empty
    /// rule set.
    #[instrument(skip(self))]
    pub async fn get_all_rules(&self) -> RestResponse {
        match self.rule_manager.get_all_rules().await {
            Ok(rules) => {
                let elements: Vec<String> = rules.iter().map(ToString::to_string).collect();
                RestResponse::json(format!("[{}]", elements.join(",")))
            }
            Err(err) => {
                debug!("get_all_rules failed: {err}");
                RestResponse::status(err.status_code())
            }
        }
    }

    /// Get one rule.
    ///
    /// 200 with the rule's JSON form re-encoded as a JSON string literal.
    /// Both invalid input and an absent rule map to 400.
    #[instrument(skip(self))]
    pub async fn get_rule(&self, rule_name: &str) -> RestResponse {
        match self.rule_manager.get_rule(rule_name).await {
            Ok(rule) => {
                let literal = serde_json::to_string(&rule.to_string()).unwrap_or_default();
                RestResponse::json(literal)
            }
            Err(RuleError::InvalidArgument(_)) | Err(RuleError::NotFound(_)) => {
                RestResponse::status(400)
            }
            Err(err) => RestResponse::status(err.status_code()),
        }
    }

    /// Delete a rule and its log entries.
    ///
    /// 200 empty on success; 400 for invalid input; 404 for an absent rule.
    #[instrument(skip(self))]
    pub async fn delete_rule(&self, rule_name: &str) -> RestResponse {
        match self.rule_manager.delete_rule(rule_name).await {
            Ok(()) => RestResponse::empty(),
            Err(RuleError::InvalidArgument(_)) => RestResponse::status(400),
            Err(RuleError::NotFound(_)) => RestResponse::status(404),
            Err(err) => RestResponse::status(err.status_code()),
        }
    }

    /// Create a rule.
    ///
    /// 200 empty on success; 400 for invalid input; 409 for a duplicate
    /// name.
    #[instrument(skip(self, data))]
    pub async fn create_rule(
        &self,
        rule_name: &str,
        rule_type: &str,
        data: &str,
        frequency: u32,
    ) -> RestResponse {
        match self
            .rule_manager
            .create_rule(rule_name, rule_type, data, frequency)
            .await
        {
            Ok(()) => RestResponse::empty(),
            Err(RuleError::InvalidArgument(_)) => RestResponse::status(400),
            Err(RuleError::AlreadyExists(_)) => RestResponse::status(409),
            Err(err) => RestResponse::status(err.status_code()),
        }
    }

    /// Get a rule's log entries, oldest first.
    ///
    /// 200 with a JSON array of canonical renders as bare elements. Like
    /// the `get_rule` read path, both invalid input and an absent rule map
    /// to 400.
    #[instrument(skip(self))]
    pub async fn get_log_entries(&self, rule_name: &str) -> RestResponse {
        match self.rule_manager.get_log_entries(rule_name).await {
            Ok(entries) => {
                let elements: Vec<String> =
                    entries.iter().map(RuleLogEntry::render).collect();
                RestResponse::json(format!("[{}]", elements.join(",")))
            }
            Err(RuleError::InvalidArgument(_)) | Err(RuleError::NotFound(_)) => {
                RestResponse::status(400)
            }
            Err(err) => RestResponse::status(err.status_code()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manager::MemoryRuleManager;
    use chrono::NaiveDate;

    fn resource() -> RuleResource<MemoryRuleManager> {
        RuleResource::new(MemoryRuleManager::new())
    }

    #[tokio::test]
    async fn test_get_all_rules_empty_set() {
        let resource = resource();
        let response = resource.get_all_rules().await;

        assert_eq!(response.status_code, 200);
        assert_eq!(response.mime_type, "application/json");
        assert_eq!(response.body, "[]");
    }

    #[tokio::test]
    async fn test_get_all_rules_bare_elements() {
        let resource = resource();
        resource.create_rule("r1", "threshold", "{}", 60).await;
        resource.create_rule("r2", "command", "uptime", 30).await;

        let response = resource.get_all_rules().await;
        assert_eq!(
            response.body,
            r#"[{"name":"r1","type":"threshold","data":"{}","frequency":60},{"name":"r2","type":"command","data":"uptime","frequency":30}]"#
        );
    }

    #[tokio::test]
    async fn test_create_then_get_rule() {
        let resource = resource();

        let created = resource.create_rule("r1", "threshold", "{}", 60).await;
        assert_eq!(created.status_code, 200);
        assert!(created.body.is_empty());

        let response = resource.get_rule("r1").await;
        assert_eq!(response.status_code, 200);
        assert!(response.body.contains("r1"));
        // Double-encoded: the body is a JSON string literal holding the
        // rule's own JSON form.
        let inner: String = serde_json::from_str(&response.body).unwrap();
        assert_eq!(
            inner,
            r#"{"name":"r1","type":"threshold","data":"{}","frequency":60}"#
        );
    }

    #[tokio::test]
    async fn test_duplicate_create_conflicts() {
        let resource = resource();
        resource.create_rule("r1", "threshold", "{}", 60).await;

        let response = resource.create_rule("r1", "threshold", "{}", 60).await;
        assert_eq!(response.status_code, 409);
    }

    #[tokio::test]
    async fn test_create_invalid_arguments() {
        let resource = resource();
        assert_eq!(resource.create_rule("", "threshold", "{}", 60).await.status_code, 400);
        assert_eq!(resource.create_rule("r1", "", "{}", 60).await.status_code, 400);
        assert_eq!(resource.create_rule("r1", "threshold", "{}", 0).await.status_code, 400);
    }

    #[tokio::test]
    async fn test_get_rule_absent_maps_to_400() {
        // The read path does not distinguish absence from bad input.
        let resource = resource();
        assert_eq!(resource.get_rule("ghost").await.status_code, 400);
        assert_eq!(resource.get_rule("").await.status_code, 400);
    }

    #[tokio::test]
    async fn test_delete_rule_distinguishes_absent_from_invalid() {
        let resource = resource();
        assert_eq!(resource.delete_rule("ghost").await.status_code, 404);
        assert_eq!(resource.delete_rule("").await.status_code, 400);
    }

    #[tokio::test]
    async fn test_delete_rule_success() {
        let resource = resource();
        resource.create_rule("r1", "threshold", "{}", 60).await;

        let response = resource.delete_rule("r1").await;
        assert_eq!(response.status_code, 200);
        assert!(response.body.is_empty());

        assert_eq!(resource.get_rule("r1").await.status_code, 400);
    }

    #[tokio::test]
    async fn test_get_log_entries() {
        let resource = resource();
        resource.create_rule("r1", "threshold", "{}", 60).await;

        let time = NaiveDate::from_ymd_opt(2021, 5, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        resource
            .rule_manager()
            .add_log_entry(RuleLogEntry::new("r1", time, "OK"))
            .await
            .unwrap();

        let response = resource.get_log_entries("r1").await;
        assert_eq!(response.status_code, 200);
        assert_eq!(
            response.body,
            r#"[{"rule_name":"r1","time":"01 May 2021 10:00:00","result":"OK"}]"#
        );
    }

    #[tokio::test]
    async fn test_get_log_entries_absent_rule_maps_to_400() {
        let resource = resource();
        assert_eq!(resource.get_log_entries("ghost").await.status_code, 400);
        assert_eq!(resource.get_log_entries("").await.status_code, 400);
    }
}
