//! Rule manager abstraction
//!
//! This module defines the trait through which the REST layer reaches rule
//! state, and an in-memory implementation suitable for single-process
//! nodes and testing.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{RuleError, RuleResult};
use crate::log::RuleLogEntry;
use crate::rule::Rule;

/// Owner of rule state.
///
/// The REST layer only orchestrates transitions; all rule and log state
/// lives behind this trait.
#[async_trait]
pub trait RuleManager: Send + Sync {
    /// Get every rule.
    async fn get_all_rules(&self) -> RuleResult<Vec<Rule>>;

    /// Get one rule by name.
    async fn get_rule(&self, name: &str) -> RuleResult<Rule>;

    /// Delete a rule and, transitively, its log entries.
    async fn delete_rule(&self, name: &str) -> RuleResult<()>;

    /// Create a rule.
    async fn create_rule(
        &self,
        name: &str,
        rule_type: &str,
        data: &str,
        frequency: u32,
    ) -> RuleResult<()>;

    /// Append one evaluation outcome to a rule's log.
    async fn add_log_entry(&self, entry: RuleLogEntry) -> RuleResult<()>;

    /// Get a rule's log entries, oldest first.
    async fn get_log_entries(&self, rule_name: &str) -> RuleResult<Vec<RuleLogEntry>>;
}

fn validate_name(name: &str) -> RuleResult<()> {
    if name.trim().is_empty() {
        return Err(RuleError::InvalidArgument(
            "rule name must not be empty".to_string(),
        ));
    }
    Ok(())
}

#[derive(Default)]
struct State {
    rules: Vec<Rule>,
    logs: Vec<RuleLogEntry>,
}

/// In-memory rule manager.
///
/// Suitable for single-process nodes and testing. Enforces the storage
/// invariants: unique rule names, unique (rule, time) log keys, and
/// cascade-delete of a rule's log entries.
#[derive(Default)]
pub struct MemoryRuleManager {
    state: RwLock<State>,
}

impl MemoryRuleManager {
    /// Create an empty manager.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RuleManager for MemoryRuleManager {
    async fn get_all_rules(&self) -> RuleResult<Vec<Rule>> {
        Ok(self.state.read().await.rules.clone())
    }

    async fn get_rule(&self, name: &str) -> RuleResult<Rule> {
        validate_name(name)?;
        self.state
            .read()
            .await
            .rules
            .iter()
            .find(|rule| rule.name == name)
            .cloned()
            .ok_or_else(|| RuleError::NotFound(name.to_string()))
    }

    async fn delete_rule(&self, name: &str) -> RuleResult<()> {
        validate_name(name)?;
        let mut state = self.state.write().await;

        let before = state.rules.len();
        state.rules.retain(|rule| rule.name != name);
        if state.rules.len() == before {
            return Err(RuleError::NotFound(name.to_string()));
        }

        // Cascade: a rule's log entries die with it.
        state.logs.retain(|entry| entry.rule_name != name);
        debug!(name, "Rule deleted");
        Ok(())
    }

    async fn create_rule(
        &self,
        name: &str,
        rule_type: &str,
        data: &str,
        frequency: u32,
    ) -> RuleResult<()> {
        validate_name(name)?;
        if rule_type.trim().is_empty() {
            return Err(RuleError::InvalidArgument(
                "rule type must not be empty".to_string(),
            ));
        }
        if frequency == 0 {
            return Err(RuleError::InvalidArgument(
                "frequency must be positive".to_string(),
            ));
        }

        let mut state = self.state.write().await;
        if state.rules.iter().any(|rule| rule.name == name) {
            return Err(RuleError::AlreadyExists(name.to_string()));
        }

        state.rules.push(Rule::new(name, rule_type, data, frequency));
        debug!(name, rule_type, frequency, "Rule created");
        Ok(())
    }

    async fn add_log_entry(&self, entry: RuleLogEntry) -> RuleResult<()> {
        let mut state = self.state.write().await;

        if !state.rules.iter().any(|rule| rule.name == entry.rule_name) {
            return Err(RuleError::NotFound(entry.rule_name));
        }
        if state.logs.iter().any(|existing| existing.key() == entry.key()) {
            return Err(RuleError::DuplicateLogEntry {
                time: entry.time.to_string(),
                rule_name: entry.rule_name,
            });
        }

        state.logs.push(entry);
        Ok(())
    }

    async fn get_log_entries(&self, rule_name: &str) -> RuleResult<Vec<RuleLogEntry>> {
        validate_name(rule_name)?;
        let state = self.state.read().await;

        if !state.rules.iter().any(|rule| rule.name == rule_name) {
            return Err(RuleError::NotFound(rule_name.to_string()));
        }
        Ok(state
            .logs
            .iter()
            .filter(|entry| entry.rule_name == rule_name)
            .cloned()
            .collect())
    }
}
