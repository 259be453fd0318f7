//! Rule log entries
//!
//! One entry per rule evaluation, immutable once constructed. Entries are
//! keyed by (rule name, time) and live and die with their owning rule:
//! deleting a rule cascades to its log.

use chrono::NaiveDateTime;
use serde::Serialize;

/// Capacity of the `result` column in the backing store.
///
/// Enforcing it is the store's concern; the value object accepts anything.
pub const RESULT_CAPACITY: usize = 8192;

/// Time format used in the canonical rendering, e.g. "01 May 2021 10:00:00".
const TIME_FORMAT: &str = "%d %b %Y %H:%M:%S";

/// An append-only record of one rule evaluation outcome.
///
/// Construction accepts any values; malformed inputs are the producer's
/// responsibility. No mutation operations exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleLogEntry {
    /// Owning rule name (foreign key, cascade delete).
    pub rule_name: String,

    /// Evaluation time; second half of the composite key.
    pub time: NaiveDateTime,

    /// Evaluation outcome, up to [`RESULT_CAPACITY`] bytes in storage.
    pub result: String,
}

#[derive(Serialize)]
struct Rendered<'a> {
    rule_name: &'a str,
    time: String,
    result: &'a str,
}

impl RuleLogEntry {
    /// Create a new log entry.
    pub fn new(
        rule_name: impl Into<String>,
        time: NaiveDateTime,
        result: impl Into<String>,
    ) -> Self {
        Self {
            rule_name: rule_name.into(),
            time,
            result: result.into(),
        }
    }

    /// The composite key. No two entries for the same rule may share a
    /// timestamp.
    pub fn key(&self) -> (&str, NaiveDateTime) {
        (&self.rule_name, self.time)
    }

    /// Canonical textual rendering.
    ///
    /// A JSON object with `rule_name`, `time` as "DD Mon YYYY HH:MM:SS",
    /// and `result` as-is.
    pub fn render(&self) -> String {
        let rendered = Rendered {
            rule_name: &self.rule_name,
            time: self.time.format(TIME_FORMAT).to_string(),
            result: &self.result,
        };
        // Serializing three string fields cannot fail.
        serde_json::to_string(&rendered).unwrap_or_default()
    }
}
