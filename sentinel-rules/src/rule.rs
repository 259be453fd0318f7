//! Rule entity
//!
//! A rule is an administered automation resource evaluated on a frequency.
//! This crate orchestrates rule lifecycle transitions; evaluation and
//! scheduling belong to the rule engine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An administered rule.
///
/// `name` is the unique key. `data` is an opaque payload interpreted by the
/// rule engine; this layer never looks inside it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rule {
    /// Unique rule name.
    pub name: String,

    /// Rule type, interpreted by the rule engine.
    #[serde(rename = "type")]
    pub rule_type: String,

    /// Opaque payload.
    pub data: String,

    /// Evaluation interval in seconds.
    pub frequency: u32,
}

impl Rule {
    /// Create a new rule.
    pub fn new(
        name: impl Into<String>,
        rule_type: impl Into<String>,
        data: impl Into<String>,
        frequency: u32,
    ) -> Self {
        Self {
            name: name.into(),
            rule_type: rule_type.into(),
            data: data.into(),
            frequency,
        }
    }
}

/// The stable JSON representation used on the wire.
///
/// Field order is fixed (name, type, data, frequency); the REST layer
/// depends on this rendering being deterministic.
impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}
