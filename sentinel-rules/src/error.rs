//! Error types for rule lifecycle operations

use thiserror::Error;

/// Rule lifecycle error types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// Malformed input — empty name, empty type, zero frequency.
    ///
    /// Recovered at the REST boundary as a 400; never propagated further.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// No rule with the given name exists.
    #[error("Rule does not exist: {0}")]
    NotFound(String),

    /// A rule with the given name already exists.
    #[error("Rule already exists: {0}")]
    AlreadyExists(String),

    /// A log entry with the same (rule, time) key already exists.
    #[error("Duplicate log entry for rule {rule_name} at {time}")]
    DuplicateLogEntry {
        /// Owning rule.
        rule_name: String,
        /// Colliding timestamp, rendered.
        time: String,
    },
}

/// Result type for rule lifecycle operations.
pub type RuleResult<T> = Result<T, RuleError>;

impl RuleError {
    /// Get the HTTP status code for this error.
    ///
    /// Note that `get_rule` deliberately does not use this mapping for
    /// NotFound — see the resource layer.
    pub fn status_code(&self) -> u16 {
        match self {
            RuleError::InvalidArgument(_) => 400,
            RuleError::NotFound(_) => 404,
            RuleError::AlreadyExists(_) => 409,
            RuleError::DuplicateLogEntry { .. } => 409,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(RuleError::InvalidArgument("x".into()).status_code(), 400);
        assert_eq!(RuleError::NotFound("r".into()).status_code(), 404);
        assert_eq!(RuleError::AlreadyExists("r".into()).status_code(), 409);
    }
}
