//! Configuration error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building or validating a commitlint configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A rules key is not part of the commitlint rule vocabulary.
    #[error("Unknown rule `{0}`")]
    UnknownRule(String),

    /// A rule-spec does not have the shape its rule requires.
    #[error("Invalid rule `{rule}`: {reason}")]
    InvalidRule {
        /// Offending rules key.
        rule: String,
        /// What is wrong with the rule-spec.
        reason: String,
    },

    /// An `extends` entry is malformed.
    #[error("Invalid extends entry at index {index}: {reason}")]
    InvalidExtends {
        /// Position in the `extends` sequence.
        index: usize,
        /// What is wrong with the entry.
        reason: String,
    },

    /// An `extends` entry names a rule set that is not built in.
    #[error("Unknown base rule set `{0}`")]
    UnknownRuleSet(String),

    /// The file name does not map to a readable configuration format.
    #[error("Unsupported configuration format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
}

impl ConfigError {
    pub(crate) fn invalid_rule(rule: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRule {
            rule: rule.into(),
            reason: reason.into(),
        }
    }
}
