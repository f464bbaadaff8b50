//! # commitlint-config
//!
//! The project's commit-message lint policy as a typed, validated record.
//!
//! ## Features
//!
//! - Rule-spec tuples checked against the commitlint rule vocabulary
//! - Resolution against the `@commitlint/config-conventional` defaults
//! - JSON and YAML `.commitlintrc` files, plus `commitlint.config.js` output
//!
//! ## Quick Start
//!
//! ```rust
//! use commitlint_config::{CommitlintConfig, RuleName, Severity};
//!
//! let config = CommitlintConfig::project();
//! let type_enum = config.rule(RuleName::TypeEnum).unwrap();
//! assert_eq!(type_enum.severity, Severity::Error);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod config;
pub mod data;
pub mod error;
pub mod loader;
pub mod rule_set;
pub mod rules;

pub use crate::config::{CommitlintConfig, RawConfig, ResolvedRules};
pub use crate::error::ConfigError;
pub use crate::loader::{load_from_path, save_to_path, ConfigFormat, ConfigLoader};
pub use crate::rule_set::{BaseRuleSet, CONVENTIONAL_TYPES};
pub use crate::rules::{Applicability, RuleName, RuleParameter, RuleSpec, Severity};

/// The current version of commitlint-config.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
