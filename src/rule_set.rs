//! Named base rule sets a configuration can extend.

use std::collections::BTreeMap;
use std::fmt;

use crate::rules::{
    Applicability, CaseSpec, RuleName, RuleParameter, RuleSpec, Severity, TextCase,
};

/// Commit types accepted by the conventional-commit rule set.
pub const CONVENTIONAL_TYPES: [&str; 11] = [
    "build", "chore", "ci", "docs", "feat", "fix", "perf", "refactor", "revert", "style", "test",
];

/// A rule set known to this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseRuleSet {
    /// `@commitlint/config-conventional`
    ConfigConventional,
}

impl BaseRuleSet {
    /// Looks up a rule set by the name used in `extends`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "@commitlint/config-conventional" => Some(Self::ConfigConventional),
            _ => None,
        }
    }

    /// Returns the name used in `extends`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::ConfigConventional => "@commitlint/config-conventional",
        }
    }

    /// Returns the default rule-specs this set provides.
    pub fn defaults(self) -> BTreeMap<RuleName, RuleSpec> {
        match self {
            Self::ConfigConventional => config_conventional(),
        }
    }
}

impl fmt::Display for BaseRuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn config_conventional() -> BTreeMap<RuleName, RuleSpec> {
    use Applicability::{Always, Never};
    use Severity::{Error, Warning};

    BTreeMap::from([
        (RuleName::BodyLeadingBlank, RuleSpec::new(Warning, Always)),
        (
            RuleName::BodyMaxLineLength,
            RuleSpec::with_parameter(Error, Always, RuleParameter::Length(100)),
        ),
        (RuleName::FooterLeadingBlank, RuleSpec::new(Warning, Always)),
        (
            RuleName::FooterMaxLineLength,
            RuleSpec::with_parameter(Error, Always, RuleParameter::Length(100)),
        ),
        (
            RuleName::HeaderMaxLength,
            RuleSpec::with_parameter(Error, Always, RuleParameter::Length(100)),
        ),
        (RuleName::HeaderTrim, RuleSpec::new(Error, Always)),
        (
            RuleName::SubjectCase,
            RuleSpec::with_parameter(
                Error,
                Never,
                RuleParameter::Case(CaseSpec::Many(vec![
                    TextCase::SentenceCase,
                    TextCase::StartCase,
                    TextCase::PascalCase,
                    TextCase::UpperCase,
                ])),
            ),
        ),
        (RuleName::SubjectEmpty, RuleSpec::new(Error, Never)),
        (
            RuleName::SubjectFullStop,
            RuleSpec::with_parameter(Error, Never, RuleParameter::Text(".".to_string())),
        ),
        (
            RuleName::TypeCase,
            RuleSpec::with_parameter(
                Error,
                Always,
                RuleParameter::Case(CaseSpec::One(TextCase::LowerCase)),
            ),
        ),
        (RuleName::TypeEmpty, RuleSpec::new(Error, Never)),
        (
            RuleName::TypeEnum,
            RuleSpec::with_parameter(Error, Always, RuleParameter::values(CONVENTIONAL_TYPES)),
        ),
    ])
}
