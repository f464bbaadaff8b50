//! Rule-spec tuples and the vocabulary they are keyed by.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ConfigError;

pub mod name;
pub mod parameter;

pub use name::{ParameterKind, RuleName};
pub use parameter::{CaseSpec, RuleParameter, TextCase};

/// How a rule violation is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Severity {
    /// `0`: the rule is not evaluated.
    Disabled = 0,
    /// `1`: violations are reported as warnings.
    Warning = 1,
    /// `2`: violations fail the lint.
    Error = 2,
}

impl TryFrom<u8> for Severity {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, String> {
        match value {
            0 => Ok(Self::Disabled),
            1 => Ok(Self::Warning),
            2 => Ok(Severity::Error),
            other => Err(format!("severity must be 0, 1 or 2, got {other}")),
        }
    }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> Self {
        severity as Self
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disabled => write!(f, "off"),
            Self::Warning => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Whether the rule's condition must hold or must not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Applicability {
    /// `"always"`
    Always,
    /// `"never"`
    Never,
}

impl Applicability {
    /// Returns the value as written in a config file.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Never => "never",
        }
    }
}

impl fmt::Display for Applicability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Applicability {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            other => Err(format!(
                "applicability must be \"always\" or \"never\", got {other:?}"
            )),
        }
    }
}

/// A `[severity, applicability, parameter?]` tuple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSpec {
    /// Reporting level.
    pub severity: Severity,
    /// Polarity of the rule.
    pub applicability: Applicability,
    /// Rule-specific parameter.
    pub parameter: Option<RuleParameter>,
}

impl RuleSpec {
    /// Creates a rule-spec without a parameter.
    pub const fn new(severity: Severity, applicability: Applicability) -> Self {
        Self {
            severity,
            applicability,
            parameter: None,
        }
    }

    /// Creates a rule-spec carrying a parameter.
    pub const fn with_parameter(
        severity: Severity,
        applicability: Applicability,
        parameter: RuleParameter,
    ) -> Self {
        Self {
            severity,
            applicability,
            parameter: Some(parameter),
        }
    }

    /// Returns `true` unless the severity is `0`.
    pub fn is_enabled(&self) -> bool {
        self.severity != Severity::Disabled
    }

    /// Verifies the tuple has the arity and parameter shape `rule` requires.
    pub fn check(&self, rule: RuleName) -> Result<(), ConfigError> {
        let expected = rule.parameter_kind();
        match (&self.parameter, expected) {
            (None, ParameterKind::None) => Ok(()),
            (Some(_), ParameterKind::None) => Err(ConfigError::invalid_rule(
                rule.as_str(),
                "rule takes no parameter",
            )),
            (None, kind) => Err(ConfigError::invalid_rule(
                rule.as_str(),
                format!("missing parameter, expected {kind}"),
            )),
            (Some(parameter), kind) if parameter.kind() != kind => Err(ConfigError::invalid_rule(
                rule.as_str(),
                format!("parameter must be {kind}"),
            )),
            (Some(parameter), _) => parameter
                .validate()
                .map_err(|reason| ConfigError::invalid_rule(rule.as_str(), reason)),
        }
    }

    /// Reads a rule-spec for `rule` from its untyped tuple form.
    pub(crate) fn from_values(rule: RuleName, values: &[Value]) -> Result<Self, ConfigError> {
        let invalid = |reason: String| ConfigError::invalid_rule(rule.as_str(), reason);
        let kind = rule.parameter_kind();
        let arity = if kind == ParameterKind::None { 2 } else { 3 };
        if values.len() != arity {
            return Err(invalid(format!(
                "expected {arity} elements, got {}",
                values.len()
            )));
        }

        let severity = values[0]
            .as_u64()
            .and_then(|n| u8::try_from(n).ok())
            .ok_or_else(|| invalid(format!("severity must be 0, 1 or 2, got {}", values[0])))
            .and_then(|n| Severity::try_from(n).map_err(&invalid))?;

        let applicability = values[1]
            .as_str()
            .ok_or_else(|| invalid(format!("applicability must be a string, got {}", values[1])))?
            .parse::<Applicability>()
            .map_err(&invalid)?;

        let parameter = match values.get(2) {
            Some(value) => Some(RuleParameter::from_value(kind, value).map_err(&invalid)?),
            None => None,
        };

        Ok(Self {
            severity,
            applicability,
            parameter,
        })
    }

    /// Converts the rule-spec to its untyped tuple form.
    pub(crate) fn to_values(&self) -> Vec<Value> {
        let mut values = vec![
            Value::from(u8::from(self.severity)),
            Value::from(self.applicability.as_str()),
        ];
        if let Some(parameter) = &self.parameter {
            values.push(parameter.to_value());
        }
        values
    }
}

impl fmt::Display for RuleSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}", self.severity, self.applicability)?;
        match &self.parameter {
            Some(RuleParameter::Length(n)) => write!(f, ", {n})"),
            Some(RuleParameter::Values(values)) => write!(f, ", {{{}}})", values.join(", ")),
            Some(RuleParameter::Case(spec)) => {
                let cases: Vec<&str> = spec.cases().iter().map(|c| c.as_str()).collect();
                write!(f, ", {})", cases.join(", "))
            }
            Some(RuleParameter::Text(text)) => write!(f, ", {text:?})"),
            None => write!(f, ")"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn values(v: Value) -> Vec<Value> {
        v.as_array().cloned().unwrap()
    }

    #[test]
    fn severity_is_restricted_to_known_levels() {
        assert_eq!(Severity::try_from(0).unwrap(), Severity::Disabled);
        assert_eq!(Severity::try_from(2).unwrap(), Severity::Error);
        assert!(Severity::try_from(3).is_err());
        assert!(serde_json::from_str::<Severity>("3").is_err());
        assert_eq!(serde_json::to_string(&Severity::Warning).unwrap(), "1");
    }

    #[test]
    fn applicability_is_restricted_to_always_and_never() {
        assert_eq!(
            serde_json::from_str::<Applicability>("\"never\"").unwrap(),
            Applicability::Never
        );
        assert!(serde_json::from_str::<Applicability>("\"sometimes\"").is_err());
        assert!("Always".parse::<Applicability>().is_err());
    }

    #[test]
    fn from_values_reads_length_rule() {
        let spec =
            RuleSpec::from_values(RuleName::HeaderMaxLength, &values(json!([2, "always", 80])))
                .unwrap();
        assert_eq!(spec.severity, Severity::Error);
        assert_eq!(spec.applicability, Applicability::Always);
        assert_eq!(spec.parameter.unwrap().as_length(), Some(80));
    }

    #[test]
    fn from_values_enforces_arity() {
        let err = RuleSpec::from_values(RuleName::BodyEmpty, &values(json!([2, "never", 1])))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid rule `body-empty`: expected 2 elements, got 3"
        );

        let err = RuleSpec::from_values(RuleName::TypeEnum, &values(json!([2, "always"])))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRule { ref rule, .. } if rule == "type-enum"));
    }

    #[test]
    fn from_values_rejects_bad_severity_and_applicability() {
        let err = RuleSpec::from_values(RuleName::HeaderTrim, &values(json!([5, "always"])))
            .unwrap_err();
        assert!(err.to_string().contains("header-trim"), "{err}");

        let err = RuleSpec::from_values(RuleName::HeaderTrim, &values(json!(["2", "always"])))
            .unwrap_err();
        assert!(err.to_string().contains("severity"), "{err}");

        let err = RuleSpec::from_values(RuleName::HeaderTrim, &values(json!([2, "maybe"])))
            .unwrap_err();
        assert!(err.to_string().contains("applicability"), "{err}");
    }

    #[test]
    fn check_matches_parameter_kind() {
        let spec = RuleSpec::with_parameter(
            Severity::Error,
            Applicability::Always,
            RuleParameter::Length(80),
        );
        assert!(spec.check(RuleName::BodyMaxLineLength).is_ok());
        assert!(spec.check(RuleName::TypeEnum).is_err());
        assert!(spec.check(RuleName::BodyEmpty).is_err());

        let bare = RuleSpec::new(Severity::Error, Applicability::Never);
        assert!(bare.check(RuleName::TypeEmpty).is_ok());
        assert!(bare.check(RuleName::HeaderMaxLength).is_err());
    }

    #[test]
    fn to_values_round_trips() {
        let raw = values(json!([1, "never", ["sentence-case", "upper-case"]]));
        let spec = RuleSpec::from_values(RuleName::SubjectCase, &raw).unwrap();
        assert_eq!(spec.to_values(), raw);
    }

    #[test]
    fn display_is_readable() {
        let spec = RuleSpec::with_parameter(
            Severity::Error,
            Applicability::Always,
            RuleParameter::values(["feat", "fix"]),
        );
        assert_eq!(spec.to_string(), "(error, always, {feat, fix})");
        assert_eq!(
            RuleSpec::new(Severity::Warning, Applicability::Never).to_string(),
            "(warn, never)"
        );
    }
}
