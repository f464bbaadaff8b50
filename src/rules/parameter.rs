//! Rule parameters: the optional third element of a rule-spec.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use super::name::ParameterKind;

/// Text case accepted by the `*-case` rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextCase {
    /// `lower-case`
    LowerCase,
    /// `upper-case`
    UpperCase,
    /// `camel-case`
    CamelCase,
    /// `kebab-case`
    KebabCase,
    /// `pascal-case`
    PascalCase,
    /// `sentence-case`
    SentenceCase,
    /// `snake-case`
    SnakeCase,
    /// `start-case`
    StartCase,
}

impl TextCase {
    /// Returns the case name as written in a config file.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LowerCase => "lower-case",
            Self::UpperCase => "upper-case",
            Self::CamelCase => "camel-case",
            Self::KebabCase => "kebab-case",
            Self::PascalCase => "pascal-case",
            Self::SentenceCase => "sentence-case",
            Self::SnakeCase => "snake-case",
            Self::StartCase => "start-case",
        }
    }
}

impl fmt::Display for TextCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextCase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lower-case" => Ok(Self::LowerCase),
            "upper-case" => Ok(Self::UpperCase),
            "camel-case" => Ok(Self::CamelCase),
            "kebab-case" => Ok(Self::KebabCase),
            "pascal-case" => Ok(Self::PascalCase),
            "sentence-case" => Ok(Self::SentenceCase),
            "snake-case" => Ok(Self::SnakeCase),
            "start-case" => Ok(Self::StartCase),
            other => Err(format!("unknown case `{other}`")),
        }
    }
}

/// Case parameter: commitlint accepts a single case or a list of cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseSpec {
    /// A single case name.
    One(TextCase),
    /// Several case names.
    Many(Vec<TextCase>),
}

impl CaseSpec {
    /// Returns the cases as a slice regardless of representation.
    pub fn cases(&self) -> &[TextCase] {
        match self {
            Self::One(case) => std::slice::from_ref(case),
            Self::Many(cases) => cases,
        }
    }
}

/// The parameter of a rule-spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleParameter {
    /// Length bound for `*-max-length`, `*-min-length` and `*-max-line-length`.
    Length(u32),
    /// Allowed values for `type-enum` and `scope-enum`.
    Values(Vec<String>),
    /// Case constraint for the `*-case` rules.
    Case(CaseSpec),
    /// Literal text for full-stop and trailer rules.
    Text(String),
}

impl RuleParameter {
    /// Builds a `Values` parameter from anything iterable as strings.
    pub fn values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Values(values.into_iter().map(Into::into).collect())
    }

    /// Returns the shape of this parameter.
    pub const fn kind(&self) -> ParameterKind {
        match self {
            Self::Length(_) => ParameterKind::Length,
            Self::Values(_) => ParameterKind::Values,
            Self::Case(_) => ParameterKind::Case,
            Self::Text(_) => ParameterKind::Text,
        }
    }

    /// Returns the length bound, if this is a length parameter.
    pub const fn as_length(&self) -> Option<u32> {
        match self {
            Self::Length(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the allowed values, if this is a values parameter.
    pub fn as_values(&self) -> Option<&[String]> {
        match self {
            Self::Values(values) => Some(values),
            _ => None,
        }
    }

    /// Checks the value-level constraints of the parameter.
    ///
    /// Returns a human-readable reason on failure; the caller attaches the rule key.
    pub fn validate(&self) -> Result<(), String> {
        match self {
            Self::Length(0) => Err("length must be a positive integer, got 0".to_string()),
            Self::Length(_) => Ok(()),
            Self::Values(values) => {
                if values.is_empty() {
                    return Err("value list must not be empty".to_string());
                }
                let mut seen = HashSet::new();
                for value in values {
                    if value.trim().is_empty() {
                        return Err("value list must not contain blank entries".to_string());
                    }
                    if !seen.insert(value.as_str()) {
                        return Err(format!("value list contains duplicate `{value}`"));
                    }
                }
                Ok(())
            }
            Self::Case(spec) => {
                if spec.cases().is_empty() {
                    Err("case list must not be empty".to_string())
                } else {
                    Ok(())
                }
            }
            Self::Text(text) if text.is_empty() => Err("text must not be empty".to_string()),
            Self::Text(_) => Ok(()),
        }
    }

    /// Reads a parameter of the given kind from an untyped value.
    pub(crate) fn from_value(kind: ParameterKind, value: &Value) -> Result<Self, String> {
        let parameter = match kind {
            ParameterKind::None => return Err("rule takes no parameter".to_string()),
            ParameterKind::Length => {
                let n = value
                    .as_u64()
                    .ok_or_else(|| format!("expected {kind}, got {value}"))?;
                Self::Length(
                    u32::try_from(n).map_err(|_| format!("length {n} is out of range"))?,
                )
            }
            ParameterKind::Values => Self::Values(string_list(value, kind)?),
            ParameterKind::Case => match value {
                Value::String(s) => Self::Case(CaseSpec::One(s.parse()?)),
                Value::Array(_) => Self::Case(CaseSpec::Many(
                    string_list(value, kind)?
                        .iter()
                        .map(|s| s.parse::<TextCase>())
                        .collect::<Result<Vec<_>, _>>()?,
                )),
                other => return Err(format!("expected {kind}, got {other}")),
            },
            ParameterKind::Text => Self::Text(
                value
                    .as_str()
                    .ok_or_else(|| format!("expected {kind}, got {value}"))?
                    .to_string(),
            ),
        };
        parameter.validate()?;
        Ok(parameter)
    }

    /// Converts the parameter to its untyped config-file form.
    pub(crate) fn to_value(&self) -> Value {
        match self {
            Self::Length(n) => Value::from(*n),
            Self::Values(values) => Value::from(values.clone()),
            Self::Case(CaseSpec::One(case)) => Value::from(case.as_str()),
            Self::Case(CaseSpec::Many(cases)) => {
                Value::from(cases.iter().map(|c| c.as_str()).collect::<Vec<_>>())
            }
            Self::Text(text) => Value::from(text.as_str()),
        }
    }
}

fn string_list(value: &Value, kind: ParameterKind) -> Result<Vec<String>, String> {
    let items = value
        .as_array()
        .ok_or_else(|| format!("expected {kind}, got {value}"))?;
    items
        .iter()
        .map(|item| {
            item.as_str()
                .map(str::to_string)
                .ok_or_else(|| format!("expected {kind}, found element {item}"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn length_must_be_positive() {
        assert!(RuleParameter::from_value(ParameterKind::Length, &json!(80)).is_ok());
        let err = RuleParameter::from_value(ParameterKind::Length, &json!(0)).unwrap_err();
        assert!(err.contains("positive"), "{err}");
        assert!(RuleParameter::from_value(ParameterKind::Length, &json!(-3)).is_err());
        assert!(RuleParameter::from_value(ParameterKind::Length, &json!(80.5)).is_err());
        assert!(RuleParameter::from_value(ParameterKind::Length, &json!("80")).is_err());
    }

    #[test]
    fn values_reject_duplicates_and_blanks() {
        let err =
            RuleParameter::from_value(ParameterKind::Values, &json!(["feat", "feat"])).unwrap_err();
        assert!(err.contains("duplicate `feat`"), "{err}");
        assert!(RuleParameter::from_value(ParameterKind::Values, &json!([])).is_err());
        assert!(RuleParameter::from_value(ParameterKind::Values, &json!(["  "])).is_err());
        assert!(RuleParameter::from_value(ParameterKind::Values, &json!(["feat", 1])).is_err());
    }

    #[test]
    fn case_accepts_single_or_list() {
        let single = RuleParameter::from_value(ParameterKind::Case, &json!("lower-case")).unwrap();
        assert_eq!(single, RuleParameter::Case(CaseSpec::One(TextCase::LowerCase)));

        let many =
            RuleParameter::from_value(ParameterKind::Case, &json!(["sentence-case", "start-case"]))
                .unwrap();
        assert_eq!(
            many,
            RuleParameter::Case(CaseSpec::Many(vec![
                TextCase::SentenceCase,
                TextCase::StartCase
            ]))
        );

        let err = RuleParameter::from_value(ParameterKind::Case, &json!("shouty-case")).unwrap_err();
        assert_eq!(err, "unknown case `shouty-case`");
    }

    #[test]
    fn case_names_parse_back() {
        for case in [
            TextCase::LowerCase,
            TextCase::UpperCase,
            TextCase::CamelCase,
            TextCase::KebabCase,
            TextCase::PascalCase,
            TextCase::SentenceCase,
            TextCase::SnakeCase,
            TextCase::StartCase,
        ] {
            assert_eq!(case.as_str().parse::<TextCase>().unwrap(), case);
        }
        assert!("Lower-Case".parse::<TextCase>().is_err());
    }

    #[test]
    fn to_value_preserves_case_representation() {
        let single = RuleParameter::Case(CaseSpec::One(TextCase::KebabCase));
        assert_eq!(single.to_value(), json!("kebab-case"));
        let many = RuleParameter::Case(CaseSpec::Many(vec![TextCase::UpperCase]));
        assert_eq!(many.to_value(), json!(["upper-case"]));
    }

    #[test]
    fn text_must_not_be_empty() {
        assert_eq!(
            RuleParameter::from_value(ParameterKind::Text, &json!(".")).unwrap(),
            RuleParameter::Text(".".to_string())
        );
        assert!(RuleParameter::from_value(ParameterKind::Text, &json!("")).is_err());
    }
}
