//! Rule vocabulary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Shape of the third element of a rule-spec tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterKind {
    /// The rule takes no parameter; the tuple has two elements.
    None,
    /// A positive length bound.
    Length,
    /// A list of allowed string values.
    Values,
    /// One case name or a list of case names.
    Case,
    /// A single non-empty string.
    Text,
}

impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "no parameter"),
            Self::Length => write!(f, "a positive integer"),
            Self::Values => write!(f, "a list of strings"),
            Self::Case => write!(f, "a case name or list of case names"),
            Self::Text => write!(f, "a string"),
        }
    }
}

macro_rules! rule_names {
    ($($variant:ident => $name:literal, $kind:ident;)+) => {
        /// A rule from the commitlint rule catalogue.
        ///
        /// Variants are declared in the same order as their kebab-case names, so
        /// the derived `Ord` sorts rules the way they appear in a config file.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub enum RuleName {
            $(
                #[doc = concat!("`", $name, "`")]
                $variant,
            )+
        }

        impl RuleName {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Returns the rule's name as written in a config file.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }

            /// Returns the parameter shape this rule requires.
            pub const fn parameter_kind(self) -> ParameterKind {
                match self {
                    $(Self::$variant => ParameterKind::$kind,)+
                }
            }
        }

        impl FromStr for RuleName {
            type Err = ConfigError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok(Self::$variant),)+
                    other => Err(ConfigError::UnknownRule(other.to_string())),
                }
            }
        }
    };
}

rule_names! {
    BodyCase => "body-case", Case;
    BodyEmpty => "body-empty", None;
    BodyFullStop => "body-full-stop", Text;
    BodyLeadingBlank => "body-leading-blank", None;
    BodyMaxLength => "body-max-length", Length;
    BodyMaxLineLength => "body-max-line-length", Length;
    BodyMinLength => "body-min-length", Length;
    FooterEmpty => "footer-empty", None;
    FooterLeadingBlank => "footer-leading-blank", None;
    FooterMaxLength => "footer-max-length", Length;
    FooterMaxLineLength => "footer-max-line-length", Length;
    FooterMinLength => "footer-min-length", Length;
    HeaderCase => "header-case", Case;
    HeaderFullStop => "header-full-stop", Text;
    HeaderMaxLength => "header-max-length", Length;
    HeaderMinLength => "header-min-length", Length;
    HeaderTrim => "header-trim", None;
    ReferencesEmpty => "references-empty", None;
    ScopeCase => "scope-case", Case;
    ScopeEmpty => "scope-empty", None;
    ScopeEnum => "scope-enum", Values;
    ScopeMaxLength => "scope-max-length", Length;
    ScopeMinLength => "scope-min-length", Length;
    SignedOffBy => "signed-off-by", Text;
    SubjectCase => "subject-case", Case;
    SubjectEmpty => "subject-empty", None;
    SubjectExclamationMark => "subject-exclamation-mark", None;
    SubjectFullStop => "subject-full-stop", Text;
    SubjectMaxLength => "subject-max-length", Length;
    SubjectMinLength => "subject-min-length", Length;
    TrailerExists => "trailer-exists", Text;
    TypeCase => "type-case", Case;
    TypeEmpty => "type-empty", None;
    TypeEnum => "type-enum", Values;
    TypeMaxLength => "type-max-length", Length;
    TypeMinLength => "type-min-length", Length;
}

impl RuleName {
    /// Returns every rule in the vocabulary, in name order.
    pub fn all() -> &'static [Self] {
        Self::ALL
    }
}

impl fmt::Display for RuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for RuleName {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RuleName> for String {
    fn from(rule: RuleName) -> Self {
        rule.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_from_str() {
        for rule in RuleName::all() {
            assert_eq!(rule.as_str().parse::<RuleName>().unwrap(), *rule);
        }
    }

    #[test]
    fn declaration_order_matches_name_order() {
        let names: Vec<&str> = RuleName::all().iter().map(|r| r.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    #[test]
    fn unknown_rule_is_rejected() {
        let err = "body-lenght".parse::<RuleName>().unwrap_err();
        assert_eq!(err, ConfigError::UnknownRule("body-lenght".to_string()));
        assert_eq!(err.to_string(), "Unknown rule `body-lenght`");
    }

    #[test]
    fn parameter_kinds_of_overridden_rules() {
        assert_eq!(RuleName::TypeEnum.parameter_kind(), ParameterKind::Values);
        assert_eq!(RuleName::HeaderMaxLength.parameter_kind(), ParameterKind::Length);
        assert_eq!(RuleName::BodyMaxLineLength.parameter_kind(), ParameterKind::Length);
        assert_eq!(RuleName::BodyEmpty.parameter_kind(), ParameterKind::None);
        assert_eq!(RuleName::HeaderTrim.parameter_kind(), ParameterKind::None);
        assert_eq!(RuleName::SubjectCase.parameter_kind(), ParameterKind::Case);
        assert_eq!(RuleName::SubjectFullStop.parameter_kind(), ParameterKind::Text);
    }

    #[test]
    fn serializes_as_kebab_case_string() {
        let json = serde_json::to_string(&RuleName::FooterMaxLineLength).unwrap();
        assert_eq!(json, "\"footer-max-line-length\"");
        let parsed: RuleName = serde_json::from_str("\"type-empty\"").unwrap();
        assert_eq!(parsed, RuleName::TypeEmpty);
        assert!(serde_json::from_str::<RuleName>("\"type-emptyy\"").is_err());
    }
}
