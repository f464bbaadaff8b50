//! The commitlint Configuration Record.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::ConfigError;
use crate::rule_set::{BaseRuleSet, CONVENTIONAL_TYPES};
use crate::rules::{Applicability, RuleName, RuleParameter, RuleSpec, Severity};

pub mod resolve;

pub use resolve::{ResolvedRule, ResolvedRules, RuleOrigin};

/// Line limit applied to headers, body lines and footer lines.
pub const MAX_LINE_LENGTH: u32 = 80;

/// Untyped on-disk shape of a configuration, as any serde format produces it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfig {
    /// Base rule set names.
    #[serde(default)]
    pub extends: Vec<String>,
    /// Rule-spec tuples keyed by rule name, left untyped so a value of the
    /// wrong shape is reported against its key.
    #[serde(default, deserialize_with = "unique_rules")]
    pub rules: BTreeMap<String, Value>,
}

/// Reads the `rules` map, rejecting a rule declared twice.
fn unique_rules<'de, D>(deserializer: D) -> Result<BTreeMap<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    struct RulesVisitor;

    impl<'de> Visitor<'de> for RulesVisitor {
        type Value = BTreeMap<String, serde_json::Value>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of rule names to rule-specs")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut rules = BTreeMap::new();
            while let Some((key, value)) = map.next_entry::<String, serde_json::Value>()? {
                if rules.contains_key(&key) {
                    return Err(de::Error::custom(ConfigError::invalid_rule(
                        key,
                        "declared more than once",
                    )));
                }
                rules.insert(key, value);
            }
            Ok(rules)
        }
    }

    deserializer.deserialize_map(RulesVisitor)
}

/// A validated commitlint configuration.
///
/// The record can only be obtained through validating constructors, and
/// exposes read-only accessors; it does not change once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawConfig", into = "RawConfig")]
pub struct CommitlintConfig {
    extends: Vec<String>,
    rules: BTreeMap<RuleName, RuleSpec>,
}

impl CommitlintConfig {
    /// Builds a configuration, checking every `extends` entry and rule-spec.
    pub fn new(
        extends: Vec<String>,
        rules: BTreeMap<RuleName, RuleSpec>,
    ) -> Result<Self, ConfigError> {
        validate_extends(&extends)?;
        for (rule, spec) in &rules {
            spec.check(*rule)?;
        }
        Ok(Self { extends, rules })
    }

    /// The project's commit-message policy: conventional commits with an
    /// 80-column limit, a mandatory body and a fixed list of commit types.
    pub fn project() -> Self {
        use Applicability::{Always, Never};
        use Severity::Error;

        let length = || RuleParameter::Length(MAX_LINE_LENGTH);
        let rules = BTreeMap::from([
            (RuleName::BodyLeadingBlank, RuleSpec::new(Error, Always)),
            (RuleName::BodyEmpty, RuleSpec::new(Error, Never)),
            (
                RuleName::BodyMaxLineLength,
                RuleSpec::with_parameter(Error, Always, length()),
            ),
            (RuleName::FooterLeadingBlank, RuleSpec::new(Error, Always)),
            (
                RuleName::FooterMaxLineLength,
                RuleSpec::with_parameter(Error, Always, length()),
            ),
            (
                RuleName::HeaderMaxLength,
                RuleSpec::with_parameter(Error, Always, length()),
            ),
            (RuleName::HeaderTrim, RuleSpec::new(Error, Always)),
            (
                RuleName::TypeEnum,
                RuleSpec::with_parameter(Error, Always, RuleParameter::values(CONVENTIONAL_TYPES)),
            ),
            (RuleName::TypeEmpty, RuleSpec::new(Error, Never)),
        ]);

        Self {
            extends: vec![BaseRuleSet::ConfigConventional.name().to_string()],
            rules,
        }
    }

    /// Returns a copy of the configuration with `rule` set to `spec`.
    pub fn with_rule(mut self, rule: RuleName, spec: RuleSpec) -> Result<Self, ConfigError> {
        spec.check(rule)?;
        self.rules.insert(rule, spec);
        Ok(self)
    }

    /// Base rule set names, in merge order.
    pub fn extends(&self) -> &[String] {
        &self.extends
    }

    /// Rule overrides declared by this configuration.
    pub fn rules(&self) -> &BTreeMap<RuleName, RuleSpec> {
        &self.rules
    }

    /// Returns the override for `rule`, if declared.
    pub fn rule(&self, rule: RuleName) -> Option<&RuleSpec> {
        self.rules.get(&rule)
    }

    /// Returns the override for a rule given by its config-file name.
    pub fn rule_by_name(&self, name: &str) -> Option<&RuleSpec> {
        name.parse().ok().and_then(|rule| self.rule(rule))
    }

    /// Converts an untyped configuration, failing on the first malformed entry.
    pub fn from_raw(raw: RawConfig) -> Result<Self, ConfigError> {
        validate_extends(&raw.extends)?;
        let mut rules = BTreeMap::new();
        for (key, value) in &raw.rules {
            let rule: RuleName = key.parse()?;
            let values = value.as_array().ok_or_else(|| {
                ConfigError::invalid_rule(
                    key.as_str(),
                    format!(
                        "rule-spec must be a [severity, applicability, parameter?] array, got {value}"
                    ),
                )
            })?;
            rules.insert(rule, RuleSpec::from_values(rule, values)?);
        }
        tracing::debug!(
            extends = ?raw.extends,
            rules = rules.len(),
            "Validated commitlint configuration"
        );
        Ok(Self {
            extends: raw.extends,
            rules,
        })
    }

    /// Converts to the untyped on-disk shape.
    pub fn to_raw(&self) -> RawConfig {
        RawConfig {
            extends: self.extends.clone(),
            rules: self
                .rules
                .iter()
                .map(|(rule, spec)| (rule.as_str().to_string(), Value::from(spec.to_values())))
                .collect(),
        }
    }
}

impl TryFrom<RawConfig> for CommitlintConfig {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        Self::from_raw(raw)
    }
}

impl From<CommitlintConfig> for RawConfig {
    fn from(config: CommitlintConfig) -> Self {
        config.to_raw()
    }
}

fn validate_extends(extends: &[String]) -> Result<(), ConfigError> {
    for (index, name) in extends.iter().enumerate() {
        if name.trim().is_empty() {
            return Err(ConfigError::InvalidExtends {
                index,
                reason: "rule set name must not be empty".to_string(),
            });
        }
        if extends[..index].contains(name) {
            return Err(ConfigError::InvalidExtends {
                index,
                reason: format!("`{name}` is listed more than once"),
            });
        }
    }
    Ok(())
}
