//! Resolution of a configuration against the rule sets it extends.

use std::collections::BTreeMap;

use crate::error::ConfigError;
use crate::rule_set::BaseRuleSet;
use crate::rules::{RuleName, RuleSpec};

use super::CommitlintConfig;

/// Where an effective rule-spec came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleOrigin {
    /// Default of an extended rule set.
    Base(BaseRuleSet),
    /// Declared by the configuration itself.
    Local,
}

/// An effective rule-spec and its origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRule {
    /// The rule-spec the engine will apply.
    pub spec: RuleSpec,
    /// Where it was declared.
    pub origin: RuleOrigin,
}

/// The merged rule table seen by the lint engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedRules {
    rules: BTreeMap<RuleName, ResolvedRule>,
}

impl ResolvedRules {
    /// Returns the effective rule-spec for `rule`.
    pub fn get(&self, rule: RuleName) -> Option<&RuleSpec> {
        self.rules.get(&rule).map(|resolved| &resolved.spec)
    }

    /// Returns where the effective rule-spec for `rule` was declared.
    pub fn origin(&self, rule: RuleName) -> Option<RuleOrigin> {
        self.rules.get(&rule).map(|resolved| resolved.origin)
    }

    /// Iterates over all effective rules in name order.
    pub fn iter(&self) -> impl Iterator<Item = (RuleName, &ResolvedRule)> {
        self.rules.iter().map(|(rule, resolved)| (*rule, resolved))
    }

    /// Iterates over rules whose severity is not `0`.
    pub fn enabled(&self) -> impl Iterator<Item = (RuleName, &RuleSpec)> {
        self.rules
            .iter()
            .filter(|(_, resolved)| resolved.spec.is_enabled())
            .map(|(rule, resolved)| (*rule, &resolved.spec))
    }

    /// Number of effective rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if no rule is in effect.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl CommitlintConfig {
    /// Merges the defaults of every extended rule set, in order, then this
    /// configuration's own rules. A later declaration replaces the whole
    /// rule-spec of an earlier one.
    pub fn resolve(&self) -> Result<ResolvedRules, ConfigError> {
        let mut rules = BTreeMap::new();

        for name in self.extends() {
            let base = BaseRuleSet::from_name(name)
                .ok_or_else(|| ConfigError::UnknownRuleSet(name.clone()))?;
            for (rule, spec) in base.defaults() {
                rules.insert(
                    rule,
                    ResolvedRule {
                        spec,
                        origin: RuleOrigin::Base(base),
                    },
                );
            }
        }

        for (rule, spec) in self.rules() {
            let previous = rules.insert(
                *rule,
                ResolvedRule {
                    spec: spec.clone(),
                    origin: RuleOrigin::Local,
                },
            );
            match previous {
                Some(previous) if previous.spec.is_enabled() && !spec.is_enabled() => {
                    tracing::warn!("Rule {rule} from {:?} is disabled locally", previous.origin);
                }
                Some(previous) if previous.spec != *spec => {
                    tracing::debug!("Rule {rule} overridden: {} -> {spec}", previous.spec);
                }
                _ => {}
            }
        }

        tracing::debug!("Resolved {} effective rules", rules.len());
        Ok(ResolvedRules { rules })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{Applicability, RuleParameter, Severity};

    #[test]
    fn project_over_conventional() {
        let resolved = CommitlintConfig::project().resolve().unwrap();

        // 12 base rules plus body-empty, which only the project declares.
        assert_eq!(resolved.len(), 13);

        let header = resolved.get(RuleName::HeaderMaxLength).unwrap();
        assert_eq!(header.parameter, Some(RuleParameter::Length(80)));
        assert_eq!(resolved.origin(RuleName::HeaderMaxLength), Some(RuleOrigin::Local));

        // Base leading-blank warnings are promoted to errors.
        assert_eq!(
            resolved.get(RuleName::BodyLeadingBlank).unwrap().severity,
            Severity::Error
        );

        for rule in [
            RuleName::SubjectCase,
            RuleName::SubjectEmpty,
            RuleName::SubjectFullStop,
            RuleName::TypeCase,
        ] {
            assert_eq!(
                resolved.origin(rule),
                Some(RuleOrigin::Base(BaseRuleSet::ConfigConventional)),
                "{rule}"
            );
        }
    }

    #[test]
    fn unknown_rule_set_fails() {
        let config = CommitlintConfig::new(
            vec!["@commitlint/config-angular".to_string()],
            BTreeMap::new(),
        )
        .unwrap();
        assert_eq!(
            config.resolve().unwrap_err(),
            ConfigError::UnknownRuleSet("@commitlint/config-angular".to_string())
        );
    }

    #[test]
    fn disabled_rules_are_not_enabled() {
        let config = CommitlintConfig::project()
            .with_rule(
                RuleName::SubjectCase,
                RuleSpec::with_parameter(
                    Severity::Disabled,
                    Applicability::Never,
                    RuleParameter::Case(crate::rules::CaseSpec::One(
                        crate::rules::TextCase::UpperCase,
                    )),
                ),
            )
            .unwrap();
        let resolved = config.resolve().unwrap();
        assert!(resolved.get(RuleName::SubjectCase).is_some());
        assert!(resolved.enabled().all(|(rule, _)| rule != RuleName::SubjectCase));
        assert_eq!(resolved.enabled().count(), resolved.len() - 1);
    }

    #[test]
    fn no_extends_means_local_rules_only() {
        let config = CommitlintConfig::new(Vec::new(), CommitlintConfig::project().rules().clone())
            .unwrap();
        let resolved = config.resolve().unwrap();
        assert_eq!(resolved.len(), 9);
        assert!(resolved.iter().all(|(_, r)| r.origin == RuleOrigin::Local));
    }
}
