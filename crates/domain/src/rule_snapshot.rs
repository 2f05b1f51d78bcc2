use crate::{CacheRule, DomainError};
use fancy_regex::Regex;
use std::collections::HashSet;
use tracing::warn;

/// A rule together with its pattern, compiled once at publish time.
///
/// `pattern` is `None` when the rule's `domain_pattern` failed to compile;
/// such a rule stays visible for listing but never matches a host.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    pub rule: CacheRule,
    pattern: Option<Regex>,
}

impl CompiledRule {
    pub fn compile(rule: CacheRule) -> Self {
        let pattern = match Regex::new(&rule.domain_pattern) {
            Ok(regex) => Some(regex),
            Err(e) => {
                warn!(
                    rule_id = %rule.id,
                    pattern = %rule.domain_pattern,
                    error = %e,
                    "Domain pattern failed to compile; rule will never match"
                );
                None
            }
        };

        Self { rule, pattern }
    }

    pub fn pattern_valid(&self) -> bool {
        self.pattern.is_some()
    }

    /// Substring search of the compiled pattern within `host`.
    fn matches(&self, host: &str) -> bool {
        let Some(regex) = &self.pattern else {
            return false;
        };

        match regex.is_match(host) {
            Ok(matched) => matched,
            Err(e) => {
                warn!(
                    rule_id = %self.rule.id,
                    host = %host,
                    error = %e,
                    "Domain pattern evaluation failed; treating as no match"
                );
                false
            }
        }
    }
}

/// Immutable, ordered view of every rule at one point in time.
///
/// Rules are sorted ascending by `weight`, ties broken by `id`, so matching
/// is reproducible regardless of the order the rule source returned them in.
#[derive(Debug, Clone, Default)]
pub struct RuleSnapshot {
    rules: Vec<CompiledRule>,
}

impl RuleSnapshot {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn build(rules: Vec<CacheRule>) -> Result<Self, DomainError> {
        let mut seen = HashSet::with_capacity(rules.len());
        for rule in &rules {
            if !seen.insert(rule.id.clone()) {
                return Err(DomainError::DuplicateRuleId(rule.id.to_string()));
            }
        }

        let mut compiled: Vec<CompiledRule> =
            rules.into_iter().map(CompiledRule::compile).collect();
        compiled.sort_by(|a, b| {
            a.rule
                .weight
                .cmp(&b.rule.weight)
                .then_with(|| a.rule.id.cmp(&b.rule.id))
        });

        Ok(Self { rules: compiled })
    }

    /// Select the first enabled rule whose pattern is found in `host`.
    ///
    /// A missing or empty host never matches.
    pub fn resolve(&self, host: Option<&str>) -> Option<&CacheRule> {
        let host = host.filter(|h| !h.is_empty())?;

        self.rules
            .iter()
            .filter(|compiled| compiled.rule.enabled)
            .find(|compiled| compiled.matches(host))
            .map(|compiled| &compiled.rule)
    }

    pub fn rules(&self) -> impl Iterator<Item = &CompiledRule> {
        self.rules.iter()
    }

    pub fn get(&self, id: &str) -> Option<&CacheRule> {
        self.rules
            .iter()
            .map(|compiled| &compiled.rule)
            .find(|rule| rule.id.as_ref() == id)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn enabled_count(&self) -> usize {
        self.rules.iter().filter(|c| c.rule.enabled).count()
    }

    pub fn invalid_pattern_count(&self) -> usize {
        self.rules.iter().filter(|c| !c.pattern_valid()).count()
    }
}
