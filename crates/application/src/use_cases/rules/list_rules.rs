use hostcache_domain::CacheState;
use std::sync::Arc;

use crate::ports::RuleStorePort;

/// One row of the rule overview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSummary {
    pub id: Arc<str>,
    pub label: Arc<str>,
    pub weight: i32,
    pub enabled: bool,
    pub page_cache: CacheState,
    pub http_cache: CacheState,
    pub pattern_valid: bool,
    /// True for the rule the given host resolves to.
    pub current: bool,
}

/// Lists the live snapshot in evaluation order, marking the rule that
/// `host` currently resolves to.
pub struct ListRulesUseCase {
    store: Arc<dyn RuleStorePort>,
}

impl ListRulesUseCase {
    pub fn new(store: Arc<dyn RuleStorePort>) -> Self {
        Self { store }
    }

    pub fn execute(&self, host: Option<&str>) -> Vec<RuleSummary> {
        let snapshot = self.store.snapshot();
        let current_id = snapshot.resolve(host).map(|rule| rule.id.clone());

        snapshot
            .rules()
            .map(|compiled| {
                let rule = &compiled.rule;
                RuleSummary {
                    id: rule.id.clone(),
                    label: rule.domain_pattern.clone(),
                    weight: rule.weight,
                    enabled: rule.enabled,
                    page_cache: rule.page_cache_state(),
                    http_cache: rule.http_cache_state(),
                    pattern_valid: compiled.pattern_valid(),
                    current: current_id.as_ref() == Some(&rule.id),
                }
            })
            .collect()
    }
}
