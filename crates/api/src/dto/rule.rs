use hostcache_application::use_cases::RuleSummary;
use hostcache_domain::CacheState;
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize, Debug, Clone)]
pub struct RuleResponse {
    pub id: Arc<str>,
    pub label: Arc<str>,
    pub weight: i32,
    pub enabled: bool,
    pub page_cache: CacheState,
    pub http_cache: CacheState,
    pub pattern_valid: bool,
    pub current: bool,
}

impl From<RuleSummary> for RuleResponse {
    fn from(summary: RuleSummary) -> Self {
        Self {
            id: summary.id,
            label: summary.label,
            weight: summary.weight,
            enabled: summary.enabled,
            page_cache: summary.page_cache,
            http_cache: summary.http_cache,
            pattern_valid: summary.pattern_valid,
            current: summary.current,
        }
    }
}
