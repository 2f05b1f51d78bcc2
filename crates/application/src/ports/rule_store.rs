use hostcache_domain::{CacheRule, DomainError, RuleSnapshot};
use std::sync::Arc;

/// Counts reported after a snapshot is published.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PublishSummary {
    pub total: usize,
    pub enabled: usize,
    pub invalid_patterns: usize,
}

impl PublishSummary {
    pub fn of(snapshot: &RuleSnapshot) -> Self {
        Self {
            total: snapshot.len(),
            enabled: snapshot.enabled_count(),
            invalid_patterns: snapshot.invalid_pattern_count(),
        }
    }
}

/// Holder of the live rule snapshot.
///
/// `snapshot` is the hot path and must never block. `publish` compiles a new
/// snapshot and swaps it in whole; readers see either the old or the new
/// rule set, never a mix.
pub trait RuleStorePort: Send + Sync {
    fn snapshot(&self) -> Arc<RuleSnapshot>;

    /// Replace the live snapshot. On error the previous snapshot stays live.
    fn publish(&self, rules: Vec<CacheRule>) -> Result<PublishSummary, DomainError>;
}
