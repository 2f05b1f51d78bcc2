use arc_swap::ArcSwap;
use hostcache_application::ports::{PublishSummary, RuleStorePort};
use hostcache_domain::{CacheRule, DomainError, RuleSnapshot};
use std::sync::Arc;
use tracing::{info, warn};

/// Live rule snapshot, swapped atomically via `ArcSwap` on publish.
///
/// Readers take a cheap `Arc` clone of the current snapshot and keep using
/// it for the whole response, even if a publish lands meanwhile. Publishing
/// compiles every pattern up front so the hot path never compiles a regex.
pub struct RuleStore {
    snapshot: ArcSwap<RuleSnapshot>,
}

impl RuleStore {
    pub fn new() -> Self {
        Self {
            snapshot: ArcSwap::from_pointee(RuleSnapshot::empty()),
        }
    }

    pub fn with_rules(rules: Vec<CacheRule>) -> Result<Self, DomainError> {
        Ok(Self {
            snapshot: ArcSwap::from_pointee(RuleSnapshot::build(rules)?),
        })
    }
}

impl Default for RuleStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleStorePort for RuleStore {
    #[inline]
    fn snapshot(&self) -> Arc<RuleSnapshot> {
        self.snapshot.load_full()
    }

    fn publish(&self, rules: Vec<CacheRule>) -> Result<PublishSummary, DomainError> {
        let snapshot = RuleSnapshot::build(rules)?;
        let summary = PublishSummary::of(&snapshot);

        if summary.invalid_patterns > 0 {
            warn!(
                invalid_patterns = summary.invalid_patterns,
                "Snapshot contains rules with invalid patterns; they will never match"
            );
        }

        self.snapshot.store(Arc::new(snapshot));

        info!(
            total = summary.total,
            enabled = summary.enabled,
            "Rule snapshot published"
        );

        Ok(summary)
    }
}
