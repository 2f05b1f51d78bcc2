#![allow(dead_code)]

use async_trait::async_trait;
use hostcache_application::ports::{PublishSummary, RuleRepository, RuleStorePort};
use hostcache_domain::{CacheRule, CacheSettings, DomainError, RuleSnapshot};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};
use tokio::sync::RwLock as AsyncRwLock;

// ============================================================================
// Mock RuleRepository
// ============================================================================

#[derive(Clone, Default)]
pub struct MockRuleRepository {
    rules: Arc<AsyncRwLock<Vec<CacheRule>>>,
    loads: Arc<AtomicUsize>,
    should_fail: Arc<AtomicBool>,
}

impl MockRuleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_rules(&self, rules: Vec<CacheRule>) {
        *self.rules.write().await = rules;
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RuleRepository for MockRuleRepository {
    async fn get_all(&self) -> Result<Vec<CacheRule>, DomainError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::RepositoryError("Mock repository failed".to_string()));
        }
        Ok(self.rules.read().await.clone())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<CacheRule>, DomainError> {
        Ok(self
            .rules
            .read()
            .await
            .iter()
            .find(|r| r.id.as_ref() == id)
            .cloned())
    }

    async fn set_enabled(&self, id: &str, enabled: bool) -> Result<CacheRule, DomainError> {
        let mut rules = self.rules.write().await;
        let rule = rules
            .iter_mut()
            .find(|r| r.id.as_ref() == id)
            .ok_or_else(|| DomainError::RuleNotFound(id.to_string()))?;
        rule.enabled = enabled;
        Ok(rule.clone())
    }
}

// ============================================================================
// Mock RuleStore
// ============================================================================

pub struct MockRuleStore {
    snapshot: RwLock<Arc<RuleSnapshot>>,
}

impl MockRuleStore {
    pub fn new() -> Self {
        Self {
            snapshot: RwLock::new(Arc::new(RuleSnapshot::empty())),
        }
    }
}

impl RuleStorePort for MockRuleStore {
    fn snapshot(&self) -> Arc<RuleSnapshot> {
        self.snapshot.read().unwrap().clone()
    }

    fn publish(&self, rules: Vec<CacheRule>) -> Result<PublishSummary, DomainError> {
        let snapshot = RuleSnapshot::build(rules)?;
        let summary = PublishSummary::of(&snapshot);
        *self.snapshot.write().unwrap() = Arc::new(snapshot);
        Ok(summary)
    }
}

pub fn make_rule(id: &str, weight: i32, pattern: &str) -> CacheRule {
    CacheRule::new(id, weight, pattern, CacheSettings::default())
}
