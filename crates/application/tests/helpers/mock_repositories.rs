#![allow(dead_code)]

use async_trait::async_trait;
use hostcache_application::ports::{
    AccessControlPort, CacheableResponse, PublishSummary, RuleRepository, RuleStorePort,
};
use hostcache_domain::{
    BypassSignal, CacheRule, CacheSettings, DomainError, HttpCacheSettings, PageCacheSettings,
    RuleSnapshot,
};
use std::collections::HashMap;
use std::sync::{Arc, RwLock as StdRwLock};
use tokio::sync::RwLock;

// ============================================================================
// Mock RuleRepository
// ============================================================================

#[derive(Clone, Default)]
pub struct MockRuleRepository {
    rules: Arc<RwLock<Vec<CacheRule>>>,
    should_fail: Arc<RwLock<bool>>,
}

impl MockRuleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rules(rules: Vec<CacheRule>) -> Self {
        Self {
            rules: Arc::new(RwLock::new(rules)),
            should_fail: Arc::new(RwLock::new(false)),
        }
    }

    pub async fn add(&self, rule: CacheRule) {
        self.rules.write().await.push(rule);
    }

    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }

    async fn check_failure(&self) -> Result<(), DomainError> {
        if *self.should_fail.read().await {
            return Err(DomainError::RepositoryError(
                "Mock repository failed".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl RuleRepository for MockRuleRepository {
    async fn get_all(&self) -> Result<Vec<CacheRule>, DomainError> {
        self.check_failure().await?;
        Ok(self.rules.read().await.clone())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<CacheRule>, DomainError> {
        self.check_failure().await?;
        Ok(self
            .rules
            .read()
            .await
            .iter()
            .find(|r| r.id.as_ref() == id)
            .cloned())
    }

    async fn set_enabled(&self, id: &str, enabled: bool) -> Result<CacheRule, DomainError> {
        self.check_failure().await?;
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
    snapshot: StdRwLock<Arc<RuleSnapshot>>,
}

impl MockRuleStore {
    pub fn new() -> Self {
        Self {
            snapshot: StdRwLock::new(Arc::new(RuleSnapshot::empty())),
        }
    }

    pub fn with_rules(rules: Vec<CacheRule>) -> Self {
        let store = Self::new();
        store.publish(rules).unwrap();
        store
    }
}

impl Default for MockRuleStore {
    fn default() -> Self {
        Self::new()
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

// ============================================================================
// Mock AccessControl
// ============================================================================

pub struct MockAccessControl {
    signal: BypassSignal,
}

impl MockAccessControl {
    pub fn new(bypass_active: bool, authenticated: bool) -> Self {
        Self {
            signal: BypassSignal::new(bypass_active, authenticated),
        }
    }

    pub fn inactive() -> Self {
        Self::new(false, false)
    }
}

impl AccessControlPort for MockAccessControl {
    fn bypass_signal(&self) -> BypassSignal {
        self.signal
    }
}

// ============================================================================
// Mock response
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockResponse {
    pub cacheable: bool,
    pub status: u16,
    pub shared_max_age: Option<u32>,
    pub client_ttl: Option<u32>,
    pub headers: HashMap<String, String>,
}

impl MockResponse {
    pub fn cacheable(status: u16, max_age: u32) -> Self {
        Self {
            cacheable: true,
            status,
            shared_max_age: Some(max_age),
            client_ttl: None,
            headers: HashMap::new(),
        }
    }

    pub fn uncacheable(status: u16) -> Self {
        Self {
            cacheable: false,
            ..Self::cacheable(status, 600)
        }
    }
}

impl CacheableResponse for MockResponse {
    fn is_cacheable(&self) -> bool {
        self.cacheable
    }

    fn status_code(&self) -> u16 {
        self.status
    }

    fn max_age(&self) -> Option<u32> {
        self.shared_max_age.or(self.client_ttl)
    }

    fn set_shared_max_age(&mut self, seconds: u32) {
        self.shared_max_age = Some(seconds);
    }

    fn set_client_ttl(&mut self, seconds: u32) {
        self.client_ttl = Some(seconds);
    }

    fn set_header(&mut self, name: &'static str, value: &str) {
        self.headers.insert(name.to_string(), value.to_string());
    }
}

// ============================================================================
// Fixtures
// ============================================================================

pub fn make_rule(id: &str, weight: i32, pattern: &str) -> CacheRule {
    CacheRule::new(id, weight, pattern, CacheSettings::default())
}

pub fn make_full_rule(id: &str, weight: i32, pattern: &str) -> CacheRule {
    CacheRule::new(
        id,
        weight,
        pattern,
        CacheSettings {
            page: PageCacheSettings {
                page_cache_maximum_age: Some(900),
            },
            http: HttpCacheSettings {
                http_max_age: Some(60),
                not_found_max_age: Some(30),
                found_max_age: Some(20),
                moved_permanently_max_age: Some(3600),
                server_error_max_age: Some(5),
            },
        },
    )
}
