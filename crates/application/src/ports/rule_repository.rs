use async_trait::async_trait;
use hostcache_domain::{CacheRule, DomainError};

/// Persistence collaborator that owns rule records.
///
/// The request path never talks to the repository; it only reads the
/// published snapshot. Reads here feed `ReloadRulesUseCase`.
#[async_trait]
pub trait RuleRepository: Send + Sync {
    /// Load every rule, enabled or not, in any order.
    async fn get_all(&self) -> Result<Vec<CacheRule>, DomainError>;

    /// Load a single rule by id.
    async fn get_by_id(&self, id: &str) -> Result<Option<CacheRule>, DomainError>;

    /// Persist a new enabled status for `id` and return the updated rule.
    ///
    /// # Errors
    ///
    /// * `DomainError::RuleNotFound` - If no rule has this id
    /// * `DomainError::RepositoryError` / `DomainError::IoError` - If the write fails
    async fn set_enabled(&self, id: &str, enabled: bool) -> Result<CacheRule, DomainError>;
}
