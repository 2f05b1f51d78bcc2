use hostcache_domain::DomainError;
use std::sync::Arc;
use tracing::{error, info, instrument};

use crate::ports::{PublishSummary, RuleRepository, RuleStorePort};

/// Reads every rule from the repository and publishes a fresh snapshot.
pub struct ReloadRulesUseCase {
    rule_repo: Arc<dyn RuleRepository>,
    store: Arc<dyn RuleStorePort>,
}

impl ReloadRulesUseCase {
    pub fn new(rule_repo: Arc<dyn RuleRepository>, store: Arc<dyn RuleStorePort>) -> Self {
        Self { rule_repo, store }
    }

    /// Reload rules and swap the live snapshot.
    ///
    /// # Errors
    ///
    /// * `DomainError::DuplicateRuleId` - If two rules share an id; the previous snapshot stays live
    /// * Any repository error, in which case nothing is published
    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<PublishSummary, DomainError> {
        let rules = self.rule_repo.get_all().await?;

        let summary = self.store.publish(rules).map_err(|e| {
            error!(error = %e, "Rule snapshot rejected; keeping previous rules");
            e
        })?;

        info!(
            total = summary.total,
            enabled = summary.enabled,
            invalid_patterns = summary.invalid_patterns,
            "Rules reloaded"
        );

        Ok(summary)
    }
}
