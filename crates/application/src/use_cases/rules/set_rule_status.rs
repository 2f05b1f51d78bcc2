use hostcache_domain::{CacheRule, DomainError};
use std::sync::Arc;
use tracing::{info, instrument};

use super::ReloadRulesUseCase;
use crate::ports::RuleRepository;

/// Use case for enabling or disabling a rule.
///
/// This use case enforces business rules:
/// - The protected `default` rule cannot be disabled
/// - The live snapshot is republished so the change reaches request processing
pub struct SetRuleStatusUseCase {
    rule_repo: Arc<dyn RuleRepository>,
    reload: Arc<ReloadRulesUseCase>,
}

impl SetRuleStatusUseCase {
    pub fn new(rule_repo: Arc<dyn RuleRepository>, reload: Arc<ReloadRulesUseCase>) -> Self {
        Self { rule_repo, reload }
    }

    /// Sets the enabled status of a rule.
    ///
    /// # Errors
    ///
    /// * `DomainError::RuleNotFound` - If the rule doesn't exist
    /// * `DomainError::ProtectedRuleCannotBeDisabled` - If disabling the `default` rule
    /// * Repository and reload errors are propagated unchanged
    #[instrument(skip(self))]
    pub async fn execute(&self, id: &str, enabled: bool) -> Result<CacheRule, DomainError> {
        let rule = self
            .rule_repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| DomainError::RuleNotFound(id.to_string()))?;

        if !enabled && rule.is_protected() {
            return Err(DomainError::ProtectedRuleCannotBeDisabled);
        }

        let updated = self.rule_repo.set_enabled(id, enabled).await?;
        self.reload.execute().await?;

        info!(
            rule_id = %updated.id,
            label = %updated.label(),
            enabled = updated.enabled,
            "Rule status updated"
        );

        Ok(updated)
    }
}
