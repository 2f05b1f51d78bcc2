use crate::RuleReloadJob;
use std::sync::Arc;
use tracing::info;

/// Central orchestrator for all background jobs.
///
/// Use the builder pattern to register jobs, then call `.start()` once.
///
/// # Example
///
/// ```rust,ignore
/// JobRunner::new()
///     .with_rule_reload(RuleReloadJob::new(reload).with_interval(30))
///     .start()
///     .await;
/// ```
pub struct JobRunner {
    rule_reload: Option<RuleReloadJob>,
}

impl JobRunner {
    pub fn new() -> Self {
        Self { rule_reload: None }
    }

    pub fn with_rule_reload(mut self, job: RuleReloadJob) -> Self {
        self.rule_reload = Some(job);
        self
    }

    /// Start all registered background jobs.
    pub async fn start(self) {
        info!("Starting background job runner");

        if let Some(job) = self.rule_reload {
            Arc::new(job).start().await;
        }

        info!("All background jobs started");
    }
}

impl Default for JobRunner {
    fn default() -> Self {
        Self::new()
    }
}
