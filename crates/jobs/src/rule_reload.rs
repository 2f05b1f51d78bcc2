use hostcache_application::use_cases::ReloadRulesUseCase;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Periodically re-reads the rule source and republishes the snapshot.
///
/// Rules are loaded once at startup before the job is registered, so the
/// first reload happens one full interval later.
pub struct RuleReloadJob {
    reload: Arc<ReloadRulesUseCase>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl RuleReloadJob {
    pub fn new(reload: Arc<ReloadRulesUseCase>) -> Self {
        Self {
            reload,
            interval_secs: 30,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval_secs: u64) -> Self {
        self.interval_secs = interval_secs;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        if self.interval_secs == 0 {
            info!("Rule reload disabled");
            return;
        }

        info!(interval_secs = self.interval_secs, "Starting rule reload job");

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
            interval.tick().await;

            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("RuleReloadJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        match self.reload.execute().await {
                            Ok(summary) => {
                                debug!(total = summary.total, "Periodic rule reload completed");
                            }
                            Err(e) => {
                                warn!(error = %e, "Periodic rule reload failed; previous rules stay live");
                            }
                        }
                    }
                }
            }
        });
    }
}
