use crate::di::{Repositories, UseCases};
use crate::server::{create_app, start_web_server};
use hostcache_api::AppState;
use hostcache_domain::Config;
use hostcache_jobs::{JobRunner, RuleReloadJob};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

pub async fn run_serve(config: Config) -> anyhow::Result<()> {
    let repos = Repositories::new(&config);
    let use_cases = UseCases::new(&repos);

    let summary = use_cases.reload_rules.execute().await?;
    info!(
        total = summary.total,
        enabled = summary.enabled,
        invalid_patterns = summary.invalid_patterns,
        "Initial rules published"
    );

    let shutdown = CancellationToken::new();

    JobRunner::new()
        .with_rule_reload(
            RuleReloadJob::new(use_cases.reload_rules.clone())
                .with_interval(config.rules.reload_interval_secs)
                .with_cancellation(shutdown.clone()),
        )
        .start()
        .await;

    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Shutdown signal received"),
            Err(e) => error!(error = %e, "Failed to listen for shutdown signal"),
        }
        signal_token.cancel();
    });

    let state = AppState {
        annotate: use_cases.annotate.clone(),
        list_rules: use_cases.list_rules.clone(),
    };
    let app = create_app(&config.server, state)?;

    start_web_server(&config.server, app, shutdown).await
}
