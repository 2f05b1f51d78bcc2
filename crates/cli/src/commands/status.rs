use crate::di::{Repositories, UseCases};
use hostcache_domain::Config;

/// Persist a rule's enabled flag. A running server picks the change up on
/// its next reload.
pub async fn run_set_status(config: Config, id: &str, enabled: bool) -> anyhow::Result<()> {
    let repos = Repositories::new(&config);
    let use_cases = UseCases::new(&repos);
    use_cases.reload_rules.execute().await?;

    let rule = use_cases.set_rule_status.execute(id, enabled).await?;

    println!(
        "Rule '{}' {}",
        rule.id,
        if rule.enabled { "enabled" } else { "disabled" }
    );
    Ok(())
}
