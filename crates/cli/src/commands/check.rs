use crate::di::{Repositories, UseCases};
use hostcache_domain::Config;

/// Validate configuration and rule file without serving.
pub async fn run_check(config: Config) -> anyhow::Result<()> {
    let repos = Repositories::new(&config);
    let use_cases = UseCases::new(&repos);

    let summary = use_cases.reload_rules.execute().await?;

    let invalid: Vec<String> = use_cases
        .list_rules
        .execute(None)
        .into_iter()
        .filter(|rule| !rule.pattern_valid)
        .map(|rule| format!("{} ({})", rule.id, rule.label))
        .collect();

    println!(
        "{}: {} rules, {} enabled",
        config.rules.path, summary.total, summary.enabled
    );

    if !invalid.is_empty() {
        anyhow::bail!("invalid domain patterns: {}", invalid.join(", "));
    }

    println!("OK");
    Ok(())
}
