use crate::di::{Repositories, UseCases};
use hostcache_domain::Config;

/// Print the rule overview, marking the rule `host` resolves to.
pub async fn run_rules(config: Config, host: Option<String>) -> anyhow::Result<()> {
    let repos = Repositories::new(&config);
    let use_cases = UseCases::new(&repos);
    use_cases.reload_rules.execute().await?;

    let host = host.map(|h| h.to_ascii_lowercase());
    let rules = use_cases.list_rules.execute(host.as_deref());

    if rules.is_empty() {
        println!("No rules defined in {}", config.rules.path);
        return Ok(());
    }

    println!(
        "{:<2} {:<32} {:>6} {:<8} {:<7} {:<7} PATTERN",
        "", "ID", "WEIGHT", "STATUS", "PAGE", "HTTP"
    );
    for rule in rules {
        let status = match (rule.enabled, rule.pattern_valid) {
            (_, false) => "invalid",
            (true, true) => "enabled",
            (false, true) => "disabled",
        };

        println!(
            "{:<2} {:<32} {:>6} {:<8} {:<7} {:<7} {}",
            if rule.current { "*" } else { "" },
            rule.id,
            rule.weight,
            status,
            rule.page_cache.to_string(),
            rule.http_cache.to_string(),
            rule.label
        );
    }

    Ok(())
}
