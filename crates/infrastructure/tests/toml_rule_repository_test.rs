use hostcache_application::ports::RuleRepository;
use hostcache_domain::DomainError;
use hostcache_infrastructure::repositories::TomlRuleRepository;
use std::path::PathBuf;
use tempfile::TempDir;

const RULES: &str = r#"
# Production rules
[[rules]]
id = "default"
weight = 100
domain_pattern = "."

[rules.cache.page]
page_cache_maximum_age = 600

[[rules]]
id = "shop"
weight = 0
domain_pattern = "^shop\\."
status = true

[rules.cache.page]
page_cache_maximum_age = 900

[rules.cache.http]
http_max_age = 60
404_max_age = 30
5xx_max_age = 5
"#;

fn write_rules(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("rules.toml");
    std::fs::write(&path, content).unwrap();
    path
}

// ============================================================================
// Loading
// ============================================================================

#[tokio::test]
async fn test_get_all_parses_rules() {
    let dir = TempDir::new().unwrap();
    let repo = TomlRuleRepository::new(write_rules(&dir, RULES));

    let rules = repo.get_all().await.unwrap();

    assert_eq!(rules.len(), 2);
    let shop = rules.iter().find(|r| r.id.as_ref() == "shop").unwrap();
    assert!(shop.enabled);
    assert_eq!(shop.cache.page.page_cache_maximum_age, Some(900));
    assert_eq!(shop.cache.http.not_found_max_age, Some(30));
    assert_eq!(shop.cache.http.server_error_max_age, Some(5));
    assert_eq!(shop.cache.http.found_max_age, None);
}

#[tokio::test]
async fn test_missing_file_yields_no_rules() {
    let dir = TempDir::new().unwrap();
    let repo = TomlRuleRepository::new(dir.path().join("absent.toml"));

    let rules = repo.get_all().await.unwrap();

    assert!(rules.is_empty());
}

#[tokio::test]
async fn test_malformed_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let repo = TomlRuleRepository::new(write_rules(&dir, "[[rules]\nid ="));

    let result = repo.get_all().await;

    assert!(matches!(result, Err(DomainError::RepositoryError(_))));
}

#[tokio::test]
async fn test_invalid_records_are_skipped() {
    let dir = TempDir::new().unwrap();
    let content = r#"
[[rules]]
id = "Bad-Id"
domain_pattern = "example"

[[rules]]
id = "no_pattern"

[[rules]]
id = "negative"
domain_pattern = "example"
cache.page.page_cache_maximum_age = -1

[[rules]]
id = "good"
domain_pattern = "example"
"#;
    let repo = TomlRuleRepository::new(write_rules(&dir, content));

    let rules = repo.get_all().await.unwrap();

    assert_eq!(rules.len(), 1);
    assert_eq!(rules[0].id.as_ref(), "good");
}

#[tokio::test]
async fn test_get_by_id() {
    let dir = TempDir::new().unwrap();
    let repo = TomlRuleRepository::new(write_rules(&dir, RULES));

    assert!(repo.get_by_id("shop").await.unwrap().is_some());
    assert!(repo.get_by_id("missing").await.unwrap().is_none());
}

// ============================================================================
// Status updates
// ============================================================================

#[tokio::test]
async fn test_set_enabled_persists_and_keeps_comments() {
    let dir = TempDir::new().unwrap();
    let path = write_rules(&dir, RULES);
    let repo = TomlRuleRepository::new(&path);

    let updated = repo.set_enabled("shop", false).await.unwrap();

    assert!(!updated.enabled);
    let reloaded = repo.get_by_id("shop").await.unwrap().unwrap();
    assert!(!reloaded.enabled);

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("# Production rules"));
    assert!(!content.contains("status ="));
}

#[tokio::test]
async fn test_set_enabled_unknown_id() {
    let dir = TempDir::new().unwrap();
    let repo = TomlRuleRepository::new(write_rules(&dir, RULES));

    let result = repo.set_enabled("ghost", true).await;

    assert!(matches!(result, Err(DomainError::RuleNotFound(id)) if id == "ghost"));
}

#[tokio::test]
async fn test_set_enabled_without_file() {
    let dir = TempDir::new().unwrap();
    let repo = TomlRuleRepository::new(dir.path().join("absent.toml"));

    let result = repo.set_enabled("shop", true).await;

    assert!(matches!(result, Err(DomainError::RuleNotFound(_))));
}

#[tokio::test]
async fn test_concurrent_status_writes_are_serialized() {
    let dir = TempDir::new().unwrap();
    let repo = std::sync::Arc::new(TomlRuleRepository::new(write_rules(&dir, RULES)));

    let a = {
        let repo = repo.clone();
        tokio::spawn(async move { repo.set_enabled("shop", false).await })
    };
    let b = {
        let repo = repo.clone();
        tokio::spawn(async move { repo.set_enabled("default", false).await })
    };

    a.await.unwrap().unwrap();
    b.await.unwrap().unwrap();

    let rules = repo.get_all().await.unwrap();
    assert_eq!(rules.len(), 2);
    assert!(rules.iter().all(|r| !r.enabled));
}
