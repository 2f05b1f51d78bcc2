use async_trait::async_trait;
use hostcache_application::ports::RuleRepository;
use hostcache_domain::{CacheRule, DomainError};
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::sync::Mutex;
use toml_edit::DocumentMut;
use tracing::{debug, error, instrument, warn};

/// Rule source backed by a TOML file of `[[rules]]` tables.
///
/// Reads are lenient: a missing file yields no rules and individual records
/// that fail to parse or validate are skipped with a warning. Status writes
/// go through `toml_edit` so that comments and layout survive.
pub struct TomlRuleRepository {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl TomlRuleRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    async fn read_source(&self) -> Result<Option<String>, DomainError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => {
                error!(path = %self.path.display(), error = %e, "Failed to read rule file");
                Err(e.into())
            }
        }
    }

    fn parse_rules(&self, content: &str) -> Result<Vec<CacheRule>, DomainError> {
        let document: toml::Table = toml::from_str(content).map_err(|e| {
            error!(path = %self.path.display(), error = %e, "Rule file is not valid TOML");
            DomainError::RepositoryError(format!("{}: {}", self.path.display(), e))
        })?;

        let Some(entries) = document.get("rules") else {
            return Ok(Vec::new());
        };

        let Some(entries) = entries.as_array() else {
            return Err(DomainError::RepositoryError(format!(
                "{}: `rules` must be an array of tables",
                self.path.display()
            )));
        };

        let mut rules = Vec::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            let rule: CacheRule = match entry.clone().try_into() {
                Ok(rule) => rule,
                Err(e) => {
                    warn!(index, error = %e, "Skipping malformed rule record");
                    continue;
                }
            };

            if let Err(e) = rule.validate() {
                warn!(index, id = %rule.id, error = %e, "Skipping invalid rule record");
                continue;
            }

            rules.push(rule);
        }

        Ok(rules)
    }

    async fn write_atomically(&self, content: &str) -> Result<(), DomainError> {
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        tokio::fs::write(&tmp, content).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl RuleRepository for TomlRuleRepository {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn get_all(&self) -> Result<Vec<CacheRule>, DomainError> {
        match self.read_source().await? {
            Some(content) => {
                let rules = self.parse_rules(&content)?;
                debug!(count = rules.len(), "Rules loaded");
                Ok(rules)
            }
            None => {
                warn!("Rule file not found, no rules loaded");
                Ok(Vec::new())
            }
        }
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: &str) -> Result<Option<CacheRule>, DomainError> {
        let rules = self.get_all().await?;
        Ok(rules.into_iter().find(|r| r.id.as_ref() == id))
    }

    #[instrument(skip(self))]
    async fn set_enabled(&self, id: &str, enabled: bool) -> Result<CacheRule, DomainError> {
        let _guard = self.write_lock.lock().await;

        let content = self
            .read_source()
            .await?
            .ok_or_else(|| DomainError::RuleNotFound(id.to_string()))?;

        let mut document: DocumentMut = content.parse().map_err(|e: toml_edit::TomlError| {
            DomainError::RepositoryError(format!("{}: {}", self.path.display(), e))
        })?;

        let tables = document
            .get_mut("rules")
            .and_then(|item| item.as_array_of_tables_mut())
            .ok_or_else(|| DomainError::RuleNotFound(id.to_string()))?;

        let table = tables
            .iter_mut()
            .find(|t| t.get("id").and_then(|v| v.as_str()) == Some(id))
            .ok_or_else(|| DomainError::RuleNotFound(id.to_string()))?;

        table.remove("status");
        table["enabled"] = toml_edit::value(enabled);

        let updated = document.to_string();
        self.write_atomically(&updated).await?;

        self.parse_rules(&updated)?
            .into_iter()
            .find(|r| r.id.as_ref() == id)
            .ok_or_else(|| {
                DomainError::RepositoryError(format!("Rule '{}' failed to parse after update", id))
            })
    }
}
