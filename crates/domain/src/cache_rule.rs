use crate::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Id of the rule that can never be disabled.
pub const PROTECTED_RULE_ID: &str = "default";

/// Keys recognised in the `page` cache category.
pub const PAGE_CACHE_KEYS: [&str; 1] = ["page_cache_maximum_age"];

/// Keys recognised in the `http` cache category.
pub const HTTP_CACHE_KEYS: [&str; 5] = [
    "http_max_age",
    "404_max_age",
    "302_max_age",
    "301_max_age",
    "5xx_max_age",
];

/// Page cache settings of a rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PageCacheSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_cache_maximum_age: Option<u32>,
}

impl PageCacheSettings {
    pub fn get(&self, key: &str) -> Option<u32> {
        match key {
            "page_cache_maximum_age" => self.page_cache_maximum_age,
            _ => None,
        }
    }
}

/// HTTP cache settings of a rule, one optional max-age per status class.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct HttpCacheSettings {
    /// Client TTL applied to every matched response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_max_age: Option<u32>,

    #[serde(rename = "404_max_age", default, skip_serializing_if = "Option::is_none")]
    pub not_found_max_age: Option<u32>,

    #[serde(rename = "302_max_age", default, skip_serializing_if = "Option::is_none")]
    pub found_max_age: Option<u32>,

    #[serde(rename = "301_max_age", default, skip_serializing_if = "Option::is_none")]
    pub moved_permanently_max_age: Option<u32>,

    #[serde(rename = "5xx_max_age", default, skip_serializing_if = "Option::is_none")]
    pub server_error_max_age: Option<u32>,
}

impl HttpCacheSettings {
    pub fn get(&self, key: &str) -> Option<u32> {
        match key {
            "http_max_age" => self.http_max_age,
            "404_max_age" => self.not_found_max_age,
            "302_max_age" => self.found_max_age,
            "301_max_age" => self.moved_permanently_max_age,
            "5xx_max_age" => self.server_error_max_age,
            _ => None,
        }
    }
}

/// Per-category cache settings (`page` and `http`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CacheSettings {
    #[serde(default)]
    pub page: PageCacheSettings,

    #[serde(default)]
    pub http: HttpCacheSettings,
}

/// Whether a cache category is effectively active for a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheState {
    Cache,
    Bypass,
}

impl CacheState {
    fn from_ages(mut ages: impl Iterator<Item = Option<u32>>) -> Self {
        if ages.any(|age| age.is_some_and(|a| a > 0)) {
            CacheState::Cache
        } else {
            CacheState::Bypass
        }
    }
}

impl fmt::Display for CacheState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheState::Cache => write!(f, "cache"),
            CacheState::Bypass => write!(f, "bypass"),
        }
    }
}

/// An administrator-defined rule binding a host pattern to cache settings.
///
/// Rules are immutable once loaded; edits happen in the rule source and reach
/// request processing only through a freshly published snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CacheRule {
    pub id: Arc<str>,

    #[serde(default = "default_true", alias = "status")]
    pub enabled: bool,

    /// Lower weights are evaluated first.
    #[serde(default)]
    pub weight: i32,

    /// Unanchored regular expression searched within the request host.
    pub domain_pattern: Arc<str>,

    #[serde(default)]
    pub cache: CacheSettings,
}

fn default_true() -> bool {
    true
}

impl CacheRule {
    pub fn new(id: &str, weight: i32, domain_pattern: &str, cache: CacheSettings) -> Self {
        Self {
            id: Arc::from(id),
            enabled: true,
            weight,
            domain_pattern: Arc::from(domain_pattern),
            cache,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Human-facing label, used as the diagnostic header value.
    pub fn label(&self) -> &str {
        &self.domain_pattern
    }

    pub fn is_protected(&self) -> bool {
        self.id.as_ref() == PROTECTED_RULE_ID
    }

    pub fn page_cache_state(&self) -> CacheState {
        CacheState::from_ages(PAGE_CACHE_KEYS.iter().map(|k| self.cache.page.get(k)))
    }

    pub fn http_cache_state(&self) -> CacheState {
        CacheState::from_ages(HTTP_CACHE_KEYS.iter().map(|k| self.cache.http.get(k)))
    }

    /// Check `id` and `domain_pattern` of a loaded record.
    pub fn validate(&self) -> Result<(), DomainError> {
        Self::validate_id(&self.id).map_err(DomainError::InvalidRuleId)?;
        Self::validate_domain_pattern(&self.domain_pattern)
            .map_err(DomainError::InvalidDomainPattern)
    }

    pub fn validate_id(id: &str) -> Result<(), String> {
        if id.is_empty() {
            return Err("Rule id cannot be empty".to_string());
        }

        if id.len() > 32 {
            return Err("Rule id cannot exceed 32 characters".to_string());
        }

        let valid_chars = id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');

        if !valid_chars {
            return Err(
                "Rule id can only contain lowercase letters, digits, and underscores".to_string(),
            );
        }

        Ok(())
    }

    pub fn validate_domain_pattern(pattern: &str) -> Result<(), String> {
        if pattern.is_empty() {
            return Err("Domain pattern cannot be empty".to_string());
        }

        if pattern.len() > 255 {
            return Err("Domain pattern cannot exceed 255 characters".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_state_ignores_zero_ages() {
        let settings = CacheSettings {
            page: PageCacheSettings {
                page_cache_maximum_age: Some(0),
            },
            http: HttpCacheSettings {
                not_found_max_age: Some(30),
                ..Default::default()
            },
        };
        let rule = CacheRule::new("r1", 0, "example", settings);

        assert_eq!(rule.page_cache_state(), CacheState::Bypass);
        assert_eq!(rule.http_cache_state(), CacheState::Cache);
    }

    #[test]
    fn test_http_settings_lookup_by_key() {
        let http = HttpCacheSettings {
            server_error_max_age: Some(5),
            ..Default::default()
        };

        assert_eq!(http.get("5xx_max_age"), Some(5));
        assert_eq!(http.get("404_max_age"), None);
        assert_eq!(http.get("unknown"), None);
    }

    #[test]
    fn test_validate_maps_to_domain_errors() {
        let bad_id = CacheRule::new("Shop", 0, "shop", CacheSettings::default());
        let bad_pattern = CacheRule::new("shop", 0, "", CacheSettings::default());

        assert!(matches!(bad_id.validate(), Err(DomainError::InvalidRuleId(_))));
        assert!(matches!(
            bad_pattern.validate(),
            Err(DomainError::InvalidDomainPattern(_))
        ));
        assert!(CacheRule::new("shop", 0, "shop", CacheSettings::default())
            .validate()
            .is_ok());
    }
}
