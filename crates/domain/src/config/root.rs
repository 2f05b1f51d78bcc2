use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;
use tracing::warn;

use super::{AccessControlConfig, ConfigError, LoggingConfig, RulesConfig, ServerConfig};

/// Main configuration structure for hostcache
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub rules: RulesConfig,

    #[serde(default, deserialize_with = "lenient_access_control")]
    pub access_control: AccessControlConfig,
}

/// Command-line values that take precedence over the config file
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub bind_address: Option<String>,
    pub web_port: Option<u16>,
    pub rules_path: Option<String>,
    pub log_level: Option<String>,
}

impl Config {
    /// Load configuration from `config_path` (defaults when `None`) and apply
    /// CLI overrides on top.
    pub fn load(config_path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(port) = overrides.web_port {
            self.server.web_port = port;
        }
        if let Some(path) = overrides.rules_path {
            self.rules.path = path;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.web_port == 0 {
            return Err(ConfigError::Validation(
                "server.web_port cannot be 0".to_string(),
            ));
        }

        if self.server.bind_address.trim().is_empty() {
            return Err(ConfigError::Validation(
                "server.bind_address cannot be empty".to_string(),
            ));
        }

        if self.rules.path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "rules.path cannot be empty".to_string(),
            ));
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.to_ascii_lowercase().as_str()) {
            return Err(ConfigError::Validation(format!(
                "logging.level must be one of {:?}, got '{}'",
                valid_levels, self.logging.level
            )));
        }

        Ok(())
    }
}

/// A malformed `[access_control]` table disables the bypass instead of
/// rejecting the whole configuration.
fn lenient_access_control<'de, D>(deserializer: D) -> Result<AccessControlConfig, D::Error>
where
    D: Deserializer<'de>,
{
    let value = toml::Value::deserialize(deserializer)?;
    match value.try_into::<AccessControlConfig>() {
        Ok(config) => Ok(config),
        Err(e) => {
            warn!(error = %e, "Ignoring malformed [access_control] section; bypass disabled");
            Ok(AccessControlConfig::default())
        }
    }
}
