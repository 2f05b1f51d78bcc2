use serde::{Deserialize, Serialize};

/// Rule source configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RulesConfig {
    /// Path to the TOML rule file (default: "rules.toml")
    #[serde(default = "default_rules_path")]
    pub path: String,

    /// Seconds between rule reloads; 0 disables the reload job (default: 30)
    #[serde(default = "default_reload_interval")]
    pub reload_interval_secs: u64,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            path: default_rules_path(),
            reload_interval_secs: default_reload_interval(),
        }
    }
}

fn default_rules_path() -> String {
    "rules.toml".to_string()
}

fn default_reload_interval() -> u64 {
    30
}
