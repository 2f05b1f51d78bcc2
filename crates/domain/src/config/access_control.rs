use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Access-control (basic-auth shield) settings consumed by the bypass gate.
///
/// Mirrors the shape of the shield settings:
/// ```toml
/// [access_control]
/// enabled = true
/// credential_provider = "multikey"
/// credentials.multikey.user_pass_key = "staging"
///
/// [access_control.keys.staging]
/// username = "preview"
/// ```
/// Every field is optional so that a partial or unknown configuration
/// degrades to "no bypass" instead of failing the whole config.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AccessControlConfig {
    /// Master switch (shield_enable)
    #[serde(default)]
    pub enabled: bool,

    /// "shield", "key" or "multikey"
    #[serde(default)]
    pub credential_provider: Option<String>,

    #[serde(default)]
    pub credentials: CredentialsConfig,

    /// Named key entries referenced by the multikey provider
    #[serde(default)]
    pub keys: HashMap<String, KeyEntry>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CredentialsConfig {
    #[serde(default)]
    pub shield: UserCredential,

    #[serde(default)]
    pub key: UserCredential,

    #[serde(default)]
    pub multikey: MultiKeyCredential,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct UserCredential {
    #[serde(default)]
    pub user: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MultiKeyCredential {
    #[serde(default)]
    pub user_pass_key: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct KeyEntry {
    #[serde(default)]
    pub username: Option<String>,
}

impl AccessControlConfig {
    /// Username configured through the selected credential provider.
    ///
    /// Unknown providers, dangling key references and empty names all
    /// resolve to `None`.
    pub fn resolve_user(&self) -> Option<&str> {
        let user = match self.credential_provider.as_deref()? {
            "shield" => self.credentials.shield.user.as_deref(),
            "key" => self.credentials.key.user.as_deref(),
            "multikey" => {
                let key_name = self.credentials.multikey.user_pass_key.as_deref()?;
                self.keys.get(key_name)?.username.as_deref()
            }
            _ => None,
        };

        user.filter(|u| !u.is_empty())
    }
}
