use serde::{Deserialize, Serialize};

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_web_port")]
    pub web_port: u16,

    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Directory served by the built-in static file server (default: "public")
    #[serde(default = "default_static_dir")]
    pub static_dir: String,

    /// max-age stamped on served files before domain rules apply (default: 600)
    #[serde(default = "default_max_age")]
    pub default_max_age: u32,
}

fn default_web_port() -> u16 {
    8080
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_static_dir() -> String {
    "public".to_string()
}

fn default_max_age() -> u32 {
    600
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            web_port: default_web_port(),
            bind_address: default_bind_address(),
            static_dir: default_static_dir(),
            default_max_age: default_max_age(),
        }
    }
}
