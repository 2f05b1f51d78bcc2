//! Configuration module for hostcache
//!
//! This module contains all configuration structures organized by concern:
//! - `root`: Main configuration and CLI overrides
//! - `server`: HTTP server binding and static file serving
//! - `rules`: Rule source location and reload cadence
//! - `access_control`: Shield credentials feeding the bypass gate
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod access_control;
pub mod errors;
pub mod logging;
pub mod root;
pub mod rules;
pub mod server;

pub use access_control::{AccessControlConfig, KeyEntry};
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use rules::RulesConfig;
pub use server::ServerConfig;
