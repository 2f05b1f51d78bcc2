use hostcache_domain::{CliOverrides, Config};
use tracing::info;

/// Load and validate the configuration.
///
/// Runs before logging is initialised, so the summary is logged separately
/// by [`log_config`].
pub fn load_config(config_path: Option<&str>, cli_overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}

pub fn log_config(config_path: Option<&str>, config: &Config) {
    info!(
        config_file = config_path.unwrap_or("default"),
        web_port = config.server.web_port,
        bind = %config.server.bind_address,
        static_dir = %config.server.static_dir,
        rules = %config.rules.path,
        reload_interval_secs = config.rules.reload_interval_secs,
        access_control = config.access_control.enabled,
        "Configuration loaded"
    );
}
