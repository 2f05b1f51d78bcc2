//! # hostcache
//!
//! Static site server applying per-domain HTTP cache TTL rules.

mod bootstrap;
mod commands;
mod di;
mod server;

use clap::{Parser, Subcommand};
use hostcache_domain::CliOverrides;

#[derive(Parser)]
#[command(name = "hostcache")]
#[command(version)]
#[command(about = "Per-domain HTTP cache TTL rules for a static site server")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short = 'c', long, global = true)]
    config: Option<String>,

    /// Bind address (overrides config)
    #[arg(short = 'b', long, global = true)]
    bind: Option<String>,

    /// Web server port (overrides config)
    #[arg(short = 'p', long, global = true)]
    port: Option<u16>,

    /// Rule file (overrides config)
    #[arg(short = 'r', long, global = true)]
    rules: Option<String>,

    /// Log level: trace, debug, info, warn, error
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the site (default)
    Serve,
    /// Validate configuration and rules, then exit
    Check,
    /// List rules in evaluation order
    Rules {
        /// Mark the rule this host resolves to
        #[arg(long)]
        host: Option<String>,
    },
    /// Enable a rule
    Enable { id: String },
    /// Disable a rule
    Disable { id: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        bind_address: cli.bind,
        web_port: cli.port,
        rules_path: cli.rules,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config.logging);
    bootstrap::config::log_config(cli.config.as_deref(), &config);

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => commands::run_serve(config).await,
        Command::Check => commands::run_check(config).await,
        Command::Rules { host } => commands::run_rules(config, host).await,
        Command::Enable { id } => commands::run_set_status(config, &id, true).await,
        Command::Disable { id } => commands::run_set_status(config, &id, false).await,
    }
}
