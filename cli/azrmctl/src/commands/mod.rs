//! CLI commands.

mod config;
mod format;
mod kinds;
mod parse;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{debug, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::output::OutputFormat;

/// azid - parse and build resource IDs for the azrm provider.
#[derive(Debug, Parser)]
#[command(name = "azid")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (table or json).
    #[arg(long, global = true, default_value = "table")]
    format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Parse a resource ID into its segments.
    Parse(parse::ParseCommand),

    /// Build the canonical ID of a resource.
    Format(format::FormatCommand),

    /// List the supported ID kinds.
    Kinds,

    /// Show or change saved settings.
    Config(config::ConfigCommand),

    /// Show CLI version.
    Version,
}

impl Cli {
    /// Run the CLI command.
    pub fn run(self) -> Result<()> {
        // A broken config file must not block offline commands or `config clear`.
        let config = Config::load();
        match &config {
            Ok(config) => {
                init_tracing(config.log_level());
                debug!(
                    subscription_configured = config.subscription_id.is_some(),
                    "Configuration loaded"
                );
            }
            Err(e) => {
                init_tracing(Config::from_env().log_level());
                warn!(error = %format!("{e:#}"), "Ignoring unreadable config");
            }
        }

        let ctx = CommandContext::new(config, OutputFormat::from_flag(&self.format));

        match self.command {
            Commands::Parse(cmd) => cmd.run(ctx),
            Commands::Format(cmd) => cmd.run(ctx),
            Commands::Kinds => kinds::run(ctx),
            Commands::Config(cmd) => cmd.run(ctx),
            Commands::Version => {
                println!("azid {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

/// Initialize tracing to stderr (prefer RUST_LOG, fallback to the configured level).
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // Ignore the error if a subscriber is already installed.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

/// Shared command context.
pub struct CommandContext {
    config: Result<Config>,
    pub format: OutputFormat,
}

impl CommandContext {
    pub fn new(config: Result<Config>, format: OutputFormat) -> Self {
        Self { config, format }
    }

    /// The effective config, or the error that prevented loading it.
    pub fn config(&self) -> Result<&Config> {
        self.config
            .as_ref()
            .map_err(|e| anyhow::anyhow!("{e:#}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn broken_context() -> CommandContext {
        CommandContext::new(
            Err(anyhow::anyhow!("Failed to parse config")),
            OutputFormat::Json,
        )
    }

    #[test]
    fn test_config_error_surfaces_on_access() {
        let ctx = broken_context();
        let err = ctx.config().unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
        // The error stays available for later commands.
        assert!(ctx.config().is_err());
    }

    #[test]
    fn test_offline_commands_ignore_broken_config() {
        kinds::run(broken_context()).unwrap();

        let cli = Cli::try_parse_from([
            "azid",
            "parse",
            "/subscriptions/s/resourceGroups/rg/providers/Microsoft.AVS/privateClouds/pc",
        ])
        .unwrap();
        let Commands::Parse(cmd) = cli.command else {
            panic!("expected parse command");
        };
        cmd.run(broken_context()).unwrap();
    }

    #[test]
    fn test_format_with_flag_ignores_broken_config() {
        let cli = Cli::try_parse_from([
            "azid",
            "format",
            "capacity",
            "rg",
            "cap",
            "--subscription",
            "sub",
        ])
        .unwrap();
        let Commands::Format(cmd) = cli.command else {
            panic!("expected format command");
        };
        cmd.run(broken_context()).unwrap();
    }

    #[test]
    fn test_format_without_flag_reports_broken_config() {
        let cli = Cli::try_parse_from(["azid", "format", "capacity", "rg", "cap"]).unwrap();
        let Commands::Format(cmd) = cli.command else {
            panic!("expected format command");
        };
        let err = cmd.run(broken_context()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }
}
