//! Config commands (saved defaults).

use std::path::Path;

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;
use tracing::warn;

use crate::config::{config_path, Config};
use crate::output::{print_json, print_success, OutputFormat};

use super::CommandContext;

/// Show or change saved settings.
#[derive(Debug, Args)]
pub struct ConfigCommand {
    #[command(subcommand)]
    command: ConfigSubcommand,
}

#[derive(Debug, Subcommand)]
enum ConfigSubcommand {
    /// Show the effective settings (saved file plus environment).
    Show,

    /// Save the default subscription.
    SetSubscription {
        /// Subscription ID.
        subscription_id: String,
    },

    /// Remove all saved settings.
    Clear,
}

#[derive(Debug, Serialize)]
struct ConfigView {
    path: String,
    subscription_id: Option<String>,
    log_level: String,
}

impl ConfigCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        match self.command {
            ConfigSubcommand::Show => show(ctx),
            ConfigSubcommand::SetSubscription { subscription_id } => {
                set_subscription(ctx, subscription_id)
            }
            ConfigSubcommand::Clear => clear(ctx),
        }
    }
}

fn show(ctx: CommandContext) -> Result<()> {
    let config = ctx.config()?;
    let view = ConfigView {
        path: config_path()?.display().to_string(),
        subscription_id: config.subscription_id.clone(),
        log_level: config.log_level().to_string(),
    };

    match ctx.format {
        OutputFormat::Json => print_json(&view),
        OutputFormat::Table => {
            println!("path: {}", view.path);
            println!(
                "subscription_id: {}",
                view.subscription_id.as_deref().unwrap_or("-")
            );
            println!("log_level: {}", view.log_level);
        }
    }

    Ok(())
}

fn set_subscription(ctx: CommandContext, subscription_id: String) -> Result<()> {
    if subscription_id.is_empty() {
        anyhow::bail!("Subscription ID cannot be empty");
    }

    save_subscription(&config_path()?, subscription_id)?;

    match ctx.format {
        OutputFormat::Json => print_json(&serde_json::json!({ "ok": true })),
        OutputFormat::Table => print_success("Saved default subscription"),
    }

    Ok(())
}

fn clear(ctx: CommandContext) -> Result<()> {
    clear_at(&config_path()?)?;

    match ctx.format {
        OutputFormat::Json => print_json(&serde_json::json!({ "ok": true })),
        OutputFormat::Table => print_success("Cleared saved settings"),
    }

    Ok(())
}

/// Rewrite only the saved file; environment overrides stay out of it.
/// An unreadable file is replaced rather than blocking the update.
fn save_subscription(path: &Path, subscription_id: String) -> Result<()> {
    let mut saved = Config::load_from(path).unwrap_or_else(|e| {
        warn!(error = %format!("{e:#}"), "Replacing unreadable config");
        Config::default()
    });
    saved.subscription_id = Some(subscription_id);
    saved.save_to(path)
}

/// Overwrite the saved file with defaults without reading it.
fn clear_at(path: &Path) -> Result<()> {
    Config::default().save_to(path)
}
