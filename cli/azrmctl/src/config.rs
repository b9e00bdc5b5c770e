//! Configuration management.
//!
//! Settings come from `config.json` in the platform config directory, with
//! environment variables taking precedence over the file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

/// Default subscription, shared with the provider itself.
pub const SUBSCRIPTION_ENV: &str = "ARM_SUBSCRIPTION_ID";

/// Log filter used when `RUST_LOG` is unset.
pub const LOG_ENV: &str = "AZID_LOG";

const DEFAULT_LOG_LEVEL: &str = "warn";

/// Get the config file path.
pub fn config_path() -> Result<PathBuf> {
    ProjectDirs::from("com", "azrm", "azid")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
}

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Subscription used when building IDs without `--subscription`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_id: Option<String>,

    /// Log filter (trace, debug, info, warn, error).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

impl Config {
    /// Load the saved config merged with environment overrides.
    pub fn load() -> Result<Self> {
        let saved = Self::load_from(&config_path()?)?;
        Ok(saved.with_overrides(|key| std::env::var(key).ok()))
    }

    /// Default config with environment overrides only.
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Load config from `path`, or return default if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {:?}", path))
    }

    /// Save config to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config directory {:?}", dir))?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents).with_context(|| format!("Failed to write config to {:?}", path))
    }

    /// Apply environment overrides, read through `lookup`.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(subscription_id) = lookup(SUBSCRIPTION_ENV).filter(|v| !v.is_empty()) {
            self.subscription_id = Some(subscription_id);
        }

        if let Some(level) = lookup(LOG_ENV).filter(|v| !v.is_empty()) {
            self.log_level = Some(level);
        }

        self
    }

    /// Get the log filter.
    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }
}
