//! Configuration management with layered hierarchy

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Stockroom configuration with layered hierarchy
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Currency prefix for price display
    pub currency: Option<String>,

    /// Suppress confirmation prompts for save, delete, and exit actions
    pub skip_confirm: Option<bool>,
}

impl Config {
    /// Load configuration from all sources, merging in priority order
    pub fn load() -> Self {
        let mut config = Config::default();

        // 1. Built-in defaults (already in Default impl)

        // 2. Global user config (~/.config/stockroom/config.yaml)
        if let Some(global_path) = Self::global_config_path() {
            if let Some(global) = Self::load_file(&global_path) {
                config.merge(global);
            }
        }

        // 3. Environment variables
        if let Ok(currency) = std::env::var("STOCKROOM_CURRENCY") {
            config.currency = Some(currency);
        }
        if let Ok(skip) = std::env::var("STOCKROOM_SKIP_CONFIRM") {
            config.skip_confirm = Some(matches!(skip.as_str(), "1" | "true" | "yes"));
        }

        config
    }

    /// Read and parse a config file; `None` if missing or malformed
    fn load_file(path: &Path) -> Option<Config> {
        let contents = std::fs::read_to_string(path).ok()?;
        serde_yml::from_str(&contents).ok()
    }

    /// Get the path to the global config file
    fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "stockroom")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        if other.currency.is_some() {
            self.currency = other.currency;
        }
        if other.skip_confirm.is_some() {
            self.skip_confirm = other.skip_confirm;
        }
    }

    /// Currency prefix for price display, defaulting to "$"
    pub fn currency(&self) -> &str {
        self.currency.as_deref().unwrap_or("$")
    }

    /// Whether confirmation prompts should be suppressed
    pub fn skip_confirm(&self) -> bool {
        self.skip_confirm.unwrap_or(false)
    }
}
