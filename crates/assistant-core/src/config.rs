//! Configuration management for the assistant

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Assistant configuration
///
/// Every field has a default, so a partial file (or none at all) is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Size of the upcoming-birthdays window in days
    #[serde(default = "default_birthday_window_days")]
    pub birthday_window_days: u32,

    /// Prompt printed before each command
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Print the welcome banner on start
    #[serde(default = "default_show_banner")]
    pub show_banner: bool,
}

fn default_birthday_window_days() -> u32 {
    7
}

fn default_prompt() -> String {
    "Enter a command: ".to_string()
}

fn default_show_banner() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            birthday_window_days: default_birthday_window_days(),
            prompt: default_prompt(),
            show_banner: default_show_banner(),
        }
    }
}

impl Config {
    /// Load config from file, falling back to defaults when it is missing
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;

        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}
