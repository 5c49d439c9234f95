//! Standard paths used by the assistant

use std::path::PathBuf;

/// Standard assistant paths
pub struct Paths {
    /// Config directory (~/.config/assistant)
    pub config: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Self::new()
    }
}

impl Paths {
    pub fn new() -> Self {
        let config = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("assistant");

        Self { config }
    }

    /// Get the default config file path
    pub fn config_file(&self) -> PathBuf {
        self.config.join("config.json")
    }
}
