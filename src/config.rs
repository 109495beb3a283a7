//! Application configuration file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::audio::AudioConfig;
use crate::game::GameConfig;

/// Everything read from `--config`; missing tables and keys take defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub audio: AudioConfig,
}

impl AppConfig {
    /// Parse TOML text. Values are checked by [`AppConfig::validate`] once
    /// command-line overrides have been applied.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid configuration file")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&content)
    }

    pub fn validate(&self) -> Result<()> {
        self.game.validate().context("Invalid [game] settings")?;
        self.audio.validate().context("Invalid [audio] settings")?;
        Ok(())
    }
}
