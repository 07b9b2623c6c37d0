use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// User-facing portal configuration, persisted as config.toml.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub demo: DemoConfig,
}

impl AppConfig {
    /// Returns the config file path within the given data directory.
    pub fn path(data_dir: &Path) -> PathBuf {
        data_dir.join("config.toml")
    }

    /// Loads config from a TOML file. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves config to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// General portal settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default = "default_true")]
    pub show_getting_started: bool,
    #[serde(default = "default_true")]
    pub account_owner: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            show_getting_started: true,
            account_owner: true,
        }
    }
}

/// Placeholder fax identity used by demo-mode arrivals.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    #[serde(default = "default_from_number")]
    pub from_number: String,
    #[serde(default = "default_to_number")]
    pub to_number: String,
    #[serde(default = "default_user_inbox")]
    pub user_inbox: String,
    #[serde(default = "default_preview_url")]
    pub preview_url: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            from_number: default_from_number(),
            to_number: default_to_number(),
            user_inbox: default_user_inbox(),
            preview_url: default_preview_url(),
        }
    }
}

fn default_from_number() -> String {
    "+1234567890".to_string()
}

fn default_to_number() -> String {
    "+0987654321".to_string()
}

fn default_user_inbox() -> String {
    "John Doe".to_string()
}

fn default_preview_url() -> String {
    "https://example.com/fax-preview.jpg".to_string()
}

fn default_true() -> bool {
    true
}

/// Errors that can occur when loading or saving config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
