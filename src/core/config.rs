use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::alerts::keywords::{KeywordMatcher, DEFAULT_KEYWORDS};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Bridge settings, persisted in settings.json.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Keywords that mark a message as a disaster alert, checked in order
    pub alert_keywords: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            alert_keywords: DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
        }
    }
}

impl Settings {
    pub fn matcher(&self) -> KeywordMatcher {
        KeywordMatcher::new(self.alert_keywords.iter().cloned())
    }
}

pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(app_config_dir: PathBuf) -> Self {
        Self {
            config_path: app_config_dir.join("settings.json"),
        }
    }

    /// Load settings, falling back to defaults when the file is missing or invalid.
    pub fn load(&self) -> Settings {
        if !self.config_path.exists() {
            return Settings::default();
        }
        match self.load_strict() {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Using default settings, {:?} unusable: {}", self.config_path, e);
                Settings::default()
            }
        }
    }

    pub fn load_strict(&self) -> Result<Settings, ConfigError> {
        let content = fs::read_to_string(&self.config_path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, settings: &Settings) -> Result<(), ConfigError> {
        // Ensure directory exists
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(settings)?;
        fs::write(&self.config_path, content)?;
        Ok(())
    }
}
