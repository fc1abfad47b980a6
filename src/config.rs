//! CLI configuration
//!
//! Stored in ~/.config/morse/config.json. A missing file means defaults.

use crate::trie::{BLANK_MARKER, UNKNOWN_MARKER};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// How the CLI prints results
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    #[default]
    Text,
}

/// User settings for the `morse` command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Printed in place of a token that is not a code
    pub unknown_marker: char,
    /// Printed in place of a token that stops on a blank node
    pub blank_marker: char,
    /// Fail instead of substituting markers
    pub strict: bool,
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            unknown_marker: UNKNOWN_MARKER,
            blank_marker: BLANK_MARKER,
            strict: false,
            format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Default config path (~/.config/morse/config.json)
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("Could not find config directory".into()))?;
        Ok(config_dir.join("morse").join("config.json"))
    }

    /// Load from the default path
    pub fn load_default() -> Result<Self> {
        Self::load(&Self::default_path()?)
    }

    /// Load from `path`, falling back to defaults when it does not exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))?;

        serde_json::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))
    }

    /// Write to `path`, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::Config(format!("Failed to create config dir: {}", e)))?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
