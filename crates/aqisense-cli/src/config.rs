//! Persistent CLI configuration.
//!
//! Values here are fallbacks: command-line flags and environment variables
//! always win over the file.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// CLI configuration, stored as TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Default model artifact path, used when `--model` and
    /// `AQISENSE_MODEL` are absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<PathBuf>,

    /// Disable colored output.
    #[serde(default)]
    pub no_color: bool,
}

impl Config {
    /// Load the configuration file, returning defaults if it does not exist.
    pub fn load() -> Result<Self> {
        let path = config_path();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Save the configuration, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&path, content)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        tracing::debug!("Saved config to {}", path.display());
        Ok(())
    }
}

/// Path to the configuration file (`~/.config/aqisense/config.toml`).
pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("aqisense")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.model.is_none());
        assert!(!config.no_color);
    }

    #[test]
    fn test_config_toml_roundtrip() {
        let config = Config {
            model: Some(PathBuf::from("/tmp/model.json")),
            no_color: true,
        };
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.model, config.model);
        assert_eq!(parsed.no_color, config.no_color);
    }

    #[test]
    fn test_config_parses_partial_file() {
        let parsed: Config = toml::from_str("no_color = true").unwrap();
        assert!(parsed.model.is_none());
        assert!(parsed.no_color);
    }

    #[test]
    fn test_config_path_ends_with_expected_components() {
        let path = config_path();
        assert!(path.ends_with("aqisense/config.toml"));
    }
}
