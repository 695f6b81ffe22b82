//! Config command implementation.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};

use crate::cli::{ConfigAction, ConfigKey};
use crate::config::{Config, config_path};

pub fn cmd_config(action: &ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = Config::load()?;
            let content =
                toml::to_string_pretty(&config).context("Failed to serialize config")?;
            if content.is_empty() {
                println!("(empty configuration)");
            } else {
                print!("{content}");
            }
        }
        ConfigAction::Path => {
            println!("{}", config_path().display());
        }
        ConfigAction::Init => {
            let path = config_path();
            if path.exists() {
                bail!("Config file already exists at {}", path.display());
            }
            Config::default().save()?;
            println!("Created config file at {}", path.display());
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            match key {
                ConfigKey::Model => {
                    config.model = Some(PathBuf::from(value));
                }
                ConfigKey::NoColor => {
                    config.no_color = value
                        .parse()
                        .map_err(|_| anyhow::anyhow!("Expected true or false, got '{value}'"))?;
                }
            }
            config.save()?;
            println!("Configuration updated");
        }
    }
    Ok(())
}
