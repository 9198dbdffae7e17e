//! Settings file loading

use std::path::{Path, PathBuf};

use gitguide_core::prelude::*;

use super::types::Settings;

pub const CONFIG_FILENAME: &str = "config.toml";

/// `<config_dir>/git-guide/config.toml`, falling back to the working directory
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("git-guide"))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_FILENAME)
}

/// Load settings from `config_path`
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match parse_settings(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Ignoring {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Parse the contents of a settings file
pub fn parse_settings(content: &str) -> Result<Settings> {
    toml::from_str(content).map_err(|e| Error::config(e.to_string()))
}
