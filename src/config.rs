use crate::error::{ReleaseScoutError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Represents the complete configuration for release-scout.
///
/// Contains the tag naming format and display options. Nothing here affects
/// analysis correctness except `tag_format`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "default_tag_format")]
    pub tag_format: String,

    #[serde(default)]
    pub display: DisplayConfig,
}

/// Returns the default tag naming format.
fn default_tag_format() -> String {
    "v{version}".to_string()
}

/// Configuration for output display.
///
/// Controls how the CLI renders the commit list without affecting the
/// analysis itself.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    #[serde(default = "default_commit_limit")]
    pub commit_limit: usize,
}

/// Returns the default number of commits shown before truncation.
fn default_commit_limit() -> usize {
    10
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            commit_limit: default_commit_limit(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            tag_format: default_tag_format(),
            display: DisplayConfig::default(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `releasescout.toml` in current directory
/// 3. `.releasescout.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./releasescout.toml").exists() {
        fs::read_to_string("./releasescout.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".releasescout.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)
        .map_err(|e| ReleaseScoutError::config(format!("Invalid configuration file: {}", e)))?;
    Ok(config)
}
