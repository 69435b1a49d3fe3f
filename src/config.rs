use crate::error::{DocumentError, Result};
use crate::texts::Texts;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// chrono format used for the issuer's `birthDate`
    #[serde(default = "default_date_format_short")]
    pub date_format_short: String,
    /// Accepted date-of-birth encodings, tried in order after RFC 3339
    #[serde(default = "default_birth_date_input_formats")]
    pub birth_date_input_formats: Vec<String>,
    #[serde(default)]
    pub texts: Texts,
}

fn default_date_format_short() -> String {
    "%d/%m/%Y".to_string()
}

fn default_birth_date_input_formats() -> Vec<String> {
    vec![
        "%Y-%m-%d".to_string(),
        "%m/%d/%Y".to_string(),
        "%Y/%m/%d".to_string(),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Config {
            date_format_short: default_date_format_short(),
            birth_date_input_formats: default_birth_date_input_formats(),
            texts: Texts::default(),
        }
    }
}

pub fn get_config_path() -> Result<PathBuf> {
    let mut path = dirs::config_dir()
        .ok_or_else(|| DocumentError::Internal("Failed to get config directory".to_string()))?;

    path.push("k5-documents");
    fs::create_dir_all(&path)?;

    path.push("config.json");
    Ok(path)
}

pub fn load_config() -> Result<Config> {
    load_config_from(&get_config_path()?)
}

/// Loads the config at `path`, writing the defaults there if it does not exist.
pub fn load_config_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        let default_config = Config::default();
        save_config_to(path, &default_config)?;
        return Ok(default_config);
    }

    let content = fs::read_to_string(path)?;
    let mut config: Config = serde_json::from_str(&content)?;

    if config.date_format_short.trim().is_empty() {
        tracing::warn!("Empty date_format_short in config, using default");
        config.date_format_short = default_date_format_short();
    }

    Ok(config)
}

pub fn save_config_to(path: &Path, config: &Config) -> Result<()> {
    let content = serde_json::to_string_pretty(config)?;

    fs::write(path, content)?;

    Ok(())
}
