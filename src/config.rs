use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use anyhow::{Context, Result};
use crate::render::Branding;

pub const CONFIG_FILE_NAME: &str = "license-notice.toml";
pub const DEFAULT_LICENSE_PATH: &str = "license.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Whether this server lets members allow commercial use of their work
    #[serde(default)]
    pub commercial_use_allowed: bool,

    /// Output format (text, json)
    pub format: Option<String>,

    /// License file used when none is given on the command line
    pub default_license_path: Option<PathBuf>,

    /// Signatures and command names shown in footers
    #[serde(default)]
    pub branding: Branding,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            commercial_use_allowed: false,
            format: Some("text".to_string()),
            default_license_path: None,
            branding: Branding::default(),
        }
    }
}

impl Config {
    pub fn license_path(&self, explicit: Option<PathBuf>) -> PathBuf {
        explicit
            .or_else(|| self.default_license_path.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LICENSE_PATH))
    }
}

pub fn get_config_file_path() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(CONFIG_FILE_NAME)
}

/// Load configuration from license-notice.toml in the current directory
pub fn load_config() -> Result<Config> {
    load_config_from(get_config_file_path())
}

pub fn load_config_from<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    if let Some(format) = config.format.as_deref() {
        if !matches!(format, "text" | "json") {
            anyhow::bail!("Unknown output format '{}' in {}", format, path.display());
        }
    }

    Ok(config)
}
