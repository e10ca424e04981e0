use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use super::defaults::*;
use crate::consts::{CONFIG_ENV_VAR, DEFAULT_CONFIG_FILE};
use crate::enums::MissingFolderPolicy;
use crate::error::CoreError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub access: AccessConfig,
}

/// Chain-walk settings consumed by [`crate::core::AccessSession`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct AccessConfig {
    #[serde(default = "default_max_chain_depth")]
    pub max_chain_depth: usize,
    #[serde(default = "default_missing_folder")]
    pub missing_folder: MissingFolderPolicy,
}

impl Default for AccessConfig {
    fn default() -> Self {
        default_access()
    }
}

impl AccessConfig {
    /// Depth limit actually used by walks; the starting folder is always examined
    pub fn effective_depth(&self) -> usize {
        self.max_chain_depth.max(1)
    }
}

pub fn from_toml_str(content: &str) -> Result<Config, CoreError> {
    Ok(toml::from_str(content)?)
}

pub fn load_from(path: impl AsRef<Path>) -> Result<Config, CoreError> {
    let content = std::fs::read_to_string(path)?;
    from_toml_str(&content)
}

/// Load config from `FOLDER_LOCK_CONFIG` (or `folder-lock.toml`) — falls back to defaults if missing
pub fn load() -> Result<Config, CoreError> {
    let config_path =
        std::env::var(CONFIG_ENV_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());

    if Path::new(&config_path).exists() {
        load_from(&config_path)
    } else {
        warn!(path = %config_path, "config file not found, using built-in defaults");
        Ok(Config::default())
    }
}
