use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::paths;

/// Default RPC endpoint when none is configured
const DEFAULT_RPC_PROVIDER: &str = "http://localhost:8545";

/// Default API endpoint when none is configured
const DEFAULT_API_PROVIDER: &str = "http://localhost:8080";

/// `cachestat.toml`, loaded from the config directory. Every field is
/// optional; the accessors supply defaults and apply environment overrides.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub settings: Settings,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Settings {
    pub cache_path: Option<String>,
    pub index_path: Option<String>,
    pub rpc_provider: Option<String>,
    pub api_provider: Option<String>,
    pub balance_provider: Option<String>,
    pub client_version: Option<String>,
}

impl Config {
    /// Load `cachestat.toml` from the config directory. A missing file is a
    /// normal state and yields the defaults; a malformed file is an error.
    pub fn load() -> Result<Self> {
        let path = paths::config_dir()?.join("cachestat.toml");
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Could not read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Invalid config {}", path.display()))
    }

    /// Root of the general cache stores.
    /// Priority: `CACHESTAT_CACHE_DIR` > `settings.cache_path` > default.
    pub fn cache_path(&self) -> Result<PathBuf> {
        if let Some(path) = paths::env_override(paths::ENV_CACHE_DIR) {
            return Ok(path);
        }
        match &self.settings.cache_path {
            Some(configured) => Ok(paths::expand(configured)),
            None => paths::default_cache_dir(),
        }
    }

    /// Root of the address index.
    /// Priority: `CACHESTAT_INDEX_DIR` > `settings.index_path` > default.
    pub fn index_path(&self) -> Result<PathBuf> {
        if let Some(path) = paths::env_override(paths::ENV_INDEX_DIR) {
            return Ok(path);
        }
        match &self.settings.index_path {
            Some(configured) => Ok(paths::expand(configured)),
            None => paths::default_index_dir(),
        }
    }

    pub fn rpc_provider(&self) -> String {
        self.settings
            .rpc_provider
            .clone()
            .unwrap_or_else(|| DEFAULT_RPC_PROVIDER.to_string())
    }

    pub fn api_provider(&self) -> String {
        self.settings
            .api_provider
            .clone()
            .unwrap_or_else(|| DEFAULT_API_PROVIDER.to_string())
    }

    /// The balance provider falls back to the API provider, not to its own
    /// fixed default.
    pub fn balance_provider(&self) -> String {
        self.settings
            .balance_provider
            .clone()
            .unwrap_or_else(|| self.api_provider())
    }

    pub fn client_version(&self) -> String {
        self.settings
            .client_version
            .clone()
            .unwrap_or_else(|| "unknown".to_string())
    }
}
