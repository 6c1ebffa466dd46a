//! Centralized path resolution for cachestat
//!
//! # Environment Variables
//!
//! - `CACHESTAT_CONFIG_DIR` - Override config directory
//! - `CACHESTAT_CACHE_DIR` - Override the cache-store root
//! - `CACHESTAT_INDEX_DIR` - Override the address-index root
//!
//! # Path Resolution Priority
//!
//! For config_dir():
//! 1. `CACHESTAT_CONFIG_DIR` environment variable
//! 2. `XDG_CONFIG_HOME/cachestat` (if set)
//! 3. Default: `~/.config/cachestat`
//!
//! The cache and index roots additionally honor the `cache_path` /
//! `index_path` entries in `cachestat.toml` (see [`crate::config`]); the
//! defaults live under `~/.local/share/cachestat/`.

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Environment variable for config directory override
pub const ENV_CONFIG_DIR: &str = "CACHESTAT_CONFIG_DIR";

/// Environment variable for cache-store root override
pub const ENV_CACHE_DIR: &str = "CACHESTAT_CACHE_DIR";

/// Environment variable for address-index root override
pub const ENV_INDEX_DIR: &str = "CACHESTAT_INDEX_DIR";

/// Get the cachestat config directory path
pub fn config_dir() -> Result<PathBuf> {
    if let Some(path) = env_override(ENV_CONFIG_DIR) {
        log::debug!("Using config dir from {}: {}", ENV_CONFIG_DIR, path.display());
        return Ok(path);
    }

    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        let path = PathBuf::from(xdg_config).join("cachestat");
        log::debug!("Using XDG_CONFIG_HOME: {}", path.display());
        return Ok(path);
    }

    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("cachestat"))
}

/// Default root for the general cache stores (`~/.local/share/cachestat/cache`)
pub fn default_cache_dir() -> Result<PathBuf> {
    Ok(data_root()?.join("cache"))
}

/// Default root for the address index (`~/.local/share/cachestat/index`)
pub fn default_index_dir() -> Result<PathBuf> {
    Ok(data_root()?.join("index"))
}

fn data_root() -> Result<PathBuf> {
    if let Ok(xdg_data) = std::env::var("XDG_DATA_HOME") {
        return Ok(PathBuf::from(xdg_data).join("cachestat"));
    }
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".local").join("share").join("cachestat"))
}

/// Read a path-valued environment override, with `~` and `$VAR` expansion.
pub fn env_override(key: &str) -> Option<PathBuf> {
    std::env::var(key).ok().map(|value| expand(&value))
}

/// Expand ~ and environment variables in a path string.
pub fn expand(path: &str) -> PathBuf {
    let expanded = shellexpand::full(path).unwrap_or(std::borrow::Cow::Borrowed(path));
    PathBuf::from(expanded.as_ref())
}

// ============================================================================
// Tests
// ============================================================================
