use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "ANIDLE_CONFIG_DIR";

/// Get the anidle config directory
///
/// `$ANIDLE_CONFIG_DIR` if set and non-empty, else the platform config dir:
/// - Linux: `~/.config/anidle/`
/// - macOS: `~/Library/Application Support/anidle/`
/// - Windows: `%APPDATA%\anidle\`
pub fn get_config_dir() -> Result<PathBuf> {
    if let Ok(dir) = env::var(CONFIG_DIR_ENV)
        && !dir.trim().is_empty()
    {
        return Ok(PathBuf::from(dir));
    }
    let base = dirs::config_dir().context("Failed to get platform config directory")?;
    Ok(base.join("anidle"))
}

/// Environment variable overriding the AniList GraphQL endpoint
pub const ENDPOINT_ENV: &str = "ANIDLE_ANILIST_ENDPOINT";

/// Endpoint override, if one is set
pub fn endpoint_override() -> Option<String> {
    env::var(ENDPOINT_ENV).ok().filter(|url| !url.trim().is_empty())
}

/// Default location of the downloaded catalog file
pub fn default_catalog_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("catalog.json"))
}
