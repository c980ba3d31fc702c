//! Settings persistence: load/save with atomic writes

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::warn;

use crate::models::Settings;

const SETTINGS_FILENAME: &str = "settings.json";

/// Get path to the settings file inside a config directory
pub fn settings_path(config_dir: &Path) -> PathBuf {
    config_dir.join(SETTINGS_FILENAME)
}

/// Load settings, merging stored keys over the defaults
///
/// A missing file yields the defaults. A file that cannot be parsed is
/// reported and also yields the defaults, so a damaged file never blocks
/// the game; it is overwritten on the next save.
pub fn load_settings(config_dir: &Path) -> Result<Settings> {
    let path = settings_path(config_dir);
    if !path.exists() {
        return Ok(Settings::default());
    }

    let json = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read settings file: {}", path.display()))?;

    match serde_json::from_str::<Settings>(&json) {
        Ok(settings) => Ok(settings),
        Err(e) => {
            warn!("Settings file {} is corrupted ({}), using defaults", path.display(), e);
            Ok(Settings::default())
        }
    }
}

/// Save settings atomically (temp file + rename)
pub fn save_settings(config_dir: &Path, settings: &Settings) -> Result<()> {
    if !config_dir.exists() {
        fs::create_dir_all(config_dir).context("Failed to create config directory")?;
    }

    let path = settings_path(config_dir);
    let temp = config_dir.join(format!("{}.tmp", SETTINGS_FILENAME));
    let json = serde_json::to_string_pretty(settings).context("Failed to serialize settings")?;
    fs::write(&temp, json).context("Failed to write settings temp file")?;
    fs::rename(&temp, &path).context("Failed to rename settings temp file")?;

    Ok(())
}

/// Remove stored settings so the defaults apply again
pub fn reset_settings(config_dir: &Path) -> Result<()> {
    let path = settings_path(config_dir);
    if path.exists() {
        fs::remove_file(&path)
            .with_context(|| format!("Failed to remove settings file: {}", path.display()))?;
    }
    Ok(())
}

/// Write the defaults if no settings file exists yet, then load
pub fn ensure_settings_initialized(config_dir: &Path) -> Result<Settings> {
    if !settings_path(config_dir).exists() {
        save_settings(config_dir, &Settings::default())?;
    }
    load_settings(config_dir)
}
