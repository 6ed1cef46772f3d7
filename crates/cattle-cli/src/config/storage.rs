//! Configuration storage under the platform data directory.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use tracing::debug;

use super::StoredConfig;

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Get the configuration file path, creating its directory.
pub fn config_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("", "", "cattle").context("Could not determine data directory")?;

    let data_dir = dirs.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data directory")?;

    Ok(data_dir.join("config.json"))
}

/// Save the configuration to disk.
pub fn save_config(config: &StoredConfig) -> Result<PathBuf> {
    let path = config_path()?;
    let json = serde_json::to_string_pretty(config)?;

    fs::write(&path, &json).context("Failed to write configuration file")?;

    // Credentials live in this file
    #[cfg(unix)]
    {
        let mut perms = fs::metadata(&path)?.permissions();
        perms.set_mode(0o600);
        fs::set_permissions(&path, perms)?;
    }

    debug!(path = %path.display(), "saved configuration");
    Ok(path)
}

/// Load the configuration from disk, if any was saved.
pub fn load_config() -> Result<Option<StoredConfig>> {
    let path = config_path()?;

    if !path.exists() {
        return Ok(None);
    }

    let json = fs::read_to_string(&path).context("Failed to read configuration file")?;
    let config = serde_json::from_str(&json).context("Invalid configuration file")?;

    Ok(Some(config))
}

/// Remove the stored configuration. Returns whether a file was removed.
pub fn clear_config() -> Result<bool> {
    let path = config_path()?;

    if !path.exists() {
        return Ok(false);
    }

    fs::remove_file(&path).context("Failed to remove configuration file")?;
    Ok(true)
}
