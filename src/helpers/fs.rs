//! File System Utilities
//!
//! Configuration and data directory management.

use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "axieanalytics", "axie-sales").ok_or_else(|| Error::Config {
        message: "Could not determine project directories".to_string(),
    })
}

/// Get or create the application's configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/axie-sales/` or `$XDG_CONFIG_HOME/axie-sales/`
/// - **macOS**: `~/Library/Application Support/com.axieanalytics.axie-sales/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\axieanalytics\axie-sales\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    let dirs = project_dirs()?;
    let config_dir = dirs.config_dir();

    if !config_dir.exists() {
        fs::create_dir_all(config_dir)?;
    }

    Ok(config_dir.to_path_buf())
}

/// Get or create the data directory (log files)
///
/// Platform-specific locations:
/// - **Linux**: `~/.local/share/axie-sales/`
/// - **macOS**: `~/Library/Application Support/com.axieanalytics.axie-sales/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\axieanalytics\axie-sales\data\`
pub fn get_or_create_data_dir() -> Result<PathBuf> {
    let dirs = project_dirs()?;
    let data_dir = dirs.data_dir();

    if !data_dir.exists() {
        fs::create_dir_all(data_dir)?;
    }

    Ok(data_dir.to_path_buf())
}
