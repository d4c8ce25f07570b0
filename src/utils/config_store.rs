//! ConfigStore - Local Configuration Storage
//!
//! `config.toml` in the platform config directory. A missing file is created
//! with defaults so the user has something to edit.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::domain::config::AppConfig;
use crate::error::Result;
use crate::helpers::get_or_create_config_dir;

const CONFIG_FILE: &str = "config.toml";

/// Path of the application config file
pub fn config_path() -> Result<PathBuf> {
    Ok(get_or_create_config_dir()?.join(CONFIG_FILE))
}

/// Load the config from the default location, writing defaults if missing
pub fn load_app_config() -> Result<AppConfig> {
    load_config_from(&config_path()?)
}

/// Load the config from `path`, writing defaults if missing
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        let config = AppConfig::default();
        save_config_to(path, &config)?;
        info!("Created default config at {}", path.display());
        return Ok(config);
    }

    let content = fs::read_to_string(path)?;
    let config: AppConfig = toml::from_str(&content)?;
    debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Save the config to `path`
pub fn save_config_to(path: &Path, config: &AppConfig) -> Result<()> {
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("axie-sales-{}-{name}", std::process::id()));
        fs::create_dir_all(&dir).expect("create temp dir");
        dir.join(CONFIG_FILE)
    }

    #[test]
    fn missing_file_is_created_with_defaults() {
        let path = temp_path("missing");
        let _ = fs::remove_file(&path);

        let config = load_config_from(&path).expect("load");
        assert_eq!(config, AppConfig::default());
        assert!(path.exists());
    }

    #[test]
    fn saved_config_is_read_back() {
        let path = temp_path("saved");
        let mut config = AppConfig::default();
        config.sync.page_size = 30;
        config.api.base_url = "http://127.0.0.1:9000".to_string();

        save_config_to(&path, &config).expect("save");
        let loaded = load_config_from(&path).expect("load");
        assert_eq!(loaded, config);
    }
}
