//! Config - Application Configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::constants::{DEBOUNCE_MS, DEFAULT_API_BASE_URL, DEFAULT_REQUEST_TIMEOUT_SECS, PAGE_SIZE};

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Data service configuration
    pub api: ApiConfig,
    /// Query synchronization settings
    pub sync: SyncConfig,
    /// Logging settings
    pub log: LogConfig,
}

/// Data service configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL, without trailing slash
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

/// Query synchronization settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Quiet period after a filter edit before re-querying
    pub debounce_ms: u64,
    /// Records per list page
    pub page_size: u32,
}

impl SyncConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEBOUNCE_MS,
            page_size: PAGE_SIZE,
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default level directive when `RUST_LOG` is unset
    pub level: String,
    /// Also write a daily log file under the data directory
    pub file: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: true,
        }
    }
}
