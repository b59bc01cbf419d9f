use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::query::{DEFAULT_API_BASE, DEFAULT_REQUEST_TIMEOUT};

const SETTINGS_FILE: &str = "settings.json";
pub const DEFAULT_LOG_FILTER: &str = "info,hyper=warn,reqwest=warn";
pub const DEFAULT_LOG_RETENTION_DAYS: u64 = 7;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub api_base: String,
    pub request_timeout_secs: u64,
    /// `EnvFilter` directives, used when `RUST_LOG` is unset
    pub log_filter: String,
    pub log_retention_days: u64,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT.as_secs(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_retention_days: DEFAULT_LOG_RETENTION_DAYS,
        }
    }
}

impl AppSettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn log_retention(&self) -> Duration {
        Duration::from_secs(self.log_retention_days.saturating_mul(24 * 60 * 60))
    }
}

fn get_settings_path() -> Result<PathBuf, String> {
    let config_dir = dirs::config_dir()
        .ok_or("Failed to get config directory")?
        .join("mc-status");

    fs::create_dir_all(&config_dir)
        .map_err(|e| format!("Failed to create config directory: {}", e))?;

    Ok(config_dir.join(SETTINGS_FILE))
}

/// Load settings from the per-user config directory, writing the defaults on first run
pub fn load_settings() -> Result<AppSettings, String> {
    let path = get_settings_path()?;

    if !path.exists() {
        let settings = AppSettings::default();
        save_settings_to(&path, &settings)?;
        return Ok(settings);
    }

    load_settings_from(&path)
}

pub fn load_settings_from(path: &Path) -> Result<AppSettings, String> {
    tracing::debug!("Loading settings from {}", path.display());

    if !path.exists() {
        return Ok(AppSettings::default());
    }

    let contents =
        fs::read_to_string(path).map_err(|e| format!("Failed to read settings file: {}", e))?;

    serde_json::from_str(&contents).map_err(|e| format!("Failed to parse settings: {}", e))
}

pub fn save_settings_to(path: &Path, settings: &AppSettings) -> Result<(), String> {
    tracing::debug!("Saving settings to {}", path.display());

    let contents = serde_json::to_string_pretty(settings)
        .map_err(|e| format!("Failed to serialize settings: {}", e))?;

    fs::write(path, contents).map_err(|e| format!("Failed to write settings file: {}", e))
}
