//! Viewer configuration for airwave-viewer
//!
//! Configuration is stored as YAML in the user's config directory.
//! Default location: ~/.config/airwave-viewer/config.yaml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Guide backend settings
    pub api: ApiConfig,
    /// Clock settings
    pub clock: ClockConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            clock: ClockConfig::default(),
        }
    }
}

/// Guide backend configuration section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the EPG backend
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: airwave_core::api::DEFAULT_BASE_URL.to_string(),
            timeout_secs: airwave_core::api::DEFAULT_TIMEOUT.as_secs(),
        }
    }
}

/// Clock configuration section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// Refresh period of the shared clock, in seconds.
    /// Drives the now line, the header marker, and tile progress bars.
    pub tick_secs: u64,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self { tick_secs: 30 }
    }
}

/// Get the default config file path
///
/// Returns: ~/.config/airwave-viewer/config.yaml
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
        .join("airwave-viewer")
        .join("config.yaml")
}

/// Load configuration from a YAML file
///
/// If the file doesn't exist, returns default config.
/// If the file exists but is invalid, logs a warning and returns default config.
pub fn load_config(path: &Path) -> ViewerConfig {
    log::info!("load_config: Loading from {:?}", path);

    if !path.exists() {
        log::info!("load_config: Config file doesn't exist, using defaults");
        return ViewerConfig::default();
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => match serde_yaml::from_str::<ViewerConfig>(&contents) {
            Ok(config) => {
                log::info!(
                    "load_config: Loaded config - backend: {}, clock tick: {}s",
                    config.api.base_url,
                    config.clock.tick_secs
                );
                config
            }
            Err(e) => {
                log::warn!("load_config: Failed to parse config: {}, using defaults", e);
                ViewerConfig::default()
            }
        },
        Err(e) => {
            log::warn!(
                "load_config: Failed to read config file: {}, using defaults",
                e
            );
            ViewerConfig::default()
        }
    }
}

/// Save configuration to a YAML file
///
/// Creates parent directories if they don't exist. Called once on first
/// launch to materialize the defaults for editing.
pub fn save_config(config: &ViewerConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
    }

    let yaml = serde_yaml::to_string(config).context("Failed to serialize config to YAML")?;

    std::fs::write(path, yaml)
        .with_context(|| format!("Failed to write config file: {:?}", path))?;

    log::info!("save_config: Config saved to {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ViewerConfig::default();
        assert_eq!(config.api.base_url, "http://localhost:1337");
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.clock.tick_secs, 30);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: ViewerConfig =
            serde_yaml::from_str("api:\n  base_url: \"https://epg.example.com\"\n").unwrap();
        assert_eq!(config.api.base_url, "https://epg.example.com");
        // Unspecified fields keep their defaults
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.clock.tick_secs, 30);
    }

    #[test]
    fn test_config_round_trip() {
        let config = ViewerConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: ViewerConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.api.base_url, config.api.base_url);
        assert_eq!(parsed.clock.tick_secs, config.clock.tick_secs);
    }
}
