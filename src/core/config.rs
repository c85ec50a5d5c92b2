use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::types::DisplayMetrics;
use crate::error::DeviceInfoError;

fn default_poll_interval_ms() -> u64 {
    2000
}

fn default_data_path() -> String {
    "/".to_string()
}

fn default_sdk_int() -> i32 {
    34
}

fn default_low_memory_threshold() -> u64 {
    256 * 1024 * 1024
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// How often the host platform polls the battery for power events
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    /// Mount point treated as the data partition
    #[serde(default = "default_data_path")]
    pub data_path: String,
    /// Mount point treated as external storage
    #[serde(default)]
    pub external_storage_path: Option<String>,
    /// Host machines have no portable display query
    #[serde(default)]
    pub display: Option<DisplayMetrics>,
    #[serde(default = "default_sdk_int")]
    pub sdk_int: i32,
    #[serde(default = "default_low_memory_threshold")]
    pub low_memory_threshold_bytes: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
            data_path: default_data_path(),
            external_storage_path: None,
            display: None,
            sdk_int: default_sdk_int(),
            low_memory_threshold_bytes: default_low_memory_threshold(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Load from `path`; a missing, empty or unreadable file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if data.trim().is_empty() {
            return Ok(Config::default());
        }

        Ok(serde_json::from_str(&data).unwrap_or_else(|e| {
            log::warn!("Ignoring corrupt config file {:?}: {}", path, e);
            Config::default()
        }))
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let data = serde_json::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        fs::write(path, data).with_context(|| format!("Failed to write config file: {:?}", path))?;

        Ok(())
    }

    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir =
            dirs::config_dir().with_context(|| "Could not determine config directory")?;

        Ok(config_dir.join("devinfo").join("config.json"))
    }

    pub fn set_poll_interval(&mut self, interval_ms: u64) -> Result<()> {
        if interval_ms == 0 {
            return Err(DeviceInfoError::config("poll interval must be greater than zero").into());
        }
        self.poll_interval_ms = interval_ms;
        Ok(())
    }

    pub fn set_data_path(&mut self, path: String) {
        self.data_path = path;
    }

    pub fn set_external_storage_path(&mut self, path: Option<String>) {
        self.external_storage_path = path;
    }
}
