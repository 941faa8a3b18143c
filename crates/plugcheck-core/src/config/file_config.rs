//! File-based configuration implementation.
//!
//! Reads/writes `config.yml` in the plugcheck config directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{Config, ENV_PREFIX, config_dir, validate_value};
use crate::errors::ConfigError;

/// File-based configuration backed by a YAML file.
#[derive(Debug)]
pub struct FileConfig {
    config_path: PathBuf,
    data: ConfigData,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct ConfigData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    api_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    auth_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    probe_timeout: Option<String>,
}

impl ConfigData {
    fn value(&self, key: &str) -> Option<&str> {
        match key {
            "api_url" => self.api_url.as_deref(),
            "auth_token" => self.auth_token.as_deref(),
            "probe_timeout" => self.probe_timeout.as_deref(),
            _ => None,
        }
    }

    fn slot_mut(&mut self, key: &str) -> Option<&mut Option<String>> {
        match key {
            "api_url" => Some(&mut self.api_url),
            "auth_token" => Some(&mut self.auth_token),
            "probe_timeout" => Some(&mut self.probe_timeout),
            _ => None,
        }
    }
}

impl FileConfig {
    /// Load configuration from the default config directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or parsed.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&config_dir().join("config.yml"))
    }

    /// Load configuration from a specific file. A missing file yields an
    /// empty configuration that will be created on [`Config::write`].
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let data = if path.exists() {
            let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
                path: path.display().to_string(),
                source: e,
            })?;
            if content.trim().is_empty() {
                ConfigData::default()
            } else {
                serde_yaml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?
            }
        } else {
            ConfigData::default()
        };

        tracing::debug!(path = %path.display(), "Loaded configuration");

        Ok(Self {
            config_path: path.to_path_buf(),
            data,
        })
    }

    /// Create an empty in-memory config (for testing).
    pub fn empty() -> Self {
        Self {
            config_path: PathBuf::from("/dev/null"),
            data: ConfigData::default(),
        }
    }
}

impl Config for FileConfig {
    fn get(&self, key: &str) -> Option<String> {
        // Check environment variables first
        let env_key = format!("{ENV_PREFIX}{}", key.to_uppercase());
        if let Ok(val) = std::env::var(&env_key) {
            return Some(val);
        }

        self.data.value(key).map(str::to_string)
    }

    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        validate_value(key, value)?;
        if let Some(slot) = self.data.slot_mut(key) {
            *slot = Some(value.to_string());
        }
        Ok(())
    }

    fn write(&self) -> anyhow::Result<()> {
        let dir = self.config_path.parent().ok_or_else(|| {
            anyhow::anyhow!(
                "config path has no parent directory: {}",
                self.config_path.display()
            )
        })?;
        fs::create_dir_all(dir)?;

        let yaml =
            serde_yaml::to_string(&self.data).map_err(|e| ConfigError::Parse(e.to_string()))?;
        fs::write(&self.config_path, yaml).map_err(|e| ConfigError::WriteFile {
            path: self.config_path.display().to_string(),
            source: e,
        })?;

        Ok(())
    }
}
