//! Configuration system for plugcheck.
//!
//! Holds the backend API URL the probes are derived from, an optional
//! authentication token, and the probe timeout. Values come from
//! `config.yml` in the plugcheck config directory, overridden by
//! `PLUGCHECK_<KEY>` environment variables.

mod file_config;
mod memory_config;

use std::sync::{Arc, RwLock};
use std::time::Duration;

pub use file_config::FileConfig;
pub use memory_config::MemoryConfig;

use crate::errors::ConfigError;

/// Prefix for environment variables overriding configuration keys.
pub const ENV_PREFIX: &str = "PLUGCHECK_";

/// Configuration directory path (usually ~/.config/plugcheck).
pub fn config_dir() -> std::path::PathBuf {
    if let Ok(dir) = std::env::var("PLUGCHECK_CONFIG_DIR") {
        return std::path::PathBuf::from(dir);
    }
    dirs::config_dir().map_or_else(
        || {
            dirs::home_dir()
                .unwrap_or_else(|| std::path::PathBuf::from("."))
                .join(".config")
                .join("plugcheck")
        },
        |d| d.join("plugcheck"),
    )
}

/// Configuration trait for accessing settings.
///
/// Readers only ever need `&self`; the plugin checker holds a shared
/// reference and re-reads values on every probe.
pub trait Config: Send + Sync + std::fmt::Debug {
    /// Get a config value if it has been set.
    fn get(&self, key: &str) -> Option<String>;

    /// Set a config value after validating it.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value is invalid.
    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()>;

    /// Write config to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be saved.
    fn write(&self) -> anyhow::Result<()>;

    /// Get a config value with its default.
    fn get_or_default(&self, key: &str) -> String {
        self.get(key)
            .unwrap_or_else(|| default_for_key(key).to_string())
    }

    /// Backend API base URL, e.g. `https://example.com/api/`.
    fn api_url(&self) -> String {
        self.get_or_default("api_url")
    }

    /// Authentication token for the backend, if configured.
    fn auth_token(&self) -> Option<String> {
        self.get("auth_token").filter(|t| !t.is_empty())
    }

    /// Timeout applied to each reachability probe.
    fn probe_timeout(&self) -> Duration {
        let raw = self.get_or_default("probe_timeout");
        let Some(secs) = parse_timeout_secs(&raw) else {
            tracing::warn!(value = %raw, "Ignoring invalid probe_timeout");
            return Duration::from_secs(DEFAULT_PROBE_TIMEOUT_SECS);
        };
        Duration::from_secs(secs)
    }
}

/// Configuration shared between commands and long-lived readers.
pub type SharedConfig = Arc<RwLock<Box<dyn Config>>>;

impl Config for RwLock<Box<dyn Config>> {
    fn get(&self, key: &str) -> Option<String> {
        self.read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        self.get_mut()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .set(key, value)
    }

    fn write(&self) -> anyhow::Result<()> {
        let guard = self
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        Config::write(&**guard)
    }
}

/// Default backend API URL.
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api/";

/// Default probe timeout in seconds.
pub const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 10;

/// Known configuration keys with descriptions and defaults.
pub static CONFIG_OPTIONS: &[ConfigOption] = &[
    ConfigOption {
        key: "api_url",
        description: "the backend API base URL, ending in /api/",
        default_value: DEFAULT_API_URL,
    },
    ConfigOption {
        key: "auth_token",
        description: "token sent in the Authorization header of every probe",
        default_value: "",
    },
    ConfigOption {
        key: "probe_timeout",
        description: "seconds to wait for a probe response",
        default_value: "10",
    },
];

/// A known configuration option.
#[derive(Debug)]
pub struct ConfigOption {
    /// Config key name.
    pub key: &'static str,
    /// Description of what this option does.
    pub description: &'static str,
    /// Default value.
    pub default_value: &'static str,
}

impl ConfigOption {
    /// Get the current value from config, or the default.
    pub fn current_value(&self, config: &dyn Config) -> String {
        config.get_or_default(self.key)
    }
}

/// Default configuration values.
pub fn default_for_key(key: &str) -> &'static str {
    CONFIG_OPTIONS
        .iter()
        .find(|o| o.key == key)
        .map_or("", |o| o.default_value)
}

/// Check that `value` is acceptable for `key`.
///
/// # Errors
///
/// Returns [`ConfigError::UnknownKey`] for keys outside [`CONFIG_OPTIONS`]
/// and [`ConfigError::InvalidValue`] for malformed values.
pub fn validate_value(key: &str, value: &str) -> Result<(), ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    };

    match key {
        "api_url" => {
            url::Url::parse(value).map_err(|e| invalid(&e.to_string()))?;
            Ok(())
        }
        "probe_timeout" => parse_timeout_secs(value)
            .map(|_| ())
            .ok_or_else(|| invalid("expected a positive number of seconds")),
        "auth_token" => Ok(()),
        _ => Err(ConfigError::UnknownKey(key.to_string())),
    }
}

fn parse_timeout_secs(raw: &str) -> Option<u64> {
    raw.trim().parse::<u64>().ok().filter(|s| *s > 0)
}
