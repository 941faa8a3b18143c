//! In-memory configuration for testing.
//!
//! Provides a [`MemoryConfig`] that implements [`Config`] without touching
//! the filesystem or reading environment variables, so tests can point the
//! checker at any server without mutating shared state.

use std::collections::HashMap;

use super::{Config, validate_value};

/// In-memory configuration for testing.
///
/// # Examples
///
/// ```
/// use plugcheck_core::config::{Config, MemoryConfig};
///
/// let config = MemoryConfig::new().with_api_url("https://example.com/api/");
/// assert_eq!(config.api_url(), "https://example.com/api/");
/// ```
#[derive(Debug, Default, Clone)]
pub struct MemoryConfig {
    values: HashMap<String, String>,
}

impl MemoryConfig {
    /// Create a new empty in-memory configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the backend API URL.
    #[must_use]
    pub fn with_api_url(self, url: impl Into<String>) -> Self {
        self.with_raw("api_url", url)
    }

    /// Set the authentication token.
    #[must_use]
    pub fn with_auth_token(self, token: impl Into<String>) -> Self {
        self.with_raw("auth_token", token)
    }

    /// Store a value without validation.
    #[must_use]
    pub fn with_raw(mut self, key: &str, value: impl Into<String>) -> Self {
        self.values.insert(key.to_string(), value.into());
        self
    }
}

impl Config for MemoryConfig {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        validate_value(key, value)?;
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn write(&self) -> anyhow::Result<()> {
        // No-op: in-memory config has nothing to persist.
        Ok(())
    }
}
