//! Factory for shared command dependencies.
//!
//! Provides lazy initialization of configuration and the plugin checker.
//! Supports test mode with dependency injection for isolated testing.

use std::sync::{Arc, OnceLock, RwLock};

use plugcheck_api::checker::PluginChecker;
use plugcheck_api::http::{HttpClientOptions, build_client};
use plugcheck_api::reachability::HttpReachability;
use plugcheck_core::config::{Config, FileConfig, SharedConfig};
use plugcheck_core::iostreams::{CapturedOutput, IOStreams};
use secrecy::SecretString;

/// Shared factory providing lazily-initialized dependencies to all commands.
pub struct Factory {
    /// Application version.
    pub app_version: String,
    /// I/O streams.
    pub io: IOStreams,
    /// Configuration (lazily loaded).
    config: OnceLock<SharedConfig>,

    // Test overrides
    http_override: Option<reqwest::Client>,
}

impl std::fmt::Debug for Factory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Factory")
            .field("app_version", &self.app_version)
            .finish_non_exhaustive()
    }
}

impl Factory {
    /// Create a new factory with the given version.
    pub fn new(app_version: String) -> Self {
        Self {
            app_version,
            io: IOStreams::system(),
            config: OnceLock::new(),
            http_override: None,
        }
    }

    /// Create a test factory with captured I/O.
    ///
    /// Returns the factory and a `CapturedOutput` for reading captured
    /// stdout/stderr.
    pub fn test() -> (Self, CapturedOutput) {
        let (io, output) = IOStreams::captured();

        let factory = Self {
            app_version: "test".to_string(),
            io,
            config: OnceLock::new(),
            http_override: None,
        };

        (factory, output)
    }

    /// Set a custom reqwest HTTP client.
    #[must_use]
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http_override = Some(client);
        self
    }

    /// Set a config override for testing.
    #[must_use]
    pub fn with_config(self, config: Box<dyn Config>) -> Self {
        let _ = self.config.set(Arc::new(RwLock::new(config)));
        self
    }

    /// Get the configuration, loading it if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if config cannot be loaded.
    pub fn config(&self) -> anyhow::Result<&SharedConfig> {
        if let Some(cfg) = self.config.get() {
            return Ok(cfg);
        }
        let boxed: Box<dyn Config> = Box::new(FileConfig::load()?);
        // Ignore set error - another thread may have set it first
        let _ = self.config.set(Arc::new(RwLock::new(boxed)));
        self.config
            .get()
            .ok_or_else(|| anyhow::anyhow!("failed to initialize config"))
    }

    /// Build the HTTP client used for probes.
    ///
    /// In test mode, returns the injected client.
    ///
    /// # Errors
    ///
    /// Returns an error if config cannot be loaded or the client cannot be built.
    pub fn http_client(&self) -> anyhow::Result<reqwest::Client> {
        if let Some(ref client) = self.http_override {
            return Ok(client.clone());
        }

        let cfg = self.config()?;
        let opts = HttpClientOptions {
            app_version: self.app_version.clone(),
            auth_token: cfg.auth_token().map(SecretString::from),
            timeout: cfg.probe_timeout(),
        };
        build_client(&opts)
    }

    /// Build a plugin checker reading the shared configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if config cannot be loaded or the client cannot be built.
    pub fn plugin_checker(&self) -> anyhow::Result<PluginChecker<HttpReachability>> {
        let config: Arc<dyn Config> = self.config()?.clone();
        let http = self.http_client()?;
        Ok(PluginChecker::new(config, HttpReachability::new(http)))
    }
}

#[cfg(test)]
mod tests {
    use plugcheck_core::config::MemoryConfig;

    use super::*;

    #[test]
    fn test_should_use_injected_config() {
        let (factory, _output) = Factory::test();
        let factory = factory.with_config(Box::new(
            MemoryConfig::new().with_api_url("https://example.com/api/"),
        ));
        let cfg = factory.config().unwrap();
        assert_eq!(cfg.api_url(), "https://example.com/api/");
    }

    #[test]
    fn test_should_build_http_client_from_config() {
        let (factory, _output) = Factory::test();
        let factory = factory.with_config(Box::new(
            MemoryConfig::new()
                .with_auth_token("tok")
                .with_raw("probe_timeout", "3"),
        ));
        assert!(factory.http_client().is_ok());
    }

    #[test]
    fn test_should_build_checker_reading_config() {
        let (factory, _output) = Factory::test();
        let factory = factory.with_config(Box::new(
            MemoryConfig::new().with_api_url("https://example.com/api/"),
        ));
        let checker = factory.plugin_checker().unwrap();
        let probe = checker
            .probe(plugcheck_core::SupportedPlugin::Analytics)
            .unwrap();
        assert_eq!(probe.url, "https://example.com/analytics/app/kibana");
    }

    #[test]
    fn test_should_format_debug_with_version() {
        let (factory, _output) = Factory::test();
        let dbg = format!("{factory:?}");
        assert!(dbg.contains("app_version"));
    }
}
