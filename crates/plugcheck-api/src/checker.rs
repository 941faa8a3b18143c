//! Plugin support detection.
//!
//! [`PluginChecker`] answers "does the configured server provide plugin P?"
//! by deriving a probe from the backend API URL and delegating to a
//! [`Reachability`] predicate. It keeps no state between calls: every check
//! re-reads the configuration and issues a fresh probe.

use std::sync::Arc;

use futures::future::try_join_all;
use plugcheck_core::SupportedPlugin;
use plugcheck_core::config::Config;
use tracing::debug;

use crate::probe::{ProbeDescriptor, probe_for, server_host};
use crate::reachability::Reachability;
use crate::support::PluginSupport;

/// Checks whether the configured server supports a plugin.
#[derive(Debug, Clone)]
pub struct PluginChecker<R> {
    config: Arc<dyn Config>,
    reachability: R,
}

impl<R: Reachability> PluginChecker<R> {
    /// Create a checker reading the API URL from `config`.
    pub fn new(config: Arc<dyn Config>, reachability: R) -> Self {
        Self {
            config,
            reachability,
        }
    }

    /// The probe that [`check`](Self::check) would issue for `plugin`, if any.
    pub fn probe(&self, plugin: SupportedPlugin) -> Option<ProbeDescriptor> {
        let host = server_host(&self.config.api_url());
        probe_for(plugin, &host)
    }

    /// Whether the configured server supports `plugin`.
    ///
    /// Plugins without a known probe are unsupported and cost no request.
    /// Otherwise the predicate's answer, or its error, is returned as is.
    pub async fn check(&self, plugin: SupportedPlugin) -> Result<bool, R::Error> {
        let Some(probe) = self.probe(plugin) else {
            debug!(%plugin, "No probe for plugin");
            return Ok(false);
        };

        debug!(%plugin, url = %probe.url, method = %probe.method, "Probing plugin");
        self.reachability
            .is_reachable(&probe.url, &probe.method)
            .await
    }

    /// Check every plugin concurrently.
    ///
    /// Each plugin gets its own probe; the first predicate error aborts the
    /// remaining checks.
    pub async fn check_all(&self) -> Result<PluginSupport, R::Error> {
        let checks = SupportedPlugin::ALL.into_iter().map(|plugin| async move {
            let supported = self.check(plugin).await?;
            Ok::<_, R::Error>((plugin, supported))
        });
        let results = try_join_all(checks).await?;
        Ok(results.into_iter().collect())
    }
}
