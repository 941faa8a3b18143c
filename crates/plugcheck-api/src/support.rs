//! Detected plugin support for a server.

use std::collections::BTreeMap;

use plugcheck_core::SupportedPlugin;
use serde::Serialize;

/// Which plugins a server supports, keyed in declaration order.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PluginSupport(BTreeMap<SupportedPlugin, bool>);

impl PluginSupport {
    /// Whether `plugin` was detected. Plugins never checked count as unsupported.
    pub fn is_supported(&self, plugin: SupportedPlugin) -> bool {
        self.0.get(&plugin).copied().unwrap_or(false)
    }

    /// Iterate over all checked plugins and their status.
    pub fn iter(&self) -> impl Iterator<Item = (SupportedPlugin, bool)> + '_ {
        self.0.iter().map(|(p, s)| (*p, *s))
    }

    /// Iterate over supported plugins only.
    pub fn supported(&self) -> impl Iterator<Item = SupportedPlugin> + '_ {
        self.iter().filter_map(|(p, s)| s.then_some(p))
    }
}

impl FromIterator<(SupportedPlugin, bool)> for PluginSupport {
    fn from_iter<I: IntoIterator<Item = (SupportedPlugin, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
