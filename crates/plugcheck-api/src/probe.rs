//! Probe descriptors for plugins that can be detected over HTTP.
//!
//! The backend API URL ends in a fixed `/api/` segment. Removing it yields
//! the server host that plugin endpoints hang off.

use std::fmt;

use plugcheck_core::SupportedPlugin;
use reqwest::Method;
use tracing::warn;

/// Trailing segment of the configured API URL.
pub const API_PATH_SUFFIX: &str = "/api/";

/// Path probed for [`SupportedPlugin::GitIntegration`].
pub const GIT_INTEGRATION_PATH: &str = "/git/repository/meta/get";

/// Path probed for [`SupportedPlugin::Analytics`].
pub const ANALYTICS_PATH: &str = "/analytics/app/kibana";

/// URL and method of a single reachability probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeDescriptor {
    /// Absolute URL to probe.
    pub url: String,
    /// HTTP method to probe with.
    pub method: Method,
}

impl fmt::Display for ProbeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.url)
    }
}

/// Derive the server host from the backend API URL.
///
/// Removes exactly `API_PATH_SUFFIX.len()` trailing characters. A URL that
/// does not end with the suffix is still truncated by the same amount, so a
/// misconfigured URL produces a malformed probe rather than a silent fix-up.
pub fn server_host(api_url: &str) -> String {
    if let Some(host) = api_url.strip_suffix(API_PATH_SUFFIX) {
        return host.to_string();
    }

    warn!(
        api_url,
        suffix = API_PATH_SUFFIX,
        "API URL does not end with the expected suffix"
    );
    let strip = API_PATH_SUFFIX.chars().count();
    let cut = api_url
        .char_indices()
        .rev()
        .nth(strip - 1)
        .map_or(0, |(idx, _)| idx);
    api_url[..cut].to_string()
}

/// Probe for `plugin` on `host`, or `None` if the plugin cannot be detected.
pub fn probe_for(plugin: SupportedPlugin, host: &str) -> Option<ProbeDescriptor> {
    let (path, method) = match plugin {
        SupportedPlugin::GitIntegration => (GIT_INTEGRATION_PATH, Method::OPTIONS),
        SupportedPlugin::Analytics => (ANALYTICS_PATH, Method::GET),
        SupportedPlugin::AutoAnnotation
        | SupportedPlugin::TfAnnotation
        | SupportedPlugin::TfSegmentation
        | SupportedPlugin::Reid
        | SupportedPlugin::DextrSegmentation => return None,
    };
    Some(ProbeDescriptor {
        url: format!("{host}{path}"),
        method,
    })
}
