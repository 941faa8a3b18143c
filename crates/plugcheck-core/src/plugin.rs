//! Optional server plugins.
//!
//! The set of plugin kinds is closed. Only some of them can be detected by
//! probing the server; the rest are always reported as unsupported.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A plugin the backend server may or may not provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SupportedPlugin {
    /// Git repository integration for annotation tasks.
    GitIntegration,
    /// Automatic annotation through server-side models.
    AutoAnnotation,
    /// TensorFlow object detection annotation.
    TfAnnotation,
    /// TensorFlow segmentation annotation.
    TfSegmentation,
    /// Kibana-backed analytics.
    Analytics,
    /// Re-identification of tracked objects.
    Reid,
    /// Deep extreme cut segmentation.
    DextrSegmentation,
}

impl SupportedPlugin {
    /// Every plugin kind, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::GitIntegration,
        Self::AutoAnnotation,
        Self::TfAnnotation,
        Self::TfSegmentation,
        Self::Analytics,
        Self::Reid,
        Self::DextrSegmentation,
    ];

    /// Canonical upper-case identifier, e.g. `GIT_INTEGRATION`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GitIntegration => "GIT_INTEGRATION",
            Self::AutoAnnotation => "AUTO_ANNOTATION",
            Self::TfAnnotation => "TF_ANNOTATION",
            Self::TfSegmentation => "TF_SEGMENTATION",
            Self::Analytics => "ANALYTICS",
            Self::Reid => "REID",
            Self::DextrSegmentation => "DEXTR_SEGMENTATION",
        }
    }
}

impl fmt::Display for SupportedPlugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a plugin name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown plugin {0:?}")]
pub struct ParsePluginError(pub String);

impl FromStr for SupportedPlugin {
    type Err = ParsePluginError;

    /// Accepts `GIT_INTEGRATION`, `git_integration` and `git-integration`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('-', "_").to_uppercase();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == normalized)
            .ok_or_else(|| ParsePluginError(s.to_string()))
    }
}
