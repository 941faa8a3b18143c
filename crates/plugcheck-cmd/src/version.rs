//! Version command implementation.

use clap::Args;

use plugcheck_core::ios_println;
use plugcheck_core::iostreams::IOStreams;

/// Show plugcheck version information.
#[derive(Debug, Args)]
pub struct VersionArgs {}

impl VersionArgs {
    /// Run the version command.
    pub fn run(&self, ios: &IOStreams, version: &str) {
        ios_println!(ios, "{}", format_version(version));
    }
}

/// Format version info for display.
pub fn format_version(version: &str) -> String {
    format!("plugcheck version {version}")
}
