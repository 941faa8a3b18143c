//! `plugcheck config set` command.

use anyhow::Result;
use clap::Args;

use plugcheck_api::probe::API_PATH_SUFFIX;
use plugcheck_core::config::Config;
use plugcheck_core::ios_eprintln;

use crate::factory::Factory;

/// Update configuration with a value for the given key.
#[derive(Debug, Args)]
pub struct SetArgs {
    /// The configuration key to set.
    key: String,
    /// The value to set.
    value: String,
}

impl SetArgs {
    /// Run the config set command.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value is invalid, or the
    /// configuration cannot be saved.
    pub fn run(&self, factory: &Factory) -> Result<()> {
        let cfg_lock = factory.config()?;
        let mut cfg = cfg_lock
            .write()
            .map_err(|e| anyhow::anyhow!("config lock: {e}"))?;

        cfg.set(&self.key, &self.value)
            .map_err(|e| anyhow::anyhow!("failed to set {:?}: {e}", self.key))?;
        Config::write(&**cfg)?;

        tracing::debug!(key = %self.key, "Updated configuration");

        if self.key == "api_url" && !self.value.ends_with(API_PATH_SUFFIX) {
            let cs = factory.io.color_scheme();
            ios_eprintln!(
                factory.io,
                "{} api_url does not end with {API_PATH_SUFFIX:?}; its last {} characters will be cut to find the server",
                cs.warning_icon(),
                API_PATH_SUFFIX.chars().count(),
            );
        }
        Ok(())
    }
}
