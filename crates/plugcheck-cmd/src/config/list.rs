//! `plugcheck config list` command.

use anyhow::Result;
use clap::Args;

use plugcheck_core::config::{CONFIG_OPTIONS, Config};
use plugcheck_core::ios_println;

use crate::factory::Factory;

/// Print a list of configuration keys and values.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Show the authentication token instead of masking it.
    #[arg(long)]
    show_token: bool,
}

impl ListArgs {
    /// Run the config list command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be read.
    pub fn run(&self, factory: &Factory) -> Result<()> {
        let cfg: &dyn Config = factory.config()?.as_ref();

        for option in CONFIG_OPTIONS {
            let value = option.current_value(cfg);
            if option.key == "auth_token" && !self.show_token {
                ios_println!(factory.io, "{}={}", option.key, mask_token(&value));
            } else {
                ios_println!(factory.io, "{}={value}", option.key);
            }
        }

        Ok(())
    }
}

/// Mask a token for display.
pub fn mask_token(token: &str) -> String {
    "*".repeat(token.chars().count())
}
