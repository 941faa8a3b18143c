//! `plugcheck config get` command.

use anyhow::Result;
use clap::Args;

use plugcheck_core::config::{CONFIG_OPTIONS, Config};
use plugcheck_core::ios_println;

use crate::factory::Factory;

/// Print the value of a given configuration key.
#[derive(Debug, Args)]
pub struct GetArgs {
    /// The configuration key to read.
    key: String,
}

impl GetArgs {
    /// Run the config get command.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is not a known configuration key.
    pub fn run(&self, factory: &Factory) -> Result<()> {
        if !CONFIG_OPTIONS.iter().any(|o| o.key == self.key) {
            anyhow::bail!(
                "could not find key \"{}\"; known keys:\n{}",
                self.key,
                known_keys()
            );
        }

        let cfg = factory.config()?;
        let value = cfg.get_or_default(&self.key);
        if !value.is_empty() {
            ios_println!(factory.io, "{value}");
        }
        Ok(())
    }
}

fn known_keys() -> String {
    CONFIG_OPTIONS
        .iter()
        .map(|o| format!("  {:<15} {}", o.key, o.description))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    use plugcheck_core::config::MemoryConfig;

    use crate::test_helpers::TestHarness;

    fn get(key: &str) -> GetArgs {
        GetArgs {
            key: key.to_string(),
        }
    }

    #[tokio::test]
    async fn test_should_get_default_probe_timeout() {
        let h = TestHarness::with_config(MemoryConfig::new()).await;
        get("probe_timeout").run(&h.factory).unwrap();
        assert_eq!(h.stdout().trim(), "10");
    }

    #[tokio::test]
    async fn test_should_get_set_value() {
        let h = TestHarness::with_config(
            MemoryConfig::new().with_api_url("https://cvat.example.org/api/"),
        )
        .await;
        get("api_url").run(&h.factory).unwrap();
        assert_eq!(h.stdout().trim(), "https://cvat.example.org/api/");
    }

    #[tokio::test]
    async fn test_should_print_nothing_for_unset_token() {
        let h = TestHarness::new().await;
        get("auth_token").run(&h.factory).unwrap();
        assert_eq!(h.stdout(), "");
    }

    #[tokio::test]
    async fn test_should_error_for_unknown_key() {
        let h = TestHarness::new().await;
        let err = get("editor").run(&h.factory).unwrap_err();
        let msg = err.to_string();
        assert!(msg.starts_with("could not find key \"editor\""));
        assert!(msg.contains("  probe_timeout   seconds to wait for a probe response"));
        assert_eq!(msg.lines().count(), 1 + CONFIG_OPTIONS.len());
    }
}
