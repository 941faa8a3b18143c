//! `plugcheck check` command.
//!
//! Probes the configured server for one plugin, or for all of them with
//! `--all`. A single-plugin check exits non-zero when the plugin is not
//! supported so it can gate shell scripts.

use anyhow::Result;
use clap::Args;

use plugcheck_core::SupportedPlugin;
use plugcheck_core::cmdutil::{FlagError, SilentError};
use plugcheck_core::ios_println;

use crate::factory::Factory;

/// Check whether the configured server supports a plugin.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Plugin to check, e.g. `git_integration` or `analytics`.
    #[arg(conflicts_with = "all")]
    plugin: Option<SupportedPlugin>,
    /// Check every known plugin.
    #[arg(long)]
    all: bool,
    /// Print results as a JSON object (with --all).
    #[arg(long, requires = "all", conflicts_with = "dry_run")]
    json: bool,
    /// Print the probe that would be sent instead of sending it.
    #[arg(long)]
    dry_run: bool,
}

impl CheckArgs {
    /// Run the check command.
    ///
    /// # Errors
    ///
    /// Returns [`SilentError`] when a single plugin is unsupported, or the
    /// underlying error if the probe itself fails.
    pub async fn run(&self, factory: &Factory) -> Result<()> {
        let plugins = self.selected_plugins()?;

        if self.dry_run {
            return Self::print_probes(factory, &plugins);
        }

        let checker = factory.plugin_checker()?;
        let ios = &factory.io;
        let cs = ios.color_scheme();

        if let Some(plugin) = self.plugin {
            let supported = checker.check(plugin).await?;
            ios_println!(ios, "{}: {}", cs.bold(plugin.as_str()), status_text(supported));
            if !supported {
                return Err(SilentError.into());
            }
            return Ok(());
        }

        let support = checker.check_all().await?;
        if self.json {
            ios_println!(ios, "{}", serde_json::to_string_pretty(&support)?);
            return Ok(());
        }

        for (plugin, supported) in support.iter() {
            let icon = if supported {
                cs.success_icon()
            } else {
                cs.unsupported_icon()
            };
            ios_println!(ios, "{icon} {:<20} {}", plugin.as_str(), status_text(supported));
        }
        Ok(())
    }

    fn selected_plugins(&self) -> Result<Vec<SupportedPlugin>> {
        match (self.plugin, self.all) {
            (Some(plugin), _) => Ok(vec![plugin]),
            (None, true) => Ok(SupportedPlugin::ALL.to_vec()),
            (None, false) => Err(FlagError("specify a plugin or use --all".to_string()).into()),
        }
    }

    fn print_probes(factory: &Factory, plugins: &[SupportedPlugin]) -> Result<()> {
        let checker = factory.plugin_checker()?;
        let ios = &factory.io;
        for plugin in plugins {
            match checker.probe(*plugin) {
                Some(probe) => ios_println!(ios, "{plugin}: {probe}"),
                None => ios_println!(ios, "{plugin}: no probe"),
            }
        }
        Ok(())
    }
}

fn status_text(supported: bool) -> &'static str {
    if supported {
        "supported"
    } else {
        "not supported"
    }
}
