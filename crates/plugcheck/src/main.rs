//! plugcheck - detect optional plugins on a backend server.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use plugcheck_cmd::factory::Factory;

/// Process exit codes.
mod exit_codes {
    pub const OK: i32 = 0;
    pub const ERROR: i32 = 1;
    pub const USAGE: i32 = 2;
}

/// Detect which optional plugins the configured server provides.
#[derive(Debug, Parser)]
#[command(
    name = "plugcheck",
    version,
    about = "Detect which optional plugins a backend server provides"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Check whether the server supports a plugin.
    Check(plugcheck_cmd::check::CheckArgs),
    /// Manage configuration for plugcheck.
    #[command(subcommand)]
    Config(plugcheck_cmd::config::ConfigCommand),
    /// Show version information.
    Version(plugcheck_cmd::version::VersionArgs),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("PLUGCHECK_DEBUG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let factory = Factory::new(env!("CARGO_PKG_VERSION").to_string());

    let exit_code = if let Some(cmd) = cli.command {
        match run_command(cmd, &factory).await {
            Ok(()) => exit_codes::OK,
            Err(e) => {
                if e.downcast_ref::<plugcheck_core::cmdutil::SilentError>().is_some() {
                    exit_codes::ERROR
                } else if e.downcast_ref::<plugcheck_core::cmdutil::FlagError>().is_some() {
                    plugcheck_core::ios_eprintln!(factory.io, "{e}");
                    exit_codes::USAGE
                } else {
                    tracing::error!("{e:#}");
                    exit_codes::ERROR
                }
            }
        }
    } else {
        use clap::CommandFactory;
        Cli::command().print_help().ok();
        println!();
        exit_codes::OK
    };

    std::process::exit(exit_code);
}

async fn run_command(cmd: Commands, factory: &Factory) -> anyhow::Result<()> {
    match cmd {
        Commands::Check(args) => args.run(factory).await,
        Commands::Config(sub) => sub.run(factory),
        Commands::Version(args) => {
            args.run(&factory.io, env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
