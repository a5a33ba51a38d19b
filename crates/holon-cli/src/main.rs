//! Holon CLI
//!
//! Command-line interface for inspecting access-control decisions.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use holon_cli::HolonConfig;
use holon_cli::cli::{Cli, Command};
use holon_cli::commands;

fn main() -> Result<()> {
    let args = Cli::parse();
    let config = HolonConfig::load(args.config.as_deref())?;

    // RUST_LOG wins over the configured filter
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if args.verbose {
            "debug"
        } else {
            config.log_filter.as_str()
        })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(?args, "parsed arguments");

    match args.command {
        Command::Check { scenario, user } => {
            let policy = config.load_policy(args.policy.as_deref())?;
            commands::cmd_check(&scenario, &user, policy)?;
        }
        Command::Filter {
            scenario,
            user,
            kind,
        } => {
            let policy = config.load_policy(args.policy.as_deref())?;
            commands::cmd_filter(&scenario, &user, kind, policy)?;
        }
        Command::Policy { action } => {
            let policy = config.load_policy(args.policy.as_deref())?;
            commands::handle_policy_command(&policy, action)?;
        }
        Command::Config { action } => {
            commands::handle_config_command(args.config.as_deref(), action)?;
        }
    }

    Ok(())
}
