//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Holon CLI - access-control inspection
#[derive(Parser, Debug)]
#[command(name = "holon")]
#[command(author, version, about = "Holon access-control inspection tool", long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "HOLON_CONFIG")]
    pub config: Option<String>,

    /// Policy file, overriding the one named in the configuration
    #[arg(long, global = true, env = "HOLON_POLICY")]
    pub policy: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print every decision the engine makes for one user
    Check {
        /// Scenario file
        #[arg(short, long)]
        scenario: PathBuf,
        /// User id declared in the scenario
        #[arg(short, long)]
        user: String,
    },
    /// Print the ids of entities visible to one user
    Filter {
        /// Scenario file
        #[arg(short, long)]
        scenario: PathBuf,
        /// User id declared in the scenario
        #[arg(short, long)]
        user: String,
        /// Restrict output to one entity kind
        #[arg(short, long, value_enum)]
        kind: Option<KindArg>,
    },
    /// Policy operations
    Policy {
        #[command(subcommand)]
        action: PolicyAction,
    },
    /// Configuration operations
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Policy subcommands.
#[derive(Subcommand, Debug)]
pub enum PolicyAction {
    /// Print the effective policy as TOML
    Show,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the resolved config file path
    Path,
    /// Create a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Entity kind selector for `filter`.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum KindArg {
    /// Holons
    Holons,
    /// Relationships
    Relationships,
    /// Events
    Events,
}
