//! CLI parse: clap types for propfiles. No behavior; definitions only.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// propfiles CLI - resolve property include chains
#[derive(Parser)]
#[command(name = "propfiles")]
#[command(about = "Resolve key=value property files that include one another")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory (relative resource roots and propfiles.toml)
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, default_value = "false")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve the include chain and print the merged properties
    Resolve {
        #[command(flatten)]
        seed: SeedArgs,
        /// Print only the value of this key
        #[arg(long)]
        key: Option<String>,
        /// Output format (text, json, table)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Show the includes followed during resolution, outermost first
    Chain {
        #[command(flatten)]
        seed: SeedArgs,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Parse a property file and report problems
    Check {
        /// Property file to check
        path: PathBuf,
    },
    /// Show the effective tool configuration
    Config {
        /// Output format (toml or json)
        #[arg(long, default_value = "toml")]
        format: String,
    },
}

/// Starting properties for a resolution.
#[derive(Args, Debug, Clone, Default)]
pub struct SeedArgs {
    /// Define a starting property (repeatable)
    #[arg(short = 'D', long = "define", value_name = "KEY=VALUE")]
    pub define: Vec<String>,

    /// Shorthand for -D include.file=PATH
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Shorthand for -D include.resource=NAME
    #[arg(long)]
    pub resource: Option<String>,
}
