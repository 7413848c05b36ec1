//! CLI command-name contract for logging.

use crate::cli::parse::Commands;

/// Command name recorded on the command span (e.g. "resolve", "chain").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Resolve { .. } => "resolve",
        Commands::Chain { .. } => "chain",
        Commands::Check { .. } => "check",
        Commands::Config { .. } => "config",
    }
}
