//! CLI domain: parse, route, help, output, and presentation only.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use output::map_error;
pub use parse::{Cli, Commands, SeedArgs};
pub use presentation::{
    format_chain_json, format_chain_text, format_check_result, format_properties_json,
    format_properties_table, format_properties_text,
};
pub use route::{seed_properties, RunContext};
