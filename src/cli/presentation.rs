//! CLI presentation: text, json, and table formatters per command family.

mod chain;
mod properties;

pub use chain::{format_chain_json, format_chain_text};
pub use properties::{
    format_check_result, format_properties_json, format_properties_table,
    format_properties_text,
};
