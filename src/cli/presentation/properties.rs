//! Property set formatting for `resolve` and `check`.

use crate::error::ApiError;
use crate::properties::{write_properties, PropertySet};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;
use std::path::Path;

/// `key=value` lines in the same syntax the reader accepts.
pub fn format_properties_text(props: &PropertySet) -> Result<String, ApiError> {
    let mut buffer = Vec::new();
    write_properties(props, &mut buffer)
        .map_err(|e| ApiError::InvalidArgument(format!("Failed to render properties: {}", e)))?;
    let text = String::from_utf8_lossy(&buffer);
    Ok(text.trim_end_matches('\n').to_string())
}

pub fn format_properties_json(props: &PropertySet) -> Result<String, ApiError> {
    serde_json::to_string_pretty(props)
        .map_err(|e| ApiError::InvalidArgument(format!("Failed to serialize properties: {}", e)))
}

pub fn format_properties_table(props: &PropertySet) -> String {
    if props.is_empty() {
        return "No properties.".to_string();
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY).set_header(vec!["Key", "Value"]);
    for (key, value) in props.iter() {
        table.add_row(vec![key, value]);
    }
    table.to_string()
}

pub fn format_check_result(path: &Path, props: &PropertySet) -> String {
    format!(
        "{} {} ({} {})",
        "OK".green(),
        path.display(),
        props.len(),
        if props.len() == 1 { "key" } else { "keys" }
    )
}
