//! Include chain formatting for `chain`.

use crate::error::ApiError;
use crate::resolver::Resolution;
use serde_json::json;

pub fn format_chain_text(resolution: &Resolution) -> String {
    if resolution.chain.is_empty() {
        return "No include directives.".to_string();
    }
    resolution
        .chain
        .iter()
        .enumerate()
        .map(|(idx, reference)| format!("{}. {}", idx + 1, reference))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_chain_json(resolution: &Resolution) -> Result<String, ApiError> {
    let payload = json!({
        "chain": resolution.chain,
        "depth": resolution.chain.len(),
        "keys": resolution.properties.len(),
    });
    serde_json::to_string_pretty(&payload)
        .map_err(|e| ApiError::InvalidArgument(format!("Failed to serialize chain: {}", e)))
}
