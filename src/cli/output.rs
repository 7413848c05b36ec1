//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::{ApiError, PropertyError};

/// Map domain errors to a string for CLI output.
pub fn map_error(e: &ApiError) -> String {
    match e {
        ApiError::Property(PropertyError::ResourceNotFound(name)) => format!(
            "{} (searched the configured resource roots; see `propfiles config`)",
            PropertyError::ResourceNotFound(name.clone())
        ),
        other => other.to_string(),
    }
}
