//! Error types for property loading and include resolution.

use crate::resolver::IncludeRef;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading, parsing, or resolving property sets
#[derive(Debug, Error)]
pub enum PropertyError {
    #[error("Property file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Resource not found '{0}'")]
    ResourceNotFound(String),

    #[error("Malformed property input in {source_name} at line {line}: {reason}")]
    Malformed {
        source_name: String,
        line: usize,
        reason: String,
    },

    #[error("I/O error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Include depth {depth} exceeded while following {reference}")]
    IncludeDepthExceeded { depth: usize, reference: IncludeRef },
}

impl PropertyError {
    /// Map an error from opening or reading `path` to the matching kind.
    pub fn from_io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        let path = path.into();
        match err.kind() {
            std::io::ErrorKind::NotFound => PropertyError::NotFound(path),
            _ => PropertyError::Io { path, source: err },
        }
    }

    /// True for both the file and the resource flavour of "not found".
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            PropertyError::NotFound(_) | PropertyError::ResourceNotFound(_)
        )
    }
}

/// Errors surfaced by the tool layer (configuration, logging, CLI)
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Logging error: {0}")]
    LoggingError(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Property(#[from] PropertyError),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
