//! Configuration System
//!
//! Settings for the propfiles tool itself: where named resources are looked
//! up, how deep include chains may go, and logging. Layered from defaults,
//! the global config file, the workspace `propfiles.toml`, and `PROPFILES_*`
//! environment variables, in increasing precedence.

use crate::logging::LoggingConfig;
use crate::resolver::ResolverOptions;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

mod facade;
mod merge;
mod paths;
mod sources;

pub use facade::ConfigLoader;
pub use paths::{global_config_path, WORKSPACE_CONFIG_FILE};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PropfilesConfig {
    /// Include resolution settings
    #[serde(default)]
    pub resolver: ResolverSettings,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Include resolution settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverSettings {
    /// Directories searched, in order, for `include.resource` names.
    /// Relative entries are anchored at the workspace root.
    #[serde(default = "default_resource_roots")]
    pub resource_roots: Vec<PathBuf>,

    /// Maximum include chain length; unset means unbounded.
    #[serde(default)]
    pub max_include_depth: Option<usize>,
}

fn default_resource_roots() -> Vec<PathBuf> {
    vec![PathBuf::from(".")]
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            resource_roots: default_resource_roots(),
            max_include_depth: None,
        }
    }
}

impl ResolverSettings {
    pub fn options(&self) -> ResolverOptions {
        ResolverOptions {
            max_depth: self.max_include_depth,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self
            .resource_roots
            .iter()
            .any(|root| root.as_os_str().is_empty())
        {
            return Err("Resource roots cannot contain empty paths".to_string());
        }
        if self.max_include_depth == Some(0) {
            return Err("max_include_depth must be at least 1 when set".to_string());
        }
        Ok(())
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Resolver(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Resolver(msg) => write!(f, "Resolver: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl PropfilesConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.resolver.validate() {
            errors.push(ValidationError::Resolver(e));
        }
        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
