//! CLI route: single route table and run context. Dispatches to the
//! resolver, the store, and presentation.

use crate::cli::help::command_name;
use crate::cli::parse::{Commands, SeedArgs};
use crate::cli::presentation::{
    format_chain_json, format_chain_text, format_check_result, format_properties_json,
    format_properties_table, format_properties_text,
};
use crate::config::{ConfigLoader, PropfilesConfig};
use crate::error::ApiError;
use crate::properties::{PropertySet, INCLUDE_FILE, INCLUDE_RESOURCE};
use crate::resolver::IncludeResolver;
use crate::source::{FsPropertySource, PropertySource};
use crate::store::{load_and_resolve_global_config, GlobalConfigStore, MemoryStore};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info_span};

/// Runtime context for CLI execution: workspace and loaded configuration.
pub struct RunContext {
    workspace_root: PathBuf,
    config: PropfilesConfig,
}

impl RunContext {
    /// Create run context from workspace root and optional config path.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = if let Some(ref cfg_path) = config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load(&workspace_root)?
        };

        config.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ApiError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;

        Ok(Self {
            workspace_root,
            config,
        })
    }

    pub fn config(&self) -> &PropfilesConfig {
        &self.config
    }

    /// Resolver over the filesystem using the configured resource roots.
    pub fn resolver(&self) -> IncludeResolver<FsPropertySource> {
        let source = FsPropertySource::from_settings(&self.config.resolver, &self.workspace_root);
        IncludeResolver::with_options(source, self.config.resolver.options())
    }

    /// Execute a command and return its printable output.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        let span = info_span!("command", command = command_name(command));
        let _entered = span.enter();
        let started = Instant::now();

        let result = match command {
            Commands::Resolve { seed, key, format } => self.handle_resolve(seed, key.as_deref(), format),
            Commands::Chain { seed, format } => self.handle_chain(seed, format),
            Commands::Check { path } => self.handle_check(path),
            Commands::Config { format } => self.handle_config(format),
        };

        debug!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            ok = result.is_ok(),
            "Command finished"
        );
        result
    }

    fn handle_resolve(&self, seed: &SeedArgs, key: Option<&str>, format: &str) -> Result<String, ApiError> {
        let store = MemoryStore::new(seed_properties(seed)?);
        load_and_resolve_global_config(&store, &self.resolver())?;
        let resolved = store.snapshot();

        if let Some(key) = key {
            return resolved
                .get(key)
                .map(str::to_string)
                .ok_or_else(|| ApiError::InvalidArgument(format!("Key not found: {}", key)));
        }

        match format {
            "text" => format_properties_text(&resolved),
            "json" => format_properties_json(&resolved),
            "table" => Ok(format_properties_table(&resolved)),
            other => Err(ApiError::InvalidArgument(format!(
                "Invalid format: {} (must be 'text', 'json', or 'table')",
                other
            ))),
        }
    }

    fn handle_chain(&self, seed: &SeedArgs, format: &str) -> Result<String, ApiError> {
        let resolution = self.resolver().resolve_traced(seed_properties(seed)?)?;
        match format {
            "text" => Ok(format_chain_text(&resolution)),
            "json" => format_chain_json(&resolution),
            other => Err(ApiError::InvalidArgument(format!(
                "Invalid format: {} (must be 'text' or 'json')",
                other
            ))),
        }
    }

    fn handle_check(&self, path: &Path) -> Result<String, ApiError> {
        let props = self.resolver().source().load_file(path)?;
        Ok(format_check_result(path, &props))
    }

    fn handle_config(&self, format: &str) -> Result<String, ApiError> {
        match format {
            "toml" => toml::to_string_pretty(&self.config)
                .map_err(|e| ApiError::ConfigError(format!("Failed to serialize config: {}", e))),
            "json" => serde_json::to_string_pretty(&self.config)
                .map_err(|e| ApiError::ConfigError(format!("Failed to serialize config: {}", e))),
            other => Err(ApiError::InvalidArgument(format!(
                "Invalid format: {} (must be 'toml' or 'json')",
                other
            ))),
        }
    }
}

/// Starting property set from `-D` definitions and the include shorthands.
/// The shorthands are applied after `-D` and win over it.
pub fn seed_properties(seed: &SeedArgs) -> Result<PropertySet, ApiError> {
    let mut props = PropertySet::new();
    for definition in &seed.define {
        let (key, value) = parse_definition(definition)?;
        props.set(key, value);
    }
    if let Some(ref file) = seed.file {
        props.set(INCLUDE_FILE, file.display().to_string());
    }
    if let Some(ref resource) = seed.resource {
        props.set(INCLUDE_RESOURCE, resource.clone());
    }
    Ok(props)
}

/// Split `KEY=VALUE`; a bare `KEY` defines an empty value.
fn parse_definition(definition: &str) -> Result<(&str, &str), ApiError> {
    let (key, value) = definition.split_once('=').unwrap_or((definition, ""));
    let key = key.trim();
    if key.is_empty() {
        return Err(ApiError::InvalidArgument(format!(
            "Invalid definition '{}': key cannot be empty",
            definition
        )));
    }
    Ok((key, value))
}
