//! Global config file source: $XDG_CONFIG_HOME/propfiles/config.toml or ~/.config/propfiles/config.toml

use crate::config::paths::global_config_path;
use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use config::FileFormat;
use std::path::Path;
use tracing::warn;

/// Add global config file source to builder if it exists.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    match global_config_path() {
        Some(global_path) => add_path_to_builder(builder, &global_path),
        None => Ok(builder),
    }
}

fn add_path_to_builder(
    mut builder: ConfigBuilder<DefaultState>,
    global_path: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    if global_path.is_file() {
        let canonical = dunce::canonicalize(global_path).unwrap_or_else(|_| global_path.to_path_buf());
        builder = builder.add_source(
            File::from(canonical.as_path())
                .format(FileFormat::Toml)
                .required(false),
        );
    } else {
        warn!(
            config_path = %global_path.display(),
            "Global configuration file not found; using defaults. \
             Consider creating it for user-level defaults."
        );
    }
    Ok(builder)
}
