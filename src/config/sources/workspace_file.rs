//! Workspace config file source: propfiles.toml at the workspace root

use crate::config::paths::WORKSPACE_CONFIG_FILE;
use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use config::FileFormat;
use std::path::Path;

/// Add the workspace config file to builder. Overrides the global file.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    workspace_root: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let workspace_config_path = workspace_root.join(WORKSPACE_CONFIG_FILE);
    if !workspace_config_path.is_file() {
        return Ok(builder);
    }

    Ok(builder.add_source(
        File::from(workspace_config_path.as_path())
            .format(FileFormat::Toml)
            .required(false),
    ))
}
