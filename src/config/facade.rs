//! Config loading entry points.

use super::merge::merge_policy;
use super::sources::{global_file, workspace_file};
use super::PropfilesConfig;
use config::{ConfigError, File, FileFormat};
use std::path::Path;
use tracing::debug;

/// Loads [`PropfilesConfig`] from its layered sources.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for `workspace_root`.
    ///
    /// Precedence (lowest to highest): defaults, global file, workspace
    /// `propfiles.toml`, `PROPFILES_*` environment variables.
    pub fn load(workspace_root: &Path) -> Result<PropfilesConfig, ConfigError> {
        let mut builder = merge_policy::builder_with_defaults()?;
        builder = global_file::add_to_builder(builder)?;
        builder = workspace_file::add_to_builder(builder, workspace_root)?;
        builder = builder.add_source(merge_policy::environment());

        let config: PropfilesConfig = builder.build()?.try_deserialize()?;
        debug!(
            workspace = %workspace_root.display(),
            resource_roots = config.resolver.resource_roots.len(),
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Load a single explicit TOML file over the defaults.
    pub fn load_from_file(path: &Path) -> Result<PropfilesConfig, ConfigError> {
        merge_policy::builder_with_defaults()?
            .add_source(File::from(path).format(FileFormat::Toml).required(true))
            .build()?
            .try_deserialize()
    }
}
