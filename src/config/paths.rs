//! Config file locations.

use std::path::PathBuf;

/// File name of the per-workspace config.
pub const WORKSPACE_CONFIG_FILE: &str = "propfiles.toml";

/// Path to the global config file: `$XDG_CONFIG_HOME/propfiles/config.toml`,
/// falling back to `~/.config/propfiles/config.toml`.
pub fn global_config_path() -> Option<PathBuf> {
    let config_home = std::env::var_os("XDG_CONFIG_HOME")
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .or_else(|| {
            directories::BaseDirs::new().map(|dirs| dirs.home_dir().join(".config"))
        })?;
    Some(config_home.join("propfiles").join("config.toml"))
}
