//! Merge rules: defaults, override order, conflict handling.

use config::builder::DefaultState;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("resolver.resource_roots", vec!["."])?
        .set_default("logging.level", "info")
}

/// Environment layer: `PROPFILES_RESOLVER__MAX_INCLUDE_DEPTH=8`,
/// `PROPFILES_RESOLVER__RESOURCE_ROOTS=conf,/etc/app`. Applied last.
pub fn environment() -> Environment {
    Environment::with_prefix("PROPFILES")
        .prefix_separator("_")
        .separator("__")
        .list_separator(",")
        .with_list_parse_key("resolver.resource_roots")
        .try_parsing(true)
}
