//! propfiles: recursive include-and-merge resolution for property files
//!
//! A property set may name another set to build on through `include.file`
//! or `include.resource`. Resolution loads that set, resolves its own
//! includes, and lays the original values on top so the caller always wins.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod properties;
pub mod resolver;
pub mod source;
pub mod store;

pub use error::{ApiError, PropertyError};
pub use properties::{PropertySet, INCLUDE_FILE, INCLUDE_RESOURCE};
pub use resolver::{IncludeRef, IncludeResolver, Resolution, ResolverOptions};
pub use source::{FsPropertySource, MemoryPropertySource, PropertySource};
pub use store::{
    load_and_resolve_global_config, load_process_config, process_store, GlobalConfigStore,
    MemoryStore,
};
