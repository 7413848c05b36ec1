//! Global Configuration Store
//!
//! Process-wide key-value state that top-level resolution reads as its
//! starting point and replaces with its result. The store is passed in
//! explicitly; [`process_store`] is the one process-wide instance for the
//! startup use case.

use crate::error::PropertyError;
use crate::properties::PropertySet;
use crate::resolver::IncludeResolver;
use crate::source::PropertySource;
use parking_lot::RwLock;
use std::sync::OnceLock;
use tracing::info;

/// Mutable configuration state read and replaced wholesale.
pub trait GlobalConfigStore {
    /// Copy of the current contents.
    fn snapshot(&self) -> PropertySet;

    /// Replace the contents in a single assignment.
    fn replace(&self, properties: PropertySet);
}

/// In-memory store guarded by a read-write lock.
#[derive(Debug, Default)]
pub struct MemoryStore {
    properties: RwLock<PropertySet>,
}

impl MemoryStore {
    pub fn new(properties: PropertySet) -> Self {
        Self {
            properties: RwLock::new(properties),
        }
    }

    /// Set a single key; used to seed the store before resolution.
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.properties.write().set(key, value);
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.properties.read().get(key).map(str::to_string)
    }
}

impl GlobalConfigStore for MemoryStore {
    fn snapshot(&self) -> PropertySet {
        self.properties.read().clone()
    }

    fn replace(&self, properties: PropertySet) {
        *self.properties.write() = properties;
    }
}

static PROCESS_STORE: OnceLock<MemoryStore> = OnceLock::new();

/// The process-wide store, empty until something seeds it.
pub fn process_store() -> &'static MemoryStore {
    PROCESS_STORE.get_or_init(MemoryStore::default)
}

/// Resolve the store's current contents and write the result back once.
///
/// The snapshot is resolved off to the side; on error nothing is written
/// and the store keeps its previous contents.
pub fn load_and_resolve_global_config<G, S>(
    store: &G,
    resolver: &IncludeResolver<S>,
) -> Result<(), PropertyError>
where
    G: GlobalConfigStore + ?Sized,
    S: PropertySource,
{
    let snapshot = store.snapshot();
    let before = snapshot.len();
    let resolved = resolver.resolve_properties(snapshot)?;
    info!(
        before,
        after = resolved.len(),
        "Replacing global configuration with resolved properties"
    );
    store.replace(resolved);
    Ok(())
}

/// [`load_and_resolve_global_config`] against [`process_store`]. Meant to
/// run once at startup, before other threads read configuration.
pub fn load_process_config<S: PropertySource>(
    resolver: &IncludeResolver<S>,
) -> Result<(), PropertyError> {
    load_and_resolve_global_config(process_store(), resolver)
}
