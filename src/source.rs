//! Property Sources
//!
//! A [`PropertySource`] opens byte streams for filesystem paths and named
//! resources. Loading is built on top of the openers: the stream is handed
//! to the reader by value, so it is closed as soon as the load returns,
//! whatever the outcome.

use crate::error::PropertyError;
use crate::properties::{read_properties, PropertySet};
use std::collections::HashMap;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};

mod fs;

pub use fs::FsPropertySource;

/// Capability to load flat property sets from paths and resource names.
pub trait PropertySource {
    /// Open the file at `path`. Missing files map to [`PropertyError::NotFound`].
    fn open_file(&self, path: &Path) -> Result<Box<dyn Read + '_>, PropertyError>;

    /// Open the resource called `name`, or `Ok(None)` when no resource by
    /// that name can be located.
    fn open_resource(&self, name: &str) -> Result<Option<Box<dyn Read + '_>>, PropertyError>;

    /// Load and parse a property file.
    fn load_file(&self, path: &Path) -> Result<PropertySet, PropertyError> {
        let stream = self.open_file(path)?;
        read_properties(stream, &path.display().to_string())
    }

    /// Load and parse a named resource.
    fn load_resource(&self, name: &str) -> Result<PropertySet, PropertyError> {
        match self.open_resource(name)? {
            Some(stream) => read_properties(stream, name),
            None => Err(PropertyError::ResourceNotFound(name.to_string())),
        }
    }
}

impl<S: PropertySource + ?Sized> PropertySource for &S {
    fn open_file(&self, path: &Path) -> Result<Box<dyn Read + '_>, PropertyError> {
        (**self).open_file(path)
    }

    fn open_resource(&self, name: &str) -> Result<Option<Box<dyn Read + '_>>, PropertyError> {
        (**self).open_resource(name)
    }
}

/// Property source backed by in-memory text, keyed by path and by name.
#[derive(Debug, Clone, Default)]
pub struct MemoryPropertySource {
    files: HashMap<PathBuf, String>,
    resources: HashMap<String, String>,
}

impl MemoryPropertySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        self.files.insert(path.into(), text.into());
        self
    }

    pub fn with_resource(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.resources.insert(name.into(), text.into());
        self
    }
}

impl PropertySource for MemoryPropertySource {
    fn open_file(&self, path: &Path) -> Result<Box<dyn Read + '_>, PropertyError> {
        self.files
            .get(path)
            .map(|text| Box::new(Cursor::new(text.as_bytes())) as Box<dyn Read + '_>)
            .ok_or_else(|| PropertyError::NotFound(path.to_path_buf()))
    }

    fn open_resource(&self, name: &str) -> Result<Option<Box<dyn Read + '_>>, PropertyError> {
        Ok(self
            .resources
            .get(name)
            .map(|text| Box::new(Cursor::new(text.as_bytes())) as Box<dyn Read + '_>))
    }
}
