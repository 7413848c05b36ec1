//! Filesystem property source: plain paths plus resource lookup under an
//! ordered list of resource roots.

use super::PropertySource;
use crate::config::ResolverSettings;
use crate::error::PropertyError;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Component, Path, PathBuf};
use tracing::{debug, warn};

/// Reads property files from disk and resolves resource names against
/// `resource_roots`, first match wins.
#[derive(Debug, Clone, Default)]
pub struct FsPropertySource {
    resource_roots: Vec<PathBuf>,
}

impl FsPropertySource {
    pub fn new(resource_roots: Vec<PathBuf>) -> Self {
        Self { resource_roots }
    }

    /// Build from settings. Relative roots are anchored at `workspace_root`;
    /// roots that do not exist are kept but logged.
    pub fn from_settings(settings: &ResolverSettings, workspace_root: &Path) -> Self {
        let resource_roots = settings
            .resource_roots
            .iter()
            .map(|root| {
                let anchored = if root.is_absolute() {
                    root.clone()
                } else {
                    workspace_root.join(root)
                };
                match dunce::canonicalize(&anchored) {
                    Ok(canonical) => canonical,
                    Err(_) => {
                        warn!(root = %anchored.display(), "Resource root does not exist");
                        anchored
                    }
                }
            })
            .collect();
        Self { resource_roots }
    }

    pub fn resource_roots(&self) -> &[PathBuf] {
        &self.resource_roots
    }

    /// Find the file backing resource `name`. Names must be relative and
    /// may not climb out of a root.
    pub fn locate_resource(&self, name: &str) -> Option<PathBuf> {
        let relative = Path::new(name);
        let confined = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        if name.is_empty() || !confined {
            debug!(resource = name, "Rejected resource name outside resource roots");
            return None;
        }

        self.resource_roots
            .iter()
            .map(|root| root.join(relative))
            .find(|candidate| candidate.is_file())
    }
}

impl PropertySource for FsPropertySource {
    fn open_file(&self, path: &Path) -> Result<Box<dyn Read + '_>, PropertyError> {
        let file = File::open(path).map_err(|e| PropertyError::from_io(path, e))?;
        let metadata = file.metadata().map_err(|e| PropertyError::from_io(path, e))?;
        if !metadata.is_file() {
            return Err(PropertyError::NotFound(path.to_path_buf()));
        }
        Ok(Box::new(BufReader::new(file)))
    }

    fn open_resource(&self, name: &str) -> Result<Option<Box<dyn Read + '_>>, PropertyError> {
        let Some(path) = self.locate_resource(name) else {
            return Ok(None);
        };
        debug!(resource = name, path = %path.display(), "Located resource");
        let file = File::open(&path).map_err(|e| PropertyError::from_io(&path, e))?;
        Ok(Some(Box::new(BufReader::new(file))))
    }
}
