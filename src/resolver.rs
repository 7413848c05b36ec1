//! Include Resolution
//!
//! Follows `include.file` / `include.resource` directives to load the set a
//! property set builds on, resolves that set's own includes, then lays the
//! original set over the result. Values closer to the caller always win.
//!
//! A present, non-empty `include.file` is followed and `include.resource`
//! is not looked at. Otherwise a non-empty `include.resource` is followed.
//! Directive keys are kept in the merged output.

use crate::error::PropertyError;
use crate::properties::{PropertySet, INCLUDE_FILE, INCLUDE_RESOURCE};
use crate::source::PropertySource;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Target of an include directive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "target", rename_all = "lowercase")]
pub enum IncludeRef {
    File(PathBuf),
    Resource(String),
}

impl IncludeRef {
    /// Directive requested by `properties`, if any.
    pub fn from_properties(properties: &PropertySet) -> Option<Self> {
        if let Some(path) = properties.non_empty(INCLUDE_FILE) {
            return Some(IncludeRef::File(PathBuf::from(path)));
        }
        properties
            .non_empty(INCLUDE_RESOURCE)
            .map(|name| IncludeRef::Resource(name.to_string()))
    }
}

impl fmt::Display for IncludeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IncludeRef::File(path) => write!(f, "file '{}'", path.display()),
            IncludeRef::Resource(name) => write!(f, "resource '{}'", name),
        }
    }
}

/// Resolver tuning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolverOptions {
    /// Maximum number of includes followed from the starting set. `None`
    /// follows chains without limit, so a cyclic chain never terminates.
    pub max_depth: Option<usize>,
}

/// Result of a traced resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub properties: PropertySet,
    /// Includes followed, outermost first.
    pub chain: Vec<IncludeRef>,
}

/// Resolves include chains against a [`PropertySource`].
#[derive(Debug, Clone)]
pub struct IncludeResolver<S> {
    source: S,
    options: ResolverOptions,
}

impl<S: PropertySource> IncludeResolver<S> {
    pub fn new(source: S) -> Self {
        Self::with_options(source, ResolverOptions::default())
    }

    pub fn with_options(source: S, options: ResolverOptions) -> Self {
        Self { source, options }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn options(&self) -> ResolverOptions {
        self.options
    }

    /// Load the set named by `properties`' include directive.
    ///
    /// Returns `Ok(None)` without touching the source when no directive is
    /// set.
    pub fn resolve_include_directive(
        &self,
        properties: &PropertySet,
    ) -> Result<Option<PropertySet>, PropertyError> {
        IncludeRef::from_properties(properties)
            .map(|reference| self.load(&reference))
            .transpose()
    }

    /// Resolve the full include chain below `properties` and merge
    /// `properties` on top.
    pub fn resolve_properties(&self, properties: PropertySet) -> Result<PropertySet, PropertyError> {
        let mut chain = Vec::new();
        self.resolve_at(properties, 0, &mut chain)
    }

    /// Same as [`resolve_properties`](Self::resolve_properties), also
    /// reporting the includes that were followed.
    pub fn resolve_traced(&self, properties: PropertySet) -> Result<Resolution, PropertyError> {
        let mut chain = Vec::new();
        let properties = self.resolve_at(properties, 0, &mut chain)?;
        Ok(Resolution { properties, chain })
    }

    fn resolve_at(
        &self,
        properties: PropertySet,
        depth: usize,
        chain: &mut Vec<IncludeRef>,
    ) -> Result<PropertySet, PropertyError> {
        let Some(reference) = IncludeRef::from_properties(&properties) else {
            trace!(depth, "No include directive");
            return Ok(properties);
        };

        if let Some(max_depth) = self.options.max_depth {
            if depth >= max_depth {
                return Err(PropertyError::IncludeDepthExceeded {
                    depth: max_depth,
                    reference,
                });
            }
        }

        debug!(include = %reference, depth, "Following include directive");
        let included = self.load(&reference)?;
        chain.push(reference);

        let mut resolved = self.resolve_at(included, depth + 1, chain)?;
        resolved.merge_overwrite(&properties);
        Ok(resolved)
    }

    fn load(&self, reference: &IncludeRef) -> Result<PropertySet, PropertyError> {
        match reference {
            IncludeRef::File(path) => self.source.load_file(Path::new(path)),
            IncludeRef::Resource(name) => self.source.load_resource(name),
        }
    }
}
