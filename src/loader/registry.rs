//! Published-resource backend.
//!
//! Some deployments publish stylesheets through a naming service instead
//! of a filesystem: resources are bound under well-known names at startup
//! and looked up by composed name at compile time. [`ResourceRegistry`] is
//! that lookup seam; [`MapRegistry`] is the bundled in-memory
//! implementation with bind/unbind-style mutation.

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::charset;
use crate::error::LoadError;
use crate::loader::ResourceLoader;

/// Lookup seam for resources published under composed names.
///
/// Implementations must be `Send + Sync`: one registry serves concurrent
/// compile invocations. Return `Some(bytes)` for a published name, `None`
/// to let the chain keep trying other backends.
pub trait ResourceRegistry: Send + Sync {
    /// Look up the raw bytes published under `name`.
    fn lookup(&self, name: &str) -> Option<Vec<u8>>;
}

/// A simple map-backed [`ResourceRegistry`].
///
/// # Example
///
/// ```ignore
/// use less_engine::{MapRegistry, RegistryLoader};
///
/// let registry = MapRegistry::new();
/// registry.publish("themes/dark.less", "@color: #222;");
///
/// let loader = RegistryLoader::new(registry);
/// ```
#[derive(Default)]
pub struct MapRegistry {
    entries: RwLock<FxHashMap<String, Vec<u8>>>,
}

impl MapRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish a resource with string content.
    pub fn publish(&self, name: impl Into<String>, content: impl AsRef<str>) {
        self.publish_bytes(name, content.as_ref().as_bytes().to_vec());
    }

    /// Publish a resource with binary content.
    pub fn publish_bytes(&self, name: impl Into<String>, content: impl Into<Vec<u8>>) {
        self.entries.write().insert(name.into(), content.into());
    }

    /// Remove a published resource, returning its content if present.
    pub fn retract(&self, name: &str) -> Option<Vec<u8>> {
        self.entries.write().remove(name)
    }

    /// Check whether a name is published.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.read().contains_key(name)
    }

    /// Number of published resources.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Check whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl ResourceRegistry for MapRegistry {
    fn lookup(&self, name: &str) -> Option<Vec<u8>> {
        self.entries.read().get(name).cloned()
    }
}

/// Loads resources published through a [`ResourceRegistry`].
///
/// Each search path is composed with the resource name and the result
/// looked up verbatim; registries decide their own name layout.
#[derive(Clone)]
pub struct RegistryLoader {
    registry: Arc<dyn ResourceRegistry>,
}

impl RegistryLoader {
    /// Create a registry loader.
    pub fn new(registry: impl ResourceRegistry + 'static) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// Create a registry loader from a shared registry handle.
    pub fn from_shared(registry: Arc<dyn ResourceRegistry>) -> Self {
        Self { registry }
    }

    fn locate(&self, resource: &str, paths: &[String]) -> Option<Vec<u8>> {
        paths
            .iter()
            .find_map(|path| self.registry.lookup(&format!("{path}{resource}")))
    }
}

impl ResourceLoader for RegistryLoader {
    fn exists(&self, resource: &str, paths: &[String]) -> Result<bool, LoadError> {
        Ok(self.locate(resource, paths).is_some())
    }

    fn load(
        &self,
        resource: &str,
        paths: &[String],
        _include_stack: &mut Vec<String>,
        charset: &str,
    ) -> Result<String, LoadError> {
        let Some(bytes) = self.locate(resource, paths) else {
            return Err(LoadError::not_found(resource, paths));
        };
        charset::decode(&bytes, charset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_and_load() {
        let registry = MapRegistry::new();
        registry.publish("themes/dark.less", "@color: #222;");

        let loader = RegistryLoader::new(registry);
        let paths = vec!["themes/".to_string()];
        assert!(loader.exists("dark.less", &paths).unwrap());

        let mut stack = Vec::new();
        let text = loader.load("dark.less", &paths, &mut stack, "UTF-8").unwrap();
        assert_eq!(text, "@color: #222;");
    }

    #[test]
    fn test_retract() {
        let registry = MapRegistry::new();
        registry.publish("a.less", "x");
        assert!(registry.contains("a.less"));
        registry.retract("a.less");
        assert!(registry.is_empty());
    }

    #[test]
    fn test_unpublished_is_not_found() {
        let loader = RegistryLoader::new(MapRegistry::new());
        let mut stack = Vec::new();
        let err = loader
            .load("a.less", &[String::new()], &mut stack, "UTF-8")
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_search_path_order() {
        let registry = MapRegistry::new();
        registry.publish("override/a.less", "override");
        registry.publish("base/a.less", "base");

        let loader = RegistryLoader::new(registry);
        let paths = vec!["override/".to_string(), "base/".to_string()];
        let mut stack = Vec::new();
        let text = loader.load("a.less", &paths, &mut stack, "UTF-8").unwrap();
        assert_eq!(text, "override");
    }
}
