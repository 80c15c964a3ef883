//! Embedded-bundle backend over resources compiled into the binary.

use include_dir::Dir;

use crate::charset;
use crate::error::LoadError;
use crate::loader::ResourceLoader;

/// Loads resources from a directory tree embedded at compile time with
/// [`include_dir::include_dir!`].
///
/// The bundle handle plays the role the classloader plays for classpath
/// resources: the loader only composes search path and resource name,
/// trims any leading `/`, and looks the result up in the bundle. Lookups
/// cannot fail with an access error; the content either is in the binary
/// or it is not.
///
/// # Example
///
/// ```ignore
/// use include_dir::{Dir, include_dir};
/// use less_engine::EmbeddedLoader;
///
/// static STYLES: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/styles");
///
/// let loader = EmbeddedLoader::new(&STYLES);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedLoader {
    bundle: &'static Dir<'static>,
}

impl EmbeddedLoader {
    /// Create an embedded loader over a bundle.
    pub fn new(bundle: &'static Dir<'static>) -> Self {
        Self { bundle }
    }

    fn locate(&self, resource: &str, paths: &[String]) -> Option<&'static [u8]> {
        paths.iter().find_map(|path| {
            let candidate = format!("{path}{resource}");
            let candidate = candidate.trim_start_matches('/');
            self.bundle.get_file(candidate).map(|f| f.contents())
        })
    }
}

impl ResourceLoader for EmbeddedLoader {
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
        charset::decode(bytes, charset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use include_dir::include_dir;

    static FIXTURES: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/tests/fixtures/embedded");

    #[test]
    fn test_exists() {
        let loader = EmbeddedLoader::new(&FIXTURES);
        let paths = vec![String::new()];
        assert!(loader.exists("base.less", &paths).unwrap());
        assert!(!loader.exists("missing.less", &paths).unwrap());
    }

    #[test]
    fn test_load_under_search_path() {
        let loader = EmbeddedLoader::new(&FIXTURES);
        let paths = vec!["nested/".to_string()];
        let mut stack = Vec::new();
        let text = loader.load("extra.less", &paths, &mut stack, "UTF-8").unwrap();
        assert!(text.contains("padding"));
    }

    #[test]
    fn test_leading_slash_trimmed() {
        let loader = EmbeddedLoader::new(&FIXTURES);
        let paths = vec!["/".to_string()];
        assert!(loader.exists("base.less", &paths).unwrap());
    }

    #[test]
    fn test_load_missing_is_not_found() {
        let loader = EmbeddedLoader::new(&FIXTURES);
        let mut stack = Vec::new();
        let err = loader
            .load("missing.less", &[String::new()], &mut stack, "UTF-8")
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
