//! CSS-extension-fallback decorator for plain-stylesheet compatibility.
//!
//! Lets an `@include` written against the `.less` extension resolve to a
//! sibling `.css` file when the `.less` one is absent. Multiple levels of
//! nesting work because two rewrites cooperate:
//!
//! 1. when a `.less` include does not exist, the lookup is retried with
//!    the extension changed to `.css`;
//! 2. whatever was fetched has every `.css` occurrence replaced with
//!    `.less`, so nested includes arrive back at step 1 in the expected
//!    form on the next recursive call.
//!
//! The step-2 substitution is a whole-text replace and also hits `.css`
//! substrings outside path positions (e.g. inside comments or string
//! values). That imprecision is inherited behavior that existing
//! stylesheet corpora rely on; it is preserved, not fixed.

use crate::error::LoadError;
use crate::loader::ResourceLoader;

/// The stylesheet language's native extension.
const PRIMARY_EXT: &str = ".less";
/// The plain-CSS extension the fallback retries with.
const COMPILED_EXT: &str = ".css";

/// Decorator resolving `.less` includes to `.css` siblings when needed.
///
/// Installed by the default-loader factory when the engine runs in
/// plain-stylesheet compatibility mode.
pub struct CssFallbackLoader<L> {
    inner: L,
}

impl<L: ResourceLoader> CssFallbackLoader<L> {
    /// Wrap a loader with the extension fallback.
    pub fn new(inner: L) -> Self {
        Self { inner }
    }
}

/// Rewrite a trailing primary extension to the compiled one.
fn with_compiled_ext(resource: &str) -> Option<String> {
    resource
        .strip_suffix(PRIMARY_EXT)
        .map(|stem| format!("{stem}{COMPILED_EXT}"))
}

impl<L: ResourceLoader> ResourceLoader for CssFallbackLoader<L> {
    fn exists(&self, resource: &str, paths: &[String]) -> Result<bool, LoadError> {
        if self.inner.exists(resource, paths)? {
            return Ok(true);
        }
        match with_compiled_ext(resource) {
            Some(fallback) => self.inner.exists(&fallback, paths),
            None => Ok(false),
        }
    }

    fn load(
        &self,
        resource: &str,
        paths: &[String],
        include_stack: &mut Vec<String>,
        charset: &str,
    ) -> Result<String, LoadError> {
        let content = match self.inner.load(resource, paths, include_stack, charset) {
            Ok(content) => content,
            // Only a missing primary resource triggers the retry; access
            // and charset failures propagate untouched.
            Err(e) if e.is_not_found() => match with_compiled_ext(resource) {
                Some(fallback) => self.inner.load(&fallback, paths, include_stack, charset)?,
                None => return Err(e),
            },
            Err(e) => return Err(e),
        };
        Ok(content.replace(COMPILED_EXT, PRIMARY_EXT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::FilesystemLoader;
    use tempfile::TempDir;

    fn search_paths(dir: &TempDir) -> Vec<String> {
        vec![format!("{}/", dir.path().display())]
    }

    #[test]
    fn test_primary_preferred_over_fallback() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("a.less"), "from less").unwrap();
        std::fs::write(dir.path().join("a.css"), "from css").unwrap();

        let loader = CssFallbackLoader::new(FilesystemLoader::new());
        let mut stack = Vec::new();
        let text = loader
            .load("a.less", &search_paths(&dir), &mut stack, "UTF-8")
            .unwrap();
        assert_eq!(text, "from less");
    }

    #[test]
    fn test_fallback_to_css_with_rewrite() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("styles.css"), "@include \"x.css\";").unwrap();

        let loader = CssFallbackLoader::new(FilesystemLoader::new());
        let paths = search_paths(&dir);
        assert!(loader.exists("styles.less", &paths).unwrap());

        let mut stack = Vec::new();
        let text = loader.load("styles.less", &paths, &mut stack, "UTF-8").unwrap();
        assert_eq!(text, "@include \"x.less\";");
    }

    #[test]
    fn test_rewrite_is_a_blunt_substitution() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("a.css"),
            "/* generated from legacy.css */\nbody {}",
        )
        .unwrap();

        let loader = CssFallbackLoader::new(FilesystemLoader::new());
        let mut stack = Vec::new();
        let text = loader
            .load("a.less", &search_paths(&dir), &mut stack, "UTF-8")
            .unwrap();
        // The comment occurrence is rewritten too; that is the contract.
        assert_eq!(text, "/* generated from legacy.css */\nbody {}".replace(".css", ".less"));
    }

    #[test]
    fn test_neither_extension_present() {
        let dir = TempDir::new().unwrap();
        let loader = CssFallbackLoader::new(FilesystemLoader::new());
        let paths = search_paths(&dir);
        assert!(!loader.exists("a.less", &paths).unwrap());

        let mut stack = Vec::new();
        let err = loader.load("a.less", &paths, &mut stack, "UTF-8").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_non_primary_resource_not_retried() {
        let dir = TempDir::new().unwrap();
        let loader = CssFallbackLoader::new(FilesystemLoader::new());
        let mut stack = Vec::new();
        let err = loader
            .load("a.txt", &search_paths(&dir), &mut stack, "UTF-8")
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_charset_failure_not_absorbed() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("a.less"), "x").unwrap();
        let loader = CssFallbackLoader::new(FilesystemLoader::new());
        let mut stack = Vec::new();
        let err = loader
            .load("a.less", &search_paths(&dir), &mut stack, "not-a-real-charset")
            .unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedCharset { .. }));
    }
}
