//! Newline-normalizing decorator.

use crate::error::LoadError;
use crate::loader::ResourceLoader;

/// Forces loaded content to Unix `\n` line endings.
///
/// Downstream compiler processing is line-oriented and must not
/// special-case platform newlines; both `\r\n` and bare `\r` are
/// rewritten. Existence checks delegate unchanged.
pub struct UnixNewlinesLoader<L> {
    inner: L,
}

impl<L: ResourceLoader> UnixNewlinesLoader<L> {
    /// Wrap a loader with newline normalization.
    pub fn new(inner: L) -> Self {
        Self { inner }
    }
}

impl<L: ResourceLoader> ResourceLoader for UnixNewlinesLoader<L> {
    fn exists(&self, resource: &str, paths: &[String]) -> Result<bool, LoadError> {
        self.inner.exists(resource, paths)
    }

    fn load(
        &self,
        resource: &str,
        paths: &[String],
        include_stack: &mut Vec<String>,
        charset: &str,
    ) -> Result<String, LoadError> {
        let text = self.inner.load(resource, paths, include_stack, charset)?;
        Ok(text.replace("\r\n", "\n").replace('\r', "\n"))
    }
}
