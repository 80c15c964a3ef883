//! Local filesystem backend.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::charset;
use crate::error::LoadError;
use crate::loader::ResourceLoader;

/// Loads resources from the local filesystem.
///
/// Each search path is joined with the resource name by plain string
/// composition (search paths end in a separator). URL-style search paths
/// simply fail the metadata probe and are skipped.
#[derive(Debug, Default, Clone, Copy)]
pub struct FilesystemLoader;

impl FilesystemLoader {
    /// Create a filesystem loader.
    pub fn new() -> Self {
        Self
    }

    /// Find the first search path under which the resource is a regular
    /// file. A missing candidate keeps the search going; a candidate that
    /// exists but cannot be inspected is an access failure.
    fn locate(&self, resource: &str, paths: &[String]) -> Result<Option<PathBuf>, LoadError> {
        for path in paths {
            let candidate = PathBuf::from(format!("{path}{resource}"));
            match fs::metadata(&candidate) {
                Ok(meta) if meta.is_file() => return Ok(Some(candidate)),
                Ok(_) => {}
                Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::InvalidInput) => {}
                Err(e) => return Err(LoadError::access(candidate.display().to_string(), e)),
            }
        }
        Ok(None)
    }
}

impl ResourceLoader for FilesystemLoader {
    fn exists(&self, resource: &str, paths: &[String]) -> Result<bool, LoadError> {
        Ok(self.locate(resource, paths)?.is_some())
    }

    fn load(
        &self,
        resource: &str,
        paths: &[String],
        _include_stack: &mut Vec<String>,
        charset: &str,
    ) -> Result<String, LoadError> {
        let Some(path) = self.locate(resource, paths)? else {
            return Err(LoadError::not_found(resource, paths));
        };
        let bytes =
            fs::read(&path).map_err(|e| LoadError::access(path.display().to_string(), e))?;
        charset::decode(&bytes, charset)
    }
}
