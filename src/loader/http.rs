//! HTTP(S) backend.

use std::io::Read;
use std::time::Duration;

use crate::charset;
use crate::error::LoadError;
use crate::loader::ResourceLoader;

/// Default timeout applied to every request.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Loads resources over HTTP(S).
///
/// Only search paths starting with `http://` or `https://` are probed;
/// everything else is left to the other backends in the chain. Existence
/// is checked with a lightweight `HEAD` request, falling back to `GET`
/// when the server answers 405; probing never mutates remote state.
///
/// Requests are synchronous blocking calls; a timeout expiry surfaces as
/// [`LoadError::Access`], never as a silent empty result.
pub struct HttpLoader {
    agent: ureq::Agent,
}

impl Default for HttpLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpLoader {
    /// Create an HTTP loader with the default timeout.
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create an HTTP loader with a custom request timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            agent: ureq::AgentBuilder::new().timeout(timeout).build(),
        }
    }

    fn is_http_path(path: &str) -> bool {
        path.starts_with("http://") || path.starts_with("https://")
    }

    /// Probe a single URL for existence without fetching the body.
    fn probe(&self, url: &str) -> Result<bool, LoadError> {
        match self.agent.head(url).call() {
            Ok(_) => Ok(true),
            // Some servers refuse HEAD outright; a GET probe is still
            // side-effect free.
            Err(ureq::Error::Status(405, _)) => match self.agent.get(url).call() {
                Ok(_) => Ok(true),
                Err(ureq::Error::Status(..)) => Ok(false),
                Err(e) => Err(LoadError::access(url, e)),
            },
            Err(ureq::Error::Status(..)) => Ok(false),
            Err(e) => Err(LoadError::access(url, e)),
        }
    }

    fn fetch(&self, url: &str) -> Result<Option<Vec<u8>>, LoadError> {
        match self.agent.get(url).call() {
            Ok(response) => {
                let mut bytes = Vec::new();
                response
                    .into_reader()
                    .read_to_end(&mut bytes)
                    .map_err(|e| LoadError::access(url, e))?;
                Ok(Some(bytes))
            }
            Err(ureq::Error::Status(..)) => Ok(None),
            Err(e) => Err(LoadError::access(url, e)),
        }
    }
}

impl ResourceLoader for HttpLoader {
    fn exists(&self, resource: &str, paths: &[String]) -> Result<bool, LoadError> {
        for path in paths.iter().filter(|p| Self::is_http_path(p)) {
            if self.probe(&format!("{path}{resource}"))? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn load(
        &self,
        resource: &str,
        paths: &[String],
        _include_stack: &mut Vec<String>,
        charset: &str,
    ) -> Result<String, LoadError> {
        for path in paths.iter().filter(|p| Self::is_http_path(p)) {
            if let Some(bytes) = self.fetch(&format!("{path}{resource}"))? {
                return Ok(charset::decode(&bytes, charset)?);
            }
        }
        Err(LoadError::not_found(resource, paths))
    }
}
