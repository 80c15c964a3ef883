//! Resource loaders for stylesheet content.
//!
//! A [`ResourceLoader`] locates and fetches one stylesheet resource,
//! referenced either by an `@include` directive or as a top-level compile
//! target, under an ordered list of search paths.
//!
//! # Architecture
//!
//! ```text
//! UnixNewlinesLoader / CssFallbackLoader   (decorators, pick one)
//! └── ChainedLoader                        (first match wins)
//!     ├── FilesystemLoader                 (local files)
//!     ├── EmbeddedLoader                   (include_dir bundle)
//!     ├── RegistryLoader                   (published resources)
//!     └── HttpLoader                       (http:// and https:// paths)
//! ```
//!
//! Composition is by the common loader contract, not by concrete type:
//! every decorator holds an inner [`ResourceLoader`] and chains hold
//! boxed trait objects.
//!
//! # Thread Safety
//!
//! Loaders carry immutable configuration only, so one configured chain
//! serves many concurrent compile invocations. Per-invocation state (the
//! include stack) is owned by the caller and threaded through `load`.

mod chain;
mod embedded;
mod fallback;
mod filesystem;
#[cfg(feature = "http")]
mod http;
mod newline;
mod registry;

pub use chain::ChainedLoader;
pub use embedded::EmbeddedLoader;
pub use fallback::CssFallbackLoader;
pub use filesystem::FilesystemLoader;
#[cfg(feature = "http")]
pub use http::HttpLoader;
pub use newline::UnixNewlinesLoader;
pub use registry::{MapRegistry, RegistryLoader, ResourceRegistry};

use crate::error::LoadError;

/// Locates and loads stylesheet resources referenced with the `@include`
/// directive or supplied as top-level compile targets.
pub trait ResourceLoader: Send + Sync {
    /// Check whether the resource can be located under any of the search
    /// paths, tried in order.
    ///
    /// "Not found" is `Ok(false)`, never an error; only genuine access
    /// failures (permission denied, transport failure) return
    /// [`LoadError::Access`].
    fn exists(&self, resource: &str, paths: &[String]) -> Result<bool, LoadError>;

    /// Locate the resource exactly as [`exists`](Self::exists) would,
    /// read its raw bytes, and decode them with the named charset.
    ///
    /// `include_stack` is the shared record of in-progress nested loads
    /// for the current compile invocation; backends pass it through
    /// untouched, decorators forward it to their delegate.
    fn load(
        &self,
        resource: &str,
        paths: &[String],
        include_stack: &mut Vec<String>,
        charset: &str,
    ) -> Result<String, LoadError>;
}

impl<L: ResourceLoader + ?Sized> ResourceLoader for Box<L> {
    fn exists(&self, resource: &str, paths: &[String]) -> Result<bool, LoadError> {
        (**self).exists(resource, paths)
    }

    fn load(
        &self,
        resource: &str,
        paths: &[String],
        include_stack: &mut Vec<String>,
        charset: &str,
    ) -> Result<String, LoadError> {
        (**self).load(resource, paths, include_stack, charset)
    }
}
