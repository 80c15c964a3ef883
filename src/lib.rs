//! # less-engine
//!
//! A LESS stylesheet engine front end: resolves and loads stylesheet
//! source, and everything it transitively `@include`s, from a
//! heterogeneous set of backends, then hands the materialized source to a
//! pluggable compiler.
//!
//! The interesting machinery is resource loading:
//!
//! - **Backends**: local filesystem, embedded bundles, published-resource
//!   registries, HTTP(S) endpoints
//! - **Chaining**: backends tried in configured order, first match wins
//! - **Decorators**: Unix newline normalization, or a `.less` → `.css`
//!   extension fallback for plain-stylesheet compatibility
//! - **Include stack**: one shared, mutable traversal record per compile
//!   invocation, detecting circular includes and giving the compiler
//!   actionable error locations
//!
//! Compiling LESS syntax itself is out of scope; implement [`Compiler`]
//! over whatever produces your CSS.
//!
//! ## Quick Start
//!
//! ```ignore
//! use less_engine::{LessEngine, LessOptions};
//!
//! let options = LessOptions::builder()
//!     .path("themes/")
//!     .build();
//! let engine = LessEngine::new(options, MyCompiler::new());
//!
//! // Compile a file; its own directory is searched after `themes/`.
//! let css = engine.compile_file(std::path::Path::new("site.less"))?;
//!
//! // Or compile straight from a URL.
//! let css = engine.compile_location("https://example.com/css/site.less")?;
//! ```
//!
//! ## Custom Loader Chains
//!
//! ```ignore
//! use less_engine::{
//!     ChainedLoader, EmbeddedLoader, FilesystemLoader, LessEngine,
//!     LessOptions, UnixNewlinesLoader,
//! };
//! use include_dir::{Dir, include_dir};
//!
//! static BUNDLED: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/styles");
//!
//! let chain = ChainedLoader::new(vec![
//!     Box::new(FilesystemLoader::new()),
//!     Box::new(EmbeddedLoader::new(&BUNDLED)),
//! ]);
//! let engine = LessEngine::with_loader(
//!     LessOptions::default(),
//!     MyCompiler::new(),
//!     UnixNewlinesLoader::new(chain),
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod charset;
pub mod compiler;
pub mod engine;
pub mod error;
pub mod include;
pub mod loader;
pub mod options;
pub mod path;

// =============================================================================
// Prelude - import commonly used items with a single `use`
// =============================================================================

/// Prelude module for convenient imports.
///
/// Import everything commonly needed with:
///
/// ```ignore
/// use less_engine::prelude::*;
/// ```
pub mod prelude {
    // Engine
    pub use crate::{default_loader, LessEngine};

    // Configuration
    pub use crate::{LessOptions, LessOptionsBuilder, LineNumbers};

    // Loaders
    pub use crate::{
        ChainedLoader, CssFallbackLoader, EmbeddedLoader, FilesystemLoader, MapRegistry,
        RegistryLoader, ResourceLoader, ResourceRegistry, UnixNewlinesLoader,
    };
    #[cfg(feature = "http")]
    pub use crate::HttpLoader;

    // Compiler seam and errors
    pub use crate::{CompileError, Compiler, LessError, LoadError};
}

// =============================================================================
// Engine
// =============================================================================

pub use engine::{default_loader, LessEngine};
pub use options::{LessOptions, LessOptionsBuilder, LineNumbers};

// =============================================================================
// Loaders
// =============================================================================

pub use loader::{
    ChainedLoader, CssFallbackLoader, EmbeddedLoader, FilesystemLoader, MapRegistry,
    RegistryLoader, ResourceLoader, ResourceRegistry, UnixNewlinesLoader,
};

#[cfg(feature = "http")]
pub use loader::HttpLoader;

// =============================================================================
// Compiler seam and errors
// =============================================================================

pub use compiler::Compiler;
pub use error::{CompileError, LessError, LoadError};
pub use include::{include_targets, load_recursive};
pub use path::{normalize_separators, resolve_filename, resolve_search_paths};
