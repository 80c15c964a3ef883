//! Engine entry points.
//!
//! A [`LessEngine`] ties together the configured loader chain, the
//! options, and the compiler collaborator. The engine itself is shareable
//! across threads; each compile invocation builds its own search-path
//! list and include stack, so concurrent compiles never observe each
//! other's traversal state.
//!
//! # Control Flow
//!
//! ```text
//! compile_location(location)
//! ├── resolve_search_paths(options.paths, location)   // configured first
//! ├── include::load_recursive(loader, filename, ...)  // fresh stack
//! │   └── nested @include loads, push/truncate discipline
//! └── compiler.compile(source, location, stack, compress)
//! ```

use std::fs;
use std::path::Path;
use std::time::Instant;

use tracing::debug;

use crate::charset;
use crate::compiler::Compiler;
use crate::error::{LessError, LoadError};
use crate::include;
use crate::loader::{
    ChainedLoader, CssFallbackLoader, FilesystemLoader, ResourceLoader, UnixNewlinesLoader,
};
#[cfg(feature = "http")]
use crate::loader::HttpLoader;
use crate::options::LessOptions;
use crate::path::{resolve_filename, resolve_search_paths};

/// Build the default loader chain for a set of options.
///
/// The chain tries the local filesystem first, then HTTP(S) locations
/// (with the `http` feature). In plain-stylesheet compatibility mode the
/// chain is wrapped in the CSS-extension fallback; otherwise in Unix
/// newline normalization; this mutually exclusive pairing is what the
/// options flag has always selected. Embedded-bundle and registry
/// backends have no ambient handle to default to and are wired explicitly
/// through [`LessEngine::with_loader`].
pub fn default_loader(options: &LessOptions) -> Box<dyn ResourceLoader> {
    let mut members: Vec<Box<dyn ResourceLoader>> = vec![Box::new(FilesystemLoader::new())];
    #[cfg(feature = "http")]
    members.push(Box::new(HttpLoader::new()));
    let chain = ChainedLoader::new(members);

    if options.css() {
        Box::new(CssFallbackLoader::new(chain))
    } else {
        Box::new(UnixNewlinesLoader::new(chain))
    }
}

/// The stylesheet engine: loads sources through the configured loader and
/// hands them to the compiler.
pub struct LessEngine {
    options: LessOptions,
    loader: Box<dyn ResourceLoader>,
    compiler: Box<dyn Compiler>,
}

impl LessEngine {
    /// Create an engine with the default loader chain.
    pub fn new(options: LessOptions, compiler: impl Compiler + 'static) -> Self {
        let loader = default_loader(&options);
        Self {
            options,
            loader,
            compiler: Box::new(compiler),
        }
    }

    /// Create an engine with a custom loader.
    pub fn with_loader(
        options: LessOptions,
        compiler: impl Compiler + 'static,
        loader: impl ResourceLoader + 'static,
    ) -> Self {
        Self {
            options,
            loader: Box::new(loader),
            compiler: Box::new(compiler),
        }
    }

    /// The engine's configuration.
    pub fn options(&self) -> &LessOptions {
        &self.options
    }

    /// Compile raw stylesheet source, using the configured compress flag.
    pub fn compile_source(&self, input: &str) -> Result<String, LessError> {
        self.compile_source_with(input, None, self.options.compress())
    }

    /// Compile raw stylesheet source with an explicit location and
    /// compress flag. The location (empty when absent) is passed to the
    /// compiler for diagnostics; the include stack starts empty.
    pub fn compile_source_with(
        &self,
        input: &str,
        location: Option<&str>,
        compress: bool,
    ) -> Result<String, LessError> {
        let start = Instant::now();
        let mut stack = Vec::new();
        let result =
            self.compiler
                .compile(input, location.unwrap_or(""), &mut stack, compress)?;
        debug!(elapsed_ms = start.elapsed().as_millis() as u64, "compiled raw source");
        Ok(result)
    }

    /// Compile a locatable input (local path or URL), using the
    /// configured compress flag.
    pub fn compile_location(&self, location: &str) -> Result<String, LessError> {
        self.compile_location_with(location, self.options.compress())
    }

    /// Compile a locatable input with an explicit compress flag.
    ///
    /// Search paths are the configured ones followed by the input's own
    /// directory; the input and everything it transitively includes is
    /// loaded through the configured loader before the source and the
    /// include stack are handed to the compiler.
    pub fn compile_location_with(
        &self,
        location: &str,
        compress: bool,
    ) -> Result<String, LessError> {
        let start = Instant::now();
        debug!(location, "compiling");

        let charset = self.options.charset();
        if !charset::is_supported(charset) {
            return Err(LoadError::unsupported_charset(charset).into());
        }

        let paths = resolve_search_paths(self.options.paths(), location);
        let mut stack = Vec::new();
        let source = include::load_recursive(
            self.loader.as_ref(),
            resolve_filename(location),
            &paths,
            &mut stack,
            charset,
        )?;
        let result = self.compiler.compile(&source, location, &mut stack, compress)?;
        debug!(
            location,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "compilation finished"
        );
        Ok(result)
    }

    /// Compile a stylesheet file, using the configured compress flag.
    pub fn compile_file(&self, input: &Path) -> Result<String, LessError> {
        self.compile_file_with(input, self.options.compress())
    }

    /// Compile a stylesheet file with an explicit compress flag.
    pub fn compile_file_with(&self, input: &Path, compress: bool) -> Result<String, LessError> {
        self.compile_location_with(&input.to_string_lossy(), compress)
    }

    /// Compile a stylesheet file and persist the result, creating the
    /// destination if absent.
    pub fn compile_file_to(
        &self,
        input: &Path,
        output: &Path,
        compress: bool,
    ) -> Result<(), LessError> {
        let content = self.compile_file_with(input, compress)?;
        fs::write(output, content)?;
        Ok(())
    }
}
