//! Error types for resource loading and compilation.
//!
//! Every failure in this crate is recoverable only at the engine boundary:
//! no loader or decorator substitutes default content on error. The one
//! sanctioned retry is the CSS-extension fallback absorbing a `NotFound`
//! from its first lookup (see [`crate::loader::CssFallbackLoader`]).

use std::io;

use thiserror::Error;

/// Error type for resource resolution and loading failures.
///
/// This provides structured access to load failures for programmatic
/// handling, while also implementing `Display` for human-readable output.
///
/// # Example
///
/// ```ignore
/// match loader.load("theme.less", &paths, &mut stack, "UTF-8") {
///     Ok(text) => { /* success */ }
///     Err(LoadError::NotFound { resource, paths }) => {
///         eprintln!("{resource} not found under {paths:?}");
///     }
///     Err(LoadError::CircularInclude { resource, stack }) => {
///         eprintln!("circular include of {resource} via {}", stack.join(" -> "));
///     }
///     Err(e) => eprintln!("{e}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum LoadError {
    /// No backend could locate the resource under any search path.
    #[error("resource '{resource}' not found under search paths {paths:?}")]
    NotFound {
        /// The resource that could not be located.
        resource: String,
        /// Every search path that was attempted.
        paths: Vec<String>,
    },

    /// A backend reached the resource location but I/O failed.
    #[error("cannot access resource '{resource}'")]
    Access {
        /// The resource whose access failed.
        resource: String,
        /// The underlying transport or filesystem failure.
        #[source]
        cause: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The configured charset name is not decodable.
    #[error("unsupported charset '{charset}'")]
    UnsupportedCharset {
        /// The charset name that was not recognized.
        charset: String,
    },

    /// A resource already on the include stack was requested again.
    #[error("circular include of '{resource}' (include chain: {})", .stack.join(" -> "))]
    CircularInclude {
        /// The resource that closed the cycle.
        resource: String,
        /// Snapshot of the include stack at the moment of detection.
        stack: Vec<String>,
    },
}

impl LoadError {
    /// Create a `NotFound` error for a resource and the paths tried.
    pub fn not_found(resource: impl Into<String>, paths: &[String]) -> Self {
        Self::NotFound {
            resource: resource.into(),
            paths: paths.to_vec(),
        }
    }

    /// Create an `Access` error from any underlying failure.
    pub fn access(
        resource: impl Into<String>,
        cause: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Access {
            resource: resource.into(),
            cause: cause.into(),
        }
    }

    /// Create an `UnsupportedCharset` error.
    pub fn unsupported_charset(charset: impl Into<String>) -> Self {
        Self::UnsupportedCharset {
            charset: charset.into(),
        }
    }

    /// Check whether this is a `NotFound` (the only kind the extension
    /// fallback is allowed to absorb).
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Error reported by the stylesheet compiler collaborator.
///
/// The compiler itself is a black box to this crate; this type carries its
/// message plus whatever location diagnostics it was able to produce.
#[derive(Debug, Error)]
#[error("{message}{}", location_suffix(.filename, .line, .column))]
pub struct CompileError {
    /// Human-readable error message.
    pub message: String,
    /// File the error was reported in, if known.
    pub filename: Option<String>,
    /// One-based line number, if known.
    pub line: Option<usize>,
    /// One-based column number, if known.
    pub column: Option<usize>,
    /// Source lines surrounding the error, if the compiler extracted them.
    pub extract: Vec<String>,
}

impl CompileError {
    /// Create a compile error carrying only a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            filename: None,
            line: None,
            column: None,
            extract: Vec::new(),
        }
    }

    /// Attach a source location to this error.
    pub fn at(mut self, filename: impl Into<String>, line: usize, column: usize) -> Self {
        self.filename = Some(filename.into());
        self.line = Some(line);
        self.column = Some(column);
        self
    }
}

fn location_suffix(
    filename: &Option<String>,
    line: &Option<usize>,
    column: &Option<usize>,
) -> String {
    match (filename, line, column) {
        (Some(file), Some(line), Some(column)) => format!(" ({file}:{line}:{column})"),
        (Some(file), ..) => format!(" ({file})"),
        _ => String::new(),
    }
}

/// Top-level error type for engine compile operations.
#[derive(Debug, Error)]
pub enum LessError {
    /// Resource resolution or loading failed.
    #[error("load error: {0}")]
    Load(#[from] LoadError),

    /// The compiler rejected the materialized source.
    #[error("compile error: {0}")]
    Compile(#[from] CompileError),

    /// Writing the compiled output failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
