//! The stylesheet compiler seam.
//!
//! Parsing and evaluating LESS syntax is outside this crate; the engine
//! only locates, fetches, and textually massages source before handing it
//! over. [`Compiler`] is the boundary: implement it over whatever actually
//! produces CSS (an embedded interpreter, an external process, a test
//! stub).

use crate::error::CompileError;

/// Produces CSS from materialized stylesheet source.
///
/// Implementations must be `Send + Sync`; one configured engine serves
/// concurrent compile invocations.
pub trait Compiler: Send + Sync {
    /// Compile stylesheet source to CSS.
    ///
    /// `location` is the source's own location string (empty for raw-text
    /// input). `include_stack` is the same buffer the engine threaded
    /// through resource loading, handed over for diagnostic context; the
    /// compiler may push onto it while resolving includes of its own.
    /// `compress` requests minified output.
    fn compile(
        &self,
        source: &str,
        location: &str,
        include_stack: &mut Vec<String>,
        compress: bool,
    ) -> Result<String, CompileError>;
}
