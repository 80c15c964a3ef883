//! Recursive include resolution with cycle detection.
//!
//! One compile invocation owns one include stack: an ordered record of
//! the resource names currently being resolved, shared by `&mut`
//! reference across every nested load. Each descent checks the stack for
//! the requested name (a hit is a circular include and fails fast),
//! pushes it, loads and walks the content, and restores the stack to its
//! pre-push length on the way out, on success and on failure alike. The stack is
//! never copied per call (that would hide cycles) and never global (that
//! would corrupt concurrent compiles).

use std::sync::LazyLock;

use regex::Regex;

use crate::error::LoadError;
use crate::loader::ResourceLoader;
use crate::path::normalize_separators;

/// Matches the plain-stylesheet include directive:
/// `@include "name"` or `@include 'name'`.
static INCLUDE_DIRECTIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"@include\s+["']([^"']+)["']"#).unwrap());

/// Extract the resource names referenced by `@include` directives.
pub fn include_targets(source: &str) -> Vec<String> {
    INCLUDE_DIRECTIVE
        .captures_iter(source)
        .map(|cap| cap[1].to_string())
        .collect()
}

/// Load a resource and transitively resolve everything it includes.
///
/// Returns the text of `resource` itself; nested includes are loaded for
/// validation (availability, decodability, cycle freedom) and their text
/// discarded; the compiler re-requests them through the same loader.
///
/// Fails with [`LoadError::CircularInclude`] when `resource` is already
/// on the stack, carrying a snapshot of the full chain at that point.
pub fn load_recursive(
    loader: &dyn ResourceLoader,
    resource: &str,
    paths: &[String],
    stack: &mut Vec<String>,
    charset: &str,
) -> Result<String, LoadError> {
    let resource = normalize_separators(resource);
    if stack.iter().any(|entry| *entry == resource) {
        return Err(LoadError::CircularInclude {
            resource,
            stack: stack.clone(),
        });
    }
    let depth = stack.len();
    stack.push(resource.clone());
    let result = descend(loader, &resource, paths, stack, charset);
    stack.truncate(depth);
    result
}

fn descend(
    loader: &dyn ResourceLoader,
    resource: &str,
    paths: &[String],
    stack: &mut Vec<String>,
    charset: &str,
) -> Result<String, LoadError> {
    let text = loader.load(resource, paths, stack, charset)?;
    for target in include_targets(&text) {
        load_recursive(loader, &target, paths, stack, charset)?;
    }
    Ok(text)
}
