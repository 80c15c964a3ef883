//! Search-path and filename resolution.
//!
//! Resource identifiers use `/` as the canonical separator; Windows-style
//! `\` separators are normalized before any comparison or storage. Search
//! paths are directory-like strings ending in a separator, so locating a
//! resource is plain string composition (`path + resource`).

/// Normalize path separators to the canonical `/` form.
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

/// Compute the ordered search-path list for a compile invocation.
///
/// Configured paths come first (so they can override included files), and
/// the directory of the currently compiled location is appended last as a
/// fallback. Every returned entry uses `/` separators. The list is
/// computed once per top-level compile and treated as immutable after.
pub fn resolve_search_paths(configured: &[String], location: &str) -> Vec<String> {
    let mut paths: Vec<String> = configured.iter().map(|p| normalize_separators(p)).collect();
    paths.push(normalize_separators(directory_of(location)));
    paths
}

/// Strip everything up to and including the last separator, yielding the
/// bare filename for backend-level lookups.
pub fn resolve_filename(location: &str) -> &str {
    match location.rfind(['/', '\\']) {
        Some(idx) => &location[idx + 1..],
        None => location,
    }
}

/// The directory portion of a location, including its trailing separator.
///
/// A location without any separator has no directory component and yields
/// the empty string, which makes bare resource names resolve directly.
fn directory_of(location: &str) -> &str {
    match location.rfind(['/', '\\']) {
        Some(idx) => &location[..=idx],
        None => "",
    }
}
