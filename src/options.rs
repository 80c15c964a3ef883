//! Engine configuration.
//!
//! Only `charset`, the plain-CSS compatibility flag, and the search-path
//! list are interpreted by the loading subsystem. The remaining options
//! (compression, optimization level, line-number and source-map settings)
//! are opaque pass-through values for the compiler collaborator.

/// Line-number annotation modes a compiler may support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineNumbers {
    /// Emit line numbers in comments.
    Comments,
    /// Emit line numbers in fake media queries.
    MediaQuery,
    /// Emit both forms.
    All,
}

/// Configuration for a [`crate::LessEngine`].
#[derive(Debug, Clone)]
pub struct LessOptions {
    charset: String,
    css: bool,
    compress: bool,
    optimization: u8,
    line_numbers: Option<LineNumbers>,
    source_map: bool,
    source_map_rootpath: Option<String>,
    source_map_basepath: Option<String>,
    source_map_url: Option<String>,
    paths: Vec<String>,
}

impl Default for LessOptions {
    fn default() -> Self {
        Self {
            charset: "UTF-8".to_string(),
            css: false,
            compress: false,
            optimization: 3,
            line_numbers: None,
            source_map: false,
            source_map_rootpath: None,
            source_map_basepath: None,
            source_map_url: None,
            paths: Vec::new(),
        }
    }
}

impl LessOptions {
    /// Create a builder for fluent configuration.
    pub fn builder() -> LessOptionsBuilder {
        LessOptionsBuilder::default()
    }

    /// Charset used to decode backend bytes (default `UTF-8`).
    pub fn charset(&self) -> &str {
        &self.charset
    }

    /// Whether plain-stylesheet compatibility mode is on, installing the
    /// CSS-extension-fallback decorator.
    pub fn css(&self) -> bool {
        self.css
    }

    /// Whether compressed output is requested by default.
    pub fn compress(&self) -> bool {
        self.compress
    }

    /// Compiler optimization level (pass-through, default 3).
    pub fn optimization(&self) -> u8 {
        self.optimization
    }

    /// Line-number annotation mode (pass-through).
    pub fn line_numbers(&self) -> Option<LineNumbers> {
        self.line_numbers
    }

    /// Whether source-map generation is requested (pass-through).
    pub fn source_map(&self) -> bool {
        self.source_map
    }

    /// Source-map root path (pass-through).
    pub fn source_map_rootpath(&self) -> Option<&str> {
        self.source_map_rootpath.as_deref()
    }

    /// Source-map base path (pass-through).
    pub fn source_map_basepath(&self) -> Option<&str> {
        self.source_map_basepath.as_deref()
    }

    /// Source-map URL (pass-through).
    pub fn source_map_url(&self) -> Option<&str> {
        self.source_map_url.as_deref()
    }

    /// Additional search paths, tried before the input's own directory.
    pub fn paths(&self) -> &[String] {
        &self.paths
    }
}

/// Builder for [`LessOptions`].
///
/// # Example
///
/// ```
/// use less_engine::LessOptions;
///
/// let options = LessOptions::builder()
///     .charset("ISO-8859-1")
///     .css(true)
///     .path("themes/")
///     .build();
/// assert_eq!(options.charset(), "ISO-8859-1");
/// ```
#[derive(Debug, Clone, Default)]
pub struct LessOptionsBuilder {
    options: LessOptions,
}

impl LessOptionsBuilder {
    /// Set the charset used to decode loaded resources.
    pub fn charset(mut self, charset: impl Into<String>) -> Self {
        self.options.charset = charset.into();
        self
    }

    /// Enable or disable plain-stylesheet compatibility mode.
    pub fn css(mut self, css: bool) -> Self {
        self.options.css = css;
        self
    }

    /// Request compressed output by default.
    pub fn compress(mut self, compress: bool) -> Self {
        self.options.compress = compress;
        self
    }

    /// Set the compiler optimization level.
    pub fn optimization(mut self, level: u8) -> Self {
        self.options.optimization = level;
        self
    }

    /// Set the line-number annotation mode.
    pub fn line_numbers(mut self, mode: LineNumbers) -> Self {
        self.options.line_numbers = Some(mode);
        self
    }

    /// Request source-map generation.
    pub fn source_map(mut self, enabled: bool) -> Self {
        self.options.source_map = enabled;
        self
    }

    /// Set the source-map root path.
    pub fn source_map_rootpath(mut self, path: impl Into<String>) -> Self {
        self.options.source_map_rootpath = Some(path.into());
        self
    }

    /// Set the source-map base path.
    pub fn source_map_basepath(mut self, path: impl Into<String>) -> Self {
        self.options.source_map_basepath = Some(path.into());
        self
    }

    /// Set the source-map URL.
    pub fn source_map_url(mut self, url: impl Into<String>) -> Self {
        self.options.source_map_url = Some(url.into());
        self
    }

    /// Add one search path.
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.options.paths.push(path.into());
        self
    }

    /// Replace the search-path list.
    pub fn paths(mut self, paths: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.options.paths = paths.into_iter().map(Into::into).collect();
        self
    }

    /// Build the options.
    pub fn build(self) -> LessOptions {
        self.options
    }
}
