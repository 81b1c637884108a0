//! A configured front end to the path functions.
//!
//! The free functions in [`crate::path`] take their flavor and separator
//! style explicitly. [`PathEngine`] bundles the two so callers that work
//! under one set of rules (a CLI invocation, a config file) can stop passing
//! them around. It is also the one place host defaults come from.

use crate::config::Config;
use crate::error::Result;

use super::types::{CaseSensitivity, Flavor, Prefix, SeparatorStyle};
use super::{decompose, extension, normalize, prefix, relationship, separators, wildcard};
use super::PathRelationship;

/// Path operations under a fixed flavor and separator style.
///
/// # Examples
///
/// ```
/// use pathnorm::path::{Flavor, PathEngine, SeparatorStyle};
///
/// let engine = PathEngine::new()
///     .with_flavor(Flavor::Windows)
///     .with_style(SeparatorStyle::Windows);
///
/// assert_eq!(
///     engine.normalize("C:/Temp/./logs/../app.LOG").unwrap().as_deref(),
///     Some("C:\\Temp\\app.LOG")
/// );
/// assert!(engine.equals("C:\\TEMP", "c:\\temp").unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PathEngine {
    flavor: Flavor,
    style: SeparatorStyle,
}

impl Default for PathEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl PathEngine {
    /// Creates an engine with Unix rules and Unix separators.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            flavor: Flavor::Unix,
            style: SeparatorStyle::Unix,
        }
    }

    /// Creates an engine with the rules and separator of the host.
    #[must_use]
    pub const fn host() -> Self {
        Self {
            flavor: Flavor::host(),
            style: SeparatorStyle::system(),
        }
    }

    /// Creates an engine from a configuration.
    ///
    /// An unset flavor falls back to the host flavor, and an unset separator
    /// falls back to the flavor's own separator.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathnorm::config::{Config, SeparatorSetting};
    /// use pathnorm::path::{Flavor, PathEngine, SeparatorStyle};
    ///
    /// let config = Config {
    ///     flavor: Some(Flavor::Windows),
    ///     separator: Some(SeparatorSetting::Unix),
    ///     ..Default::default()
    /// };
    /// let engine = PathEngine::from_config(&config);
    /// assert_eq!(engine.flavor(), Flavor::Windows);
    /// assert_eq!(engine.style(), SeparatorStyle::Unix);
    /// ```
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let flavor = config.flavor.unwrap_or_else(Flavor::host);
        let style = config
            .separator
            .map_or_else(|| flavor.separator_style(), |setting| setting.resolve());
        Self { flavor, style }
    }

    /// Sets the flavor.
    #[must_use]
    pub const fn with_flavor(mut self, flavor: Flavor) -> Self {
        self.flavor = flavor;
        self
    }

    /// Sets the separator style.
    #[must_use]
    pub const fn with_style(mut self, style: SeparatorStyle) -> Self {
        self.style = style;
        self
    }

    /// The flavor in use.
    #[must_use]
    pub const fn flavor(&self) -> Flavor {
        self.flavor
    }

    /// The separator style in use.
    #[must_use]
    pub const fn style(&self) -> SeparatorStyle {
        self.style
    }

    /// See [`prefix::classify_prefix`].
    #[must_use]
    pub fn classify_prefix(&self, path: &str) -> Option<Prefix> {
        prefix::classify_prefix(path)
    }

    /// See [`prefix::prefix_length`].
    #[must_use]
    pub fn prefix_length(&self, path: &str) -> isize {
        prefix::prefix_length(path)
    }

    /// Normalizes, keeping a trailing separator.
    ///
    /// # Errors
    ///
    /// Returns an error if the path contains a NUL character.
    pub fn normalize(&self, path: &str) -> Result<Option<String>> {
        normalize::normalize(path, self.style)
    }

    /// Normalizes, dropping a trailing separator.
    ///
    /// # Errors
    ///
    /// Returns an error if the path contains a NUL character.
    pub fn normalize_no_end_separator(&self, path: &str) -> Result<Option<String>> {
        normalize::normalize_no_end_separator(path, self.style)
    }

    /// Normalizes with explicit trailing separator handling.
    ///
    /// # Errors
    ///
    /// Returns an error if the path contains a NUL character.
    pub fn normalize_with(&self, path: &str, keep_separator: bool) -> Result<Option<String>> {
        normalize::normalize_with(path, keep_separator, self.style)
    }

    /// Concatenates and normalizes.
    ///
    /// # Errors
    ///
    /// Returns an error if either input contains a NUL character.
    pub fn concat(&self, base: Option<&str>, add: &str) -> Result<Option<String>> {
        normalize::concat(base, add, self.style)
    }

    /// See [`decompose::get_prefix`].
    ///
    /// # Errors
    ///
    /// Returns an error if the path contains a NUL character.
    pub fn get_prefix(&self, path: &str) -> Result<Option<String>> {
        decompose::get_prefix(path)
    }

    /// See [`decompose::get_path`].
    ///
    /// # Errors
    ///
    /// Returns an error if the path contains a NUL character.
    pub fn get_path<'a>(&self, path: &'a str) -> Result<Option<&'a str>> {
        decompose::get_path(path)
    }

    /// See [`decompose::get_path_no_end_separator`].
    ///
    /// # Errors
    ///
    /// Returns an error if the path contains a NUL character.
    pub fn get_path_no_end_separator<'a>(&self, path: &'a str) -> Result<Option<&'a str>> {
        decompose::get_path_no_end_separator(path)
    }

    /// See [`decompose::get_full_path`].
    ///
    /// # Errors
    ///
    /// Returns an error if the path contains a NUL character.
    pub fn get_full_path(&self, path: &str) -> Result<Option<String>> {
        decompose::get_full_path(path)
    }

    /// See [`decompose::get_full_path_no_end_separator`].
    ///
    /// # Errors
    ///
    /// Returns an error if the path contains a NUL character.
    pub fn get_full_path_no_end_separator<'a>(&self, path: &'a str) -> Result<Option<&'a str>> {
        decompose::get_full_path_no_end_separator(path)
    }

    /// See [`decompose::get_name`].
    ///
    /// # Errors
    ///
    /// Returns an error if the path contains a NUL character.
    pub fn get_name<'a>(&self, path: &'a str) -> Result<&'a str> {
        decompose::get_name(path)
    }

    /// Extension index under this engine's flavor.
    ///
    /// # Errors
    ///
    /// Returns an error if the path contains a NUL, or an alternate data
    /// stream marker under the Windows flavor.
    pub fn index_of_extension(&self, path: &str) -> Result<Option<usize>> {
        extension::index_of_extension(path, self.flavor)
    }

    /// Extension under this engine's flavor.
    ///
    /// # Errors
    ///
    /// Returns an error if the path contains a NUL, or an alternate data
    /// stream marker under the Windows flavor.
    pub fn get_extension<'a>(&self, path: &'a str) -> Result<&'a str> {
        extension::get_extension(path, self.flavor)
    }

    /// Path without its extension, under this engine's flavor.
    ///
    /// # Errors
    ///
    /// Returns an error if the path contains a NUL, or an alternate data
    /// stream marker under the Windows flavor.
    pub fn remove_extension<'a>(&self, path: &'a str) -> Result<&'a str> {
        extension::remove_extension(path, self.flavor)
    }

    /// Base name under this engine's flavor.
    ///
    /// # Errors
    ///
    /// Returns an error if the path contains a NUL, or an alternate data
    /// stream marker under the Windows flavor.
    pub fn get_base_name<'a>(&self, path: &'a str) -> Result<&'a str> {
        extension::get_base_name(path, self.flavor)
    }

    /// Extension check under this engine's flavor.
    ///
    /// # Errors
    ///
    /// Returns an error if the path contains a NUL, or an alternate data
    /// stream marker under the Windows flavor.
    pub fn is_extension(&self, path: &str, extension: &str) -> Result<bool> {
        extension::is_extension(path, extension, self.flavor)
    }

    /// Extension check against several candidates.
    ///
    /// # Errors
    ///
    /// Returns an error if the path contains a NUL, or an alternate data
    /// stream marker under the Windows flavor.
    pub fn is_extension_in<I, S>(&self, path: &str, extensions: I) -> Result<bool>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        extension::is_extension_in(path, extensions, self.flavor)
    }

    /// Equality using the flavor's case rules, without normalizing.
    ///
    /// # Errors
    ///
    /// Returns an error if either path contains a NUL character.
    pub fn equals(&self, a: &str, b: &str) -> Result<bool> {
        relationship::equals_on_system(a, b, self.flavor)
    }

    /// Equality after normalizing, using the flavor's case rules.
    ///
    /// # Errors
    ///
    /// Returns an error if either path contains a NUL character.
    pub fn equals_normalized(&self, a: &str, b: &str) -> Result<bool> {
        relationship::equals_normalized_on_system(a, b, self.flavor)
    }

    /// General equality with an explicit case rule.
    ///
    /// # Errors
    ///
    /// Returns an error if either path contains a NUL character.
    pub fn equals_with(
        &self,
        a: Option<&str>,
        b: Option<&str>,
        normalized: bool,
        case: CaseSensitivity,
    ) -> Result<bool> {
        relationship::equals_with(a, b, normalized, case, self.flavor)
    }

    /// Containment using the flavor's case rules.
    ///
    /// # Errors
    ///
    /// Returns an error if either path contains a NUL character.
    pub fn directory_contains(&self, parent: &str, child: &str) -> Result<bool> {
        relationship::directory_contains(parent, child, CaseSensitivity::System, self.flavor)
    }

    /// Relationship between two paths under this engine's flavor.
    ///
    /// # Errors
    ///
    /// Returns an error if either path contains a NUL character.
    pub fn relationship(&self, a: &str, b: &str) -> Result<PathRelationship> {
        PathRelationship::between(a, b, self.flavor)
    }

    /// Wildcard match with an explicit case rule.
    #[must_use]
    pub fn wildcard_match(&self, name: &str, pattern: &str, case: CaseSensitivity) -> bool {
        wildcard::wildcard_match(Some(name), Some(pattern), case, self.flavor)
    }

    /// Rewrites separators in this engine's style.
    #[must_use]
    pub fn separators(&self, path: &str) -> String {
        separators::separators_to(path, self.style)
    }
}
