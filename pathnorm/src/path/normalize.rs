//! Path normalization functions.
//!
//! This module resolves path strings without touching the file system:
//! - Removing doubled separators
//! - Dropping `.` segments
//! - Resolving `..` against the previous segment
//! - Rewriting every separator in the requested style
//!
//! A `..` with nothing left to cancel makes the whole normalization fail,
//! whatever the prefix: `/..`, `C:..`, `~/..` and a bare `..` all give `None`.
//!
//! A relative path whose first segment would read as a prefix on its own
//! (`~`, `C:x`, `:x`) keeps a leading `./`, so the result normalizes to
//! itself.

use crate::error::Result;

use super::prefix::{classify_prefix, reject_forbidden};
use super::types::{is_separator, PrefixKind, SeparatorStyle, UNIX_SEPARATOR};

/// Normalize a path, keeping a trailing separator if the input had one.
///
/// # Errors
///
/// Returns an error if the path contains a NUL character.
///
/// # Examples
///
/// ```
/// use pathnorm::path::{normalize, SeparatorStyle};
///
/// let unix = SeparatorStyle::Unix;
/// assert_eq!(normalize("/foo//", unix).unwrap().as_deref(), Some("/foo/"));
/// assert_eq!(normalize("/foo/./", unix).unwrap().as_deref(), Some("/foo/"));
/// assert_eq!(normalize("/foo/../bar", unix).unwrap().as_deref(), Some("/bar"));
/// assert_eq!(normalize("C:\\foo\\..\\bar", unix).unwrap().as_deref(), Some("C:/bar"));
/// assert_eq!(normalize("//server/foo/../bar", unix).unwrap().as_deref(), Some("//server/bar"));
/// assert_eq!(normalize("/../bar", unix).unwrap(), None);
/// ```
pub fn normalize(path: &str, style: SeparatorStyle) -> Result<Option<String>> {
    normalize_with(path, true, style)
}

/// Normalize a path and drop any trailing separator the operation would keep.
///
/// A separator that belongs to the prefix (`/`, `C:\`, `~/`) is never removed.
///
/// # Errors
///
/// Returns an error if the path contains a NUL character.
///
/// # Examples
///
/// ```
/// use pathnorm::path::{normalize_no_end_separator, SeparatorStyle};
///
/// let unix = SeparatorStyle::Unix;
/// assert_eq!(normalize_no_end_separator("/foo//", unix).unwrap().as_deref(), Some("/foo"));
/// assert_eq!(normalize_no_end_separator("C:\\", unix).unwrap().as_deref(), Some("C:/"));
/// ```
pub fn normalize_no_end_separator(path: &str, style: SeparatorStyle) -> Result<Option<String>> {
    normalize_with(path, false, style)
}

/// Normalize a path with explicit control over the trailing separator.
///
/// Returns `Ok(None)` if the prefix is malformed or a `..` climbs above the
/// start of the path. The result of a successful normalization normalizes
/// to itself.
///
/// # Errors
///
/// Returns an error if the path contains a NUL character.
///
/// # Examples
///
/// ```
/// use pathnorm::path::{normalize_with, SeparatorStyle};
///
/// let windows = SeparatorStyle::Windows;
/// assert_eq!(
///     normalize_with("a/b/../c/", true, windows).unwrap().as_deref(),
///     Some("a\\c\\")
/// );
/// assert_eq!(
///     normalize_with("a/b/../c/", false, windows).unwrap().as_deref(),
///     Some("a\\c")
/// );
/// assert_eq!(normalize_with("a/../../c", true, windows).unwrap(), None);
/// ```
pub fn normalize_with(
    path: &str,
    keep_separator: bool,
    style: SeparatorStyle,
) -> Result<Option<String>> {
    reject_forbidden(path)?;
    if path.is_empty() {
        return Ok(Some(String::new()));
    }

    let Some(prefix) = classify_prefix(path) else {
        log::debug!("cannot normalize {path:?}: invalid prefix");
        return Ok(None);
    };

    let rest = path.get(prefix.len..).unwrap_or_default();
    let mut segments: Vec<&str> = Vec::new();
    let mut last = None;

    for segment in rest.split(is_separator).filter(|s| !s.is_empty()) {
        match segment {
            "." => {}
            ".." => {
                if segments.pop().is_none() {
                    log::debug!(
                        "cannot normalize {path:?}: '..' climbs above the {} ({})",
                        escape_boundary(prefix.kind),
                        prefix.kind
                    );
                    return Ok(None);
                }
            }
            _ => segments.push(segment),
        }
        last = Some(segment);
    }

    let separator = style.as_char();
    let mut normalized = prefix.render(path, style);
    if prefix.kind == PrefixKind::None && segments.first().is_some_and(|s| reads_as_prefix(s)) {
        normalized.push('.');
        normalized.push(separator);
    }
    for (index, segment) in segments.iter().enumerate() {
        if index > 0 {
            normalized.push(separator);
        }
        normalized.push_str(segment);
    }

    let ends_as_directory = rest.ends_with(is_separator) || matches!(last, Some("." | ".."));
    if keep_separator && ends_as_directory && !segments.is_empty() {
        normalized.push(separator);
    }

    Ok(Some(normalized))
}

/// What a leading `..` would climb above.
fn escape_boundary(kind: PrefixKind) -> &'static str {
    if kind.is_absolute() {
        "root"
    } else {
        "start of the relative path"
    }
}

/// Whether a relative path starting with `segment` would classify as
/// having a prefix, or as malformed, once the leading `./` is gone.
fn reads_as_prefix(segment: &str) -> bool {
    classify_prefix(segment).map_or(true, |prefix| prefix.len > 0)
}

/// Concatenate a file name onto a base path, then normalize the result.
///
/// If `add` carries its own prefix (it is absolute, drive-relative or a
/// home path) the base is ignored and `add` is normalized alone. Otherwise
/// the two are joined with a separator. A `None` base only works with an
/// `add` that has a prefix.
///
/// # Errors
///
/// Returns an error if either input contains a NUL character.
///
/// # Examples
///
/// ```
/// use pathnorm::path::{concat, SeparatorStyle};
///
/// let unix = SeparatorStyle::Unix;
/// assert_eq!(concat(Some("/foo/"), "bar", unix).unwrap().as_deref(), Some("/foo/bar"));
/// assert_eq!(concat(Some("/foo"), "bar", unix).unwrap().as_deref(), Some("/foo/bar"));
/// assert_eq!(concat(Some("/foo"), "/bar", unix).unwrap().as_deref(), Some("/bar"));
/// assert_eq!(concat(Some("a/b/"), "../f/", unix).unwrap().as_deref(), Some("a/f/"));
/// assert_eq!(concat(None, "/a", unix).unwrap().as_deref(), Some("/a"));
/// assert_eq!(concat(Some(""), ":", unix).unwrap(), None);
/// ```
pub fn concat(base: Option<&str>, add: &str, style: SeparatorStyle) -> Result<Option<String>> {
    reject_forbidden(add)?;
    let Some(prefix) = classify_prefix(add) else {
        log::debug!("cannot concatenate {add:?}: invalid prefix");
        return Ok(None);
    };
    if prefix.len > 0 {
        return normalize(add, style);
    }

    let Some(base) = base else {
        return Ok(None);
    };
    reject_forbidden(base)?;
    if base.is_empty() {
        return normalize(add, style);
    }

    let joined = if base.ends_with(is_separator) {
        format!("{base}{add}")
    } else {
        format!("{base}{UNIX_SEPARATOR}{add}")
    };
    normalize(&joined, style)
}
