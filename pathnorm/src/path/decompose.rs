//! Splitting a path string into prefix, path, full path and name.
//!
//! For `C:\dev\project\file.txt` the pieces are:
//!
//! | function                          | result               |
//! |-----------------------------------|----------------------|
//! | [`get_prefix`]                    | `C:\`                |
//! | [`get_path`]                      | `dev\project\`       |
//! | [`get_path_no_end_separator`]     | `dev\project`        |
//! | [`get_full_path`]                 | `C:\dev\project\`    |
//! | [`get_full_path_no_end_separator`]| `C:\dev\project`     |
//! | [`get_name`]                      | `file.txt`           |
//!
//! Nothing is normalized: the pieces are slices of the input, except where a
//! home prefix needs its synthesized separator.

use crate::error::Result;

use super::prefix::{classify_prefix, reject_forbidden};
use super::types::{is_separator, Prefix, UNIX_SEPARATOR};

/// Returns the byte index of the last separator of either style.
///
/// # Examples
///
/// ```
/// use pathnorm::path::index_of_last_separator;
///
/// assert_eq!(index_of_last_separator("a/b\\c"), Some(3));
/// assert_eq!(index_of_last_separator("file.txt"), None);
/// ```
#[must_use]
pub fn index_of_last_separator(path: &str) -> Option<usize> {
    path.rfind(is_separator)
}

/// Returns the prefix of a path, or `None` if the prefix is invalid.
///
/// A home prefix written without a separator gets one appended.
///
/// # Errors
///
/// Returns an error if the path contains a NUL character.
///
/// # Examples
///
/// ```
/// use pathnorm::path::get_prefix;
///
/// assert_eq!(get_prefix("C:\\a\\b").unwrap().as_deref(), Some("C:\\"));
/// assert_eq!(get_prefix("~").unwrap().as_deref(), Some("~/"));
/// assert_eq!(get_prefix("a/b").unwrap().as_deref(), Some(""));
/// assert_eq!(get_prefix("1:a").unwrap(), None);
/// ```
pub fn get_prefix(path: &str) -> Result<Option<String>> {
    Ok(checked_prefix(path)?.map(|prefix| prefix_text(path, prefix)))
}

/// Returns the text between the prefix and the last separator, keeping the
/// separator.
///
/// # Errors
///
/// Returns an error if the path contains a NUL character.
///
/// # Examples
///
/// ```
/// use pathnorm::path::get_path;
///
/// assert_eq!(get_path("/a/b/c.txt").unwrap(), Some("a/b/"));
/// assert_eq!(get_path("C:a/b/c.txt").unwrap(), Some("a/b/"));
/// assert_eq!(get_path("c.txt").unwrap(), Some(""));
/// assert_eq!(get_path("~user").unwrap(), Some(""));
/// ```
pub fn get_path(path: &str) -> Result<Option<&str>> {
    path_between(path, 1)
}

/// Returns the text between the prefix and the last separator, without the
/// separator.
///
/// # Errors
///
/// Returns an error if the path contains a NUL character.
///
/// # Examples
///
/// ```
/// use pathnorm::path::get_path_no_end_separator;
///
/// assert_eq!(get_path_no_end_separator("/a/b/c.txt").unwrap(), Some("a/b"));
/// assert_eq!(get_path_no_end_separator("/a").unwrap(), Some(""));
/// ```
pub fn get_path_no_end_separator(path: &str) -> Result<Option<&str>> {
    path_between(path, 0)
}

/// Returns the prefix plus the path, keeping the last separator.
///
/// A prefix-only input returns the prefix, with a synthesized home separator
/// where needed.
///
/// # Errors
///
/// Returns an error if the path contains a NUL character.
///
/// # Examples
///
/// ```
/// use pathnorm::path::get_full_path;
///
/// assert_eq!(get_full_path("C:\\a\\b\\c.txt").unwrap().as_deref(), Some("C:\\a\\b\\"));
/// assert_eq!(get_full_path("~").unwrap().as_deref(), Some("~/"));
/// assert_eq!(get_full_path("C:a").unwrap().as_deref(), Some("C:"));
/// assert_eq!(get_full_path("a.txt").unwrap().as_deref(), Some(""));
/// ```
pub fn get_full_path(path: &str) -> Result<Option<String>> {
    let Some(prefix) = checked_prefix(path)? else {
        return Ok(None);
    };
    if prefix.len >= path.len() {
        return Ok(Some(prefix_text(path, prefix)));
    }
    Ok(Some(full_path_slice(path, prefix, 1).to_string()))
}

/// Returns the prefix plus the path, without the last separator.
///
/// The prefix itself is never cut: `/abc` gives `/` and `C:/a` gives `C:/`.
/// A prefix-only input is returned unchanged.
///
/// # Errors
///
/// Returns an error if the path contains a NUL character.
///
/// # Examples
///
/// ```
/// use pathnorm::path::get_full_path_no_end_separator;
///
/// assert_eq!(get_full_path_no_end_separator("/a/b/c.txt").unwrap(), Some("/a/b"));
/// assert_eq!(get_full_path_no_end_separator("/abc").unwrap(), Some("/"));
/// assert_eq!(get_full_path_no_end_separator("~").unwrap(), Some("~"));
/// ```
pub fn get_full_path_no_end_separator(path: &str) -> Result<Option<&str>> {
    let Some(prefix) = checked_prefix(path)? else {
        return Ok(None);
    };
    if prefix.len >= path.len() {
        return Ok(Some(path));
    }
    Ok(Some(full_path_slice(path, prefix, 0)))
}

/// Returns the text after the last separator.
///
/// # Errors
///
/// Returns an error if the path contains a NUL character.
///
/// # Examples
///
/// ```
/// use pathnorm::path::get_name;
///
/// assert_eq!(get_name("a/b/c.txt").unwrap(), "c.txt");
/// assert_eq!(get_name("a\\b\\").unwrap(), "");
/// assert_eq!(get_name("c.txt").unwrap(), "c.txt");
/// ```
pub fn get_name(path: &str) -> Result<&str> {
    reject_forbidden(path)?;
    Ok(index_of_last_separator(path).map_or(path, |index| &path[index + 1..]))
}

fn checked_prefix(path: &str) -> Result<Option<Prefix>> {
    reject_forbidden(path)?;
    let prefix = classify_prefix(path);
    if prefix.is_none() {
        log::debug!("no valid prefix in {path:?}");
    }
    Ok(prefix)
}

fn prefix_text(path: &str, prefix: Prefix) -> String {
    if prefix.is_synthesized(path) {
        format!("{path}{UNIX_SEPARATOR}")
    } else {
        path[..prefix.len].to_string()
    }
}

fn path_between(path: &str, separator_add: usize) -> Result<Option<&str>> {
    let Some(prefix) = checked_prefix(path)? else {
        return Ok(None);
    };
    let Some(index) = index_of_last_separator(path) else {
        return Ok(Some(""));
    };
    let end = index + separator_add;
    if prefix.len >= path.len() || prefix.len >= end {
        return Ok(Some(""));
    }
    Ok(Some(&path[prefix.len..end]))
}

fn full_path_slice(path: &str, prefix: Prefix, separator_add: usize) -> &str {
    let Some(index) = index_of_last_separator(path) else {
        return &path[..prefix.len];
    };
    let end = (index + separator_add).max(1).max(prefix.len);
    &path[..end]
}
