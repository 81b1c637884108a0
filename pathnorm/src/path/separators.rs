//! Separator conversion.
//!
//! Plain character substitution: no prefix is classified and no segment is
//! resolved, so `..` and doubled separators are left as they are.

use super::types::{SeparatorStyle, UNIX_SEPARATOR, WINDOWS_SEPARATOR};

/// Rewrites every separator of either style as `style`'s separator.
///
/// # Examples
///
/// ```
/// use pathnorm::path::{separators_to, SeparatorStyle};
///
/// assert_eq!(separators_to("a\\b/c", SeparatorStyle::Unix), "a/b/c");
/// assert_eq!(separators_to("a\\b/c", SeparatorStyle::Windows), "a\\b\\c");
/// ```
#[must_use]
pub fn separators_to(path: &str, style: SeparatorStyle) -> String {
    match style {
        SeparatorStyle::Unix => separators_to_unix(path),
        SeparatorStyle::Windows => separators_to_windows(path),
    }
}

/// Converts all backslashes to forward slashes.
#[must_use]
pub fn separators_to_unix(path: &str) -> String {
    path.replace(WINDOWS_SEPARATOR, "/")
}

/// Converts all forward slashes to backslashes.
#[must_use]
pub fn separators_to_windows(path: &str) -> String {
    path.replace(UNIX_SEPARATOR, "\\")
}

/// Converts separators to the style of the host this process runs on.
#[must_use]
pub fn separators_to_system(path: &str) -> String {
    separators_to(path, SeparatorStyle::system())
}
