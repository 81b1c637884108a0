//! Path equality and containment.
//!
//! This module compares path strings, optionally after normalizing them,
//! and determines whether one path lies beneath another.

use crate::error::Result;

use super::normalize::{normalize, normalize_with};
use super::prefix::reject_forbidden;
use super::types::{CaseSensitivity, Flavor};

/// Checks whether two paths are exactly equal.
///
/// # Errors
///
/// Returns an error if either path contains a NUL character.
///
/// # Examples
///
/// ```
/// use pathnorm::path::equals;
///
/// assert!(equals("a/b/file.txt", "a/b/file.txt").unwrap());
/// assert!(!equals("a\\b\\file.txt", "a/b/file.txt").unwrap());
/// ```
pub fn equals(a: &str, b: &str) -> Result<bool> {
    equals_with(Some(a), Some(b), false, CaseSensitivity::Sensitive, Flavor::Unix)
}

/// Checks whether two paths are equal using the flavor's case rules.
///
/// # Errors
///
/// Returns an error if either path contains a NUL character.
///
/// # Examples
///
/// ```
/// use pathnorm::path::{equals_on_system, Flavor};
///
/// assert!(equals_on_system("File.TXT", "file.txt", Flavor::Windows).unwrap());
/// assert!(!equals_on_system("File.TXT", "file.txt", Flavor::Unix).unwrap());
/// ```
pub fn equals_on_system(a: &str, b: &str, flavor: Flavor) -> Result<bool> {
    equals_with(Some(a), Some(b), false, CaseSensitivity::System, flavor)
}

/// Checks whether two paths are equal after normalization.
///
/// # Errors
///
/// Returns an error if either path contains a NUL character.
///
/// # Examples
///
/// ```
/// use pathnorm::path::equals_normalized;
///
/// assert!(equals_normalized("a\\b\\file.txt", "a/b/file.txt").unwrap());
/// assert!(equals_normalized("a/./b/../c", "a/c").unwrap());
/// assert!(!equals_normalized("../a", "../a").unwrap());
/// ```
pub fn equals_normalized(a: &str, b: &str) -> Result<bool> {
    equals_with(Some(a), Some(b), true, CaseSensitivity::Sensitive, Flavor::Unix)
}

/// Checks whether two paths are equal after normalization, using the
/// flavor's case rules.
///
/// # Errors
///
/// Returns an error if either path contains a NUL character.
pub fn equals_normalized_on_system(a: &str, b: &str, flavor: Flavor) -> Result<bool> {
    equals_with(Some(a), Some(b), true, CaseSensitivity::System, flavor)
}

/// General equality over optional paths.
///
/// Two absent paths are equal; an absent path never equals a present one.
/// With `normalized`, both paths go through [`normalize`] first, so a
/// trailing separator still counts, and a path that cannot be normalized
/// equals nothing.
///
/// # Errors
///
/// Returns an error if either path contains a NUL character.
///
/// # Examples
///
/// ```
/// use pathnorm::path::{equals_with, CaseSensitivity, Flavor};
///
/// let insensitive = CaseSensitivity::Insensitive;
/// assert!(equals_with(None, None, false, insensitive, Flavor::Unix).unwrap());
/// assert!(!equals_with(Some("a"), None, false, insensitive, Flavor::Unix).unwrap());
/// assert!(equals_with(Some("A/B/"), Some("a\\b\\"), true, insensitive, Flavor::Unix).unwrap());
/// assert!(!equals_with(Some("A/B/"), Some("a\\b"), true, insensitive, Flavor::Unix).unwrap());
/// ```
pub fn equals_with(
    a: Option<&str>,
    b: Option<&str>,
    normalized: bool,
    case: CaseSensitivity,
    flavor: Flavor,
) -> Result<bool> {
    let (a, b) = match (a, b) {
        (None, None) => return Ok(true),
        (Some(a), Some(b)) => (a, b),
        _ => return Ok(false),
    };
    reject_forbidden(a)?;
    reject_forbidden(b)?;

    if !normalized {
        return Ok(case.equals(a, b, flavor));
    }

    let style = flavor.separator_style();
    let (Some(a), Some(b)) = (normalize(a, style)?, normalize(b, style)?) else {
        return Ok(false);
    };
    Ok(case.equals(&a, &b, flavor))
}

/// Checks whether `child` lies strictly beneath the directory `parent`.
///
/// Both paths are normalized first. A directory does not contain itself,
/// and an empty or unnormalizable path contains nothing and is contained
/// by nothing.
///
/// # Errors
///
/// Returns an error if either path contains a NUL character.
///
/// # Examples
///
/// ```
/// use pathnorm::path::{directory_contains, CaseSensitivity, Flavor};
///
/// let case = CaseSensitivity::Sensitive;
/// assert!(directory_contains("/a", "/a/b", case, Flavor::Unix).unwrap());
/// assert!(!directory_contains("/a", "/ab", case, Flavor::Unix).unwrap());
/// assert!(!directory_contains("/a", "/a", case, Flavor::Unix).unwrap());
/// assert!(directory_contains("C:\\Dir", "c:/dir/x", CaseSensitivity::System, Flavor::Windows).unwrap());
/// ```
pub fn directory_contains(
    parent: &str,
    child: &str,
    case: CaseSensitivity,
    flavor: Flavor,
) -> Result<bool> {
    reject_forbidden(parent)?;
    reject_forbidden(child)?;
    let (Some(parent), Some(child)) = (comparable(parent, flavor)?, comparable(child, flavor)?)
    else {
        return Ok(false);
    };
    Ok(contains_normalized(&parent, &child, case, flavor))
}

/// Relationship between two paths.
///
/// # Examples
///
/// ```
/// use pathnorm::path::{Flavor, PathRelationship};
///
/// let rel = PathRelationship::between("/home/user", "/home/user/project", Flavor::Unix).unwrap();
/// assert_eq!(rel, PathRelationship::Ancestor);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PathRelationship {
    /// The first path is an ancestor of the second.
    Ancestor,

    /// The first path is a descendant of the second.
    Descendant,

    /// The paths are the same after normalization.
    Same,

    /// Neither path lies beneath the other, or one of them cannot be
    /// normalized.
    Unrelated,
}

impl PathRelationship {
    /// Determine the relationship between two paths.
    ///
    /// Both paths are normalized and compared with the flavor's case rules.
    ///
    /// # Errors
    ///
    /// Returns an error if either path contains a NUL character.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathnorm::path::{Flavor, PathRelationship};
    ///
    /// let between = |a, b| PathRelationship::between(a, b, Flavor::Unix).unwrap();
    /// assert_eq!(between("/a", "/a/b"), PathRelationship::Ancestor);
    /// assert_eq!(between("/a/b", "/a"), PathRelationship::Descendant);
    /// assert_eq!(between("/a/", "/a/b/.."), PathRelationship::Same);
    /// assert_eq!(between("/a", "/b"), PathRelationship::Unrelated);
    /// ```
    pub fn between(path1: &str, path2: &str, flavor: Flavor) -> Result<Self> {
        reject_forbidden(path1)?;
        reject_forbidden(path2)?;
        let (Some(p1), Some(p2)) = (comparable(path1, flavor)?, comparable(path2, flavor)?) else {
            return Ok(Self::Unrelated);
        };

        let case = CaseSensitivity::System;
        if case.equals(&p1, &p2, flavor) {
            return Ok(Self::Same);
        }
        if contains_normalized(&p1, &p2, case, flavor) {
            return Ok(Self::Ancestor);
        }
        if contains_normalized(&p2, &p1, case, flavor) {
            return Ok(Self::Descendant);
        }
        Ok(Self::Unrelated)
    }
}

impl std::fmt::Display for PathRelationship {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Ancestor => "ancestor",
            Self::Descendant => "descendant",
            Self::Same => "same",
            Self::Unrelated => "unrelated",
        };
        f.write_str(name)
    }
}

/// Normalizes a path for containment checks: no trailing separator, the flavor's
/// own separator, `None` when it cannot be normalized.
fn comparable(path: &str, flavor: Flavor) -> Result<Option<String>> {
    normalize_with(path, false, flavor.separator_style())
}

fn contains_normalized(parent: &str, child: &str, case: CaseSensitivity, flavor: Flavor) -> bool {
    if parent.is_empty() || child.is_empty() || case.equals(parent, child, flavor) {
        return false;
    }
    let separator = flavor.separator_style().as_char();
    if parent.ends_with(separator) {
        case.starts_with(child, parent, flavor)
    } else {
        case.starts_with(child, &format!("{parent}{separator}"), flavor)
    }
}
