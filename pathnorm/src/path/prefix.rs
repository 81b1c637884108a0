//! Prefix classification.
//!
//! The prefix is the leading part of a path that names its root or
//! authority. The classifier recognizes:
//!
//! | input          | prefix      | kind                     |
//! |----------------|-------------|--------------------------|
//! | `a/b`          | (empty)     | `None`                   |
//! | `/a/b`         | `/`         | `UnixRoot`               |
//! | `C:a/b`        | `C:`        | `WindowsDriveRelative`   |
//! | `C:\a\b`       | `C:\`       | `WindowsDrive`           |
//! | `\\server\a`   | `\\server\` | `Unc`                    |
//! | `~/a`          | `~/`        | `Home`                   |
//! | `~bob/a`       | `~bob/`     | `HomeUser`               |
//!
//! Anything malformed (`:a`, `1:a`, `///a`, `\\-server\a`, `//server`)
//! has no valid prefix.

use crate::error::{Error, Result};

use super::host::is_valid_host_name;
use super::types::{is_separator, Prefix, PrefixKind, UNIX_SEPARATOR, WINDOWS_SEPARATOR};

/// The character no path may contain.
pub const FORBIDDEN_CHARACTER: char = '\0';

/// Rejects a path containing the forbidden NUL character.
///
/// # Errors
///
/// Returns [`Error::IllegalCharacter`] with the byte offset of the first NUL.
///
/// # Examples
///
/// ```
/// use pathnorm::path::reject_forbidden;
///
/// assert!(reject_forbidden("a/b").is_ok());
/// assert!(reject_forbidden("a\0b").is_err());
/// ```
pub fn reject_forbidden(path: &str) -> Result<()> {
    match path.find(FORBIDDEN_CHARACTER) {
        Some(position) => {
            log::debug!("rejecting path with NUL at byte {position}");
            Err(Error::IllegalCharacter {
                path: path.escape_default().to_string(),
                position,
            })
        }
        None => Ok(()),
    }
}

/// Classifies the prefix of a path.
///
/// Returns `None` if the prefix is malformed or the path contains a NUL.
///
/// # Examples
///
/// ```
/// use pathnorm::path::{classify_prefix, PrefixKind};
///
/// let prefix = classify_prefix("\\\\server\\share\\file.txt").unwrap();
/// assert_eq!(prefix.len, 9);
/// assert_eq!(prefix.kind, PrefixKind::Unc);
///
/// assert_eq!(classify_prefix("a/b").unwrap().kind, PrefixKind::None);
/// assert!(classify_prefix("1:/a").is_none());
/// ```
#[must_use]
pub fn classify_prefix(path: &str) -> Option<Prefix> {
    if path.contains(FORBIDDEN_CHARACTER) {
        return None;
    }

    let bytes = path.as_bytes();
    let Some(&first) = bytes.first() else {
        return Some(Prefix::new(0, PrefixKind::None));
    };
    let first = char::from(first);

    if first == ':' {
        return None;
    }
    if first == '~' {
        return Some(classify_home(path));
    }

    let Some(&second) = bytes.get(1) else {
        return Some(if is_separator(first) {
            Prefix::new(1, PrefixKind::UnixRoot)
        } else {
            Prefix::new(0, PrefixKind::None)
        });
    };
    let second = char::from(second);

    if second == ':' {
        if first.is_ascii_alphabetic() {
            let absolute = bytes.get(2).is_some_and(|&b| is_separator(char::from(b)));
            return Some(if absolute {
                Prefix::new(3, PrefixKind::WindowsDrive)
            } else {
                Prefix::new(2, PrefixKind::WindowsDriveRelative)
            });
        }
        if is_separator(first) {
            return Some(Prefix::new(1, PrefixKind::UnixRoot));
        }
        return None;
    }

    if !is_separator(first) || !is_separator(second) {
        return Some(if is_separator(first) {
            Prefix::new(1, PrefixKind::UnixRoot)
        } else {
            Prefix::new(0, PrefixKind::None)
        });
    }

    classify_unc(path)
}

/// Returns the prefix length of a path: `-1` if invalid, `0` for none.
///
/// Home prefixes without a separator report one more than the input length.
///
/// # Examples
///
/// ```
/// use pathnorm::path::prefix_length;
///
/// assert_eq!(prefix_length(""), 0);
/// assert_eq!(prefix_length("/a"), 1);
/// assert_eq!(prefix_length("C:a"), 2);
/// assert_eq!(prefix_length("C:\\a"), 3);
/// assert_eq!(prefix_length("~"), 2);
/// assert_eq!(prefix_length("\\\\server.example.org\\a\\b\\c.txt"), 21);
/// assert_eq!(prefix_length("\\\\-server\\a\\b\\c.txt"), -1);
/// ```
#[must_use]
pub fn prefix_length(path: &str) -> isize {
    classify_prefix(path).map_or(-1, |prefix| {
        isize::try_from(prefix.len).unwrap_or(isize::MAX)
    })
}

fn classify_home(path: &str) -> Prefix {
    let end = path[1..].find(is_separator).map_or(path.len(), |offset| offset + 1);
    let user = &path[1..end];
    if !user.chars().all(is_user_name_char) {
        log::trace!("{path:?} starts with '~' but {user:?} is not a user name");
        return Prefix::new(0, PrefixKind::None);
    }

    let kind = if user.is_empty() {
        PrefixKind::Home
    } else {
        PrefixKind::HomeUser
    };
    // One past the separator, or one past the end for the synthesized one
    Prefix::new(end + 1, kind)
}

fn is_user_name_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '.' | '_' | '-')
}

fn classify_unc(path: &str) -> Option<Prefix> {
    let rest = &path[2..];
    let Some(end) = rest.find([UNIX_SEPARATOR, WINDOWS_SEPARATOR]) else {
        log::trace!("UNC path {path:?} has no separator after the server name");
        return None;
    };
    let host = &rest[..end];
    if !is_valid_host_name(host) {
        log::trace!("UNC path {path:?} has an invalid server name {host:?}");
        return None;
    }
    Some(Prefix::new(2 + end + 1, PrefixKind::Unc))
}
