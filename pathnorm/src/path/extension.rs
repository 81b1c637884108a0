//! File name extensions.
//!
//! An extension exists only when the last `.` comes after the last
//! separator. Under [`Flavor::Windows`] a `:` in the file name marks an
//! NTFS alternate data stream and is rejected; under [`Flavor::Unix`] it is
//! an ordinary character. The colon of a drive prefix is never a stream
//! marker, so `C:file.txt` is accepted under both flavors.

use crate::error::{Error, Result};

use super::decompose::{get_name, index_of_last_separator};
use super::prefix::{classify_prefix, reject_forbidden};
use super::types::{Flavor, EXTENSION_SEPARATOR};

/// Returns the byte index of the extension separator, if the name has one.
///
/// # Errors
///
/// Returns an error if the path contains a NUL, or an alternate data stream
/// marker under the Windows flavor. The drive colon of `C:file.txt` is part
/// of the prefix and is not a marker.
///
/// # Examples
///
/// ```
/// use pathnorm::path::{index_of_extension, Flavor};
///
/// assert_eq!(index_of_extension("a/b/file.txt", Flavor::Unix).unwrap(), Some(8));
/// assert_eq!(index_of_extension("a.txt/b", Flavor::Unix).unwrap(), None);
/// assert!(index_of_extension("file.exe:bar.txt", Flavor::Windows).is_err());
/// assert_eq!(index_of_extension("C:file.txt", Flavor::Windows).unwrap(), Some(6));
/// ```
pub fn index_of_extension(path: &str, flavor: Flavor) -> Result<Option<usize>> {
    reject_forbidden(path)?;
    if flavor == Flavor::Windows {
        reject_alternate_data_stream(path)?;
    }
    let Some(dot) = path.rfind(EXTENSION_SEPARATOR) else {
        return Ok(None);
    };
    match index_of_last_separator(path) {
        Some(separator) if separator > dot => Ok(None),
        _ => Ok(Some(dot)),
    }
}

/// Returns the extension without its dot, or `""` if there is none.
///
/// # Errors
///
/// Returns an error if the path contains a NUL, or an alternate data stream
/// marker under the Windows flavor. A `:` that belongs to the prefix
/// (`C:file.txt`) is not a marker.
///
/// # Examples
///
/// ```
/// use pathnorm::path::{get_extension, Flavor};
///
/// assert_eq!(get_extension("foo.txt", Flavor::Unix).unwrap(), "txt");
/// assert_eq!(get_extension("C:file.txt", Flavor::Windows).unwrap(), "txt");
/// assert_eq!(get_extension("a/b.jpg/c", Flavor::Unix).unwrap(), "");
/// assert_eq!(get_extension("foo.exe:bar.txt", Flavor::Unix).unwrap(), "txt");
/// ```
pub fn get_extension(path: &str, flavor: Flavor) -> Result<&str> {
    Ok(index_of_extension(path, flavor)?.map_or("", |dot| &path[dot + 1..]))
}

/// Returns the path with its extension (and the dot) removed.
///
/// # Errors
///
/// Returns an error if the path contains a NUL, or an alternate data stream
/// marker under the Windows flavor.
///
/// # Examples
///
/// ```
/// use pathnorm::path::{remove_extension, Flavor};
///
/// assert_eq!(remove_extension("a/b/c.jpg", Flavor::Unix).unwrap(), "a/b/c");
/// assert_eq!(remove_extension("a.b/c", Flavor::Unix).unwrap(), "a.b/c");
/// ```
pub fn remove_extension(path: &str, flavor: Flavor) -> Result<&str> {
    Ok(index_of_extension(path, flavor)?.map_or(path, |dot| &path[..dot]))
}

/// Returns the name after the last separator, minus its extension.
///
/// # Errors
///
/// Returns an error if the path contains a NUL, or an alternate data stream
/// marker under the Windows flavor.
///
/// # Examples
///
/// ```
/// use pathnorm::path::{get_base_name, Flavor};
///
/// assert_eq!(get_base_name("a/b/c.txt", Flavor::Unix).unwrap(), "c");
/// assert_eq!(get_base_name("a/b/c/", Flavor::Unix).unwrap(), "");
/// ```
pub fn get_base_name(path: &str, flavor: Flavor) -> Result<&str> {
    remove_extension(get_name(path)?, flavor)
}

/// Checks whether the extension equals `extension` (case-sensitively).
///
/// An empty `extension` matches a name that has no extension.
///
/// # Errors
///
/// Returns an error if the path contains a NUL, or an alternate data stream
/// marker under the Windows flavor.
///
/// # Examples
///
/// ```
/// use pathnorm::path::{is_extension, Flavor};
///
/// assert!(is_extension("file.txt", "txt", Flavor::Unix).unwrap());
/// assert!(!is_extension("file.txt", "TXT", Flavor::Unix).unwrap());
/// assert!(is_extension("file", "", Flavor::Unix).unwrap());
/// ```
pub fn is_extension(path: &str, extension: &str, flavor: Flavor) -> Result<bool> {
    if extension.is_empty() {
        return Ok(index_of_extension(path, flavor)?.is_none());
    }
    Ok(get_extension(path, flavor)? == extension)
}

/// Checks whether the extension is one of `extensions`.
///
/// An empty slice matches a name that has no extension.
///
/// # Errors
///
/// Returns an error if the path contains a NUL, or an alternate data stream
/// marker under the Windows flavor.
///
/// # Examples
///
/// ```
/// use pathnorm::path::{is_extension_any, Flavor};
///
/// assert!(is_extension_any("photo.jpg", &["png", "jpg"], Flavor::Unix).unwrap());
/// assert!(is_extension_any("README", &[], Flavor::Unix).unwrap());
/// ```
pub fn is_extension_any(path: &str, extensions: &[&str], flavor: Flavor) -> Result<bool> {
    is_extension_in(path, extensions, flavor)
}

/// Checks whether the extension is yielded by `extensions`.
///
/// The extension is computed once. An empty iterator matches a name that has
/// no extension.
///
/// # Errors
///
/// Returns an error if the path contains a NUL, or an alternate data stream
/// marker under the Windows flavor.
pub fn is_extension_in<I, S>(path: &str, extensions: I, flavor: Flavor) -> Result<bool>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let actual = get_extension(path, flavor)?;
    let mut extensions = extensions.into_iter().peekable();
    if extensions.peek().is_none() {
        return Ok(index_of_extension(path, flavor)?.is_none());
    }
    Ok(extensions.any(|candidate| candidate.as_ref() == actual))
}

/// Fails if a `:` appears in the file name part of `path`.
///
/// The search starts after the last separator, and never inside a valid
/// prefix, so the drive colon of `C:file.txt` is not a stream marker.
fn reject_alternate_data_stream(path: &str) -> Result<()> {
    let after_separator = index_of_last_separator(path).map_or(0, |index| index + 1);
    let after_prefix = classify_prefix(path).map_or(0, |prefix| prefix.len.min(path.len()));
    let start = after_separator.max(after_prefix);

    if path[start..].contains(':') {
        log::debug!("rejecting alternate data stream name in {path:?}");
        return Err(Error::AlternateDataStream {
            path: path.to_string(),
        });
    }
    Ok(())
}
