//! Core types for path handling.
//!
//! This module defines the value types threaded through the engine: the
//! prefix descriptor produced by the classifier, the separator style used
//! when reassembling a path, the platform flavor that decides grammar rules,
//! and the case sensitivity used by comparisons.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The Unix name separator.
pub const UNIX_SEPARATOR: char = '/';

/// The Windows name separator.
pub const WINDOWS_SEPARATOR: char = '\\';

/// The extension separator.
pub const EXTENSION_SEPARATOR: char = '.';

/// The kind of prefix found at the start of a path string.
///
/// # Examples
///
/// ```
/// use pathnorm::path::{classify_prefix, PrefixKind};
///
/// assert_eq!(classify_prefix("C:\\a").unwrap().kind, PrefixKind::WindowsDrive);
/// assert_eq!(classify_prefix("C:a").unwrap().kind, PrefixKind::WindowsDriveRelative);
/// assert_eq!(classify_prefix("~bob/x").unwrap().kind, PrefixKind::HomeUser);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PrefixKind {
    /// No prefix: the path is relative (`a/b`).
    None,
    /// A single leading separator (`/a`).
    UnixRoot,
    /// A drive letter followed by a separator (`C:\a`).
    WindowsDrive,
    /// A drive letter without a separator (`C:a`).
    WindowsDriveRelative,
    /// A network path with a server authority (`\\server\a`).
    Unc,
    /// The current user's home directory (`~/a`).
    Home,
    /// A named user's home directory (`~bob/a`).
    HomeUser,
}

impl PrefixKind {
    /// Returns `true` for prefixes that pin the path to a root.
    ///
    /// Drive-relative paths (`C:a`) are not absolute: they resolve against
    /// the current directory of the drive.
    #[must_use]
    pub fn is_absolute(self) -> bool {
        matches!(
            self,
            Self::UnixRoot | Self::WindowsDrive | Self::Unc | Self::Home | Self::HomeUser
        )
    }
}

impl fmt::Display for PrefixKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::UnixRoot => "unix-root",
            Self::WindowsDrive => "windows-drive",
            Self::WindowsDriveRelative => "windows-drive-relative",
            Self::Unc => "unc",
            Self::Home => "home",
            Self::HomeUser => "home-user",
        };
        f.write_str(name)
    }
}

/// A classified prefix: how many leading bytes form the prefix, and what it is.
///
/// `len` may exceed the input length by one for home prefixes written
/// without a separator (`~` or `~bob`): the canonical form always carries
/// exactly one trailing separator, which the engine synthesizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix {
    /// Length of the prefix in bytes, including its trailing separator.
    pub len: usize,
    /// What the prefix denotes.
    pub kind: PrefixKind,
}

impl Prefix {
    pub(crate) const fn new(len: usize, kind: PrefixKind) -> Self {
        Self { len, kind }
    }

    /// Returns `true` when the prefix needs a separator the input lacks.
    #[must_use]
    pub fn is_synthesized(&self, path: &str) -> bool {
        self.len > path.len()
    }

    /// Renders the prefix text of `path`, converting its separators to
    /// `style` and appending the synthesized separator if needed.
    #[must_use]
    pub fn render(&self, path: &str, style: SeparatorStyle) -> String {
        let end = self.len.min(path.len());
        let mut text: String = path[..end]
            .chars()
            .map(|c| if is_separator(c) { style.as_char() } else { c })
            .collect();
        if self.is_synthesized(path) {
            text.push(style.as_char());
        }
        text
    }
}

/// Returns `true` if the character is a Unix or Windows separator.
#[must_use]
pub fn is_separator(c: char) -> bool {
    c == UNIX_SEPARATOR || c == WINDOWS_SEPARATOR
}

/// The separator written when a path is reassembled.
///
/// # Examples
///
/// ```
/// use pathnorm::path::SeparatorStyle;
///
/// assert_eq!(SeparatorStyle::Unix.as_char(), '/');
/// assert_eq!(SeparatorStyle::Windows.as_char(), '\\');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeparatorStyle {
    /// Forward slash.
    Unix,
    /// Backslash.
    Windows,
}

impl SeparatorStyle {
    /// The separator character for this style.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Unix => UNIX_SEPARATOR,
            Self::Windows => WINDOWS_SEPARATOR,
        }
    }

    /// The separator style of the host this process runs on.
    #[must_use]
    pub const fn system() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Unix
        }
    }

    /// Parses a style name: `unix`/`posix`/`/` or `windows`/`\`.
    ///
    /// # Errors
    ///
    /// Returns an error message if the name is not recognized.
    pub fn parse(s: &str) -> std::result::Result<Self, String> {
        match s.to_lowercase().as_str() {
            "unix" | "posix" | "/" => Ok(Self::Unix),
            "windows" | "\\" => Ok(Self::Windows),
            _ => Err(format!("invalid separator style: {s}")),
        }
    }
}

impl fmt::Display for SeparatorStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unix => write!(f, "unix"),
            Self::Windows => write!(f, "windows"),
        }
    }
}

/// The grammar rules of a platform.
///
/// The flavor decides how case is treated by "on system" comparisons and
/// whether a `:` in a file name is an NTFS alternate data stream marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Flavor {
    /// Case-sensitive names, `:` is an ordinary character.
    Unix,
    /// Case-insensitive names, `:` in a file name is rejected.
    Windows,
}

impl Flavor {
    /// The flavor of the host this process runs on.
    #[must_use]
    pub const fn host() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Unix
        }
    }

    /// Whether names are compared case-sensitively under this flavor.
    #[must_use]
    pub const fn is_case_sensitive(self) -> bool {
        matches!(self, Self::Unix)
    }

    /// The separator this flavor writes by default.
    #[must_use]
    pub const fn separator_style(self) -> SeparatorStyle {
        match self {
            Self::Unix => SeparatorStyle::Unix,
            Self::Windows => SeparatorStyle::Windows,
        }
    }

    /// Parses a flavor name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error message if the name is not recognized.
    pub fn parse(s: &str) -> std::result::Result<Self, String> {
        match s.to_lowercase().as_str() {
            "unix" | "posix" | "linux" | "macos" => Ok(Self::Unix),
            "windows" | "win" => Ok(Self::Windows),
            _ => Err(format!("invalid flavor: {s}")),
        }
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unix => write!(f, "unix"),
            Self::Windows => write!(f, "windows"),
        }
    }
}

/// Case handling for string comparisons.
///
/// `System` defers to the [`Flavor`] passed alongside it.
///
/// # Examples
///
/// ```
/// use pathnorm::path::{CaseSensitivity, Flavor};
///
/// let case = CaseSensitivity::System;
/// assert!(case.equals("ABC", "abc", Flavor::Windows));
/// assert!(!case.equals("ABC", "abc", Flavor::Unix));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseSensitivity {
    /// Exact comparison.
    #[default]
    Sensitive,
    /// Comparison ignoring case.
    Insensitive,
    /// Whatever the flavor does.
    System,
}

impl CaseSensitivity {
    /// Resolves `System` against a flavor, returning whether comparison is
    /// case-sensitive.
    #[must_use]
    pub const fn is_sensitive(self, flavor: Flavor) -> bool {
        match self {
            Self::Sensitive => true,
            Self::Insensitive => false,
            Self::System => flavor.is_case_sensitive(),
        }
    }

    /// Compares two characters.
    #[must_use]
    pub fn chars_eq(self, a: char, b: char, flavor: Flavor) -> bool {
        a == b || (!self.is_sensitive(flavor) && a.to_lowercase().eq(b.to_lowercase()))
    }

    /// Compares two strings.
    #[must_use]
    pub fn equals(self, a: &str, b: &str, flavor: Flavor) -> bool {
        if self.is_sensitive(flavor) {
            return a == b;
        }
        a.chars().count() == b.chars().count()
            && a.chars().zip(b.chars()).all(|(x, y)| self.chars_eq(x, y, flavor))
    }

    /// Checks whether `text` starts with `prefix`.
    #[must_use]
    pub fn starts_with(self, text: &str, prefix: &str, flavor: Flavor) -> bool {
        if self.is_sensitive(flavor) {
            return text.starts_with(prefix);
        }
        let mut text_chars = text.chars();
        prefix
            .chars()
            .all(|p| text_chars.next().is_some_and(|t| self.chars_eq(t, p, flavor)))
    }

    /// Parses a case name: `sensitive`, `insensitive` or `system`.
    ///
    /// # Errors
    ///
    /// Returns an error message if the name is not recognized.
    pub fn parse(s: &str) -> std::result::Result<Self, String> {
        match s.to_lowercase().as_str() {
            "sensitive" => Ok(Self::Sensitive),
            "insensitive" => Ok(Self::Insensitive),
            "system" => Ok(Self::System),
            _ => Err(format!("invalid case sensitivity: {s}")),
        }
    }
}

impl fmt::Display for CaseSensitivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sensitive => write!(f, "sensitive"),
            Self::Insensitive => write!(f, "insensitive"),
            Self::System => write!(f, "system"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_render_converts_separators() {
        let prefix = Prefix::new(9, PrefixKind::Unc);
        assert_eq!(
            prefix.render("\\\\server\\a", SeparatorStyle::Unix),
            "//server/"
        );
        assert_eq!(
            prefix.render("//server/a", SeparatorStyle::Windows),
            "\\\\server\\"
        );
    }

    #[test]
    fn test_prefix_render_synthesizes_home_separator() {
        let prefix = Prefix::new(2, PrefixKind::Home);
        assert!(prefix.is_synthesized("~"));
        assert_eq!(prefix.render("~", SeparatorStyle::Unix), "~/");

        let prefix = Prefix::new(4, PrefixKind::HomeUser);
        assert_eq!(prefix.render("~bob", SeparatorStyle::Windows), "~bob\\");
    }

    #[test]
    fn test_prefix_kind_absolute() {
        assert!(PrefixKind::UnixRoot.is_absolute());
        assert!(PrefixKind::Unc.is_absolute());
        assert!(PrefixKind::Home.is_absolute());
        assert!(!PrefixKind::None.is_absolute());
        assert!(!PrefixKind::WindowsDriveRelative.is_absolute());
    }

    #[test]
    fn test_prefix_kind_display() {
        assert_eq!(PrefixKind::WindowsDriveRelative.to_string(), "windows-drive-relative");
        assert_eq!(PrefixKind::HomeUser.to_string(), "home-user");
    }

    #[test]
    fn test_separator_style_parse() {
        assert_eq!(SeparatorStyle::parse("UNIX").unwrap(), SeparatorStyle::Unix);
        assert_eq!(SeparatorStyle::parse("\\").unwrap(), SeparatorStyle::Windows);
        assert!(SeparatorStyle::parse("mac").is_err());
    }

    #[test]
    fn test_flavor_case_sensitivity() {
        assert!(Flavor::Unix.is_case_sensitive());
        assert!(!Flavor::Windows.is_case_sensitive());
        assert_eq!(Flavor::Windows.separator_style(), SeparatorStyle::Windows);
    }

    #[test]
    fn test_case_sensitivity_eq() {
        let flavor = Flavor::Unix;
        assert!(CaseSensitivity::Sensitive.equals("abc", "abc", flavor));
        assert!(!CaseSensitivity::Sensitive.equals("abc", "ABC", flavor));
        assert!(CaseSensitivity::Insensitive.equals("abc", "ABC", flavor));
        assert!(!CaseSensitivity::Insensitive.equals("abc", "ABCD", flavor));
        assert!(!CaseSensitivity::System.equals("abc", "ABC", Flavor::Unix));
        assert!(CaseSensitivity::System.equals("abc", "ABC", Flavor::Windows));
    }

    #[test]
    fn test_case_sensitivity_starts_with() {
        let case = CaseSensitivity::Insensitive;
        assert!(case.starts_with("C:/Users/Bob", "c:/users/", Flavor::Unix));
        assert!(!case.starts_with("C:/", "c:/users/", Flavor::Unix));
        assert!(!CaseSensitivity::Sensitive.starts_with("C:/Users", "c:/", Flavor::Unix));
    }
}
