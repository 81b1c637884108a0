//! Configuration schema definitions.
//!
//! This module defines the configuration structure for pathnorm: which
//! grammar rules apply, which separator is written, how comparisons treat
//! case and how results are printed.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::output::OutputFormat;
use crate::path::{CaseSensitivity, Flavor, SeparatorStyle};

/// Complete configuration structure.
///
/// Every field is optional so that sources can be layered: an unset field
/// leaves the value from a lower-precedence source in place.
///
/// # Examples
///
/// ```
/// use pathnorm::config::{Config, SeparatorSetting};
/// use pathnorm::path::Flavor;
///
/// let config = Config {
///     flavor: Some(Flavor::Windows),
///     separator: Some(SeparatorSetting::Unix),
///     ..Default::default()
/// };
/// assert_eq!(config.keep_trailing_separator, None);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Grammar rules (case handling, alternate data stream rejection).
    pub flavor: Option<Flavor>,

    /// Separator written by normalization.
    pub separator: Option<SeparatorSetting>,

    /// Case handling for equality and wildcard matching.
    pub case_sensitivity: Option<CaseSensitivity>,

    /// Whether normalization keeps a trailing separator.
    pub keep_trailing_separator: Option<bool>,

    /// Output format for CLI results.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// The built-in defaults, the lowest-precedence layer.
    ///
    /// Flavor and separator stay unset: they resolve against the host when
    /// a [`PathEngine`](crate::path::PathEngine) is built.
    #[must_use]
    pub fn defaults() -> Self {
        Self {
            flavor: None,
            separator: None,
            case_sensitivity: Some(CaseSensitivity::Sensitive),
            keep_trailing_separator: Some(true),
            output_format: Some(OutputFormat::Human),
        }
    }
}

/// Separator choice as written in configuration.
///
/// Unlike [`SeparatorStyle`] this can name the host's separator.
///
/// # Examples
///
/// ```
/// use pathnorm::config::SeparatorSetting;
/// use pathnorm::path::SeparatorStyle;
///
/// assert_eq!(SeparatorSetting::Windows.resolve(), SeparatorStyle::Windows);
/// assert_eq!(SeparatorSetting::System.resolve(), SeparatorStyle::system());
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SeparatorSetting {
    /// Forward slash.
    Unix,
    /// Backslash.
    Windows,
    /// Whatever the host uses.
    System,
}

impl SeparatorSetting {
    /// Resolves the setting to a concrete style.
    #[must_use]
    pub const fn resolve(self) -> SeparatorStyle {
        match self {
            Self::Unix => SeparatorStyle::Unix,
            Self::Windows => SeparatorStyle::Windows,
            Self::System => SeparatorStyle::system(),
        }
    }

    /// Parses a setting name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error message if the name is not recognized.
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "system" => Ok(Self::System),
            other => SeparatorStyle::parse(other)
                .map(Self::from)
                .map_err(|_| format!("invalid separator: {s} (expected unix, windows or system)")),
        }
    }
}

impl From<SeparatorStyle> for SeparatorSetting {
    fn from(style: SeparatorStyle) -> Self {
        match style {
            SeparatorStyle::Unix => Self::Unix,
            SeparatorStyle::Windows => Self::Windows,
        }
    }
}

impl fmt::Display for SeparatorSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unix => write!(f, "unix"),
            Self::Windows => write!(f, "windows"),
            Self::System => write!(f, "system"),
        }
    }
}
