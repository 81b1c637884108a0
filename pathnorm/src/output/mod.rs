//! Output formatting for path results.
//!
//! This module renders the results of path operations for display, either
//! as plain lines for people and shell pipelines or as JSON for tools.

mod formatters;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Result;

pub use formatters::{CheckResult, HumanFormatter, JsonFormatter, PathReport, PathResult};

/// Trait for formatting path results into different output formats.
pub trait OutputFormatter {
    /// Format one result per input path.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format_results(&self, results: &[PathResult]) -> Result<String>;

    /// Format the outcome of a yes/no comparison.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format_check(&self, check: &CheckResult) -> Result<String>;

    /// Format full decomposition reports.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format_reports(&self, reports: &[PathReport]) -> Result<String>;
}

/// Available output formats.
///
/// # Examples
///
/// ```
/// use pathnorm::output::OutputFormat;
///
/// let format = OutputFormat::Json;
/// assert_eq!(format.to_string(), "json");
/// assert_eq!(OutputFormat::parse("HUMAN").unwrap(), OutputFormat::Human);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain lines.
    #[default]
    Human,
    /// JSON format.
    Json,
}

impl OutputFormat {
    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(&self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Human => Box::new(HumanFormatter),
            Self::Json => Box::new(JsonFormatter),
        }
    }

    /// Parses a format name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error message if the name is not recognized.
    pub fn parse(s: &str) -> std::result::Result<Self, String> {
        match s.to_lowercase().as_str() {
            "human" | "text" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            _ => Err(format!("invalid output format: {s} (expected human or json)")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Json => write!(f, "json"),
        }
    }
}
