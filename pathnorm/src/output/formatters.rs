//! Output formatter implementations.

use serde::Serialize;

use crate::path::{PathEngine, PrefixKind};
use crate::Result;

use super::OutputFormatter;

/// Placeholder printed by the human formatter for an absent value.
const NONE_MARKER: &str = "<none>";

/// The result of a single-path operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathResult {
    /// The path as given.
    pub input: String,
    /// The result, or `None` if the path could not be processed.
    pub result: Option<String>,
}

impl PathResult {
    /// Creates a result for `input`.
    #[must_use]
    pub fn new(input: impl Into<String>, result: Option<String>) -> Self {
        Self {
            input: input.into(),
            result,
        }
    }
}

/// The outcome of comparing two strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    /// Which comparison ran (`equals`, `contains`, `matches`).
    pub operation: String,
    /// First operand.
    pub left: String,
    /// Second operand.
    pub right: String,
    /// Whether the comparison held.
    pub result: bool,
}

/// A full decomposition of one path.
///
/// # Examples
///
/// ```
/// use pathnorm::output::PathReport;
/// use pathnorm::PathEngine;
///
/// let report = PathReport::new("/srv/www/index.html", &PathEngine::new()).unwrap();
/// assert_eq!(report.prefix_length, 1);
/// assert_eq!(report.full_path.as_deref(), Some("/srv/www/"));
/// assert_eq!(report.extension, "html");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathReport {
    /// The path as given.
    pub input: String,
    /// Prefix length, `-1` when the prefix is malformed.
    pub prefix_length: isize,
    /// Prefix kind, absent when the prefix is malformed.
    pub prefix_kind: Option<PrefixKind>,
    /// Prefix text.
    pub prefix: Option<String>,
    /// Directory part without the prefix.
    pub path: Option<String>,
    /// Directory part with the prefix.
    pub full_path: Option<String>,
    /// Final segment.
    pub name: String,
    /// Final segment without its extension.
    pub base_name: String,
    /// Extension without the dot.
    pub extension: String,
    /// Normalized form.
    pub normalized: Option<String>,
    /// Normalized form without a trailing separator.
    pub normalized_no_end_separator: Option<String>,
}

impl PathReport {
    /// Decomposes `path` with `engine`.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine rejects the path.
    pub fn new(path: &str, engine: &PathEngine) -> Result<Self> {
        Ok(Self {
            input: path.to_string(),
            prefix_length: engine.prefix_length(path),
            prefix_kind: engine.classify_prefix(path).map(|p| p.kind),
            prefix: engine.get_prefix(path)?,
            path: engine.get_path(path)?.map(str::to_string),
            full_path: engine.get_full_path(path)?,
            name: engine.get_name(path)?.to_string(),
            base_name: engine.get_base_name(path)?.to_string(),
            extension: engine.get_extension(path)?.to_string(),
            normalized: engine.normalize(path)?,
            normalized_no_end_separator: engine.normalize_no_end_separator(path)?,
        })
    }
}

fn or_none(value: Option<&str>) -> &str {
    value.unwrap_or(NONE_MARKER)
}

/// Formatter for human-readable output.
///
/// Results print one per line with failures left out, so the output can be
/// piped into other tools.
pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format_results(&self, results: &[PathResult]) -> Result<String> {
        let lines: Vec<&str> = results.iter().filter_map(|r| r.result.as_deref()).collect();
        Ok(lines.join("\n"))
    }

    fn format_check(&self, check: &CheckResult) -> Result<String> {
        Ok(check.result.to_string())
    }

    fn format_reports(&self, reports: &[PathReport]) -> Result<String> {
        let blocks: Vec<String> = reports
            .iter()
            .map(|report| {
                let kind = report
                    .prefix_kind
                    .map_or_else(|| "invalid".to_string(), |k| k.to_string());
                [
                    format!("{}:", report.input),
                    format!("  prefix length: {} ({kind})", report.prefix_length),
                    format!("  prefix: {}", or_none(report.prefix.as_deref())),
                    format!("  path: {}", or_none(report.path.as_deref())),
                    format!("  full path: {}", or_none(report.full_path.as_deref())),
                    format!("  name: {}", report.name),
                    format!("  base name: {}", report.base_name),
                    format!("  extension: {}", report.extension),
                    format!("  normalized: {}", or_none(report.normalized.as_deref())),
                    format!(
                        "  normalized (no end separator): {}",
                        or_none(report.normalized_no_end_separator.as_deref())
                    ),
                ]
                .join("\n")
            })
            .collect();
        Ok(blocks.join("\n\n"))
    }
}

/// Formatter for JSON output.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_results(&self, results: &[PathResult]) -> Result<String> {
        Ok(serde_json::to_string_pretty(results)?)
    }

    fn format_check(&self, check: &CheckResult) -> Result<String> {
        Ok(serde_json::to_string_pretty(check)?)
    }

    fn format_reports(&self, reports: &[PathReport]) -> Result<String> {
        Ok(serde_json::to_string_pretty(reports)?)
    }
}
