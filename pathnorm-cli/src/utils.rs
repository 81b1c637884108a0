//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading, engine setup, tilde expansion and
//! output printing.

use crate::error::CliError;
use pathnorm::output::{CheckResult, OutputFormatter, PathResult};
use pathnorm::{
    CaseSensitivity, Config, ConfigBuilder, Flavor, OutputFormat, PathEngine, PathReport,
    SeparatorSetting,
};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Extra configuration file.
    pub config: Option<PathBuf>,

    /// Grammar rules to apply.
    pub flavor: Option<Flavor>,

    /// Separator to write.
    pub separator: Option<SeparatorSetting>,

    /// Output format.
    pub format: Option<OutputFormat>,
}

/// Load layered configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Configuration files
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();

    if let Some(ref file) = global.config {
        builder = builder.with_file(file);
    }

    let overrides = Config {
        flavor: global.flavor,
        separator: global.separator,
        output_format: global.format,
        ..Default::default()
    };

    builder
        .with_config(overrides)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Everything a command needs: the merged configuration, the engine it
/// implies and the formatter to print with.
pub struct Context {
    /// Merged configuration.
    pub config: Config,
    /// Engine built from the configuration.
    pub engine: PathEngine,
    formatter: Box<dyn OutputFormatter>,
}

impl Context {
    /// Loads configuration and builds the engine.
    pub fn load(global: &GlobalOptions) -> Result<Self, CliError> {
        let config = load_configuration(global)?;
        let engine = PathEngine::from_config(&config);
        log::debug!(
            "using flavor {} with {} separators",
            engine.flavor(),
            engine.style()
        );
        let formatter = config.output_format.unwrap_or_default().create_formatter();
        Ok(Self {
            config,
            engine,
            formatter,
        })
    }

    /// The case handling to use: `explicit` if given, else the configured one.
    pub fn case(&self, explicit: Option<CaseSensitivity>) -> CaseSensitivity {
        explicit
            .or(self.config.case_sensitivity)
            .unwrap_or_default()
    }

    /// Whether normalization keeps trailing separators by default.
    pub fn keep_trailing_separator(&self) -> bool {
        self.config.keep_trailing_separator.unwrap_or(true)
    }

    /// Prints per-path results.
    pub fn print_results(&self, results: &[PathResult]) -> Result<(), CliError> {
        emit(&self.formatter.format_results(results)?);
        Ok(())
    }

    /// Prints a comparison outcome.
    pub fn print_check(&self, check: &CheckResult) -> Result<(), CliError> {
        emit(&self.formatter.format_check(check)?);
        Ok(())
    }

    /// Prints decomposition reports.
    pub fn print_reports(&self, reports: &[PathReport]) -> Result<(), CliError> {
        emit(&self.formatter.format_reports(reports)?);
        Ok(())
    }
}

fn emit(text: &str) {
    if !text.is_empty() {
        println!("{text}");
    }
}

/// Turns a list of results into a semantic failure naming the inputs that
/// produced no value.
pub fn require_all(results: &[PathResult], what: &str) -> Result<(), CliError> {
    let failed: Vec<&str> = results
        .iter()
        .filter(|r| r.result.is_none())
        .map(|r| r.input.as_str())
        .collect();

    if failed.is_empty() {
        Ok(())
    } else {
        Err(CliError::SemanticFailure(format!(
            "cannot {what}: {}",
            failed.join(", ")
        )))
    }
}

/// Replace a leading `~` or `~/` with the home directory.
///
/// `~user` forms are left alone.
pub fn expand_tilde(path: &str) -> Result<String, CliError> {
    let rest = if path == "~" {
        ""
    } else if let Some(rest) = path.strip_prefix("~/").or_else(|| path.strip_prefix("~\\")) {
        rest
    } else {
        return Ok(path.to_string());
    };

    let home_dir = home::home_dir()
        .ok_or_else(|| CliError::Config("Could not determine home directory".to_string()))?;
    let home_str = home_dir.to_string_lossy();

    if rest.is_empty() {
        return Ok(home_str.into_owned());
    }
    let sep = if home_str.ends_with(['/', '\\']) { "" } else { "/" };
    Ok(format!("{home_str}{sep}{rest}"))
}
