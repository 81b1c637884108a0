//! Environment variable handling for configuration overrides.
//!
//! This module provides support for PATHNORM_* environment variables that
//! override configuration file values.

use crate::config::schema::{Config, SeparatorSetting};
use crate::error::{Error, Result};
use crate::output::OutputFormat;
use crate::path::{CaseSensitivity, Flavor};
use std::env;

/// Grammar flavor override.
pub const FLAVOR_ENV: &str = "PATHNORM_FLAVOR";
/// Output separator override.
pub const SEPARATOR_ENV: &str = "PATHNORM_SEPARATOR";
/// Case sensitivity override.
pub const CASE_ENV: &str = "PATHNORM_CASE";
/// Trailing separator override.
pub const KEEP_TRAILING_SEPARATOR_ENV: &str = "PATHNORM_KEEP_TRAILING_SEPARATOR";
/// Output format override.
pub const OUTPUT_FORMAT_ENV: &str = "PATHNORM_OUTPUT_FORMAT";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use pathnorm::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Reads all PATHNORM_* environment variables and applies them to the
    /// configuration with higher precedence than file-based configs.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the variable if any value is
    /// not recognized.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(val) = env::var(FLAVOR_ENV) {
            config.flavor = Some(Flavor::parse(&val).map_err(|message| invalid(FLAVOR_ENV, message))?);
        }

        if let Ok(val) = env::var(SEPARATOR_ENV) {
            config.separator = Some(
                SeparatorSetting::parse(&val).map_err(|message| invalid(SEPARATOR_ENV, message))?,
            );
        }

        if let Ok(val) = env::var(CASE_ENV) {
            config.case_sensitivity =
                Some(CaseSensitivity::parse(&val).map_err(|message| invalid(CASE_ENV, message))?);
        }

        if let Ok(val) = env::var(KEEP_TRAILING_SEPARATOR_ENV) {
            config.keep_trailing_separator =
                Some(Self::parse_bool(KEEP_TRAILING_SEPARATOR_ENV, &val)?);
        }

        if let Ok(val) = env::var(OUTPUT_FORMAT_ENV) {
            config.output_format = Some(
                OutputFormat::parse(&val).map_err(|message| invalid(OUTPUT_FORMAT_ENV, message))?,
            );
        }

        Ok(())
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(invalid(
                field,
                format!("Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"),
            )),
        }
    }
}

fn invalid(field: &str, message: String) -> Error {
    Error::Validation {
        field: field.into(),
        message,
    }
}
