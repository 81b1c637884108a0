//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use pathnorm::config::{Config, ConfigMerger};
/// use pathnorm::path::Flavor;
///
/// let low = Config { flavor: Some(Flavor::Unix), ..Default::default() };
/// let high = Config { flavor: Some(Flavor::Windows), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.flavor, Some(Flavor::Windows));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// Every field is scalar: a `Some` in `source` replaces the target value
    /// and a `None` leaves it alone.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.flavor.is_some() {
            target.flavor = source.flavor;
        }

        if source.separator.is_some() {
            target.separator = source.separator;
        }

        if source.case_sensitivity.is_some() {
            target.case_sensitivity = source.case_sensitivity;
        }

        if source.keep_trailing_separator.is_some() {
            target.keep_trailing_separator = source.keep_trailing_separator;
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }
    }
}
