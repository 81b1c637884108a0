//! Property-based tests for configuration system.

use super::merger::ConfigMerger;
use super::schema::{Config, SeparatorSetting};
use crate::output::OutputFormat;
use crate::path::{CaseSensitivity, Flavor};
use proptest::prelude::*;

fn flavor_strategy() -> impl Strategy<Value = Flavor> {
    prop_oneof![Just(Flavor::Unix), Just(Flavor::Windows)]
}

fn separator_strategy() -> impl Strategy<Value = SeparatorSetting> {
    prop_oneof![
        Just(SeparatorSetting::Unix),
        Just(SeparatorSetting::Windows),
        Just(SeparatorSetting::System),
    ]
}

fn case_strategy() -> impl Strategy<Value = CaseSensitivity> {
    prop_oneof![
        Just(CaseSensitivity::Sensitive),
        Just(CaseSensitivity::Insensitive),
        Just(CaseSensitivity::System),
    ]
}

fn format_strategy() -> impl Strategy<Value = OutputFormat> {
    prop_oneof![Just(OutputFormat::Human), Just(OutputFormat::Json)]
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(flavor_strategy()),
        prop::option::of(separator_strategy()),
        prop::option::of(case_strategy()),
        prop::option::of(any::<bool>()),
        prop::option::of(format_strategy()),
    )
        .prop_map(|(flavor, separator, case_sensitivity, keep, output_format)| Config {
            flavor,
            separator,
            case_sensitivity,
            keep_trailing_separator: keep,
            output_format,
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Every Some in the higher layer wins; every None falls through
    #[test]
    fn config_merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut result = low.clone();
        ConfigMerger::merge_into(&mut result, &high);

        prop_assert_eq!(result.flavor, high.flavor.or(low.flavor));
        prop_assert_eq!(result.separator, high.separator.or(low.separator));
        prop_assert_eq!(result.case_sensitivity, high.case_sensitivity.or(low.case_sensitivity));
        prop_assert_eq!(
            result.keep_trailing_separator,
            high.keep_trailing_separator.or(low.keep_trailing_separator)
        );
        prop_assert_eq!(result.output_format, high.output_format.or(low.output_format));
    }

    // Merging a config into itself changes nothing
    #[test]
    fn config_merge_idempotent(config in config_strategy()) {
        let mut result = config.clone();
        ConfigMerger::merge_into(&mut result, &config);
        prop_assert_eq!(result, config);
    }

    // Merging an empty config changes nothing
    #[test]
    fn config_merge_empty_identity(config in config_strategy()) {
        let mut result = config.clone();
        ConfigMerger::merge_into(&mut result, &Config::default());
        prop_assert_eq!(result, config);
    }

    // Merge is associative: (a <- b) <- c == a <- (b <- c)
    #[test]
    fn config_merge_associative(
        a in config_strategy(),
        b in config_strategy(),
        c in config_strategy(),
    ) {
        let mut left = a.clone();
        ConfigMerger::merge_into(&mut left, &b);
        ConfigMerger::merge_into(&mut left, &c);

        let mut bc = b;
        ConfigMerger::merge_into(&mut bc, &c);
        let mut right = a;
        ConfigMerger::merge_into(&mut right, &bc);

        prop_assert_eq!(left, right);
    }

    // Any config survives a YAML round trip
    #[test]
    fn config_yaml_roundtrip(config in config_strategy()) {
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        prop_assert_eq!(parsed, config);
    }
}
