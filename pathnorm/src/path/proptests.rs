//! Property-based tests across the path functions.
//!
//! The normalize and relationship modules carry their own small property
//! suites. This module checks how the pieces agree with each other.

use super::decompose::{get_full_path, get_name, get_prefix};
use super::extension::{get_base_name, get_extension, remove_extension};
use super::normalize::{concat, normalize, normalize_no_end_separator};
use super::relationship::{directory_contains, equals_normalized};
use super::separators::{separators_to_unix, separators_to_windows};
use super::types::{CaseSensitivity, Flavor, SeparatorStyle};
use super::wildcard::wildcard_match;
use proptest::prelude::*;

fn name_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,12}"
}

fn segment_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => name_strategy(),
        1 => Just(".".to_string()),
        1 => Just("..".to_string()),
        1 => "~[a-z ]{0,3}",
        1 => "[a-z:][:][a-z]{0,2}",
    ]
}

fn prefix_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just(""),
        Just("/"),
        Just("C:"),
        Just("C:/"),
        Just("\\\\host\\"),
        Just("~/"),
        Just("~alice/"),
    ]
}

fn path_strategy() -> impl Strategy<Value = String> {
    (
        prefix_strategy(),
        prop::collection::vec(segment_strategy(), 0..8),
        any::<bool>(),
    )
        .prop_map(|(prefix, parts, mixed)| {
            let sep = if mixed { "\\" } else { "/" };
            format!("{prefix}{}", parts.join(sep))
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // normalize(normalize(p)) == normalize(p)
    #[test]
    fn normalization_idempotent(path in path_strategy()) {
        if let Some(once) = normalize(&path, SeparatorStyle::Unix).unwrap() {
            let twice = normalize(&once, SeparatorStyle::Unix).unwrap();
            prop_assert_eq!(twice, Some(once));
        }
    }

    // Normalization keeps the prefix of the input
    #[test]
    fn normalization_preserves_prefix(path in path_strategy()) {
        if let Some(normalized) = normalize(&path, SeparatorStyle::Unix).unwrap() {
            let before = get_prefix(&path).unwrap().map(|p| separators_to_unix(&p));
            let after = get_prefix(&normalized).unwrap();
            prop_assert_eq!(before, after);
        }
    }

    // Normalizing with either style differs only in separators
    #[test]
    fn styles_differ_only_in_separators(path in path_strategy()) {
        let unix = normalize(&path, SeparatorStyle::Unix).unwrap();
        let windows = normalize(&path, SeparatorStyle::Windows).unwrap();
        prop_assert_eq!(unix.as_deref().map(separators_to_windows), windows);
    }

    // The no-end form is the keep form minus at most one trailing separator
    #[test]
    fn no_end_separator_strips_at_most_one(path in path_strategy()) {
        let keep = normalize(&path, SeparatorStyle::Unix).unwrap();
        let no_end = normalize_no_end_separator(&path, SeparatorStyle::Unix).unwrap();
        match (keep, no_end) {
            (Some(keep), Some(no_end)) => {
                prop_assert!(keep == no_end || keep == format!("{no_end}/"));
            }
            (None, None) => {}
            (keep, no_end) => prop_assert!(false, "disagreement: {:?} vs {:?}", keep, no_end),
        }
    }

    // A relative add is resolved against the base
    #[test]
    fn concat_matches_normalize_of_join(base in path_strategy(), add in name_strategy()) {
        let joined = format!("{}/{add}", base.trim_end_matches(['/', '\\']));
        let expected = if base.is_empty() {
            normalize(&add, SeparatorStyle::Unix).unwrap()
        } else if base.ends_with(['/', '\\']) {
            normalize(&format!("{base}{add}"), SeparatorStyle::Unix).unwrap()
        } else {
            normalize(&joined, SeparatorStyle::Unix).unwrap()
        };
        prop_assert_eq!(concat(Some(&base), &add, SeparatorStyle::Unix).unwrap(), expected);
    }

    // get_extension(base + "." + ext) == ext and get_base_name(...) == base
    #[test]
    fn extension_and_base_name_split(
        dirs in prop::collection::vec(name_strategy(), 0..4),
        base in "[a-z]{1,8}",
        ext in "[a-z0-9]{1,4}",
    ) {
        let mut path = dirs.join("/");
        if !path.is_empty() {
            path.push('/');
        }
        path.push_str(&format!("{base}.{ext}"));

        prop_assert_eq!(get_extension(&path, Flavor::Unix).unwrap(), ext.as_str());
        prop_assert_eq!(get_base_name(&path, Flavor::Unix).unwrap(), base.as_str());
        prop_assert_eq!(get_name(&path).unwrap(), format!("{base}.{ext}"));
        let stripped = remove_extension(&path, Flavor::Unix).unwrap();
        prop_assert_eq!(format!("{stripped}.{ext}"), path);
    }

    // Full path plus name gives back the input
    #[test]
    fn full_path_and_name_reassemble(
        dirs in prop::collection::vec(name_strategy(), 1..5),
        name in name_strategy(),
    ) {
        let path = format!("/{}/{name}", dirs.join("/"));
        let full = get_full_path(&path).unwrap().unwrap();
        prop_assert_eq!(format!("{full}{}", get_name(&path).unwrap()), path);
    }

    // Separator conversion round-trips when the input uses one style
    #[test]
    fn separator_conversion_round_trip(parts in prop::collection::vec(name_strategy(), 1..6)) {
        let unix = parts.join("/");
        prop_assert_eq!(separators_to_unix(&separators_to_windows(&unix)), unix);
    }

    // Paths are equal to themselves after normalization iff they normalize
    #[test]
    fn equals_normalized_reflexive(path in path_strategy()) {
        let normalizes = normalize(&path, SeparatorStyle::Unix).unwrap().is_some();
        prop_assert_eq!(equals_normalized(&path, &path).unwrap(), normalizes);
    }

    // A directory contains each of its subpaths
    #[test]
    fn directory_contains_children(
        dirs in prop::collection::vec(name_strategy(), 1..4),
        child in name_strategy(),
    ) {
        let parent = format!("/{}", dirs.join("/"));
        let nested = format!("{parent}/{child}");
        prop_assert!(directory_contains(&parent, &nested, CaseSensitivity::Sensitive, Flavor::Unix).unwrap());
        prop_assert!(!directory_contains(&nested, &parent, CaseSensitivity::Sensitive, Flavor::Unix).unwrap());
    }

    // A name always matches itself and the pattern "*"
    #[test]
    fn wildcard_matches_literal_and_star(name in "[a-zA-Z0-9._ -]{0,16}") {
        prop_assert!(wildcard_match(Some(&name), Some(&name), CaseSensitivity::Sensitive, Flavor::Unix));
        prop_assert!(wildcard_match(Some(&name), Some("*"), CaseSensitivity::Sensitive, Flavor::Unix));
    }
}
