//! Path-string normalization and decomposition.
//!
//! Everything in this module works on strings alone. Nothing touches the
//! file system, resolves symlinks or consults the current directory, so the
//! same input gives the same answer on every host.
//!
//! # Key Concepts
//!
//! ## Prefix
//!
//! The leading part of a path that names its root: `/`, `C:`, `C:\`,
//! `\\server\`, `~/` or `~user/`. See [`classify_prefix`].
//!
//! ## Flavor and separator style
//!
//! A [`Flavor`] selects grammar rules (case sensitivity, alternate data
//! stream rejection) and a [`SeparatorStyle`] selects the separator written
//! on output. Both are explicit parameters; [`PathEngine::host`] is the one
//! place the host's values are picked up.
//!
//! ## Two ways to fail
//!
//! A path that cannot be normalized (bad prefix, `..` above the root) gives
//! `Ok(None)`. A path that must be refused (NUL character, stream name
//! under Windows rules) gives an [`Error`](crate::Error).
//!
//! # Examples
//!
//! ```
//! use pathnorm::path::{concat, get_extension, normalize, Flavor, SeparatorStyle};
//!
//! let unix = SeparatorStyle::Unix;
//! assert_eq!(normalize("~/docs/../notes/", unix).unwrap().as_deref(), Some("~/notes/"));
//! assert_eq!(concat(Some("/srv/www"), "../logs/access.log", unix).unwrap().as_deref(),
//!            Some("/srv/logs/access.log"));
//! assert_eq!(get_extension("archive.tar.gz", Flavor::Unix).unwrap(), "gz");
//! ```

pub mod decompose;
pub mod engine;
pub mod extension;
pub mod host;
pub mod normalize;
pub mod prefix;
pub mod relationship;
pub mod separators;
mod types;
pub mod wildcard;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use decompose::{
    get_full_path, get_full_path_no_end_separator, get_name, get_path, get_path_no_end_separator,
    get_prefix, index_of_last_separator,
};
pub use engine::PathEngine;
pub use extension::{
    get_base_name, get_extension, index_of_extension, is_extension, is_extension_any,
    is_extension_in, remove_extension,
};
pub use normalize::{concat, normalize, normalize_no_end_separator, normalize_with};
pub use prefix::{classify_prefix, prefix_length, reject_forbidden, FORBIDDEN_CHARACTER};
pub use relationship::{
    directory_contains, equals, equals_normalized, equals_normalized_on_system, equals_on_system,
    equals_with, PathRelationship,
};
pub use separators::{separators_to, separators_to_system, separators_to_unix, separators_to_windows};
pub use types::{
    is_separator, CaseSensitivity, Flavor, Prefix, PrefixKind, SeparatorStyle,
    EXTENSION_SEPARATOR, UNIX_SEPARATOR, WINDOWS_SEPARATOR,
};
pub use wildcard::{wildcard_match, wildcard_match_on_system};
