//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `normalize`: Normalize paths
//! - `concat`: Join a path onto a base path
//! - `inspect`: Show the full decomposition of paths
//! - `prefix_length`: Print the length of a path's prefix
//! - `extension`: Print or remove file extensions
//! - `equals`: Compare two paths
//! - `contains`: Check directory containment
//! - `matches`: Match a name against a wildcard pattern
//! - `separators`: Convert path separators
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod concat;
pub mod contains;
pub mod equals;
pub mod extension;
pub mod inspect;
pub mod matches;
pub mod normalize;
pub mod prefix_length;
pub mod separators;

pub use completions::CompletionsCommand;
pub use concat::ConcatCommand;
pub use contains::ContainsCommand;
pub use equals::EqualsCommand;
pub use extension::ExtensionCommand;
pub use inspect::InspectCommand;
pub use matches::MatchesCommand;
pub use normalize::NormalizeCommand;
pub use prefix_length::PrefixLengthCommand;
pub use separators::SeparatorsCommand;
