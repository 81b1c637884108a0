#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathnorm
//!
//! A library for normalizing and taking apart path strings.
//!
//! Paths are treated as text: nothing here touches the file system, so a
//! Windows path can be handled on a Unix host and the other way round.
//!
//! ## Core Types
//!
//! - [`PathEngine`]: the path functions bound to a flavor and separator style
//! - [`Flavor`] and [`SeparatorStyle`]: grammar rules and output separator
//! - [`PathRelationship`]: how two paths relate in the hierarchy
//! - [`Config`] and [`ConfigBuilder`]: layered configuration
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use pathnorm::{Flavor, PathEngine, SeparatorStyle};
//!
//! let engine = PathEngine::new()
//!     .with_flavor(Flavor::Windows)
//!     .with_style(SeparatorStyle::Windows);
//!
//! let normalized = engine.normalize("C:/temp/../logs//app.log").unwrap();
//! assert_eq!(normalized.as_deref(), Some("C:\\logs\\app.log"));
//! assert_eq!(engine.get_extension("app.log").unwrap(), "log");
//!
//! // `..` above the root cannot be normalized
//! assert_eq!(engine.normalize("C:/..").unwrap(), None);
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod path;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder, SeparatorSetting};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use output::{OutputFormat, PathReport};
pub use path::{
    CaseSensitivity, Flavor, PathEngine, PathRelationship, Prefix, PrefixKind, SeparatorStyle,
};
