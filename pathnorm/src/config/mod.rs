//! Configuration system for pathnorm.
//!
//! This module provides layered configuration with support for:
//! - YAML configuration files (user config and an explicit file)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (PATHNORM_*)
//! 3. Explicit file (via `ConfigBuilder::with_file`)
//! 4. User config (`~/.pathnorm/config.yaml`)
//! 5. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use pathnorm::config::ConfigBuilder;
//! use pathnorm::PathEngine;
//!
//! let config = ConfigBuilder::new().build().unwrap();
//! let engine = PathEngine::from_config(&config);
//! println!("flavor: {}", engine.flavor());
//! ```
//!
//! Programmatic configuration:
//!
//! ```
//! use pathnorm::config::{Config, ConfigBuilder, SeparatorSetting};
//!
//! let custom = Config {
//!     separator: Some(SeparatorSetting::Windows),
//!     ..Default::default()
//! };
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(custom)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.separator, Some(SeparatorSetting::Windows));
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, SeparatorSetting};
