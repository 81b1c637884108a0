//! Library exports for pathnorm-cli.
//!
//! This module exports the CLI structure for use by the binary and by
//! tests that exercise the argument parser directly.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

// Re-export CLI for the binary
pub use cli::Cli;
