//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CompletionsCommand, ConcatCommand, ContainsCommand, EqualsCommand, ExtensionCommand,
    InspectCommand, MatchesCommand, NormalizeCommand, PrefixLengthCommand, SeparatorsCommand,
};
use clap::{Parser, Subcommand};
use pathnorm::{Flavor, OutputFormat, SeparatorSetting};
use std::path::PathBuf;

/// Command-line tool for normalizing and decomposing path strings.
#[derive(Parser)]
#[command(name = "pathnorm")]
#[command(version, about = "Normalize and decompose path strings", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Read configuration from this file as well
    #[arg(long, value_name = "FILE", global = true, env = "PATHNORM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Grammar rules to apply (unix, windows)
    #[arg(long, value_name = "FLAVOR", global = true, value_parser = Flavor::parse)]
    pub flavor: Option<Flavor>,

    /// Separator to write (unix, windows, system)
    #[arg(long, value_name = "STYLE", global = true, value_parser = SeparatorSetting::parse)]
    pub separator: Option<SeparatorSetting>,

    /// Output format (human, json)
    #[arg(long, value_name = "FORMAT", global = true, value_parser = OutputFormat::parse)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Normalize paths, resolving `.` and `..` segments
    Normalize(NormalizeCommand),

    /// Join a path onto a base path and normalize the result
    Concat(ConcatCommand),

    /// Show the full decomposition of paths
    Inspect(InspectCommand),

    /// Print the length of a path's prefix
    PrefixLength(PrefixLengthCommand),

    /// Print or remove the extension of paths
    Extension(ExtensionCommand),

    /// Compare two paths
    Equals(EqualsCommand),

    /// Check whether a directory contains a path
    Contains(ContainsCommand),

    /// Match a file name against a wildcard pattern
    Matches(MatchesCommand),

    /// Convert the separators of a path
    Separators(SeparatorsCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
