//! Build script for pathnorm-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("pathnorm")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Normalize and decompose path strings")
        .long_about(
            "Command-line tool for normalizing, joining, comparing and taking apart \
             Unix and Windows path strings without touching the file system",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Read configuration from this file as well")
                .value_name("FILE")
                .global(true)
                .env("PATHNORM_CONFIG"),
        )
        .arg(
            Arg::new("flavor")
                .long("flavor")
                .help("Grammar rules to apply (unix, windows)")
                .value_name("FLAVOR")
                .global(true),
        )
        .arg(
            Arg::new("separator")
                .long("separator")
                .help("Separator to write (unix, windows, system)")
                .value_name("STYLE")
                .global(true),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format (human, json)")
                .value_name("FORMAT")
                .global(true),
        )
        .subcommands(vec![
            Command::new("normalize")
                .about("Normalize paths, resolving `.` and `..` segments")
                .long_about("Collapse separators and resolve `.` and `..` segments"),
            Command::new("concat")
                .about("Join a path onto a base path and normalize the result")
                .long_about("Join ADD onto BASE; an ADD with its own prefix replaces BASE"),
            Command::new("inspect")
                .about("Show the full decomposition of paths")
                .long_about("Show prefix, directory, name, extension and normalized forms"),
            Command::new("prefix-length")
                .about("Print the length of a path's prefix")
                .long_about("Print the prefix length, or -1 if the prefix is malformed"),
            Command::new("extension")
                .about("Print or remove the extension of paths")
                .long_about("Print the text after the last dot of the file name"),
            Command::new("equals")
                .about("Compare two paths")
                .long_about("Compare two paths, optionally normalizing both first"),
            Command::new("contains")
                .about("Check whether a directory contains a path")
                .long_about("Check whether CHILD lies strictly inside PARENT"),
            Command::new("matches")
                .about("Match a file name against a wildcard pattern")
                .long_about("Match NAME against PATTERN using `?` and `*` wildcards"),
            Command::new("separators")
                .about("Convert the separators of a path")
                .long_about("Rewrite every separator in a path to one style"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    // Generate main pathnorm.1 man page
    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("pathnorm.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
