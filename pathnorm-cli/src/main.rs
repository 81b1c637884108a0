//! Main entry point for the pathnorm CLI.
//!
//! This is the command-line interface for the pathnorm library. It provides
//! commands for working with path strings:
//! - `normalize`: Resolve `.` and `..` and collapse separators
//! - `concat`: Join a path onto a base path
//! - `inspect`: Show the full decomposition of a path
//! - `equals`, `contains`, `matches`: Compare paths and names

use clap::Parser;
use pathnorm_cli::cli::{Cli, Command};
use pathnorm_cli::error::CliError;
use pathnorm_cli::utils::GlobalOptions;

fn main() {
    // Parse CLI arguments; usage errors exit with the invalid-arguments code
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            std::process::exit(CliError::InvalidArguments(e.to_string()).exit_code());
        }
        Err(e) => e.exit(),
    };

    // Initialize logging based on verbosity
    if let Err(e) = pathnorm::init_logger(cli.verbose, cli.quiet).install() {
        eprintln!("Warning: could not install logger: {e}");
    }

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config: cli.config,
        flavor: cli.flavor,
        separator: cli.separator,
        format: cli.format,
    };

    // Execute the command
    let result = match cli.command {
        Command::Normalize(cmd) => cmd.execute(&global),
        Command::Concat(cmd) => cmd.execute(&global),
        Command::Inspect(cmd) => cmd.execute(&global),
        Command::PrefixLength(cmd) => cmd.execute(&global),
        Command::Extension(cmd) => cmd.execute(&global),
        Command::Equals(cmd) => cmd.execute(&global),
        Command::Contains(cmd) => cmd.execute(&global),
        Command::Matches(cmd) => cmd.execute(&global),
        Command::Separators(cmd) => cmd.execute(&global),
        Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            if !global.quiet {
                eprintln!("Error: {e}");
            }
            std::process::exit(e.exit_code());
        }
    }
}
