//! Command to print the prefix length of a path.

use crate::error::CliError;
use crate::utils::{Context, GlobalOptions};
use clap::Args;
use pathnorm::output::PathResult;

/// Print the length of a path's prefix (`-1` if the prefix is malformed).
#[derive(Args)]
pub struct PrefixLengthCommand {
    /// Path to examine
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub path: String,
}

impl PrefixLengthCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let context = Context::load(global)?;
        let length = context.engine.prefix_length(&self.path);

        context.print_results(&[PathResult::new(
            self.path.as_str(),
            Some(length.to_string()),
        )])?;

        if length < 0 {
            return Err(CliError::SemanticFailure(format!(
                "invalid prefix: {}",
                self.path
            )));
        }
        Ok(())
    }
}
