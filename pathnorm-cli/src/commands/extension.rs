//! Command to print or strip file extensions.

use crate::error::CliError;
use crate::utils::{Context, GlobalOptions};
use clap::Args;
use pathnorm::output::PathResult;

/// Print the extension of each path, or the path without it.
#[derive(Args)]
pub struct ExtensionCommand {
    /// Paths to examine
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,

    /// Print the path with its extension removed instead
    #[arg(long)]
    pub remove: bool,
}

impl ExtensionCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let context = Context::load(global)?;

        let mut results = Vec::with_capacity(self.paths.len());
        for path in &self.paths {
            let value = if self.remove {
                context.engine.remove_extension(path)?
            } else {
                context.engine.get_extension(path)?
            };
            results.push(PathResult::new(path.as_str(), Some(value.to_string())));
        }

        context.print_results(&results)
    }
}
