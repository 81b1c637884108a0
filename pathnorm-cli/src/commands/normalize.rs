//! Command to normalize paths.

use crate::error::CliError;
use crate::utils::{expand_tilde, require_all, Context, GlobalOptions};
use clap::Args;
use pathnorm::output::PathResult;

/// Normalize paths, resolving `.` and `..` and collapsing separators.
#[derive(Args)]
pub struct NormalizeCommand {
    /// Paths to normalize
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,

    /// Drop the trailing separator
    #[arg(long)]
    pub no_end_separator: bool,

    /// Replace a leading `~` with the home directory first
    #[arg(long)]
    pub expand_tilde: bool,
}

impl NormalizeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let context = Context::load(global)?;
        let keep = !self.no_end_separator && context.keep_trailing_separator();

        let mut results = Vec::with_capacity(self.paths.len());
        for path in &self.paths {
            let input = if self.expand_tilde {
                expand_tilde(path)?
            } else {
                path.clone()
            };
            let normalized = context.engine.normalize_with(&input, keep)?;
            results.push(PathResult::new(path.as_str(), normalized));
        }

        context.print_results(&results)?;
        require_all(&results, "normalize")
    }
}
