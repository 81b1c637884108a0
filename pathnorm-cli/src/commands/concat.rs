//! Command to join a path onto a base path.

use crate::error::CliError;
use crate::utils::{require_all, Context, GlobalOptions};
use clap::Args;
use pathnorm::output::PathResult;

/// Join ADD onto BASE and normalize the result.
///
/// An ADD with its own prefix replaces BASE entirely.
#[derive(Args)]
pub struct ConcatCommand {
    /// Base path
    #[arg(value_name = "BASE")]
    pub base: String,

    /// Path to append
    #[arg(value_name = "ADD")]
    pub add: String,
}

impl ConcatCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let context = Context::load(global)?;
        let joined = context.engine.concat(Some(self.base.as_str()), &self.add)?;

        let results = [PathResult::new(
            format!("{} + {}", self.base, self.add),
            joined,
        )];
        context.print_results(&results)?;
        require_all(&results, "concatenate")
    }
}
