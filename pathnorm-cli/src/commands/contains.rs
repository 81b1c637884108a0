//! Command to check directory containment.

use crate::error::CliError;
use crate::utils::{Context, GlobalOptions};
use clap::Args;
use pathnorm::output::CheckResult;

/// Check whether CHILD lies strictly inside PARENT.
#[derive(Args)]
pub struct ContainsCommand {
    /// Directory path
    #[arg(value_name = "PARENT")]
    pub parent: String,

    /// Candidate descendant
    #[arg(value_name = "CHILD")]
    pub child: String,
}

impl ContainsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let context = Context::load(global)?;
        let result = context
            .engine
            .directory_contains(&self.parent, &self.child)?;

        context.print_check(&CheckResult {
            operation: "contains".to_string(),
            left: self.parent.clone(),
            right: self.child.clone(),
            result,
        })?;

        if result {
            Ok(())
        } else {
            Err(CliError::SemanticFailure(format!(
                "{} does not contain {}",
                self.parent, self.child
            )))
        }
    }
}
