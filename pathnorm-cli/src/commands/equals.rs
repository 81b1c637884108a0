//! Command to compare two paths.

use crate::error::CliError;
use crate::utils::{Context, GlobalOptions};
use clap::Args;
use pathnorm::output::CheckResult;
use pathnorm::CaseSensitivity;

/// Compare two paths, optionally after normalizing both.
#[derive(Args)]
pub struct EqualsCommand {
    /// First path
    #[arg(value_name = "A")]
    pub left: String,

    /// Second path
    #[arg(value_name = "B")]
    pub right: String,

    /// Normalize both paths before comparing
    #[arg(long)]
    pub normalized: bool,

    /// Case handling (sensitive, insensitive, system)
    #[arg(long, value_name = "CASE", value_parser = CaseSensitivity::parse)]
    pub case: Option<CaseSensitivity>,
}

impl EqualsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let context = Context::load(global)?;
        let case = context.case(self.case);

        let result = context.engine.equals_with(
            Some(self.left.as_str()),
            Some(self.right.as_str()),
            self.normalized,
            case,
        )?;

        context.print_check(&CheckResult {
            operation: "equals".to_string(),
            left: self.left.clone(),
            right: self.right.clone(),
            result,
        })?;

        if result {
            Ok(())
        } else {
            Err(CliError::SemanticFailure(format!(
                "{} and {} are not equal",
                self.left, self.right
            )))
        }
    }
}
