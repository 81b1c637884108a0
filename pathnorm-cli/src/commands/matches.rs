//! Command to match a name against a wildcard pattern.

use crate::error::CliError;
use crate::utils::{Context, GlobalOptions};
use clap::Args;
use pathnorm::output::CheckResult;
use pathnorm::CaseSensitivity;

/// Match NAME against PATTERN, where `?` is one character and `*` any run.
#[derive(Args)]
pub struct MatchesCommand {
    /// Name to test
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Wildcard pattern
    #[arg(value_name = "PATTERN")]
    pub pattern: String,

    /// Case handling (sensitive, insensitive, system)
    #[arg(long, value_name = "CASE", value_parser = CaseSensitivity::parse)]
    pub case: Option<CaseSensitivity>,
}

impl MatchesCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let context = Context::load(global)?;
        let case = context.case(self.case);
        let result = context.engine.wildcard_match(&self.name, &self.pattern, case);

        context.print_check(&CheckResult {
            operation: "matches".to_string(),
            left: self.name.clone(),
            right: self.pattern.clone(),
            result,
        })?;

        if result {
            Ok(())
        } else {
            Err(CliError::SemanticFailure(format!(
                "{} does not match {}",
                self.name, self.pattern
            )))
        }
    }
}
