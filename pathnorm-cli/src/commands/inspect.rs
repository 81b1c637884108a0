//! Command to show the full decomposition of paths.

use crate::error::CliError;
use crate::utils::{Context, GlobalOptions};
use clap::Args;
use pathnorm::PathReport;

/// Show prefix, directory, name, extension and normalized forms of paths.
#[derive(Args)]
pub struct InspectCommand {
    /// Paths to inspect
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,
}

impl InspectCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let context = Context::load(global)?;

        let reports = self
            .paths
            .iter()
            .map(|path| PathReport::new(path, &context.engine))
            .collect::<pathnorm::Result<Vec<_>>>()?;

        context.print_reports(&reports)
    }
}
