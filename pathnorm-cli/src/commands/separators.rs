//! Command to convert path separators.

use crate::error::CliError;
use crate::utils::{Context, GlobalOptions};
use clap::Args;
use pathnorm::output::PathResult;
use pathnorm::path::separators_to;
use pathnorm::SeparatorSetting;

/// Rewrite every separator in a path to one style.
#[derive(Args)]
pub struct SeparatorsCommand {
    /// Path to convert
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Target style (unix, windows, system)
    #[arg(long, value_name = "STYLE", value_parser = SeparatorSetting::parse)]
    pub to: Option<SeparatorSetting>,
}

impl SeparatorsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let context = Context::load(global)?;

        let converted = match self.to {
            Some(setting) => separators_to(&self.path, setting.resolve()),
            None => context.engine.separators(&self.path),
        };

        context.print_results(&[PathResult::new(self.path.as_str(), Some(converted))])
    }
}
