use clap::Args;
use eyre::Result;
use modgen::StackRegistry;

use crate::reports::{self, OutputFormat, StacksReport};

#[derive(Args)]
pub struct StacksCommand {
    /// Output format
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

impl StacksCommand {
    pub fn run(&self) -> Result<()> {
        let report = StacksReport::from_registry(&StackRegistry::default());
        reports::emit(&report, self.format)
    }
}
