//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target or print
//! them as JSON.

mod generate;
mod output;
mod stacks;

use eyre::{Context, Result};
use serde::Serialize;

pub use generate::{GenerateReport, GenerationResult, PreviewResult, WrittenResult};
pub use output::{OutputFormat, Report, TerminalOutput};
pub use stacks::StacksReport;

/// Print a report in the requested format.
pub fn emit<R: Report + Serialize>(report: &R, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => report.render(&mut TerminalOutput::new()),
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(report).wrap_err("failed to serialize report")?;
            println!("{}", json);
        }
    }
    Ok(())
}
