//! Report generation and output stage.

use super::output::{should_use_color, write_output, OutputTarget};
use crate::config::DiffConfig;
use crate::diff::DiffResult;
use crate::reports::{
    JsonReporter, ListingReporter, ReportFormat, ReportGenerator, SummaryReporter,
};
use anyhow::{Context, Result};

/// Render the diff result in the configured format and route it to the
/// configured target.
pub fn output_report(config: &DiffConfig, result: &DiffResult) -> Result<()> {
    let target = OutputTarget::from_option(config.output.file.clone());
    let colored = should_use_color(config.output.no_color, &target);

    let report = match config.output.format {
        ReportFormat::Listing => {
            let reporter = if colored {
                ListingReporter::new()
            } else {
                ListingReporter::new().no_color()
            };
            reporter.generate(result)
        }
        ReportFormat::Json => JsonReporter::new().generate(result),
        ReportFormat::Summary => {
            let reporter = if colored {
                SummaryReporter::new()
            } else {
                SummaryReporter::new().no_color()
            };
            reporter.generate(result)
        }
    }
    .context("failed to generate report")?;

    write_output(&report, &target, config.behavior.quiet)
}
