//! Diff command handler.

use crate::config::DiffConfig;
use crate::pipeline::{compute_diff, exit_codes, load_document, output_report};
use anyhow::Result;

/// Run the diff command, returning the desired exit code.
///
/// Input failures (unreadable or unparseable documents) and comparison
/// failures (mismatched root kinds) are reported here and mapped to their
/// exit codes; only output-side failures propagate as errors. The caller
/// is responsible for `std::process::exit()` when the code is non-zero.
pub fn run_diff(config: DiffConfig) -> Result<i32> {
    let quiet = config.behavior.quiet;

    let left = match load_document(&config.paths.left, quiet) {
        Ok(value) => value,
        Err(err) => {
            tracing::error!("{:#}", anyhow::Error::from(err));
            return Ok(exit_codes::INPUT_ERROR);
        }
    };
    let right = match load_document(&config.paths.right, quiet) {
        Ok(value) => value,
        Err(err) => {
            tracing::error!("{:#}", anyhow::Error::from(err));
            return Ok(exit_codes::INPUT_ERROR);
        }
    };

    let result = match compute_diff(&left, &right) {
        Ok(result) => result,
        Err(err) => {
            tracing::error!("{err:#}");
            return Ok(exit_codes::DIFF_ERROR);
        }
    };

    if !quiet {
        tracing::debug!(
            "Aligned {} root entries ({} added, {} removed)",
            result.entries.len(),
            result.summary.added,
            result.summary.removed
        );
    }

    output_report(&config, &result)?;

    Ok(exit_codes::SUCCESS)
}
