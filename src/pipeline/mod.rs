//! Pipeline orchestration: parse -> check roots -> diff -> report.
//!
//! Shared by the CLI handlers so the steps stay individually testable.

mod diff_stage;
mod output;
mod parse;
mod report_stage;

pub use diff_stage::compute_diff;
pub use output::{should_use_color, write_output, OutputTarget};
pub use parse::load_document;
pub use report_stage::output_report;

/// Exit codes for shell and CI integration
pub mod exit_codes {
    /// Comparison ran to completion
    pub const SUCCESS: i32 = 0;
    /// Wrong arguments
    pub const USAGE_ERROR: i32 = 1;
    /// An input file could not be read or parsed
    pub const INPUT_ERROR: i32 = 2;
    /// The two documents could not be compared (root kind mismatch)
    pub const DIFF_ERROR: i32 = 3;
}
