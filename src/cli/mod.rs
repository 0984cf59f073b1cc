//! CLI command handlers.
//!
//! Testable handlers invoked by main.rs; each returns the process exit
//! code rather than exiting itself.

mod diff;

pub use diff::run_diff;

pub use crate::config::DiffConfig;
