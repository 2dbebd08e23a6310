//! High-level operations run by the binary.
//!
//! This module provides the operations that orchestrate the core
//! functionality: scraping today's headlines into the journal and reporting
//! on the result.

pub mod daily;
pub mod report;

// Re-export commonly used functions
pub use daily::{run_daily, RunOutcome};
pub use report::{log_data_file, log_directory_tree};
