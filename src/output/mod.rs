//! Output module for batch reports
//!
//! This module handles:
//! - Aggregating statistics over a finished batch
//! - Rendering a plain-text report for the command line

mod report;
pub mod stats;

pub use report::{format_report, print_report};
pub use stats::{summarize, BatchStatistics};
