//! Pathlab Harness: side-by-side comparison of the search strategies.
//!
//! The harness runs a set of algorithms against one request and packages
//! the results as a digest-bound [`report::ComparisonReport`], optionally
//! persisted as a report directory.
//!
//! The harness does NOT search; it delegates every run to `pathlab_search`.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod error;
pub mod report;
pub mod report_dir;
pub mod runner;

pub use config::{ComparisonConfig, ResolvedConfig};
pub use error::HarnessError;
pub use report::{ComparisonReport, ComparisonRequest};
pub use report_dir::{read_report_dir, verify_report_dir, write_report_dir, ReportDirError};
pub use runner::compare;
