//! Benchmark Module
//!
//! Timing, metrics, the phase driver, and the results report.
//!
//! ## Responsibilities
//! - Time each phase (write / sequential read / random read)
//! - Generate the seeded random-read request sequence
//! - Verify read-backs and flag mismatches without aborting the run
//! - Aggregate per-strategy metrics into a console report

mod metrics;
mod report;
mod runner;
mod timer;

pub use metrics::BenchmarkMetrics;
pub use report::{format_results, print_results};
pub use runner::{generate_random_ids, run_concurrent, run_strategy};
pub use timer::{timed, BenchmarkTimer};
