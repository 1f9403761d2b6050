//! Benchmark driver
//!
//! Runs one strategy through its phases — write, sequential read, random
//! read, clean up — timing each and verifying every read-back. I/O errors
//! abort the strategy run and propagate; verification failures only flip
//! the `verified` flag so the remaining strategies still run.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, warn};

use crate::config::Config;
use crate::error::Result;
use crate::record::{total_data_size, Record};
use crate::storage::{ConcurrentWriter, StorageStrategy};
use crate::sys;
use crate::validate;

use super::metrics::BenchmarkMetrics;
use super::timer::timed;

/// Seeded random-read request sequence; ids repeat and arrive unordered
pub fn generate_random_ids(count: usize, max: usize, seed: u64) -> Vec<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| rng.gen_range(0..max) as u32).collect()
}

/// Drive one strategy through all phases and collect its metrics
pub fn run_strategy(
    strategy: &mut dyn StorageStrategy,
    records: &[Record],
    config: &Config,
) -> Result<BenchmarkMetrics> {
    let mut metrics = BenchmarkMetrics::new(strategy.name());
    metrics.total_data_size = total_data_size(records);
    metrics.record_count = records.len();
    metrics.random_read_count = config.random_read_count;

    info!(strategy = strategy.name(), "starting benchmark");

    // ---- write ----
    let (result, elapsed) = timed(|| strategy.write(records));
    result?;
    metrics.write_time = elapsed;
    info!(
        strategy = strategy.name(),
        secs = elapsed.as_secs_f64(),
        "write phase done"
    );

    metrics.disk_space_used = strategy.disk_space_used()?;
    metrics.file_count = strategy.file_count();

    maybe_drop_caches(config);

    // ---- sequential read ----
    let (result, elapsed) = timed(|| strategy.read_sequential());
    let seq_records = result?;
    metrics.seq_read_time = elapsed;
    info!(
        strategy = strategy.name(),
        secs = elapsed.as_secs_f64(),
        "sequential read done"
    );

    metrics.verified = validate::verify_records(records, &seq_records);
    if !metrics.verified {
        warn!(
            strategy = strategy.name(),
            "sequential read verification failed"
        );
    }

    maybe_drop_caches(config);

    // ---- random read ----
    let ids = generate_random_ids(config.random_read_count, records.len(), config.seed);
    let (result, elapsed) = timed(|| strategy.read_random(&ids));
    let rand_records = result?;
    metrics.rand_read_time = elapsed;
    info!(
        strategy = strategy.name(),
        secs = elapsed.as_secs_f64(),
        "random read done"
    );

    if !validate::verify_subset(records, &rand_records, &ids) {
        warn!(strategy = strategy.name(), "random read verification failed");
        metrics.verified = false;
    }

    strategy.clean_up()?;

    Ok(metrics)
}

/// Time the worker-pool writer; write-only, so no read or verify phases
pub fn run_concurrent(writer: &ConcurrentWriter, records: &[Record]) -> Result<BenchmarkMetrics> {
    let mut metrics = BenchmarkMetrics::new(writer.name());
    metrics.total_data_size = total_data_size(records);
    metrics.record_count = records.len();

    info!(strategy = %writer.name(), "starting concurrent write benchmark");

    let (result, elapsed) = timed(|| writer.write(records));
    result?;
    metrics.write_time = elapsed;

    metrics.disk_space_used = writer.disk_space_used()?;
    metrics.file_count = writer.file_count();
    // Raw bytes land on disk unchanged, so footprint is the only check
    metrics.verified = metrics.disk_space_used == metrics.total_data_size;

    writer.clean_up()?;

    Ok(metrics)
}

fn maybe_drop_caches(config: &Config) {
    if config.drop_caches {
        sys::drop_page_caches();
    }
}
