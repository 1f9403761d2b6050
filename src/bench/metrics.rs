//! Benchmark result record
//!
//! One `BenchmarkMetrics` per strategy run; derived figures (throughput,
//! per-op latency) are computed on demand from the raw timings.

use std::time::Duration;

const MB: f64 = 1024.0 * 1024.0;

#[derive(Debug, Clone)]
pub struct BenchmarkMetrics {
    pub strategy: String,

    pub write_time: Duration,
    pub seq_read_time: Duration,
    pub rand_read_time: Duration,

    pub disk_space_used: u64,
    pub file_count: u64,
    pub total_data_size: u64,

    pub record_count: usize,
    pub random_read_count: usize,

    /// Did every read-back match what was written?
    pub verified: bool,
}

impl BenchmarkMetrics {
    pub fn new(strategy: impl Into<String>) -> Self {
        Self {
            strategy: strategy.into(),
            write_time: Duration::ZERO,
            seq_read_time: Duration::ZERO,
            rand_read_time: Duration::ZERO,
            disk_space_used: 0,
            file_count: 0,
            total_data_size: 0,
            record_count: 0,
            random_read_count: 0,
            verified: false,
        }
    }

    // -------------------------------------------------------------------------
    // Derived figures
    // -------------------------------------------------------------------------

    /// Write throughput in MB/s
    pub fn write_throughput(&self) -> f64 {
        throughput(self.total_data_size, self.write_time)
    }

    /// Sequential-read throughput in MB/s
    pub fn seq_read_throughput(&self) -> f64 {
        throughput(self.total_data_size, self.seq_read_time)
    }

    /// Mean random-read latency in ms per request
    pub fn rand_read_latency_ms(&self) -> f64 {
        if self.random_read_count == 0 {
            return 0.0;
        }
        self.rand_read_time.as_secs_f64() * 1000.0 / self.random_read_count as f64
    }

    /// Average on-disk bytes per record (includes index overhead)
    pub fn bytes_per_record(&self) -> f64 {
        if self.record_count == 0 {
            return 0.0;
        }
        self.disk_space_used as f64 / self.record_count as f64
    }
}

fn throughput(bytes: u64, elapsed: Duration) -> f64 {
    let secs = elapsed.as_secs_f64();
    if secs == 0.0 {
        return 0.0;
    }
    (bytes as f64 / MB) / secs
}
