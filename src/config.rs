//! Configuration for stratabench
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{BenchError, Result};

/// Main configuration for a benchmark run
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Root directory for all strategy data files
    /// Internal structure:
    ///   {data_dir}/
    ///     ├── single/        (single-file strategy)
    ///     ├── chunked/       (chunked-file strategy)
    ///     ├── individual/    (file-per-record strategy)
    ///     └── concurrent/    (threaded write benchmark)
    pub data_dir: PathBuf,

    /// Records per chunk file (chunked strategy)
    pub records_per_chunk: usize,

    // -------------------------------------------------------------------------
    // Dataset Configuration
    // -------------------------------------------------------------------------
    /// Number of synthetic records to generate
    pub record_count: usize,

    /// Seed for the record generator (and the random-read id sequence)
    pub seed: u64,

    /// Inclusive record payload size range in bytes
    pub min_record_size: usize,
    pub max_record_size: usize,

    // -------------------------------------------------------------------------
    // Benchmark Configuration
    // -------------------------------------------------------------------------
    /// Number of ids drawn for the random-read phase
    pub random_read_count: usize,

    /// Worker threads for the concurrent write benchmark
    pub concurrent_threads: usize,

    /// Attempt to drop OS page caches between phases (needs privileges)
    pub drop_caches: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./stratabench_data"),
            records_per_chunk: 1000,
            record_count: 100_000,
            seed: 24,
            min_record_size: 1024,
            max_record_size: 2048,
            random_read_count: 1000,
            concurrent_threads: 4,
            drop_caches: false,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Validate field combinations before a run
    pub fn validate(&self) -> Result<()> {
        if self.record_count == 0 {
            return Err(BenchError::Config("record_count must be >= 1".to_string()));
        }
        if self.records_per_chunk == 0 {
            return Err(BenchError::Config(
                "records_per_chunk must be >= 1".to_string(),
            ));
        }
        if self.min_record_size == 0 || self.min_record_size > self.max_record_size {
            return Err(BenchError::Config(format!(
                "invalid record size range [{}, {}]",
                self.min_record_size, self.max_record_size
            )));
        }
        if self.concurrent_threads == 0 {
            return Err(BenchError::Config(
                "concurrent_threads must be >= 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data directory (root for all strategy files)
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_dir = path.into();
        self
    }

    /// Set the records-per-chunk limit for the chunked strategy
    pub fn records_per_chunk(mut self, count: usize) -> Self {
        self.config.records_per_chunk = count;
        self
    }

    /// Set the number of synthetic records
    pub fn record_count(mut self, count: usize) -> Self {
        self.config.record_count = count;
        self
    }

    /// Set the generator seed
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Set the inclusive payload size range
    pub fn record_size_range(mut self, min: usize, max: usize) -> Self {
        self.config.min_record_size = min;
        self.config.max_record_size = max;
        self
    }

    /// Set the number of random-read requests
    pub fn random_read_count(mut self, count: usize) -> Self {
        self.config.random_read_count = count;
        self
    }

    /// Set the worker-thread count for the concurrent write benchmark
    pub fn concurrent_threads(mut self, count: usize) -> Self {
        self.config.concurrent_threads = count;
        self
    }

    /// Enable/disable the page-cache drop between phases
    pub fn drop_caches(mut self, enabled: bool) -> Self {
        self.config.drop_caches = enabled;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
