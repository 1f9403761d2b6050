//! # stratabench
//!
//! A fine-grained storage layout benchmark comparing how three on-disk
//! record layouts affect write throughput, sequential-read throughput, and
//! random-read latency:
//! - One contiguous data file + flat index
//! - Fixed-size chunk files + dense chunk index
//! - One file per record, sharded across subdirectories
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Benchmark Runner                          │
//! │      write → seq read → random read → clean up               │
//! └───────┬──────────────────┬──────────────────┬───────────────┘
//!         │                  │                  │
//!         ▼                  ▼                  ▼
//!  ┌─────────────┐   ┌─────────────┐   ┌─────────────┐
//!  │ SingleFile  │   │   Chunked   │   │ Individual  │
//!  │ data + idx  │   │ chunks + idx│   │ file/record │
//!  └─────────────┘   └─────────────┘   └─────────────┘
//!         │                  │                  │
//!         └──────────────────┴──────────────────┘
//!                            │
//!                            ▼
//!                   ┌─────────────────┐
//!                   │    Validator    │
//!                   │ (count/id/bytes)│
//!                   └─────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;

pub mod bench;
pub mod record;
pub mod storage;
pub mod sys;
pub mod validate;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use bench::BenchmarkMetrics;
pub use config::Config;
pub use error::{BenchError, Result};
pub use record::{DataGenerator, Record};
pub use storage::{
    ChunkedFileStrategy, ConcurrentWriter, IndividualFileStrategy, SingleFileStrategy,
    StorageStrategy,
};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of stratabench
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
