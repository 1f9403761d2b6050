//! Storage Module
//!
//! The layout strategies under measurement and their shared contract.
//!
//! ## Responsibilities
//! - Persist a record set under three physical layouts
//! - Map record ids to physical locations via per-strategy indexes
//! - Reorder random-access requests by physical position (locality sort)
//!   while preserving the caller-visible ordering contract
//! - Report on-disk footprint for the benchmark report
//!
//! ## Layouts
//! ```text
//! SingleFile            Chunked                  Individual
//! ┌────────────┐        ┌─────────┐┌─────────┐   ┌────┐┌────┐┌────┐
//! │ all records│        │ chunk 0 ││ chunk 1 │…  │r0  ││r1  ││r2  │…
//! └────────────┘        └─────────┘└─────────┘   └────┘└────┘└────┘
//! ┌────────────┐        ┌───────────────────┐    (path derived from id,
//! │ flat index │        │ chunk index       │     sizes cached in memory)
//! └────────────┘        └───────────────────┘
//! ```
//!
//! Each strategy instance is driven by exactly one caller through the
//! phases write → sequential read → random read → clean up, never
//! interleaved, so no internal locking is needed.

mod chunked;
mod concurrent;
mod individual;
mod single_file;

pub mod index;

pub use chunked::ChunkedFileStrategy;
pub use concurrent::ConcurrentWriter;
pub use individual::IndividualFileStrategy;
pub use single_file::SingleFileStrategy;

use crate::error::Result;
use crate::record::Record;

/// Contract every layout strategy implements
///
/// `write` must run exactly once before either read; read operations reload
/// index state from disk where an index artifact exists rather than relying
/// on fields populated by `write`. Any I/O failure aborts the strategy run;
/// there is no partial-write rollback.
pub trait StorageStrategy {
    /// Strategy name for reporting
    fn name(&self) -> &'static str;

    /// Persist every record, in input order
    fn write(&mut self, records: &[Record]) -> Result<()>;

    /// Return all records in the exact order they were written
    fn read_sequential(&mut self) -> Result<Vec<Record>>;

    /// Return one record per requested id, in request order
    ///
    /// Duplicate ids are honored: the result carries the record once per
    /// occurrence. Internally a strategy may read in any order it likes as
    /// long as the output is scattered back to request positions.
    fn read_random(&mut self, ids: &[u32]) -> Result<Vec<Record>>;

    /// Delete every file this strategy created; a no-op when none exist
    fn clean_up(&mut self) -> Result<()>;

    /// Sum of actual on-disk file sizes after `write`
    fn disk_space_used(&self) -> Result<u64>;

    /// Number of files created by `write`
    fn file_count(&self) -> u64;
}

/// Remove a file, treating "already gone" as success
///
/// Keeps `clean_up` idempotent without a pre-flight existence check.
pub(crate) fn remove_file_if_exists(path: &std::path::Path) -> Result<()> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

/// File size, or 0 when the file does not exist
pub(crate) fn file_size_or_zero(path: &std::path::Path) -> Result<u64> {
    match std::fs::metadata(path) {
        Ok(meta) => Ok(meta.len()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(0),
        Err(e) => Err(e.into()),
    }
}
