//! Individual-File Strategy
//!
//! One file per record. Paths are derived from the id alone, with records
//! sharded into subdirectories of at most `SHARD_SIZE` entries so no single
//! directory grows unbounded. There is no index file; only the per-record
//! byte sizes are cached in memory at write time, since the raw files carry
//! no length header. Random reads gain nothing from a locality sort here —
//! every record is its own file.

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{BenchError, Result};
use crate::record::Record;

use super::StorageStrategy;

/// Records per shard subdirectory
pub const SHARD_SIZE: usize = 1000;

pub struct IndividualFileStrategy {
    base_dir: PathBuf,
    total_records: usize,
    /// Byte size per record id, cached by `write`
    record_sizes: Vec<u64>,
}

impl IndividualFileStrategy {
    /// Create a strategy rooted at `dir` (created if missing)
    pub fn new(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir)?;
        Ok(Self {
            base_dir: dir.to_path_buf(),
            total_records: 0,
            record_sizes: Vec::new(),
        })
    }

    /// Stable path for a record: `{base}/{shard:03}/record_{id:06}.dat`
    fn record_path(&self, id: u32) -> PathBuf {
        let shard = id as usize / SHARD_SIZE;
        self.base_dir
            .join(format!("{:03}", shard))
            .join(format!("record_{:06}.dat", id))
    }

    /// Create all shard directories for `count` records up front
    fn ensure_shard_dirs(&self, count: usize) -> Result<()> {
        let shards = count.div_ceil(SHARD_SIZE);
        for shard in 0..shards {
            fs::create_dir_all(self.base_dir.join(format!("{:03}", shard)))?;
        }
        Ok(())
    }

    fn read_record(&self, id: u32) -> Result<Record> {
        let size = *self
            .record_sizes
            .get(id as usize)
            .ok_or(BenchError::RecordNotFound(id))?;

        let mut file = File::open(self.record_path(id))?;
        let mut data = vec![0u8; size as usize];
        file.read_exact(&mut data)?;

        Ok(Record::new(id, data))
    }
}

impl StorageStrategy for IndividualFileStrategy {
    fn name(&self) -> &'static str {
        "Individual"
    }

    fn write(&mut self, records: &[Record]) -> Result<()> {
        self.total_records = records.len();
        self.record_sizes = vec![0; records.len()];

        self.ensure_shard_dirs(self.total_records)?;

        // Per-file open/close dominates here; that overhead is the point of
        // measuring this layout
        for record in records {
            let slot = self
                .record_sizes
                .get_mut(record.id as usize)
                .ok_or_else(|| {
                    BenchError::Storage(format!(
                        "record id {} outside dense range 0..{}",
                        record.id,
                        records.len()
                    ))
                })?;
            *slot = record.len() as u64;

            let mut file = File::create(self.record_path(record.id))?;
            file.write_all(&record.data)?;
        }

        debug!(records = records.len(), "individual-file write complete");
        Ok(())
    }

    fn read_sequential(&mut self) -> Result<Vec<Record>> {
        let mut records = Vec::with_capacity(self.total_records);
        for id in 0..self.total_records {
            records.push(self.read_record(id as u32)?);
        }
        Ok(records)
    }

    fn read_random(&mut self, ids: &[u32]) -> Result<Vec<Record>> {
        // No reorder: each record is an independent file, so there is no
        // seek distance to save. Output order is request order by
        // construction.
        let mut records = Vec::with_capacity(ids.len());
        for &id in ids {
            records.push(self.read_record(id)?);
        }
        Ok(records)
    }

    fn clean_up(&mut self) -> Result<()> {
        match fs::remove_dir_all(&self.base_dir) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn disk_space_used(&self) -> Result<u64> {
        if !self.base_dir.exists() {
            return Ok(0);
        }
        dir_size(&self.base_dir)
    }

    fn file_count(&self) -> u64 {
        self.total_records as u64
    }
}

/// Recursively sum regular-file sizes under `dir`
fn dir_size(dir: &Path) -> Result<u64> {
    let mut total = 0;
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let meta = entry.metadata()?;
        if meta.is_dir() {
            total += dir_size(&entry.path())?;
        } else if meta.is_file() {
            total += meta.len();
        }
    }
    Ok(total)
}
