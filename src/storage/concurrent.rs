//! Concurrent write benchmark
//!
//! Partitions the record range across a fixed pool of worker threads, each
//! writing its disjoint slice to its own file. Workers share nothing and
//! only synchronize at the final join, so this measures raw parallel write
//! throughput. Write-only: there is no structured reader for this layout,
//! and it deliberately sits outside the `StorageStrategy` contract.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{BenchError, Result};
use crate::record::Record;

use super::{file_size_or_zero, remove_file_if_exists};

const IO_BUFFER_SIZE: usize = 512 * 1024;

pub struct ConcurrentWriter {
    output_dir: PathBuf,
    num_threads: usize,
}

impl ConcurrentWriter {
    pub fn new(dir: &Path, num_threads: usize) -> Result<Self> {
        if num_threads == 0 {
            return Err(BenchError::Config("num_threads must be >= 1".to_string()));
        }
        std::fs::create_dir_all(dir)?;
        Ok(Self {
            output_dir: dir.to_path_buf(),
            num_threads,
        })
    }

    pub fn name(&self) -> String {
        format!("Concurrent({})", self.num_threads)
    }

    fn thread_path(&self, thread_id: usize) -> PathBuf {
        self.output_dir.join(format!("thread_{}.dat", thread_id))
    }

    /// Write all records, one output file per worker
    ///
    /// Worker `i` gets records `[i * per_thread, (i + 1) * per_thread)`;
    /// the last worker also takes the remainder.
    pub fn write(&self, records: &[Record]) -> Result<()> {
        let per_thread = records.len() / self.num_threads;

        crossbeam::thread::scope(|scope| {
            let mut handles = Vec::with_capacity(self.num_threads);

            for thread_id in 0..self.num_threads {
                let start = thread_id * per_thread;
                let end = if thread_id == self.num_threads - 1 {
                    records.len()
                } else {
                    start + per_thread
                };
                let slice = &records[start..end];
                let path = self.thread_path(thread_id);

                handles.push(scope.spawn(move |_| write_partition(&path, slice)));
            }

            for handle in handles {
                handle
                    .join()
                    .map_err(|_| BenchError::Storage("writer thread panicked".to_string()))??;
            }
            Ok::<(), BenchError>(())
        })
        .map_err(|_| BenchError::Storage("writer pool panicked".to_string()))??;

        debug!(
            records = records.len(),
            threads = self.num_threads,
            "concurrent write complete"
        );
        Ok(())
    }

    pub fn clean_up(&self) -> Result<()> {
        for thread_id in 0..self.num_threads {
            remove_file_if_exists(&self.thread_path(thread_id))?;
        }
        Ok(())
    }

    pub fn disk_space_used(&self) -> Result<u64> {
        let mut total = 0;
        for thread_id in 0..self.num_threads {
            total += file_size_or_zero(&self.thread_path(thread_id))?;
        }
        Ok(total)
    }

    pub fn file_count(&self) -> u64 {
        self.num_threads as u64
    }
}

fn write_partition(path: &Path, records: &[Record]) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::with_capacity(IO_BUFFER_SIZE, file);
    for record in records {
        writer.write_all(&record.data)?;
    }
    writer.flush()?;
    Ok(())
}
