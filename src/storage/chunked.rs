//! Chunked-File Strategy
//!
//! Records are split across fixed-size chunk files, `records_per_chunk`
//! apiece, with one index file covering all chunks. The index is a dense
//! array addressed directly by record id plus an explicit write-order list;
//! sequential reads follow the write order and only switch files at chunk
//! boundaries, random reads cluster requests by `(chunk, offset)` so each
//! chunk is opened once and scanned forward.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use bytes::Bytes;
use tracing::debug;

use crate::error::{BenchError, Result};
use crate::record::Record;

use super::index::{ChunkIndex, ChunkIndexEntry};
use super::{file_size_or_zero, remove_file_if_exists, StorageStrategy};

/// Chunk files see shorter sequential runs than the single-file layout,
/// so a smaller buffer is enough
const IO_BUFFER_SIZE: usize = 1024 * 1024;

/// Default records per chunk
pub const DEFAULT_RECORDS_PER_CHUNK: usize = 1000;

pub struct ChunkedFileStrategy {
    base_dir: PathBuf,
    index_file: PathBuf,
    records_per_chunk: usize,
    /// Reloaded from disk by both read paths
    index: ChunkIndex,
}

impl ChunkedFileStrategy {
    /// Create a strategy rooted at `dir` with the default chunk size
    pub fn new(dir: &Path) -> Result<Self> {
        Self::with_records_per_chunk(dir, DEFAULT_RECORDS_PER_CHUNK)
    }

    /// Create a strategy with an explicit `records_per_chunk` (>= 1)
    pub fn with_records_per_chunk(dir: &Path, records_per_chunk: usize) -> Result<Self> {
        if records_per_chunk == 0 {
            return Err(BenchError::Config(
                "records_per_chunk must be >= 1".to_string(),
            ));
        }
        std::fs::create_dir_all(dir)?;
        Ok(Self {
            base_dir: dir.to_path_buf(),
            index_file: dir.join("chunked_index.idx"),
            records_per_chunk,
            index: ChunkIndex::default(),
        })
    }

    fn chunk_path(&self, chunk_id: u32) -> PathBuf {
        self.base_dir.join(format!("chunk_{}.dat", chunk_id))
    }

    fn open_chunk_reader(&self, chunk_id: u32) -> Result<BufReader<File>> {
        let file = File::open(self.chunk_path(chunk_id))?;
        Ok(BufReader::with_capacity(IO_BUFFER_SIZE, file))
    }
}

impl StorageStrategy for ChunkedFileStrategy {
    fn name(&self) -> &'static str {
        "Chunked"
    }

    fn write(&mut self, records: &[Record]) -> Result<()> {
        // Dense index: entry for record id N lives at slot N, so every id
        // must fall inside [0, record_count)
        let mut entries = vec![ChunkIndexEntry::new(0, 0, 0); records.len()];
        let mut write_order = Vec::with_capacity(records.len());

        let mut writer: Option<BufWriter<File>> = None;
        let mut current_chunk: u32 = 0;
        let mut records_in_chunk = 0usize;
        // Tracked manually; asking the stream for its position per record
        // costs a flush
        let mut current_offset: u64 = 0;

        for record in records {
            if records_in_chunk == 0 {
                if let Some(mut w) = writer.take() {
                    w.flush()?;
                    current_chunk += 1;
                }
                current_offset = 0;
                let file = File::create(self.chunk_path(current_chunk))?;
                writer = Some(BufWriter::with_capacity(IO_BUFFER_SIZE, file));
            }

            let slot = entries.get_mut(record.id as usize).ok_or_else(|| {
                BenchError::Storage(format!(
                    "record id {} outside dense range 0..{}",
                    record.id,
                    records.len()
                ))
            })?;
            *slot = ChunkIndexEntry::new(current_chunk, current_offset, record.len() as u64);
            write_order.push(record.id);

            writer
                .as_mut()
                .ok_or_else(|| BenchError::Storage("no open chunk file".to_string()))?
                .write_all(&record.data)?;
            current_offset += record.len() as u64;

            records_in_chunk += 1;
            if records_in_chunk >= self.records_per_chunk {
                records_in_chunk = 0;
            }
        }

        if let Some(mut w) = writer.take() {
            w.flush()?;
        }

        self.index = ChunkIndex {
            total_chunks: if records.is_empty() {
                0
            } else {
                u64::from(current_chunk) + 1
            },
            write_order,
            entries,
        };
        self.index.write_to(&self.index_file)?;

        debug!(
            records = records.len(),
            chunks = self.index.total_chunks,
            "chunked write complete"
        );
        Ok(())
    }

    fn read_sequential(&mut self) -> Result<Vec<Record>> {
        self.index = ChunkIndex::read_from(&self.index_file)?;

        let mut records = Vec::with_capacity(self.index.write_order.len());
        let mut reader: Option<BufReader<File>> = None;
        let mut current_chunk: Option<u32> = None;

        for pos in 0..self.index.write_order.len() {
            let id = self.index.write_order[pos];
            let entry = *self.index.entry(id)?;

            if current_chunk != Some(entry.chunk_id) {
                reader = Some(self.open_chunk_reader(entry.chunk_id)?);
                current_chunk = Some(entry.chunk_id);
            }

            // Same-chunk records are laid out in write order, so no seek is
            // needed once the file is open
            let mut data = vec![0u8; entry.size as usize];
            reader
                .as_mut()
                .ok_or_else(|| BenchError::Storage("no open chunk file".to_string()))?
                .read_exact(&mut data)?;
            records.push(Record::new(id, data));
        }

        Ok(records)
    }

    fn read_random(&mut self, ids: &[u32]) -> Result<Vec<Record>> {
        self.index = ChunkIndex::read_from(&self.index_file)?;

        // Locality sort: chunk id first so each chunk is visited once,
        // offset second so the visit is a forward scan
        let mut sorted: Vec<(u32, usize)> = ids
            .iter()
            .copied()
            .enumerate()
            .map(|(pos, id)| (id, pos))
            .collect();
        for (id, _) in &sorted {
            self.index.entry(*id)?;
        }
        sorted.sort_by_key(|(id, _)| {
            let entry = &self.index.entries[*id as usize];
            (entry.chunk_id, entry.offset)
        });

        let mut records = vec![Record::new(0, Bytes::new()); ids.len()];
        let mut reader: Option<BufReader<File>> = None;
        let mut current_chunk: Option<u32> = None;

        for (id, original_pos) in sorted {
            let entry = self.index.entries[id as usize];

            if current_chunk != Some(entry.chunk_id) {
                reader = Some(self.open_chunk_reader(entry.chunk_id)?);
                current_chunk = Some(entry.chunk_id);
            }

            let r = reader
                .as_mut()
                .ok_or_else(|| BenchError::Storage("no open chunk file".to_string()))?;
            r.seek(SeekFrom::Start(entry.offset))?;
            let mut data = vec![0u8; entry.size as usize];
            r.read_exact(&mut data)?;
            records[original_pos] = Record::new(id, data);
        }

        Ok(records)
    }

    fn clean_up(&mut self) -> Result<()> {
        for chunk_id in 0..self.index.total_chunks {
            remove_file_if_exists(&self.chunk_path(chunk_id as u32))?;
        }
        remove_file_if_exists(&self.index_file)?;
        Ok(())
    }

    fn disk_space_used(&self) -> Result<u64> {
        let mut total = 0;
        for chunk_id in 0..self.index.total_chunks {
            total += file_size_or_zero(&self.chunk_path(chunk_id as u32))?;
        }
        total += file_size_or_zero(&self.index_file)?;
        Ok(total)
    }

    fn file_count(&self) -> u64 {
        self.index.total_chunks + 1 // chunks + index
    }
}
