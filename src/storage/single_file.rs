//! Single-File Strategy
//!
//! All record payloads are streamed back-to-back into one data file; a
//! separate flat index file records `(id, offset, size)` per record in
//! write order. Sequential reads are a single forward scan. Random reads
//! sort the request batch by offset so the file is touched in one ascending
//! pass, then scatter results back to request order.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use bytes::Bytes;
use tracing::debug;

use crate::error::{BenchError, Result};
use crate::record::Record;

use super::index::{self, IndexEntry};
use super::{file_size_or_zero, remove_file_if_exists, StorageStrategy};

/// Write/read buffer size; larger buffers stopped helping past 4 MiB
const IO_BUFFER_SIZE: usize = 4 * 1024 * 1024;

pub struct SingleFileStrategy {
    data_file: PathBuf,
    index_file: PathBuf,
    /// In-memory index, write order; reloaded from disk by reads
    index: Vec<IndexEntry>,
}

impl SingleFileStrategy {
    /// Create a strategy rooted at `dir` (created if missing)
    pub fn new(dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(dir)?;
        Ok(Self {
            data_file: dir.join("single_data.dat"),
            index_file: dir.join("single_index.idx"),
            index: Vec::new(),
        })
    }

    /// Look up the entry for a record id
    ///
    /// Ids are dense and assigned in write order, so the write-order index
    /// is directly addressable by id.
    fn entry(&self, id: u32) -> Result<&IndexEntry> {
        self.index
            .get(id as usize)
            .ok_or(BenchError::RecordNotFound(id))
    }
}

impl StorageStrategy for SingleFileStrategy {
    fn name(&self) -> &'static str {
        "SingleFile"
    }

    fn write(&mut self, records: &[Record]) -> Result<()> {
        let file = File::create(&self.data_file)?;
        let mut writer = BufWriter::with_capacity(IO_BUFFER_SIZE, file);

        self.index.clear();
        self.index.reserve(records.len());

        // Running counter instead of querying the stream position; must
        // equal actual bytes written so far
        let mut current_offset: u64 = 0;
        for record in records {
            writer.write_all(&record.data)?;
            self.index
                .push(IndexEntry::new(record.id, current_offset, record.len() as u64));
            current_offset += record.len() as u64;
        }

        writer.flush()?;
        index::write_flat_index(&self.index_file, &self.index)?;

        debug!(
            records = records.len(),
            bytes = current_offset,
            "single-file write complete"
        );
        Ok(())
    }

    fn read_sequential(&mut self) -> Result<Vec<Record>> {
        self.index = index::read_flat_index(&self.index_file)?;

        let file = File::open(&self.data_file)?;
        let mut reader = BufReader::with_capacity(IO_BUFFER_SIZE, file);

        // Offsets are already increasing, so this is one forward scan
        let mut records = Vec::with_capacity(self.index.len());
        for entry in &self.index {
            let mut data = vec![0u8; entry.size as usize];
            reader.read_exact(&mut data)?;
            records.push(Record::new(entry.id, data));
        }

        Ok(records)
    }

    fn read_random(&mut self, ids: &[u32]) -> Result<Vec<Record>> {
        self.index = index::read_flat_index(&self.index_file)?;

        let file = File::open(&self.data_file)?;
        let mut reader = BufReader::new(file);

        // Locality sort: visit the file in ascending offset order, then
        // scatter results back so output order matches request order.
        let mut sorted: Vec<(u32, usize)> = ids
            .iter()
            .copied()
            .enumerate()
            .map(|(pos, id)| (id, pos))
            .collect();
        for (id, _) in &sorted {
            self.entry(*id)?;
        }
        sorted.sort_by_key(|(id, _)| self.index[*id as usize].offset);

        let mut records = vec![Record::new(0, Bytes::new()); ids.len()];
        for (id, original_pos) in sorted {
            let entry = self.index[id as usize];
            reader.seek(SeekFrom::Start(entry.offset))?;
            let mut data = vec![0u8; entry.size as usize];
            reader.read_exact(&mut data)?;
            records[original_pos] = Record::new(entry.id, data);
        }

        Ok(records)
    }

    fn clean_up(&mut self) -> Result<()> {
        remove_file_if_exists(&self.data_file)?;
        remove_file_if_exists(&self.index_file)?;
        Ok(())
    }

    fn disk_space_used(&self) -> Result<u64> {
        Ok(file_size_or_zero(&self.data_file)? + file_size_or_zero(&self.index_file)?)
    }

    fn file_count(&self) -> u64 {
        2 // data + index
    }
}
