//! On-disk index formats
//!
//! Two compact little-endian layouts, one per indexed strategy:
//!
//! ```text
//! Flat index (single-file strategy):
//! ┌──────────────────┬─────────────────────────────────────┐
//! │ entry_count: u64 │ (id: u32, offset: u64, size: u64)…  │
//! └──────────────────┴─────────────────────────────────────┘
//! entries appear in original write order
//!
//! Chunk index (chunked strategy):
//! ┌──────────────────┬───────────────────┬──────────────────┬──
//! │ record_count:u64 │ total_chunks: u64 │ write-order ids  │
//! └──────────────────┴───────────────────┴──────────────────┴──
//!   ──┬────────────────────────────────────────────┐
//!     │ (chunk_id: u32, offset: u64, size: u64)…   │
//!     └────────────────────────────────────────────┘
//! entries are a dense array indexed directly by record id
//! ```
//!
//! Ids are dense and non-negative, so the 4-byte id slot is read and
//! written as `u32`.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::error::{BenchError, Result};

/// Bytes per serialized entry: 4 (id or chunk id) + 8 (offset) + 8 (size)
pub const ENTRY_ENCODED_LEN: usize = 20;

/// Locates one record inside the single data file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexEntry {
    pub id: u32,
    pub offset: u64,
    pub size: u64,
}

impl IndexEntry {
    pub fn new(id: u32, offset: u64, size: u64) -> Self {
        Self { id, offset, size }
    }
}

/// Locates one record inside a chunk file
///
/// The chunk id is an explicit field here rather than being smuggled
/// through the record-id slot; the two entry types share a wire shape but
/// not a meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkIndexEntry {
    pub chunk_id: u32,
    pub offset: u64,
    pub size: u64,
}

impl ChunkIndexEntry {
    pub fn new(chunk_id: u32, offset: u64, size: u64) -> Self {
        Self {
            chunk_id,
            offset,
            size,
        }
    }
}

// =============================================================================
// Flat index (single-file strategy)
// =============================================================================

/// Persist a flat index: `[entry_count][entries…]` in write order
pub fn write_flat_index(path: &Path, entries: &[IndexEntry]) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writer.write_all(&(entries.len() as u64).to_le_bytes())?;
    for entry in entries {
        writer.write_all(&entry.id.to_le_bytes())?;
        writer.write_all(&entry.offset.to_le_bytes())?;
        writer.write_all(&entry.size.to_le_bytes())?;
    }

    writer.flush()?;
    Ok(())
}

/// Load a flat index from disk
pub fn read_flat_index(path: &Path) -> Result<Vec<IndexEntry>> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    let count = read_u64(&mut reader)?;
    let mut entries = Vec::with_capacity(checked_len(count)?);
    for _ in 0..count {
        entries.push(IndexEntry::new(
            read_u32(&mut reader)?,
            read_u64(&mut reader)?,
            read_u64(&mut reader)?,
        ));
    }

    Ok(entries)
}

// =============================================================================
// Chunk index (chunked strategy)
// =============================================================================

/// Full index state for the chunked strategy
///
/// `entries[id]` gives a record's location without a search; `write_order`
/// records the sequence ids were written in, which the dense array alone
/// cannot reconstruct for arbitrary id sequences.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChunkIndex {
    pub total_chunks: u64,
    pub write_order: Vec<u32>,
    pub entries: Vec<ChunkIndexEntry>,
}

impl ChunkIndex {
    /// Look up a record's location, erroring on unknown ids
    pub fn entry(&self, id: u32) -> Result<&ChunkIndexEntry> {
        self.entries
            .get(id as usize)
            .ok_or(BenchError::RecordNotFound(id))
    }

    /// Persist as `[record_count][total_chunks][write_order…][entries…]`
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);

        writer.write_all(&(self.write_order.len() as u64).to_le_bytes())?;
        writer.write_all(&self.total_chunks.to_le_bytes())?;

        for id in &self.write_order {
            writer.write_all(&id.to_le_bytes())?;
        }
        for entry in &self.entries {
            writer.write_all(&entry.chunk_id.to_le_bytes())?;
            writer.write_all(&entry.offset.to_le_bytes())?;
            writer.write_all(&entry.size.to_le_bytes())?;
        }

        writer.flush()?;
        Ok(())
    }

    /// Load from disk, validating the count fields
    pub fn read_from(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);

        let record_count = read_u64(&mut reader)?;
        let total_chunks = read_u64(&mut reader)?;
        let len = checked_len(record_count)?;

        let mut write_order = Vec::with_capacity(len);
        for _ in 0..record_count {
            write_order.push(read_u32(&mut reader)?);
        }

        let mut entries = Vec::with_capacity(len);
        for _ in 0..record_count {
            entries.push(ChunkIndexEntry::new(
                read_u32(&mut reader)?,
                read_u64(&mut reader)?,
                read_u64(&mut reader)?,
            ));
        }

        Ok(Self {
            total_chunks,
            write_order,
            entries,
        })
    }
}

// =============================================================================
// Private Helpers
// =============================================================================

fn read_u32(reader: &mut impl Read) -> Result<u32> {
    let mut buf = [0u8; 4];
    reader.read_exact(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

fn read_u64(reader: &mut impl Read) -> Result<u64> {
    let mut buf = [0u8; 8];
    reader.read_exact(&mut buf)?;
    Ok(u64::from_le_bytes(buf))
}

/// Reject count fields that cannot describe a real file
fn checked_len(count: u64) -> Result<usize> {
    usize::try_from(count)
        .map_err(|_| BenchError::IndexCorruption(format!("implausible entry count {}", count)))
}
