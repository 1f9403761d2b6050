//! Record type and synthetic data generation
//!
//! Records are the logical unit every strategy stores: a dense id in
//! `[0, N)` plus an opaque byte payload. The generator is seeded explicitly
//! so repeated runs (and tests) produce identical datasets.

use bytes::Bytes;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// One logical record: identifier + raw payload
///
/// Ids are assigned densely by the generator and double as the record's
/// position in the write-order sequence handed to `write`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: u32,
    pub data: Bytes,
}

impl Record {
    pub fn new(id: u32, data: impl Into<Bytes>) -> Self {
        Self {
            id,
            data: data.into(),
        }
    }

    /// Payload length in bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Deterministic record generator
///
/// Payload sizes are drawn uniformly from an inclusive range and the bytes
/// themselves from the same PRNG, so a `(seed, count, range)` triple fully
/// determines the dataset.
pub struct DataGenerator {
    rng: StdRng,
    min_size: usize,
    max_size: usize,
}

impl DataGenerator {
    /// Default payload size range, matching the benchmark workload
    pub const DEFAULT_SIZE_RANGE: (usize, usize) = (1024, 2048);

    /// Create a generator with the default size range
    pub fn new(seed: u64) -> Self {
        let (min, max) = Self::DEFAULT_SIZE_RANGE;
        Self::with_size_range(seed, min, max)
    }

    /// Create a generator with an explicit inclusive size range
    pub fn with_size_range(seed: u64, min_size: usize, max_size: usize) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            min_size,
            max_size,
        }
    }

    /// Generate `count` records with ids `0..count`
    pub fn generate_records(&mut self, count: usize) -> Vec<Record> {
        let mut records = Vec::with_capacity(count);
        for id in 0..count {
            records.push(self.generate_record(id as u32));
        }
        records
    }

    /// Generate a single record with the given id
    pub fn generate_record(&mut self, id: u32) -> Record {
        let size = self.rng.gen_range(self.min_size..=self.max_size);
        let mut data = vec![0u8; size];
        self.rng.fill_bytes(&mut data);
        Record::new(id, data)
    }
}

/// Total payload bytes across a record set
pub fn total_data_size(records: &[Record]) -> u64 {
    records.iter().map(|r| r.len() as u64).sum()
}
