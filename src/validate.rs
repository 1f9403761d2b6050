//! Read-back verification
//!
//! Checks that what a strategy returns matches what was written: count,
//! ids, sizes, and bytes. Mismatches are reported (not returned as errors)
//! so a bad strategy shows up as `verified = false` in the results instead
//! of aborting the whole benchmark.

use tracing::warn;

use crate::record::Record;

/// CRC32 of a record's payload, mixed with its id
///
/// Used for cheap spot checks where a full byte comparison is overkill.
pub fn record_checksum(record: &Record) -> u32 {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(&record.data);
    hasher.finalize() ^ record.id
}

/// Verify a full sequential read against the original record set
pub fn verify_records(original: &[Record], read: &[Record]) -> bool {
    if original.len() != read.len() {
        warn!(
            wrote = original.len(),
            read = read.len(),
            "record count mismatch"
        );
        return false;
    }

    for (position, (orig, rd)) in original.iter().zip(read.iter()).enumerate() {
        if orig.id != rd.id {
            warn!(
                position,
                expected = orig.id,
                got = rd.id,
                "id mismatch"
            );
            return false;
        }
        if orig.len() != rd.len() {
            warn!(id = orig.id, "size mismatch");
            return false;
        }
        if orig.data != rd.data {
            warn!(id = orig.id, "data mismatch");
            return false;
        }
    }

    true
}

/// Verify a random-read result against the requested id sequence
///
/// `read[i]` must be the record with id `ids[i]`, byte-for-byte; repeats in
/// `ids` must be repeated in `read`.
pub fn verify_subset(original: &[Record], read: &[Record], ids: &[u32]) -> bool {
    if ids.len() != read.len() {
        warn!(
            requested = ids.len(),
            read = read.len(),
            "subset size mismatch"
        );
        return false;
    }

    for (position, (&id, rd)) in ids.iter().zip(read.iter()).enumerate() {
        let orig = match original.get(id as usize) {
            Some(r) => r,
            None => {
                warn!(position, id, "requested id outside original set");
                return false;
            }
        };

        if orig.id != rd.id || orig.data != rd.data {
            warn!(position, id, "data mismatch");
            return false;
        }
    }

    true
}
