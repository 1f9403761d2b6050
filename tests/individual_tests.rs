//! Tests for the individual-file strategy
//!
//! These tests verify:
//! - One file per record under sharded subdirectories
//! - Sequential and random reads via derived paths + cached sizes
//! - Clean up removes the whole directory tree
//! - Disk accounting walks the tree

use std::path::PathBuf;

use stratabench::storage::{IndividualFileStrategy, StorageStrategy};
use stratabench::{DataGenerator, Record};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("individual");
    (temp_dir, path)
}

fn generate(count: usize) -> Vec<Record> {
    DataGenerator::with_size_range(24, 64, 256).generate_records(count)
}

// =============================================================================
// Layout Tests
// =============================================================================

#[test]
fn test_one_file_per_record_in_shard_zero() {
    let (_temp, path) = setup();
    let records = generate(10);

    let mut strategy = IndividualFileStrategy::new(&path).unwrap();
    strategy.write(&records).unwrap();

    for id in 0..10 {
        let file = path.join("000").join(format!("record_{:06}.dat", id));
        assert!(file.exists(), "missing {:?}", file);
        assert_eq!(
            std::fs::metadata(&file).unwrap().len(),
            records[id as usize].len() as u64
        );
    }
    assert_eq!(strategy.file_count(), 10);
}

#[test]
fn test_records_shard_every_thousand() {
    let (_temp, path) = setup();
    let records = generate(1002);

    let mut strategy = IndividualFileStrategy::new(&path).unwrap();
    strategy.write(&records).unwrap();

    // Records 0..999 land in 000/, 1000 and 1001 in 001/
    assert!(path.join("000").join("record_000999.dat").exists());
    assert!(path.join("001").join("record_001000.dat").exists());
    assert!(path.join("001").join("record_001001.dat").exists());
}

// =============================================================================
// Round-Trip Tests
// =============================================================================

#[test]
fn test_sequential_read_matches_write_order() {
    let (_temp, path) = setup();
    let records = generate(50);

    let mut strategy = IndividualFileStrategy::new(&path).unwrap();
    strategy.write(&records).unwrap();

    assert_eq!(strategy.read_sequential().unwrap(), records);
}

#[test]
fn test_random_read_preserves_request_order() {
    let (_temp, path) = setup();
    let records = generate(30);

    let mut strategy = IndividualFileStrategy::new(&path).unwrap();
    strategy.write(&records).unwrap();

    let ids = [29u32, 0, 15, 0, 29];
    let read = strategy.read_random(&ids).unwrap();

    assert_eq!(read.len(), ids.len());
    for (record, &id) in read.iter().zip(ids.iter()) {
        assert_eq!(record.id, id);
        assert_eq!(record.data, records[id as usize].data);
    }
}

#[test]
fn test_random_read_unknown_id_fails() {
    let (_temp, path) = setup();
    let records = generate(5);

    let mut strategy = IndividualFileStrategy::new(&path).unwrap();
    strategy.write(&records).unwrap();

    assert!(strategy.read_random(&[5]).is_err());
}

// =============================================================================
// Footprint / Clean Up Tests
// =============================================================================

#[test]
fn test_disk_space_is_sum_of_payloads() {
    let (_temp, path) = setup();
    let records = generate(40);
    let payload: u64 = records.iter().map(|r| r.len() as u64).sum();

    let mut strategy = IndividualFileStrategy::new(&path).unwrap();
    strategy.write(&records).unwrap();

    // No index file, so the footprint is exactly the payload bytes
    assert_eq!(strategy.disk_space_used().unwrap(), payload);
}

#[test]
fn test_clean_up_removes_directory_tree() {
    let (_temp, path) = setup();
    let records = generate(20);

    let mut strategy = IndividualFileStrategy::new(&path).unwrap();
    strategy.write(&records).unwrap();

    strategy.clean_up().unwrap();
    assert!(!path.exists());
    assert_eq!(strategy.disk_space_used().unwrap(), 0);

    // Idempotent
    strategy.clean_up().unwrap();
}
