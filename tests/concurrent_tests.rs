//! Tests for the concurrent write benchmark
//!
//! These tests verify:
//! - One output file per worker, covering all records between them
//! - Partitioning puts the remainder on the last worker
//! - Clean up removes every worker file

use std::path::PathBuf;

use stratabench::storage::ConcurrentWriter;
use stratabench::{DataGenerator, Record};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().to_path_buf();
    (temp_dir, path)
}

fn generate(count: usize) -> Vec<Record> {
    DataGenerator::with_size_range(24, 64, 256).generate_records(count)
}

// =============================================================================
// Write Tests
// =============================================================================

#[test]
fn test_one_file_per_worker_with_all_bytes() {
    let (_temp, path) = setup();
    let records = generate(100);
    let payload: u64 = records.iter().map(|r| r.len() as u64).sum();

    let writer = ConcurrentWriter::new(&path, 4).unwrap();
    writer.write(&records).unwrap();

    for thread_id in 0..4 {
        assert!(path.join(format!("thread_{}.dat", thread_id)).exists());
    }
    assert_eq!(writer.file_count(), 4);
    assert_eq!(writer.disk_space_used().unwrap(), payload);
}

#[test]
fn test_last_worker_takes_remainder() {
    let (_temp, path) = setup();
    let records = generate(10);

    let writer = ConcurrentWriter::new(&path, 3).unwrap();
    writer.write(&records).unwrap();

    // 3 + 3 + 4 records; byte counts follow the partition
    let expected_last: u64 = records[6..].iter().map(|r| r.len() as u64).sum();
    assert_eq!(
        std::fs::metadata(path.join("thread_2.dat")).unwrap().len(),
        expected_last
    );
}

#[test]
fn test_single_worker_matches_whole_dataset() {
    let (_temp, path) = setup();
    let records = generate(20);
    let payload: u64 = records.iter().map(|r| r.len() as u64).sum();

    let writer = ConcurrentWriter::new(&path, 1).unwrap();
    writer.write(&records).unwrap();

    assert_eq!(
        std::fs::metadata(path.join("thread_0.dat")).unwrap().len(),
        payload
    );
}

#[test]
fn test_zero_threads_rejected() {
    let (_temp, path) = setup();
    assert!(ConcurrentWriter::new(&path, 0).is_err());
}

// =============================================================================
// Clean Up Tests
// =============================================================================

#[test]
fn test_clean_up_removes_worker_files() {
    let (_temp, path) = setup();
    let records = generate(30);

    let writer = ConcurrentWriter::new(&path, 2).unwrap();
    writer.write(&records).unwrap();
    writer.clean_up().unwrap();

    assert!(!path.join("thread_0.dat").exists());
    assert!(!path.join("thread_1.dat").exists());

    // Idempotent
    writer.clean_up().unwrap();
}
