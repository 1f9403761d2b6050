//! End-to-end tests for the benchmark runner
//!
//! These tests verify:
//! - A full phase cycle over each strategy verifies and cleans up
//! - The random-read id sequence is seeded and reproducible
//! - The concurrent write benchmark produces footprint-verified metrics

use stratabench::bench::{generate_random_ids, run_concurrent, run_strategy};
use stratabench::storage::{
    ChunkedFileStrategy, ConcurrentWriter, IndividualFileStrategy, SingleFileStrategy,
    StorageStrategy,
};
use stratabench::{Config, DataGenerator};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn small_config(dir: &std::path::Path) -> Config {
    Config::builder()
        .data_dir(dir)
        .record_count(200)
        .seed(24)
        .records_per_chunk(16)
        .record_size_range(64, 256)
        .random_read_count(50)
        .build()
}

// =============================================================================
// Full Cycle Tests
// =============================================================================

#[test]
fn test_full_cycle_all_strategies() {
    let temp = TempDir::new().unwrap();
    let config = small_config(temp.path());
    config.validate().unwrap();

    let records = DataGenerator::with_size_range(
        config.seed,
        config.min_record_size,
        config.max_record_size,
    )
    .generate_records(config.record_count);

    let mut strategies: Vec<Box<dyn StorageStrategy>> = vec![
        Box::new(SingleFileStrategy::new(&temp.path().join("single")).unwrap()),
        Box::new(
            ChunkedFileStrategy::with_records_per_chunk(
                &temp.path().join("chunked"),
                config.records_per_chunk,
            )
            .unwrap(),
        ),
        Box::new(IndividualFileStrategy::new(&temp.path().join("individual")).unwrap()),
    ];

    for strategy in strategies.iter_mut() {
        let metrics = run_strategy(strategy.as_mut(), &records, &config).unwrap();

        assert!(metrics.verified, "{} failed verification", metrics.strategy);
        assert!(metrics.disk_space_used > 0);
        assert!(metrics.file_count > 0);
        assert_eq!(metrics.record_count, 200);
        // Clean up ran: nothing left on disk
        assert_eq!(strategy.disk_space_used().unwrap(), 0);
    }
}

// =============================================================================
// Random Id Tests
// =============================================================================

#[test]
fn test_random_ids_are_seeded() {
    let a = generate_random_ids(100, 50, 24);
    let b = generate_random_ids(100, 50, 24);
    let c = generate_random_ids(100, 50, 25);

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert!(a.iter().all(|&id| id < 50));
}

#[test]
fn test_random_ids_may_repeat() {
    // 100 draws from 3 ids must repeat
    let ids = generate_random_ids(100, 3, 24);
    assert_eq!(ids.len(), 100);
}

// =============================================================================
// Concurrent Benchmark Tests
// =============================================================================

#[test]
fn test_concurrent_run_produces_metrics() {
    let temp = TempDir::new().unwrap();
    let records = DataGenerator::with_size_range(24, 64, 256).generate_records(100);

    let writer = ConcurrentWriter::new(&temp.path().join("concurrent"), 3).unwrap();
    let metrics = run_concurrent(&writer, &records).unwrap();

    assert_eq!(metrics.strategy, "Concurrent(3)");
    assert!(metrics.verified);
    assert_eq!(metrics.file_count, 3);
    // Cleaned up after itself
    assert_eq!(writer.disk_space_used().unwrap(), 0);
}
