//! stratabench binary
//!
//! Generates the synthetic dataset and runs every layout strategy through
//! the benchmark phases, printing a results table at the end.

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use stratabench::bench::{print_results, run_concurrent, run_strategy, BenchmarkMetrics};
use stratabench::storage::{
    ChunkedFileStrategy, ConcurrentWriter, IndividualFileStrategy, SingleFileStrategy,
    StorageStrategy,
};
use stratabench::{Config, DataGenerator};

/// Fine-grained storage layout benchmark
#[derive(Parser, Debug)]
#[command(name = "stratabench")]
#[command(about = "Benchmark single-file vs chunked vs file-per-record layouts")]
#[command(version)]
struct Args {
    /// Root directory for benchmark data
    #[arg(short, long, default_value = "./stratabench_data")]
    data_dir: String,

    /// Number of synthetic records
    #[arg(short = 'n', long, default_value = "100000")]
    records: usize,

    /// Generator seed (also seeds the random-read sequence)
    #[arg(short, long, default_value = "24")]
    seed: u64,

    /// Records per chunk file
    #[arg(short = 'c', long, default_value = "1000")]
    records_per_chunk: usize,

    /// Number of random-read requests per strategy
    #[arg(short = 'r', long, default_value = "1000")]
    random_reads: usize,

    /// Worker threads for the concurrent write benchmark
    #[arg(short = 't', long, default_value = "4")]
    threads: usize,

    /// Also run the concurrent write benchmark
    #[arg(long)]
    concurrent: bool,

    /// Try to drop OS page caches between phases (needs root)
    #[arg(long)]
    drop_caches: bool,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,stratabench=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let args = Args::parse();

    let config = Config::builder()
        .data_dir(&args.data_dir)
        .record_count(args.records)
        .seed(args.seed)
        .records_per_chunk(args.records_per_chunk)
        .random_read_count(args.random_reads)
        .concurrent_threads(args.threads)
        .drop_caches(args.drop_caches)
        .build();

    if let Err(e) = config.validate() {
        tracing::error!("invalid configuration: {}", e);
        std::process::exit(1);
    }

    tracing::info!("stratabench v{}", stratabench::VERSION);
    tracing::info!(
        records = config.record_count,
        seed = config.seed,
        "generating dataset"
    );

    let mut generator = DataGenerator::with_size_range(
        config.seed,
        config.min_record_size,
        config.max_record_size,
    );
    let records = generator.generate_records(config.record_count);
    let total_mb =
        stratabench::record::total_data_size(&records) as f64 / 1024.0 / 1024.0;
    tracing::info!("generation complete ({:.2} MB)", total_mb);

    let mut results: Vec<BenchmarkMetrics> = Vec::new();

    // A failing strategy is logged and skipped; the others still run
    let strategies: Vec<Box<dyn StorageStrategy>> = match build_strategies(&config) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("failed to set up strategies: {}", e);
            std::process::exit(1);
        }
    };

    for mut strategy in strategies {
        match run_strategy(strategy.as_mut(), &records, &config) {
            Ok(metrics) => results.push(metrics),
            Err(e) => {
                tracing::error!(strategy = strategy.name(), "benchmark failed: {}", e);
            }
        }
    }

    if args.concurrent {
        match ConcurrentWriter::new(
            &config.data_dir.join("concurrent"),
            config.concurrent_threads,
        )
        .and_then(|writer| run_concurrent(&writer, &records))
        {
            Ok(metrics) => results.push(metrics),
            Err(e) => tracing::error!("concurrent benchmark failed: {}", e),
        }
    }

    print_results(&results);
    tracing::info!("benchmark complete");
}

fn build_strategies(config: &Config) -> stratabench::Result<Vec<Box<dyn StorageStrategy>>> {
    Ok(vec![
        Box::new(SingleFileStrategy::new(&config.data_dir.join("single"))?),
        Box::new(ChunkedFileStrategy::with_records_per_chunk(
            &config.data_dir.join("chunked"),
            config.records_per_chunk,
        )?),
        Box::new(IndividualFileStrategy::new(
            &config.data_dir.join("individual"),
        )?),
    ])
}
