//! Results table
//!
//! Fixed-width console report across all benchmarked strategies.

use super::metrics::BenchmarkMetrics;

/// Render the results table as a string
pub fn format_results(results: &[BenchmarkMetrics]) -> String {
    let mut out = String::new();

    out.push_str("\n========================================\n");
    out.push_str("BENCHMARK RESULTS\n");
    out.push_str("========================================\n\n");

    out.push_str(&format!(
        "{:<16}{:>12}{:>15}{:>13}{:>16}{:>14}{:>10}\n",
        "Strategy",
        "Write (s)",
        "Write (MB/s)",
        "SeqRead (s)",
        "SeqRead (MB/s)",
        "RandRead (ms)",
        "Verified"
    ));
    out.push_str(&format!("{}\n", "-".repeat(96)));

    for result in results {
        out.push_str(&format!(
            "{:<16}{:>12.3}{:>15.2}{:>13.3}{:>16.2}{:>14.3}{:>10}\n",
            result.strategy,
            result.write_time.as_secs_f64(),
            result.write_throughput(),
            result.seq_read_time.as_secs_f64(),
            result.seq_read_throughput(),
            result.rand_read_latency_ms(),
            if result.verified { "YES" } else { "NO" }
        ));
    }

    out.push_str(&format!(
        "\n{:<16}{:>15}{:>12}{:>18}\n",
        "Strategy", "Disk Space", "Num Files", "Bytes/Record"
    ));
    out.push_str(&format!("{}\n", "-".repeat(61)));

    for result in results {
        out.push_str(&format!(
            "{:<16}{:>12.2} MB{:>12}{:>18.2}\n",
            result.strategy,
            result.disk_space_used as f64 / 1024.0 / 1024.0,
            result.file_count,
            result.bytes_per_record()
        ));
    }

    out.push_str("\n========================================\n");
    out
}

/// Print the results table to stdout
pub fn print_results(results: &[BenchmarkMetrics]) {
    print!("{}", format_results(results));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn table_lists_every_strategy() {
        let mut a = BenchmarkMetrics::new("SingleFile");
        a.write_time = Duration::from_millis(1200);
        a.verified = true;
        let b = BenchmarkMetrics::new("Chunked");

        let table = format_results(&[a, b]);
        assert!(table.contains("SingleFile"));
        assert!(table.contains("Chunked"));
        assert!(table.contains("YES"));
        assert!(table.contains("NO"));
    }
}
