//! Wall-clock phase timing

use std::time::{Duration, Instant};

/// Run `f` and measure how long it took
pub fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}

/// Stopwatch for phases that cannot be wrapped in a closure
#[derive(Debug, Default)]
pub struct BenchmarkTimer {
    started: Option<Instant>,
    elapsed: Duration,
}

impl BenchmarkTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self) {
        self.started = Some(Instant::now());
    }

    /// Stop and record; a stop without a start records nothing
    pub fn stop(&mut self) {
        if let Some(started) = self.started.take() {
            self.elapsed = started.elapsed();
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timed_returns_value() {
        let (value, elapsed) = timed(|| 41 + 1);
        assert_eq!(value, 42);
        assert!(elapsed >= Duration::ZERO);
    }

    #[test]
    fn stop_without_start_is_zero() {
        let mut timer = BenchmarkTimer::new();
        timer.stop();
        assert_eq!(timer.elapsed(), Duration::ZERO);
    }
}
