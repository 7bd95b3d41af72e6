//! Timing helpers shared by the integration tests.

use std::time::{Duration, Instant};

/// Measures the wall-clock time between `start` and `elapsed`.
pub struct Stopwatch {
    started: Instant,
}

impl Stopwatch {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// Runs `function` and returns its result with the time it took.
pub fn timed<R>(function: impl FnOnce() -> R) -> (R, Duration) {
    let stopwatch = Stopwatch::start();
    let result = function();
    (result, stopwatch.elapsed())
}

/// Returns `true` if `duration` is at least `lower` and below `upper`.
pub fn within(duration: Duration, lower: Duration, upper: Duration) -> bool {
    lower <= duration && duration < upper
}
