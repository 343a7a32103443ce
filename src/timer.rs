//! Stopwatch used by the execution engine.
//!
//! One timer measures one interval at a time; the harness reuses a single instance across cases, calling `start`
//! and `stop` around every target call.

use std::time::{Duration, Instant};

/// Stopwatch reporting elapsed milliseconds.
///
/// Both marks start at the construction instant, so `elapsed_ms` is `0.0` until the timer has been used.
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    start_time: Instant,
    end_time: Instant,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start_time: now,
            end_time: now,
        }
    }

    /// Record the start mark.
    pub fn start(&mut self) {
        self.start_time = Instant::now();
    }

    /// Record the end mark.
    pub fn stop(&mut self) {
        self.end_time = Instant::now();
    }

    /// Time between the last `start` and the last `stop`.
    ///
    /// Saturates to zero when the end mark predates the start mark (e.g. `start` called without a following `stop`).
    pub fn elapsed(&self) -> Duration {
        self.end_time.saturating_duration_since(self.start_time)
    }

    /// `1000 × (stop − start)` as a float.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed().as_secs_f64() * 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_fresh_timer_reports_zero() {
        assert_eq!(Timer::new().elapsed_ms(), 0.0);
    }

    #[test]
    fn test_measures_interval() {
        let mut timer = Timer::new();
        timer.start();
        thread::sleep(Duration::from_millis(5));
        timer.stop();
        assert!(timer.elapsed_ms() >= 5.0);
    }

    #[test]
    fn test_start_without_stop_saturates() {
        let mut timer = Timer::new();
        timer.stop();
        thread::sleep(Duration::from_millis(1));
        timer.start();
        assert_eq!(timer.elapsed_ms(), 0.0);
    }

    #[test]
    fn test_restart_replaces_previous_interval() {
        let mut timer = Timer::new();
        timer.start();
        thread::sleep(Duration::from_millis(10));
        timer.stop();
        let first = timer.elapsed_ms();

        timer.start();
        timer.stop();
        assert!(timer.elapsed_ms() < first);
    }
}
