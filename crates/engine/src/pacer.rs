//! Tick pacing.

use std::time::{Duration, Instant};

/// Waits out the remainder of a tick.
pub trait Pacer {
    fn pace(&mut self, tick: Duration);
}

/// Sleeps until `tick` has elapsed since the previous call.
///
/// Time spent polling and rendering counts against the tick, so the step rate
/// stays fixed even when a frame is slow to draw.
#[derive(Debug, Clone)]
pub struct TickPacer {
    last_tick: Instant,
}

impl TickPacer {
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
        }
    }

    /// Time left before the current tick is over.
    pub fn remaining(&self, tick: Duration) -> Duration {
        tick.checked_sub(self.last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0))
    }
}

impl Default for TickPacer {
    fn default() -> Self {
        Self::new()
    }
}

impl Pacer for TickPacer {
    fn pace(&mut self, tick: Duration) {
        let wait = self.remaining(tick);
        if !wait.is_zero() {
            std::thread::sleep(wait);
        }
        self.last_tick = Instant::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pace_waits_at_least_one_tick() {
        let mut pacer = TickPacer::new();
        let tick = Duration::from_millis(20);
        let start = Instant::now();
        pacer.pace(tick);
        assert!(start.elapsed() >= Duration::from_millis(15));
    }

    #[test]
    fn remaining_is_zero_once_tick_has_passed() {
        let pacer = TickPacer::new();
        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(pacer.remaining(Duration::from_millis(1)), Duration::from_secs(0));
    }
}
