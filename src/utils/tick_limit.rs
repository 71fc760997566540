use std::{
    thread::sleep,
    time::{Duration, Instant},
};

/// Keeps generations at a fixed cadence by sleeping out the rest of
/// each tick interval.
pub struct TickLimiter {
    interval: Duration,
    tick_timer: Instant,
    ticktime_smoothed: f64,
}

impl TickLimiter {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            tick_timer: Instant::now(),
            ticktime_smoothed: 0.,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    /// Smoothed ticks per second; infinite before the first tick.
    pub fn ticks_per_second(&self) -> f64 {
        1. / self.ticktime_smoothed
    }

    /// Blocks until `interval` has passed since the previous call.
    pub fn delay(&mut self) {
        let before_wait = self.tick_timer.elapsed();

        if self.interval > before_wait {
            sleep(self.interval - before_wait);
        }

        let ticktime = self.tick_timer.elapsed().as_secs_f64();
        self.ticktime_smoothed += (ticktime - self.ticktime_smoothed) * 0.1;
        log::trace!(
            "tick took {:.3} ms (waited {:.3} ms)",
            ticktime * 1e3,
            (ticktime - before_wait.as_secs_f64()) * 1e3
        );

        self.tick_timer = Instant::now();
    }
}

impl Default for TickLimiter {
    fn default() -> Self {
        Self::new(Duration::ZERO)
    }
}
