// src/pacing.rs
use std::time::{Duration, Instant};

/// Minimum time a pending state stays visible. Layered on top of real work:
/// it never delays a response by more than the hold itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    hold: Duration,
}

impl Pacing {
    pub fn new(hold: Duration) -> Self {
        Self { hold }
    }

    pub fn none() -> Self {
        Self::new(Duration::ZERO)
    }

    /// Time still to wait if the work began at `started`.
    pub fn remaining(&self, started: Instant, now: Instant) -> Duration {
        self.hold.saturating_sub(now.saturating_duration_since(started))
    }

    /// Sleep out whatever is left of the hold.
    pub fn settle(&self, started: Instant) {
        let wait = self.remaining(started, Instant::now());
        if !wait.is_zero() {
            std::thread::sleep(wait);
        }
    }

    /// Sleep for the whole hold; used by actions that only simulate work.
    pub fn simulate(&self) {
        if !self.hold.is_zero() {
            std::thread::sleep(self.hold);
        }
    }
}
