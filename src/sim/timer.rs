//! Repeating timer advanced by the simulation clock

use serde::{Deserialize, Serialize};

/// Slack for float accumulation so an interval of exactly N ticks fires on
/// the Nth tick
const FIRE_EPSILON_MS: f64 = 1e-6;

/// Fires once per `interval_ms` while running
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepeatingTimer {
    interval_ms: f64,
    elapsed_ms: f64,
    running: bool,
}

impl RepeatingTimer {
    pub fn new(interval_ms: f32) -> Self {
        Self {
            interval_ms: f64::from(interval_ms),
            elapsed_ms: 0.0,
            running: false,
        }
    }

    /// Start counting a fresh interval
    pub fn start(&mut self) {
        self.running = true;
        self.elapsed_ms = 0.0;
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.elapsed_ms = 0.0;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Time until the next fire (None when stopped)
    pub fn remaining_ms(&self) -> Option<f64> {
        self.running
            .then(|| (self.interval_ms - self.elapsed_ms).max(0.0))
    }

    /// Advance the clock and return how many times the timer fired
    pub fn advance(&mut self, dt_ms: f64) -> u32 {
        if !self.running || self.interval_ms <= 0.0 {
            return 0;
        }
        self.elapsed_ms += dt_ms;
        let mut fired = 0;
        while self.elapsed_ms + FIRE_EPSILON_MS >= self.interval_ms {
            self.elapsed_ms -= self.interval_ms;
            fired += 1;
        }
        fired
    }
}
