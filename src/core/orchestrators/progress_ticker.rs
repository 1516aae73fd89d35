use std::time::Duration;

use crate::global_constants::{
    PROGRESS_CAP_PERCENT, PROGRESS_STEP_PERCENT, PROGRESS_TICK_INTERVAL,
};

/// Cosmetic progress shown while the single identification request is in flight.
/// It never reaches 100 on its own; only a completed request does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressTicker {
    interval: Duration,
    step_percent: u8,
    cap_percent: u8,
}

impl Default for ProgressTicker {
    fn default() -> Self {
        Self {
            interval: PROGRESS_TICK_INTERVAL,
            step_percent: PROGRESS_STEP_PERCENT,
            cap_percent: PROGRESS_CAP_PERCENT,
        }
    }
}

impl ProgressTicker {
    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn next_progress(&self, current_percent: u8) -> u8 {
        if current_percent >= self.cap_percent {
            return current_percent;
        }

        current_percent
            .saturating_add(self.step_percent)
            .min(self.cap_percent)
    }
}
