use crate::logging::{info, warn};

#[cfg(feature = "std")]
use std::time::{Duration, Instant};

#[cfg(all(not(feature = "std"), feature = "embassy"))]
use embassy_time::{Duration, Instant};

/// Watch for slots that take longer than the slot period. A slot that overruns delays every slot after it.
///
/// Call `start` before `Cos::run_slot` and `finish` after. Logs a summary about once a second.
pub struct SlotBudget {
    budget: Duration,
    started: Option<Instant>,
    last_report: Instant,
    slots: u32,
    overruns: u32,
}

impl SlotBudget {
    pub fn new(budget: Duration) -> Self {
        Self {
            budget,
            started: None,
            last_report: Instant::now(),
            slots: 0,
            overruns: 0,
        }
    }

    pub fn start(&mut self) {
        self.started = Some(Instant::now());
    }

    /// returns true if this slot went over budget. `finish` without a `start` does nothing
    pub fn finish(&mut self) -> bool {
        let Some(started) = self.started.take() else {
            return false;
        };

        let now = Instant::now();
        let elapsed = now.duration_since(started);

        self.slots += 1;

        let over = elapsed > self.budget;
        if over {
            self.overruns += 1;

            warn!("slot overran: {}us", elapsed.as_micros());
        }

        if now.duration_since(self.last_report) >= Duration::from_secs(1) {
            info!("slots: {} overruns: {}", self.slots, self.overruns);

            self.last_report = now;
        }

        over
    }

    pub fn slots(&self) -> u32 {
        self.slots
    }

    pub fn overruns(&self) -> u32 {
        self.overruns
    }
}
