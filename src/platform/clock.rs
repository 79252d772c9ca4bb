//! Fixed timestep accumulator

use crate::consts::{MAX_SUBSTEPS, TICKS_PER_SECOND};

/// Converts variable frame deltas into whole fixed ticks
#[derive(Debug, Clone)]
pub struct FixedClock {
    accumulator: f64,
    tick_dt: f64,
    max_substeps: u32,
}

impl Default for FixedClock {
    fn default() -> Self {
        Self::new(TICKS_PER_SECOND, MAX_SUBSTEPS)
    }
}

impl FixedClock {
    pub fn new(ticks_per_second: u32, max_substeps: u32) -> Self {
        Self {
            accumulator: 0.0,
            tick_dt: 1.0 / ticks_per_second as f64,
            max_substeps,
        }
    }

    /// Add `dt` seconds of wall time and return how many ticks to run
    ///
    /// At most `max_substeps` ticks are returned per frame; backlog beyond
    /// that is dropped so a stall does not snowball.
    pub fn advance(&mut self, dt: f64) -> u32 {
        self.accumulator += dt.clamp(0.0, 0.25);

        let mut ticks = 0;
        while self.accumulator >= self.tick_dt && ticks < self.max_substeps {
            self.accumulator -= self.tick_dt;
            ticks += 1;
        }
        if ticks == self.max_substeps && self.accumulator >= self.tick_dt {
            log::warn!(
                "dropping {:.1} ms of simulation backlog",
                self.accumulator * 1000.0
            );
            self.accumulator = 0.0;
        }
        ticks
    }
}
