//! Gameplay balance
//!
//! Baked-in constants grouped in one record so tests can run the state
//! machine under other numbers. Velocities are meters per hour, positions
//! millimeters.

use serde::{Deserialize, Serialize};

use crate::consts::TICKS_PER_SECOND;
use crate::error::TuningError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tuning {
    /// Velocity gained per successful pole flip
    pub flip_increment: i64,
    /// Velocity lost per tick without a flip (Play and Wait)
    pub decay: i64,
    /// Velocity the demo run settles at
    pub cruise_velocity: i64,
    /// Per-tick velocity change while easing toward cruise
    pub demo_acceleration: i64,
    /// Length of a run in ticks
    pub play_ticks: u32,
    /// Minimum distance pulled back per tick while resetting
    pub reset_floor: i64,
    /// Divisor of the remaining distance pulled back per tick while resetting
    pub reset_ticks_to_zero: i64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            flip_increment: 25_000,
            decay: 2_500,
            cruise_velocity: 100_000,
            demo_acceleration: 1_000,
            play_ticks: 10 * TICKS_PER_SECOND,
            reset_floor: 100,
            reset_ticks_to_zero: 30,
        }
    }
}

impl Tuning {
    pub fn validate(&self) -> Result<(), TuningError> {
        if self.decay <= 0 {
            return Err(TuningError::Zero("decay"));
        }
        if self.demo_acceleration <= 0 {
            return Err(TuningError::Zero("demo_acceleration"));
        }
        if self.play_ticks == 0 {
            return Err(TuningError::Zero("play_ticks"));
        }
        if self.reset_floor <= 0 {
            return Err(TuningError::Zero("reset_floor"));
        }
        if self.reset_ticks_to_zero <= 0 {
            return Err(TuningError::Zero("reset_ticks_to_zero"));
        }
        Ok(())
    }
}
