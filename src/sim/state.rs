//! Gameplay state machine
//!
//! The car is pushed forward by flipping the magnetic pole in time with
//! key presses. Units are fixed-point integers: position in millimeters,
//! velocity in meters per hour.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::tick::{TickInput, tick};
use crate::error::TuningError;
use crate::tuning::Tuning;

/// Magnetic pole currently facing the rail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Pole {
    #[default]
    N,
    S,
}

impl Pole {
    pub fn flipped(self) -> Self {
        match self {
            Pole::N => Pole::S,
            Pole::S => Pole::N,
        }
    }
}

impl fmt::Display for Pole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pole::N => f.write_str("N"),
            Pole::S => f.write_str("S"),
        }
    }
}

/// Phase of the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mode {
    /// Coasting to a stop, nobody at the controls
    #[default]
    Wait,
    /// Attract mode, cruising on its own
    Demo,
    /// Pulling the car back to the start line
    Resetting,
    /// A timed run driven by the player
    Play,
}

/// Complete gameplay state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub(super) pole: Pole,
    /// Distance from the start line [mm]
    pub(super) position: i64,
    /// [m/h], never negative
    pub(super) velocity: i64,
    pub(super) mode: Mode,
    /// Remaining play ticks
    pub(super) counter: u32,
    pub(super) top_velocity: i64,
    pub(super) last_position: i64,
    /// Simulation tick counter
    pub(super) time_ticks: u64,
    pub(super) tuning: Tuning,
}

impl Default for GameState {
    fn default() -> Self {
        Self::with_tuning(Tuning::default())
    }
}

impl GameState {
    /// Fresh state under `tuning`, rejected if it would break the tick rule
    pub fn new(tuning: Tuning) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self::with_tuning(tuning))
    }

    /// Caller has already validated `tuning`
    pub(crate) fn with_tuning(tuning: Tuning) -> Self {
        Self {
            pole: Pole::default(),
            position: 0,
            velocity: 0,
            mode: Mode::Wait,
            counter: 0,
            top_velocity: 0,
            last_position: 0,
            time_ticks: 0,
            tuning,
        }
    }

    /// Advance one tick
    pub fn update(&mut self, input: &TickInput) {
        tick(self, input);
    }

    /// Begin the attract run; only leaves `Wait`
    pub fn start_demo(&mut self) -> bool {
        if self.mode != Mode::Wait {
            log::debug!("start_demo ignored in {:?}", self.mode);
            return false;
        }
        self.mode = Mode::Demo;
        log::debug!("mode: Wait -> Demo");
        true
    }

    /// Begin a timed run; a no-op unless [`can_start`](Self::can_start)
    pub fn start(&mut self) -> bool {
        if !self.can_start() {
            log::debug!("start ignored in {:?} at {} mm", self.mode, self.position);
            return false;
        }
        self.mode = Mode::Play;
        self.counter = self.tuning.play_ticks;
        self.top_velocity = 0;
        self.last_position = 0;
        log::info!("run started ({} ticks)", self.counter);
        true
    }

    /// Pull the car back to the start line, from any mode
    pub fn reset(&mut self) {
        log::debug!("mode: {:?} -> Resetting", self.mode);
        self.mode = Mode::Resetting;
        self.counter = 0;
    }

    pub fn can_start(&self) -> bool {
        self.mode == Mode::Resetting && self.position == 0
    }

    /// `(top_velocity, last_position)` of the latest run
    pub fn record(&self) -> (i64, i64) {
        (self.top_velocity, self.last_position)
    }

    pub fn is_playing(&self) -> bool {
        self.mode == Mode::Play
    }

    /// Whether the "press the other pole" hint should be visible
    pub fn should_show_guide(&self) -> bool {
        self.mode == Mode::Play
    }

    pub fn pole(&self) -> Pole {
        self.pole
    }

    pub fn position(&self) -> i64 {
        self.position
    }

    pub fn velocity(&self) -> i64 {
        self.velocity
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn counter(&self) -> u32 {
        self.counter
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }
}
