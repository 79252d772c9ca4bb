//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Integer units only (mm, m/h)
//! - No rendering or platform dependencies beyond the per-tick key edges

pub mod state;
pub mod tick;

pub use state::{GameState, Mode, Pole};
pub use tick::{TickInput, distance_per_tick, tick};
