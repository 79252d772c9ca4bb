//! Platform abstraction layer
//!
//! Handles the boundary with the host environment:
//! - Input: raw held keys in, per-tick press edges out
//! - Time: variable frame deltas in, whole fixed ticks out

pub mod clock;
pub mod input;

pub use clock::FixedClock;
pub use input::{InputState, Key, KeyTracker};
