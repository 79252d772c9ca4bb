//! Edge-triggered keyboard input

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    S,
    N,
    Space,
}

impl Key {
    pub const ALL: [Key; 3] = [Key::S, Key::N, Key::Space];

    fn bit(self) -> u8 {
        match self {
            Key::S => 1 << 0,
            Key::N => 1 << 1,
            Key::Space => 1 << 2,
        }
    }
}

/// Keys that went from released to pressed on the current tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pressed: u8,
}

impl InputState {
    /// Edge set with exactly the given keys pressed this tick
    pub fn with_pressed(keys: &[Key]) -> Self {
        Self {
            pressed: keys.iter().fold(0, |acc, k| acc | k.bit()),
        }
    }

    pub fn just_pressed(&self, key: Key) -> bool {
        self.pressed & key.bit() != 0
    }

    pub fn any_just_pressed(&self, keys: &[Key]) -> bool {
        keys.iter().any(|&k| self.just_pressed(k))
    }

    pub fn is_empty(&self) -> bool {
        self.pressed == 0
    }
}

/// Turns sampled level state into press edges
///
/// A key held across many samples yields exactly one edge. Edges seen by
/// [`sample`](Self::sample) wait until [`take`](Self::take) hands them to a
/// tick, so a tap between two ticks still lands.
#[derive(Debug, Clone, Default)]
pub struct KeyTracker {
    held: u8,
    pending: u8,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the keys held down right now
    pub fn sample(&mut self, held: &[Key]) {
        let now = InputState::with_pressed(held).pressed;
        self.pending |= now & !self.held;
        self.held = now;
    }

    /// Edges gathered since the last call
    pub fn take(&mut self) -> InputState {
        InputState {
            pressed: std::mem::take(&mut self.pending),
        }
    }

    /// Sample and take in one go, for drivers that sample once per tick
    pub fn advance(&mut self, held: &[Key]) -> InputState {
        self.sample(held);
        self.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_held_key_fires_once() {
        let mut tracker = KeyTracker::new();
        assert!(tracker.advance(&[Key::S]).just_pressed(Key::S));
        assert!(!tracker.advance(&[Key::S]).just_pressed(Key::S));
        assert!(!tracker.advance(&[Key::S]).just_pressed(Key::S));

        // release then press again
        assert!(tracker.advance(&[]).is_empty());
        assert!(tracker.advance(&[Key::S]).just_pressed(Key::S));
    }

    #[test]
    fn test_independent_keys() {
        let mut tracker = KeyTracker::new();
        tracker.advance(&[Key::S]);
        let edges = tracker.advance(&[Key::S, Key::N]);
        assert!(!edges.just_pressed(Key::S));
        assert!(edges.just_pressed(Key::N));
        assert!(!edges.just_pressed(Key::Space));
    }

    #[test]
    fn test_tap_between_ticks_is_kept() {
        let mut tracker = KeyTracker::new();
        tracker.sample(&[Key::Space]);
        tracker.sample(&[]);
        let edges = tracker.take();
        assert!(edges.just_pressed(Key::Space));
        // consumed once
        assert!(tracker.take().is_empty());
    }

    #[test]
    fn test_edges_from_several_samples_merge() {
        let mut tracker = KeyTracker::new();
        tracker.sample(&[Key::S]);
        tracker.sample(&[Key::S, Key::N]);
        let edges = tracker.take();
        assert!(edges.just_pressed(Key::S));
        assert!(edges.just_pressed(Key::N));
    }

    #[test]
    fn test_any_just_pressed() {
        let input = InputState::with_pressed(&[Key::Space]);
        assert!(input.any_just_pressed(&Key::ALL));
        assert!(!input.any_just_pressed(&[Key::S, Key::N]));
    }
}
