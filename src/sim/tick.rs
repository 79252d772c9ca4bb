//! Fixed timestep simulation tick
//!
//! Advances the gameplay state machine deterministically by one tick.

use super::state::{GameState, Mode, Pole};
use crate::consts::TICKS_PER_SECOND;
use crate::platform::{InputState, Key};

/// Input commands for a single tick (edges only)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// S was pressed this tick
    pub press_s: bool,
    /// N was pressed this tick
    pub press_n: bool,
}

impl TickInput {
    pub fn from_keys(input: &InputState) -> Self {
        Self {
            press_s: input.just_pressed(Key::S),
            press_n: input.just_pressed(Key::N),
        }
    }

    /// True when the pressed key is the pole opposite to `pole`
    fn flips(&self, pole: Pole) -> bool {
        match pole {
            Pole::N => self.press_s,
            Pole::S => self.press_n,
        }
    }
}

/// Millimeters covered in one tick at `velocity` [m/h]
pub fn distance_per_tick(velocity: i64) -> i64 {
    velocity * 1000 / 3600 / TICKS_PER_SECOND as i64
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.time_ticks += 1;
    let tuning = state.tuning;

    match state.mode {
        Mode::Play => {
            if input.flips(state.pole) {
                state.pole = state.pole.flipped();
                state.velocity += tuning.flip_increment;
            } else {
                state.velocity = (state.velocity - tuning.decay).max(0);
            }
            state.position += distance_per_tick(state.velocity);
        }
        Mode::Resetting => {
            state.velocity = 0;
            let pull = (state.position / tuning.reset_ticks_to_zero).max(tuning.reset_floor);
            state.position = (state.position - pull).max(0);
        }
        Mode::Demo => {
            let target = tuning.cruise_velocity;
            state.velocity = if state.velocity < target {
                (state.velocity + tuning.demo_acceleration).min(target)
            } else {
                (state.velocity - tuning.demo_acceleration).max(target)
            };
            state.position += distance_per_tick(state.velocity);
        }
        Mode::Wait => {
            state.velocity = (state.velocity - tuning.decay).max(0);
            state.position += distance_per_tick(state.velocity);
        }
    }

    if state.counter > 0 {
        state.top_velocity = state.top_velocity.max(state.velocity);
        state.counter -= 1;
        if state.counter == 0 {
            state.mode = Mode::Wait;
            state.last_position = state.position;
            log::info!(
                "run finished: top {} m/h, distance {} mm",
                state.top_velocity,
                state.last_position
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;
    use proptest::prelude::*;

    const FLIP_S: TickInput = TickInput {
        press_s: true,
        press_n: false,
    };
    const FLIP_N: TickInput = TickInput {
        press_s: false,
        press_n: true,
    };
    const IDLE: TickInput = TickInput {
        press_s: false,
        press_n: false,
    };

    fn playing() -> GameState {
        let mut state = GameState::default();
        state.reset();
        assert!(state.start());
        state
    }

    #[test]
    fn test_flip_accelerates_and_switches_pole() {
        let mut state = playing();
        let inc = state.tuning().flip_increment;

        tick(&mut state, &FLIP_S);
        assert_eq!(state.pole(), Pole::S);
        assert_eq!(state.velocity(), inc);

        // pressing the same pole again does not count as a flip
        tick(&mut state, &FLIP_S);
        assert_eq!(state.pole(), Pole::S);
        assert_eq!(state.velocity(), inc - state.tuning().decay);

        tick(&mut state, &FLIP_N);
        assert_eq!(state.pole(), Pole::N);
        assert_eq!(state.velocity(), 2 * inc - state.tuning().decay);
    }

    #[test]
    fn test_position_integrates_velocity() {
        let mut state = playing();
        tick(&mut state, &FLIP_S);
        assert_eq!(state.position(), distance_per_tick(state.velocity()));
        // 216 km/h is 60 m/s, one meter per tick
        assert_eq!(distance_per_tick(216_000), 1_000);
    }

    #[test]
    fn test_velocity_decays_to_exact_zero_in_wait() {
        let tuning = Tuning {
            decay: 7,
            ..Default::default()
        };
        let mut state = GameState::new(tuning).unwrap();
        state.velocity = 100;
        let expected_ticks = (100 + 7 - 1) / 7;

        for t in 1..=expected_ticks {
            tick(&mut state, &IDLE);
            if t < expected_ticks {
                assert!(state.velocity() > 0, "reached zero early at tick {t}");
            }
        }
        assert_eq!(state.velocity(), 0);

        for _ in 0..10 {
            tick(&mut state, &IDLE);
            assert_eq!(state.velocity(), 0);
        }
    }

    #[test]
    fn test_demo_eases_to_cruise() {
        let mut state = GameState::default();
        state.start_demo();
        let cruise = state.tuning().cruise_velocity;
        for _ in 0..1000 {
            tick(&mut state, &IDLE);
            assert!(state.velocity() <= cruise);
        }
        assert_eq!(state.velocity(), cruise);
        assert!(state.position() > 0);

        // ease down from above
        state.velocity = cruise * 2;
        tick(&mut state, &IDLE);
        assert!(state.velocity() < cruise * 2);
        assert!(state.velocity() >= cruise);
    }

    #[test]
    fn test_reset_from_play_gates_restart() {
        let mut state = playing();
        for i in 0..120 {
            let input = if i % 2 == 0 { FLIP_S } else { FLIP_N };
            tick(&mut state, &input);
        }
        assert!(state.position() > 0);

        state.reset();
        let mut prev = state.position();
        let mut ticks = 0;
        while state.position() > 0 {
            assert!(!state.can_start());
            assert!(!state.start());
            assert_eq!(state.mode(), Mode::Resetting);

            tick(&mut state, &FLIP_S);
            ticks += 1;
            assert!(state.position() <= prev);
            assert_eq!(state.velocity(), 0);
            prev = state.position();
            assert!(ticks < 10_000, "reset did not converge");
        }
        assert_eq!(state.position(), 0);
        assert!(state.can_start());
        assert!(state.start());
        assert_eq!(state.mode(), Mode::Play);
    }

    #[test]
    fn test_record_matches_tracked_run() {
        let tuning = Tuning {
            play_ticks: 90,
            ..Default::default()
        };
        let mut state = GameState::new(tuning).unwrap();
        state.reset();
        assert!(state.start());

        let mut top = 0;
        let mut last = 0;
        for i in 0..90 {
            // flip for a while, then coast
            let input = match (i < 40, i % 2 == 0) {
                (true, true) => FLIP_S,
                (true, false) => FLIP_N,
                _ => IDLE,
            };
            tick(&mut state, &input);
            top = top.max(state.velocity());
            last = state.position();
        }

        assert_eq!(state.mode(), Mode::Wait);
        assert_eq!(state.counter(), 0);
        assert_eq!(state.record(), (top, last));

        // coasting afterwards does not touch the record
        for _ in 0..30 {
            tick(&mut state, &IDLE);
        }
        assert_eq!(state.record(), (top, last));
    }

    proptest! {
        #[test]
        fn prop_velocity_never_negative(presses in proptest::collection::vec(0u8..3, 1..400)) {
            let mut state = playing();
            for p in presses {
                let input = match p {
                    0 => FLIP_S,
                    1 => FLIP_N,
                    _ => IDLE,
                };
                tick(&mut state, &input);
                prop_assert!(state.velocity() >= 0);
            }
        }

        #[test]
        fn prop_reset_is_monotonic(start in 0i64..50_000_000) {
            let mut state = GameState::default();
            state.position = start;
            state.reset();
            let mut prev = state.position();
            let mut ticks = 0;
            while state.position() > 0 {
                tick(&mut state, &IDLE);
                prop_assert!(state.position() <= prev);
                prev = state.position();
                ticks += 1;
                prop_assert!(ticks < 100_000);
            }
            prop_assert!(state.can_start());
        }
    }
}
