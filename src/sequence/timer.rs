//! Tick-counting step

use super::{Sequence, Step, StepResult, StepStatus};

/// Progress handed to a timer effect, `counter` runs `1..=max`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub counter: u32,
    pub max: u32,
}

impl Progress {
    /// Fraction of the timer elapsed, `counter / max`
    pub fn fraction(&self) -> f64 {
        self.counter as f64 / self.max as f64
    }

    pub fn is_first(&self) -> bool {
        self.counter == 1
    }

    pub fn is_last(&self) -> bool {
        self.counter == self.max
    }

    pub fn remaining(&self) -> u32 {
        self.max - self.counter
    }
}

type Effect<C> = Box<dyn FnMut(&mut C, Progress) -> StepResult>;

/// Invokes an effect once per tick for `max` ticks
///
/// The effect may end the timer early by returning a completion status;
/// otherwise the timer completes on the tick where `counter == max`.
pub struct TimerStep<C> {
    counter: u32,
    max: u32,
    effect: Effect<C>,
}

impl<C> TimerStep<C> {
    pub fn new(max: u32, effect: impl FnMut(&mut C, Progress) -> StepResult + 'static) -> Self {
        assert!(max >= 1, "timer step needs at least one tick");
        Self {
            counter: 0,
            max,
            effect: Box::new(effect),
        }
    }

    /// Timer whose effect never ends it early
    pub fn fade(max: u32, mut effect: impl FnMut(&mut C, Progress) + 'static) -> Self {
        Self::new(max, move |ctx, progress| {
            effect(ctx, progress);
            Ok(StepStatus::Continue)
        })
    }

    /// Timer that only burns ticks
    pub fn idle(max: u32) -> Self {
        Self::fade(max, |_, _| {})
    }
}

impl<C> Step<C> for TimerStep<C> {
    fn invoke(&mut self, ctx: &mut C, _seq: &mut Sequence<C>) -> StepResult {
        self.counter += 1;
        let progress = Progress {
            counter: self.counter,
            max: self.max,
        };
        let status = (self.effect)(ctx, progress)?;
        if status.is_complete() {
            return Ok(status);
        }
        if progress.is_last() {
            return Ok(StepStatus::Completed);
        }
        Ok(StepStatus::Continue)
    }
}
