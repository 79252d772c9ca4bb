//! Cooperative step sequencing
//!
//! A [`Sequence`] owns a FIFO of [`Step`]s and drives only the front one
//! each tick. Steps keep their own progress between ticks, which is the
//! only form of suspension in the game: returning [`StepStatus::Continue`]
//! is a yield.
//!
//! Combinators:
//! - [`TimerStep`]: counts ticks `1..=max` and reports progress
//! - [`AllStep`]: runs sub-steps side by side until every one has completed

mod all;
mod timer;

pub use all::AllStep;
pub use timer::{Progress, TimerStep};

use std::collections::VecDeque;

use crate::error::StepError;

/// Completion signal returned by a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    /// Not done yet, invoke again next tick
    Continue,
    /// Done, the next step starts on the next tick
    Completed,
    /// Done, the next step runs immediately within this tick
    CompletedAndAdvance,
}

impl StepStatus {
    pub fn is_complete(self) -> bool {
        !matches!(self, StepStatus::Continue)
    }
}

pub type StepResult = Result<StepStatus, StepError>;

/// A unit of deferred work over a scene context `C`
///
/// The sequence that is running the step is handed in so a step can append
/// follow-up work, including a fresh copy of its own chain.
pub trait Step<C> {
    fn invoke(&mut self, ctx: &mut C, seq: &mut Sequence<C>) -> StepResult;
}

impl<C, F> Step<C> for F
where
    F: FnMut(&mut C, &mut Sequence<C>) -> StepResult,
{
    fn invoke(&mut self, ctx: &mut C, seq: &mut Sequence<C>) -> StepResult {
        self(ctx, seq)
    }
}

/// Box a step for heterogeneous collections
pub fn boxed<C, S>(step: S) -> Box<dyn Step<C>>
where
    S: Step<C> + 'static,
{
    Box::new(step)
}

/// Ordered queue of steps; only the front step is ever invoked
pub struct Sequence<C> {
    steps: VecDeque<Box<dyn Step<C>>>,
}

impl<C> Default for Sequence<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Sequence<C> {
    pub fn new() -> Self {
        Self {
            steps: VecDeque::new(),
        }
    }

    /// Append a step to the tail
    pub fn add_step(&mut self, step: impl Step<C> + 'static) {
        self.steps.push_back(Box::new(step));
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Drive the front step for one tick
    ///
    /// The front step is detached while it runs so it can append to this
    /// sequence; it is put back at the front if it did not complete.
    pub fn update(&mut self, ctx: &mut C) -> Result<(), StepError> {
        while let Some(mut step) = self.steps.pop_front() {
            match step.invoke(ctx, self) {
                Ok(StepStatus::Continue) => {
                    self.steps.push_front(step);
                    return Ok(());
                }
                Ok(StepStatus::Completed) => return Ok(()),
                Ok(StepStatus::CompletedAndAdvance) => continue,
                Err(e) => {
                    self.steps.push_front(step);
                    return Err(e);
                }
            }
        }
        Ok(())
    }
}
