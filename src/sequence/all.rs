//! Parallel join of sub-steps

use super::{Sequence, Step, StepResult, StepStatus};

/// Runs every unfinished sub-step each tick; completes once all are done
///
/// Completed sub-steps are cleared in place and never invoked again. The
/// join completes on the same tick its last sub-step completes. If every
/// sub-step completed with [`StepStatus::CompletedAndAdvance`] the join
/// does too, otherwise it reports [`StepStatus::Completed`].
pub struct AllStep<C> {
    slots: Vec<Option<Box<dyn Step<C>>>>,
    advance: bool,
}

impl<C> AllStep<C> {
    pub fn new(steps: Vec<Box<dyn Step<C>>>) -> Self {
        Self {
            slots: steps.into_iter().map(Some).collect(),
            advance: true,
        }
    }

    /// Number of sub-steps still running
    pub fn pending(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }
}

impl<C> Step<C> for AllStep<C> {
    fn invoke(&mut self, ctx: &mut C, seq: &mut Sequence<C>) -> StepResult {
        for slot in self.slots.iter_mut() {
            let Some(step) = slot else { continue };
            match step.invoke(ctx, seq)? {
                StepStatus::Continue => {}
                StepStatus::Completed => {
                    self.advance = false;
                    *slot = None;
                }
                StepStatus::CompletedAndAdvance => *slot = None,
            }
        }

        if self.pending() > 0 {
            return Ok(StepStatus::Continue);
        }
        if self.advance {
            Ok(StepStatus::CompletedAndAdvance)
        } else {
            Ok(StepStatus::Completed)
        }
    }
}

/// Build an [`AllStep`] from heterogeneous steps
#[macro_export]
macro_rules! all_of {
    ($($step:expr),+ $(,)?) => {
        $crate::sequence::AllStep::new(vec![$($crate::sequence::boxed($step)),+])
    };
}
