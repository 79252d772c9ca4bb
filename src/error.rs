//! Error types
//!
//! Completion of a step is not an error: it travels as [`StepStatus`]
//! in the `Ok` arm. Everything here is fatal and stops the tick loop.
//!
//! [`StepStatus`]: crate::sequence::StepStatus

use thiserror::Error;

/// Fatal failure raised by a step
#[derive(Debug, Error)]
pub enum StepError {
    #[error("step `{step}` failed: {reason}")]
    Failed { step: &'static str, reason: String },
}

impl StepError {
    pub fn failed(step: &'static str, reason: impl Into<String>) -> Self {
        StepError::Failed {
            step,
            reason: reason.into(),
        }
    }
}

/// Asset registry failures
#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("asset `{0}` not found")]
    Missing(&'static str),
    #[error("failed to read asset `{name}`: {source}")]
    Io {
        name: &'static str,
        #[source]
        source: std::io::Error,
    },
    #[error("asset `{name}` is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
}

/// Gameplay tuning that would break the state machine
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TuningError {
    #[error("`{0}` must be greater than zero")]
    Zero(&'static str),
}

/// Top-level error surfaced to the process boundary
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Step(#[from] StepError),
    #[error(transparent)]
    Resource(#[from] ResourceError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("invalid tuning: {0}")]
    Tuning(#[from] TuningError),
}
