use thiserror::Error;

/// Input rejected before any state change.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("task name must not be empty")]
    EmptyTask,
    #[error("duration must be at least {min} minutes (got {got})")]
    DurationTooShort { min: u32, got: i64 },
    #[error("duration must be at most {max} minutes (got {got})")]
    DurationTooLong { max: u32, got: i64 },
    #[error("duration is not a whole number of minutes: {0:?}")]
    InvalidDuration(String),
}

/// Errors that can occur when mutating the cycle store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CycleError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("a cycle is already running")]
    CycleAlreadyActive,
}

impl CycleError {
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
