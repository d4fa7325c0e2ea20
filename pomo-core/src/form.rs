use crate::ValidationError;

/// Shortest cycle that can be started.
pub const MIN_MINUTES: u32 = 5;
/// Longest cycle the new-cycle form accepts.
pub const MAX_MINUTES: u32 = 60;

/// Validated input for a new cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCycle {
    pub task: String,
    pub minutes_amount: u32,
}

/// Raw contents of the new-cycle form, as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleForm {
    pub task: String,
    pub minutes_amount: String,
}

impl CycleForm {
    pub fn new(task: impl Into<String>, minutes_amount: impl Into<String>) -> Self {
        Self {
            task: task.into(),
            minutes_amount: minutes_amount.into(),
        }
    }

    /// Submitting is only offered once a task name has been typed.
    pub fn can_submit(&self) -> bool {
        !self.task.trim().is_empty()
    }

    /// Validate both fields. Task must be non-empty and the duration a whole
    /// number of minutes in `[MIN_MINUTES, MAX_MINUTES]`.
    pub fn validate(&self) -> Result<NewCycle, ValidationError> {
        let task = validate_task(&self.task)?;
        let raw = self.minutes_amount.trim();
        let minutes: i64 = raw
            .parse()
            .map_err(|_| ValidationError::InvalidDuration(raw.to_string()))?;
        let minutes_amount = validate_minutes_range(minutes)?;
        Ok(NewCycle {
            task,
            minutes_amount,
        })
    }
}

/// Trim the task name and reject it when nothing is left.
pub fn validate_task(task: &str) -> Result<String, ValidationError> {
    let task = task.trim();
    if task.is_empty() {
        return Err(ValidationError::EmptyTask);
    }
    Ok(task.to_string())
}

/// Lower bound only; the store accepts any duration of at least `MIN_MINUTES`.
pub fn validate_min_minutes(minutes: i64) -> Result<u32, ValidationError> {
    if minutes < i64::from(MIN_MINUTES) {
        return Err(ValidationError::DurationTooShort {
            min: MIN_MINUTES,
            got: minutes,
        });
    }
    u32::try_from(minutes).map_err(|_| ValidationError::InvalidDuration(minutes.to_string()))
}

/// Full `[MIN_MINUTES, MAX_MINUTES]` check used by the form.
pub fn validate_minutes_range(minutes: i64) -> Result<u32, ValidationError> {
    let minutes_amount = validate_min_minutes(minutes)?;
    if minutes_amount > MAX_MINUTES {
        return Err(ValidationError::DurationTooLong {
            max: MAX_MINUTES,
            got: minutes,
        });
    }
    Ok(minutes_amount)
}
