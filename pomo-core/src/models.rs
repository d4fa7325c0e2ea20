use serde::{Deserialize, Serialize};
use std::fmt;
use time::OffsetDateTime;

/// A cycle identifier, issued in creation order by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CycleId(u64);

impl CycleId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for CycleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for CycleId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// One timed work session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cycle {
    pub id: CycleId,
    pub task: String,
    pub minutes_amount: u32,
    #[serde(with = "time::serde::rfc3339")]
    pub start_date: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339::option", default)]
    pub finished_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option", default)]
    pub interrupted_at: Option<OffsetDateTime>,
}

impl Cycle {
    pub fn new(
        id: impl Into<CycleId>,
        task: impl Into<String>,
        minutes_amount: u32,
        start_date: OffsetDateTime,
    ) -> Self {
        Self {
            id: id.into(),
            task: task.into(),
            minutes_amount,
            start_date,
            finished_at: None,
            interrupted_at: None,
        }
    }

    /// Target duration in seconds.
    pub fn target_seconds(&self) -> i64 {
        i64::from(self.minutes_amount) * 60
    }

    /// Status is derived from the terminal timestamps, never stored.
    pub fn status(&self) -> CycleStatus {
        if self.finished_at.is_some() {
            CycleStatus::Completed
        } else if self.interrupted_at.is_some() {
            CycleStatus::Interrupted
        } else {
            CycleStatus::InProgress
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.finished_at.is_some() || self.interrupted_at.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum CycleStatus {
    InProgress,
    Completed,
    Interrupted,
}

impl fmt::Display for CycleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CycleStatus::InProgress => write!(f, "In Progress"),
            CycleStatus::Completed => write!(f, "Completed"),
            CycleStatus::Interrupted => write!(f, "Interrupted"),
        }
    }
}
