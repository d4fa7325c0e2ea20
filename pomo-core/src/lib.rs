//! Core of the pomo focus timer.
//!
//! A [`Pomodoro`] session owns the [`CycleStore`] and the [`Countdown`]
//! engine. Time comes from an injected [`Clock`] and ticks from an injected
//! [`Scheduler`], so the whole state machine can be driven deterministically.

pub mod clock;
pub mod countdown;
pub mod cycles;
mod error;
pub mod form;
pub mod history;
mod models;
pub mod scheduler;
pub mod session;
pub mod time_utils;

pub use clock::{Clock, ManualClock, SystemClock};
pub use countdown::{Countdown, CountdownState, Remaining, TickOutcome};
pub use cycles::CycleStore;
pub use error::{CycleError, ValidationError};
pub use form::{CycleForm, NewCycle, MAX_MINUTES, MIN_MINUTES};
pub use history::{HistoryRow, HistoryView};
pub use models::{Cycle, CycleId, CycleStatus};
pub use scheduler::{IntervalScheduler, ManualScheduler, Scheduler, TickToken, TICK_PERIOD};
pub use session::{Pomodoro, Snapshot};
