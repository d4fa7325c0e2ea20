use std::fmt;

use time::OffsetDateTime;

use crate::time_utils::{elapsed_seconds, format_mm_ss, remaining_seconds, split_minutes_seconds};
use crate::{Clock, Cycle, CycleId, CycleStore, Scheduler, TickToken, TICK_PERIOD};

/// Observable countdown state. Completion happens inside a single tick and
/// lands straight back in `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownState {
    Idle,
    Running {
        cycle_id: CycleId,
        started_at: OffsetDateTime,
        target_seconds: i64,
        token: TickToken,
    },
}

/// What a tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Stale token, idle engine, or a cycle that is no longer active.
    Ignored,
    /// Elapsed seconds recomputed, target not reached yet.
    Elapsed(i64),
    /// Target reached; the cycle was marked finished.
    Completed(CycleId),
}

/// Remaining time split for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Remaining {
    pub minutes: i64,
    pub seconds: i64,
}

impl Remaining {
    pub fn from_seconds(total: i64) -> Self {
        let (minutes, seconds) = split_minutes_seconds(total);
        Self { minutes, seconds }
    }
}

impl fmt::Display for Remaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.minutes, self.seconds)
    }
}

/// Drives the active cycle towards completion, one tick per second.
///
/// Elapsed time is always recomputed from the cycle's start date, so a late
/// or skipped tick never makes the countdown drift.
pub struct Countdown<S> {
    scheduler: S,
    state: CountdownState,
    elapsed_seconds: i64,
}

impl<S: Scheduler> Countdown<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            state: CountdownState::Idle,
            elapsed_seconds: 0,
        }
    }

    /// Begin counting down `cycle`. Any previous schedule is cancelled first.
    pub fn start(&mut self, cycle: &Cycle) {
        self.cancel_schedule();
        let token = self.scheduler.schedule(TICK_PERIOD);
        self.state = CountdownState::Running {
            cycle_id: cycle.id,
            started_at: cycle.start_date,
            target_seconds: cycle.target_seconds(),
            token,
        };
        self.elapsed_seconds = 0;
    }

    /// Stop ticking and go back to `Idle`.
    pub fn stop(&mut self) {
        self.cancel_schedule();
        self.state = CountdownState::Idle;
        self.elapsed_seconds = 0;
    }

    /// Handle a tick from the scheduler.
    pub fn on_tick<C: Clock>(&mut self, token: TickToken, store: &mut CycleStore<C>) -> TickOutcome {
        let CountdownState::Running {
            cycle_id,
            started_at,
            target_seconds,
            token: current,
        } = self.state
        else {
            tracing::debug!(?token, "tick while idle ignored");
            return TickOutcome::Ignored;
        };

        if token != current {
            tracing::debug!(?token, ?current, "stale tick ignored");
            return TickOutcome::Ignored;
        }

        if store.active_cycle_id() != Some(cycle_id) {
            tracing::debug!(%cycle_id, "cycle no longer active, stopping countdown");
            self.stop();
            return TickOutcome::Ignored;
        }

        let elapsed = elapsed_seconds(started_at, store.now());
        if elapsed >= target_seconds {
            store.mark_active_cycle_finished();
            self.stop();
            return TickOutcome::Completed(cycle_id);
        }

        self.elapsed_seconds = elapsed;
        TickOutcome::Elapsed(elapsed)
    }

    pub fn state(&self) -> CountdownState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, CountdownState::Running { .. })
    }

    pub fn elapsed_seconds(&self) -> i64 {
        self.elapsed_seconds
    }

    /// Seconds left on the running cycle, zero while idle.
    pub fn remaining_seconds(&self) -> i64 {
        match self.state {
            CountdownState::Running { target_seconds, .. } => {
                remaining_seconds(target_seconds, self.elapsed_seconds)
            }
            CountdownState::Idle => 0,
        }
    }

    pub fn remaining(&self) -> Remaining {
        Remaining::from_seconds(self.remaining_seconds())
    }

    /// Remaining time as `MM:SS`.
    pub fn display(&self) -> String {
        format_mm_ss(self.remaining_seconds())
    }

    fn cancel_schedule(&mut self) {
        if let CountdownState::Running { token, .. } = self.state {
            self.scheduler.cancel(token);
        }
    }
}
