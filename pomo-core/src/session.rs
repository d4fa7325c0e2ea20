use crate::{
    Clock, Countdown, Cycle, CycleError, CycleForm, CycleId, CycleStore, HistoryView, Remaining,
    Scheduler, TickOutcome, TickToken,
};

/// Everything a front-end needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub active_cycle: Option<Cycle>,
    pub remaining_minutes: i64,
    pub remaining_seconds: i64,
    pub is_running: bool,
    pub history: HistoryView,
}

impl Snapshot {
    /// Remaining time as `MM:SS`.
    pub fn remaining_display(&self) -> String {
        Remaining {
            minutes: self.remaining_minutes,
            seconds: self.remaining_seconds,
        }
        .to_string()
    }
}

/// A focus session: the cycle store and the countdown engine wired to one
/// clock and one scheduler.
///
/// Front-ends get this object handed to them and route every user intent
/// and every scheduler tick through it.
pub struct Pomodoro<C, S> {
    store: CycleStore<C>,
    countdown: Countdown<S>,
}

impl<C: Clock, S: Scheduler> Pomodoro<C, S> {
    pub fn new(clock: C, scheduler: S) -> Self {
        Self {
            store: CycleStore::new(clock),
            countdown: Countdown::new(scheduler),
        }
    }

    /// Create a cycle and start counting it down.
    pub fn create_cycle(&mut self, task: &str, minutes_amount: u32) -> Result<CycleId, CycleError> {
        let id = self.store.create_cycle(task, minutes_amount)?;
        if let Some(cycle) = self.store.get(id) {
            self.countdown.start(cycle);
        }
        Ok(id)
    }

    /// Validate the raw form input, then create the cycle.
    pub fn submit(&mut self, form: &CycleForm) -> Result<CycleId, CycleError> {
        let new_cycle = form.validate()?;
        self.create_cycle(&new_cycle.task, new_cycle.minutes_amount)
    }

    /// Interrupt the active cycle and stop ticking. No-op when idle.
    pub fn stop_active_cycle(&mut self) -> Option<CycleId> {
        let stopped = self.store.stop_active_cycle();
        self.countdown.stop();
        stopped
    }

    pub fn on_tick(&mut self, token: TickToken) -> TickOutcome {
        self.countdown.on_tick(token, &mut self.store)
    }

    pub fn is_running(&self) -> bool {
        self.countdown.is_running()
    }

    pub fn active_cycle(&self) -> Option<&Cycle> {
        self.store.active_cycle()
    }

    pub fn cycles(&self) -> &[Cycle] {
        self.store.list_cycles()
    }

    pub fn remaining(&self) -> Remaining {
        self.countdown.remaining()
    }

    pub fn history(&self) -> HistoryView {
        HistoryView::project(self.store.list_cycles(), self.store.now())
    }

    /// Title for the terminal window, only while a cycle is running.
    pub fn window_title(&self) -> Option<String> {
        self.is_running().then(|| self.countdown.display())
    }

    pub fn snapshot(&self) -> Snapshot {
        let remaining = self.countdown.remaining();
        Snapshot {
            active_cycle: self.store.active_cycle().cloned(),
            remaining_minutes: remaining.minutes,
            remaining_seconds: remaining.seconds,
            is_running: self.countdown.is_running(),
            history: self.history(),
        }
    }
}
