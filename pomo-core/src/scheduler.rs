use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

/// Period of the countdown tick.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Identifies one schedule. Every tick it produces carries the token, which
/// lets the countdown drop ticks from schedules that were already cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickToken(u64);

impl TickToken {
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

/// Recurring tick source driving the countdown.
pub trait Scheduler: Send + 'static {
    /// Start ticking every `period` and return the token carried by its ticks.
    fn schedule(&mut self, period: Duration) -> TickToken;

    /// Stop the schedule identified by `token`. Unknown tokens are ignored.
    fn cancel(&mut self, token: TickToken);
}

/// Tokio-backed scheduler. Each schedule is a spawned task pushing its token
/// into an unbounded channel that the event loop drains.
pub struct IntervalScheduler {
    tx: UnboundedSender<TickToken>,
    next_token: u64,
    tasks: HashMap<TickToken, JoinHandle<()>>,
}

impl IntervalScheduler {
    pub fn new(tx: UnboundedSender<TickToken>) -> Self {
        Self {
            tx,
            next_token: 0,
            tasks: HashMap::new(),
        }
    }

    /// Create a scheduler together with the receiving end of its tick channel.
    pub fn channel() -> (Self, UnboundedReceiver<TickToken>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }

    pub fn active_schedules(&self) -> usize {
        self.tasks.len()
    }
}

impl Scheduler for IntervalScheduler {
    fn schedule(&mut self, period: Duration) -> TickToken {
        self.next_token += 1;
        let token = TickToken(self.next_token);
        let tx = self.tx.clone();

        let handle = tokio::spawn(async move {
            // First tick one full period after start, not immediately.
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.send(token).is_err() {
                    break;
                }
            }
        });

        tracing::debug!(?token, ?period, "tick schedule started");
        self.tasks.insert(token, handle);
        token
    }

    fn cancel(&mut self, token: TickToken) {
        if let Some(handle) = self.tasks.remove(&token) {
            handle.abort();
            tracing::debug!(?token, "tick schedule cancelled");
        }
    }
}

impl Drop for IntervalScheduler {
    fn drop(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }
}

#[derive(Debug, Default)]
struct ManualState {
    next_token: u64,
    active: Vec<TickToken>,
    cancelled: Vec<TickToken>,
}

/// Scheduler that never ticks on its own. Tests feed tokens to the session
/// by hand and inspect what was scheduled or cancelled.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    state: Arc<Mutex<ManualState>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently scheduled token that is still active.
    pub fn active_token(&self) -> Option<TickToken> {
        self.lock().active.last().copied()
    }

    pub fn is_scheduled(&self) -> bool {
        !self.lock().active.is_empty()
    }

    pub fn cancelled(&self) -> Vec<TickToken> {
        self.lock().cancelled.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ManualState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, _period: Duration) -> TickToken {
        let mut state = self.lock();
        state.next_token += 1;
        let token = TickToken(state.next_token);
        state.active.push(token);
        token
    }

    fn cancel(&mut self, token: TickToken) {
        let mut state = self.lock();
        if let Some(pos) = state.active.iter().position(|t| *t == token) {
            state.active.remove(pos);
            state.cancelled.push(token);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn interval_scheduler_ticks_with_its_token() {
        let (mut scheduler, mut rx) = IntervalScheduler::channel();
        let token = scheduler.schedule(TICK_PERIOD);

        assert_eq!(rx.recv().await, Some(token));
        assert_eq!(rx.recv().await, Some(token));
        assert_eq!(scheduler.active_schedules(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn interval_scheduler_stops_after_cancel() {
        let (mut scheduler, mut rx) = IntervalScheduler::channel();
        let token = scheduler.schedule(TICK_PERIOD);
        assert_eq!(rx.recv().await, Some(token));

        scheduler.cancel(token);
        assert_eq!(scheduler.active_schedules(), 0);

        let next = tokio::time::timeout(Duration::from_secs(5), rx.recv()).await;
        assert!(next.is_err(), "no tick expected after cancel");
    }

    #[tokio::test(start_paused = true)]
    async fn interval_scheduler_issues_fresh_tokens() {
        let (mut scheduler, _rx) = IntervalScheduler::channel();
        let first = scheduler.schedule(TICK_PERIOD);
        scheduler.cancel(first);
        let second = scheduler.schedule(TICK_PERIOD);
        assert_ne!(first, second);
    }

    #[test]
    fn manual_scheduler_tracks_active_and_cancelled() {
        let mut scheduler = ManualScheduler::new();
        let handle = scheduler.clone();

        let first = scheduler.schedule(TICK_PERIOD);
        assert_eq!(handle.active_token(), Some(first));

        scheduler.cancel(first);
        assert!(!handle.is_scheduled());
        assert_eq!(handle.cancelled(), vec![first]);

        // Cancelling twice is harmless
        scheduler.cancel(first);
        assert_eq!(handle.cancelled(), vec![first]);
    }
}
