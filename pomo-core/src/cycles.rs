use time::OffsetDateTime;

use crate::form::{validate_min_minutes, validate_task};
use crate::{Clock, Cycle, CycleError, CycleId};

/// Ordered collection of cycles plus the id of the single active one.
///
/// The store enforces the cycle invariants itself: at most one active cycle,
/// terminal timestamps set once and never changed, insertion order kept.
#[derive(Debug)]
pub struct CycleStore<C> {
    clock: C,
    cycles: Vec<Cycle>,
    active_cycle_id: Option<CycleId>,
    next_id: u64,
}

impl<C: Clock> CycleStore<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            cycles: Vec::new(),
            active_cycle_id: None,
            next_id: 1,
        }
    }

    pub fn now(&self) -> OffsetDateTime {
        self.clock.now()
    }

    /// Append a new cycle starting now and make it the active one.
    ///
    /// Rejected without any state change when the input is invalid or when
    /// another cycle is still active.
    pub fn create_cycle(&mut self, task: &str, minutes_amount: u32) -> Result<CycleId, CycleError> {
        let task = validate_task(task)?;
        let minutes_amount = validate_min_minutes(i64::from(minutes_amount))?;

        if let Some(active) = self.active_cycle_id {
            tracing::debug!(%active, "rejecting new cycle while another is active");
            return Err(CycleError::CycleAlreadyActive);
        }

        let id = CycleId::new(self.next_id);
        self.next_id += 1;

        let cycle = Cycle::new(id, task, minutes_amount, self.clock.now());
        tracing::info!(%id, task = %cycle.task, minutes_amount, "cycle started");
        self.cycles.push(cycle);
        self.active_cycle_id = Some(id);
        Ok(id)
    }

    /// Interrupt the active cycle. Returns `None` when nothing is active.
    pub fn stop_active_cycle(&mut self) -> Option<CycleId> {
        let now = self.clock.now();
        let cycle = self.take_active()?;
        cycle.interrupted_at = Some(now);
        tracing::info!(id = %cycle.id, "cycle interrupted");
        Some(cycle.id)
    }

    /// Mark the active cycle as run to completion. Returns `None` when
    /// nothing is active.
    pub fn mark_active_cycle_finished(&mut self) -> Option<CycleId> {
        let now = self.clock.now();
        let cycle = self.take_active()?;
        cycle.finished_at = Some(now);
        tracing::info!(id = %cycle.id, "cycle finished");
        Some(cycle.id)
    }

    /// All cycles in creation order.
    pub fn list_cycles(&self) -> &[Cycle] {
        &self.cycles
    }

    pub fn active_cycle_id(&self) -> Option<CycleId> {
        self.active_cycle_id
    }

    pub fn active_cycle(&self) -> Option<&Cycle> {
        self.active_cycle_id.and_then(|id| self.get(id))
    }

    pub fn get(&self, id: CycleId) -> Option<&Cycle> {
        self.cycles.iter().find(|cycle| cycle.id == id)
    }

    /// Clear the active reference and hand out the cycle for its terminal
    /// timestamp. A cycle that is somehow already terminal is left alone.
    fn take_active(&mut self) -> Option<&mut Cycle> {
        let Some(id) = self.active_cycle_id.take() else {
            tracing::debug!("no active cycle, ignoring transition");
            return None;
        };
        self.cycles
            .iter_mut()
            .find(|cycle| cycle.id == id)
            .filter(|cycle| !cycle.is_terminal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CycleStatus, ManualClock, ValidationError};
    use time::macros::datetime;
    use time::Duration;

    fn store() -> (CycleStore<ManualClock>, ManualClock) {
        let clock = ManualClock::new(datetime!(2024-05-01 09:00 UTC));
        (CycleStore::new(clock.clone()), clock)
    }

    fn unfinished_count<C: Clock>(store: &CycleStore<C>) -> usize {
        store
            .list_cycles()
            .iter()
            .filter(|c| c.finished_at.is_none() && c.interrupted_at.is_none())
            .count()
    }

    #[test]
    fn create_cycle_starts_active_cycle_now() {
        let (mut store, clock) = store();

        let id = store.create_cycle("Write report", 25).unwrap();

        let cycle = store.active_cycle().unwrap();
        assert_eq!(cycle.id, id);
        assert_eq!(cycle.task, "Write report");
        assert_eq!(cycle.minutes_amount, 25);
        assert_eq!(cycle.start_date, clock.now());
        assert_eq!(cycle.finished_at, None);
        assert_eq!(cycle.interrupted_at, None);
        assert_eq!(store.list_cycles().len(), 1);
    }

    #[test]
    fn create_cycle_rejects_invalid_input() {
        let (mut store, _) = store();

        assert_eq!(
            store.create_cycle("", 10),
            Err(CycleError::Validation(ValidationError::EmptyTask))
        );
        assert_eq!(
            store.create_cycle("task", 3),
            Err(CycleError::Validation(ValidationError::DurationTooShort {
                min: 5,
                got: 3
            }))
        );
        assert!(store.list_cycles().is_empty());
        assert_eq!(store.active_cycle_id(), None);
    }

    #[test]
    fn create_cycle_rejected_while_another_is_active() {
        let (mut store, _) = store();
        let first = store.create_cycle("First", 25).unwrap();

        assert_eq!(
            store.create_cycle("Second", 25),
            Err(CycleError::CycleAlreadyActive)
        );
        assert_eq!(store.list_cycles().len(), 1);
        assert_eq!(store.active_cycle_id(), Some(first));
        assert_eq!(unfinished_count(&store), 1);
    }

    #[test]
    fn stop_active_cycle_interrupts_once() {
        let (mut store, clock) = store();
        let id = store.create_cycle("Write report", 25).unwrap();
        clock.advance(Duration::seconds(10));

        assert_eq!(store.stop_active_cycle(), Some(id));
        let cycle = store.get(id).unwrap();
        assert_eq!(cycle.interrupted_at, Some(clock.now()));
        assert_eq!(cycle.finished_at, None);
        assert_eq!(cycle.status(), CycleStatus::Interrupted);
        assert_eq!(store.active_cycle_id(), None);

        clock.advance(Duration::seconds(10));
        assert_eq!(store.stop_active_cycle(), None);
        assert_eq!(
            store.get(id).unwrap().interrupted_at,
            Some(clock.now() - Duration::seconds(10))
        );
    }

    #[test]
    fn mark_finished_is_noop_without_active_cycle() {
        let (mut store, _) = store();
        assert_eq!(store.mark_active_cycle_finished(), None);

        let id = store.create_cycle("Write report", 5).unwrap();
        store.stop_active_cycle();
        assert_eq!(store.mark_active_cycle_finished(), None);
        assert_eq!(store.get(id).unwrap().finished_at, None);
    }

    #[test]
    fn history_keeps_creation_order_with_single_active_cycle() {
        let (mut store, clock) = store();
        let a = store.create_cycle("A", 5).unwrap();
        clock.advance(Duration::minutes(5));
        store.mark_active_cycle_finished();
        let b = store.create_cycle("B", 10).unwrap();
        store.stop_active_cycle();
        let c = store.create_cycle("C", 15).unwrap();

        let ids: Vec<_> = store.list_cycles().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![a, b, c]);
        assert_eq!(unfinished_count(&store), 1);
        assert_eq!(store.active_cycle_id(), Some(c));
    }
}
