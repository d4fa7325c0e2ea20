use time::OffsetDateTime;

use crate::time_utils::format_distance;
use crate::{Cycle, CycleId, CycleStatus};

/// One display row of the history table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRow {
    pub id: CycleId,
    pub task: String,
    pub minutes_amount: u32,
    pub start_date: OffsetDateTime,
    /// "25 minutes"
    pub duration_label: String,
    /// Distance from start to render time, e.g. "about 2 hours".
    pub started_label: String,
    pub status: CycleStatus,
}

/// Read-only projection of the cycle store for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryView {
    pub rows: Vec<HistoryRow>,
}

impl HistoryView {
    /// Project `cycles` (in store order) against the render-time `now`.
    pub fn project(cycles: &[Cycle], now: OffsetDateTime) -> Self {
        let rows = cycles
            .iter()
            .map(|cycle| HistoryRow {
                id: cycle.id,
                task: cycle.task.clone(),
                minutes_amount: cycle.minutes_amount,
                start_date: cycle.start_date,
                duration_label: duration_label(cycle.minutes_amount),
                started_label: format_distance(cycle.start_date, now),
                status: cycle.status(),
            })
            .collect();
        Self { rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn count_by_status(&self, status: CycleStatus) -> usize {
        self.rows.iter().filter(|row| row.status == status).count()
    }
}

fn duration_label(minutes_amount: u32) -> String {
    if minutes_amount == 1 {
        "1 minute".to_string()
    } else {
        format!("{} minutes", minutes_amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;
    use time::Duration;

    #[test]
    fn test_rows_follow_store_order_with_derived_status() {
        let start = datetime!(2024-05-01 09:00 UTC);
        let mut done = Cycle::new(1, "Write report", 25, start);
        done.finished_at = Some(start + Duration::minutes(25));
        let mut stopped = Cycle::new(2, "Review PR", 10, start + Duration::minutes(30));
        stopped.interrupted_at = Some(start + Duration::minutes(31));
        let running = Cycle::new(3, "Emails", 5, start + Duration::minutes(40));

        let now = start + Duration::minutes(42);
        let view = HistoryView::project(&[done, stopped, running], now);

        let statuses: Vec<_> = view.rows.iter().map(|r| r.status).collect();
        assert_eq!(
            statuses,
            vec![
                CycleStatus::Completed,
                CycleStatus::Interrupted,
                CycleStatus::InProgress
            ]
        );
        assert_eq!(view.rows[0].duration_label, "25 minutes");
        assert_eq!(view.rows[0].started_label, "42 minutes");
        assert_eq!(view.rows[2].started_label, "2 minutes");
        assert_eq!(view.count_by_status(CycleStatus::InProgress), 1);
    }

    #[test]
    fn test_empty_history() {
        let view = HistoryView::project(&[], datetime!(2024-05-01 09:00 UTC));
        assert!(view.is_empty());
        assert_eq!(view.len(), 0);
    }
}
