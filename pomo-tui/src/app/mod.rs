use crate::config::PomoConfig;
use pomo_core::{
    Clock, CycleError, IntervalScheduler, Pomodoro, Scheduler, SystemClock, TickOutcome,
    TickToken,
};

mod form;
mod history;
mod state;
pub use state::{FormField, TextInput, TimerSize, View};

pub struct App<C = SystemClock, S = IntervalScheduler> {
    pub running: bool,
    pub session: Pomodoro<C, S>,
    pub status_message: Option<String>,
    pub current_view: View,
    pub timer_size: TimerSize,

    // New-cycle form
    pub focused_field: FormField,
    pub task_input: TextInput,
    pub minutes_input: TextInput,
    pub task_suggestions: Vec<String>,
    pub suggestion_index: Option<usize>,
    pub default_minutes: u32,
    pub minutes_step: u32,

    // History view navigation
    pub focused_history_index: Option<usize>,
    pub history_scroll: usize,
    pub history_view_height: usize, // Rows visible in the last rendered table
}

impl<C: Clock, S: Scheduler> App<C, S> {
    pub fn new(session: Pomodoro<C, S>, cfg: &PomoConfig) -> Self {
        Self {
            running: true,
            session,
            status_message: None,
            current_view: View::Timer,
            timer_size: TimerSize::Large,
            focused_field: FormField::Task,
            task_input: TextInput::new(),
            minutes_input: TextInput::with_value(&cfg.default_minutes.to_string()),
            task_suggestions: cfg.task_suggestions.clone(),
            suggestion_index: None,
            default_minutes: cfg.default_minutes,
            minutes_step: cfg.minutes_step,
            focused_history_index: None,
            history_scroll: 0,
            history_view_height: 0,
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn navigate_to(&mut self, view: View) {
        if view == View::History {
            self.focused_history_index = None;
            self.history_scroll = 0;
        }
        self.current_view = view;
    }

    pub fn toggle_timer_size(&mut self) {
        self.timer_size = match self.timer_size {
            TimerSize::Normal => TimerSize::Large,
            TimerSize::Large => TimerSize::Normal,
        };
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn is_running(&self) -> bool {
        self.session.is_running()
    }

    /// Start a cycle from the form contents. Validation problems end up in
    /// the status line and leave everything else untouched.
    pub fn submit_cycle(&mut self) {
        if self.is_running() {
            self.set_status("A cycle is already running (Ctrl+X to stop)".to_string());
            return;
        }

        let form = self.form();
        match self.session.submit(&form) {
            Ok(id) => {
                tracing::debug!(%id, "cycle submitted from form");
                self.reset_form();
                self.focused_field = FormField::Button;
                self.set_status(format!("Started: {}", form.task.trim()));
            }
            Err(CycleError::Validation(e)) => {
                self.set_status(format!("Cannot start: {}", e));
            }
            Err(e) => {
                self.set_status(format!("Error: {}", e));
            }
        }
    }

    /// Interrupt the running cycle.
    pub fn stop_cycle(&mut self) {
        match self.session.stop_active_cycle() {
            Some(_) => self.set_status("Cycle interrupted".to_string()),
            None => self.set_status("No active cycle to stop".to_string()),
        }
    }

    pub fn on_tick(&mut self, token: TickToken) {
        if let TickOutcome::Completed(id) = self.session.on_tick(token) {
            let task = self
                .session
                .cycles()
                .iter()
                .find(|cycle| cycle.id == id)
                .map(|cycle| cycle.task.clone())
                .unwrap_or_default();
            self.set_status(format!("Cycle completed: {}", task));
        }
    }

    /// Terminal title: remaining time while running.
    pub fn window_title(&self) -> String {
        match self.session.window_title() {
            Some(remaining) => format!("{} - pomo", remaining),
            None => "pomo".to_string(),
        }
    }

    /// Hint shown when no explicit status message is set.
    pub fn get_contextual_status(&self) -> String {
        if let Some(cycle) = self.session.active_cycle() {
            return format!("Focusing on {}", cycle.task);
        }
        if !self.form().can_submit() {
            return "Name a task to start a cycle".to_string();
        }
        "Ready - press Enter to start".to_string()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use pomo_core::{CycleStatus, ManualClock, ManualScheduler};
    use time::macros::datetime;
    use time::Duration;

    pub(crate) fn test_app() -> (App<ManualClock, ManualScheduler>, ManualClock, ManualScheduler) {
        let clock = ManualClock::new(datetime!(2024-05-01 09:00 UTC));
        let scheduler = ManualScheduler::new();
        let session = Pomodoro::new(clock.clone(), scheduler.clone());
        (App::new(session, &PomoConfig::default()), clock, scheduler)
    }

    #[test]
    fn test_submit_starts_cycle_and_resets_form() {
        let (mut app, _, _) = test_app();
        app.task_input.set("Write report");

        app.submit_cycle();

        assert!(app.is_running());
        assert_eq!(app.task_input.value, "");
        assert_eq!(app.minutes_input.value, "25");
        assert_eq!(app.focused_field, FormField::Button);
        assert_eq!(app.window_title(), "25:00 - pomo");
        assert_eq!(app.status_message.as_deref(), Some("Started: Write report"));
    }

    #[test]
    fn test_submit_with_invalid_duration_shows_error() {
        let (mut app, _, scheduler) = test_app();
        app.task_input.set("Write report");
        app.minutes_input.set("3");

        app.submit_cycle();

        assert!(!app.is_running());
        assert!(!scheduler.is_scheduled());
        assert!(app.session.cycles().is_empty());
        assert!(app
            .status_message
            .as_deref()
            .is_some_and(|s| s.starts_with("Cannot start")));
        // Form keeps what the user typed
        assert_eq!(app.task_input.value, "Write report");
    }

    #[test]
    fn test_tick_completion_sets_status() {
        let (mut app, clock, scheduler) = test_app();
        app.task_input.set("Write report");
        app.minutes_input.set("5");
        app.submit_cycle();

        clock.advance(Duration::minutes(5));
        app.on_tick(scheduler.active_token().unwrap());

        assert!(!app.is_running());
        assert_eq!(app.window_title(), "pomo");
        assert_eq!(
            app.status_message.as_deref(),
            Some("Cycle completed: Write report")
        );
        assert_eq!(app.session.history().rows[0].status, CycleStatus::Completed);
    }

    #[test]
    fn test_stop_cycle_interrupts_and_is_idempotent() {
        let (mut app, _, _) = test_app();
        app.task_input.set("Write report");
        app.submit_cycle();

        app.stop_cycle();
        assert_eq!(app.status_message.as_deref(), Some("Cycle interrupted"));
        assert_eq!(
            app.session.history().rows[0].status,
            CycleStatus::Interrupted
        );

        app.stop_cycle();
        assert_eq!(
            app.status_message.as_deref(),
            Some("No active cycle to stop")
        );
    }

    #[test]
    fn test_contextual_status() {
        let (mut app, _, _) = test_app();
        assert_eq!(app.get_contextual_status(), "Name a task to start a cycle");
        app.task_input.set("Write report");
        assert_eq!(app.get_contextual_status(), "Ready - press Enter to start");
        app.submit_cycle();
        assert_eq!(app.get_contextual_status(), "Focusing on Write report");
    }
}
