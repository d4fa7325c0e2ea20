use super::*;
use pomo_core::{CycleForm, MAX_MINUTES, MIN_MINUTES};

impl<C: Clock, S: Scheduler> App<C, S> {
    /// Current form contents as raw input.
    pub fn form(&self) -> CycleForm {
        CycleForm::new(
            self.task_input.value.clone(),
            self.minutes_input.value.clone(),
        )
    }

    /// Inputs are locked while a cycle runs.
    pub fn form_locked(&self) -> bool {
        self.is_running()
    }

    pub fn can_submit(&self) -> bool {
        !self.form_locked() && self.form().can_submit()
    }

    pub fn reset_form(&mut self) {
        self.task_input.clear();
        self.minutes_input.set(&self.default_minutes.to_string());
        self.suggestion_index = None;
    }

    pub fn is_editing_input(&self) -> bool {
        !self.form_locked() && self.focused_field != FormField::Button
    }

    pub fn focus_next_field(&mut self) {
        if self.form_locked() {
            self.focused_field = FormField::Button;
            return;
        }
        self.focused_field = match self.focused_field {
            FormField::Task => FormField::Minutes,
            FormField::Minutes => FormField::Button,
            FormField::Button => FormField::Task,
        };
    }

    pub fn focus_previous_field(&mut self) {
        if self.form_locked() {
            self.focused_field = FormField::Button;
            return;
        }
        self.focused_field = match self.focused_field {
            FormField::Task => FormField::Button,
            FormField::Minutes => FormField::Task,
            FormField::Button => FormField::Minutes,
        };
    }

    /// Type a character into the focused input. The duration field only
    /// takes digits.
    pub fn form_input_char(&mut self, c: char) {
        if self.form_locked() {
            return;
        }
        match self.focused_field {
            FormField::Task => {
                self.task_input.insert(c);
                self.suggestion_index = None;
            }
            FormField::Minutes if c.is_ascii_digit() && self.minutes_input.value.len() < 3 => {
                self.minutes_input.insert(c);
            }
            _ => {}
        }
    }

    pub fn form_backspace(&mut self) {
        if self.form_locked() {
            return;
        }
        match self.focused_field {
            FormField::Task => {
                self.task_input.backspace();
                self.suggestion_index = None;
            }
            FormField::Minutes => self.minutes_input.backspace(),
            FormField::Button => {}
        }
    }

    pub fn form_clear_field(&mut self) {
        if self.form_locked() {
            return;
        }
        match self.focused_field {
            FormField::Task => {
                self.task_input.clear();
                self.suggestion_index = None;
            }
            FormField::Minutes => self.minutes_input.clear(),
            FormField::Button => {}
        }
    }

    pub fn form_move_cursor(&mut self, left: bool) {
        let input = match self.focused_field {
            FormField::Task => &mut self.task_input,
            FormField::Minutes => &mut self.minutes_input,
            FormField::Button => return,
        };
        if left {
            input.move_left();
        } else {
            input.move_right();
        }
    }

    pub fn form_cursor_edge(&mut self, start: bool) {
        let input = match self.focused_field {
            FormField::Task => &mut self.task_input,
            FormField::Minutes => &mut self.minutes_input,
            FormField::Button => return,
        };
        if start {
            input.home();
        } else {
            input.end();
        }
    }

    /// Step the duration by `minutes_step`, snapping into `[5, 60]`.
    /// Unparseable input restarts from the default.
    pub fn step_minutes(&mut self, up: bool) {
        if self.form_locked() {
            return;
        }
        let current = self
            .minutes_input
            .value
            .trim()
            .parse::<u32>()
            .unwrap_or(self.default_minutes);
        let next = if up {
            current.saturating_add(self.minutes_step)
        } else {
            current.saturating_sub(self.minutes_step)
        };
        self.minutes_input
            .set(&next.clamp(MIN_MINUTES, MAX_MINUTES).to_string());
    }

    /// Fill the task field with the next (or previous) configured suggestion.
    pub fn cycle_task_suggestion(&mut self, forward: bool) {
        if self.form_locked() || self.task_suggestions.is_empty() {
            return;
        }
        let len = self.task_suggestions.len();
        let next = match (self.suggestion_index, forward) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
        };
        self.suggestion_index = Some(next);
        let suggestion = self.task_suggestions[next].clone();
        self.task_input.set(&suggestion);
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::test_app;
    use super::*;

    #[test]
    fn test_minutes_field_accepts_digits_only() {
        let (mut app, _, _) = test_app();
        app.focused_field = FormField::Minutes;
        app.minutes_input.clear();

        for c in ['4', 'x', '0', '-'] {
            app.form_input_char(c);
        }
        assert_eq!(app.minutes_input.value, "40");
    }

    #[test]
    fn test_step_minutes_clamps_to_bounds() {
        let (mut app, _, _) = test_app();
        app.minutes_input.set("55");
        app.step_minutes(true);
        assert_eq!(app.minutes_input.value, "60");
        app.step_minutes(true);
        assert_eq!(app.minutes_input.value, "60");

        app.minutes_input.set("7");
        app.step_minutes(false);
        assert_eq!(app.minutes_input.value, "5");

        app.minutes_input.set("abc");
        app.step_minutes(true);
        assert_eq!(app.minutes_input.value, "30");
    }

    #[test]
    fn test_suggestions_wrap_around() {
        let (mut app, _, _) = test_app();
        app.task_suggestions = vec!["A".to_string(), "B".to_string()];

        app.cycle_task_suggestion(true);
        assert_eq!(app.task_input.value, "A");
        app.cycle_task_suggestion(true);
        assert_eq!(app.task_input.value, "B");
        app.cycle_task_suggestion(true);
        assert_eq!(app.task_input.value, "A");
        app.cycle_task_suggestion(false);
        assert_eq!(app.task_input.value, "B");
    }

    #[test]
    fn test_form_is_locked_while_running() {
        let (mut app, _, _) = test_app();
        app.task_input.set("Write report");
        app.submit_cycle();
        assert!(app.form_locked());
        assert!(!app.can_submit());

        app.focused_field = FormField::Task;
        app.form_input_char('x');
        app.step_minutes(true);
        assert_eq!(app.task_input.value, "");
        assert_eq!(app.minutes_input.value, "25");

        app.focus_next_field();
        assert_eq!(app.focused_field, FormField::Button);
        assert!(!app.is_editing_input());
    }

    #[test]
    fn test_focus_cycles_through_fields() {
        let (mut app, _, _) = test_app();
        assert_eq!(app.focused_field, FormField::Task);
        app.focus_next_field();
        assert_eq!(app.focused_field, FormField::Minutes);
        app.focus_next_field();
        assert_eq!(app.focused_field, FormField::Button);
        app.focus_next_field();
        assert_eq!(app.focused_field, FormField::Task);
        app.focus_previous_field();
        assert_eq!(app.focused_field, FormField::Button);
    }
}
