use super::*;

impl<C: Clock, S: Scheduler> App<C, S> {
    fn history_len(&self) -> usize {
        self.session.cycles().len()
    }

    /// Move focus up in History view
    pub fn history_focus_up(&mut self) {
        let len = self.history_len();
        if len == 0 {
            return;
        }

        if let Some(idx) = self.focused_history_index {
            if idx > 0 {
                self.focused_history_index = Some(idx - 1);
            }
        } else {
            self.focused_history_index = Some(len - 1);
        }
    }

    /// Move focus down in History view
    pub fn history_focus_down(&mut self) {
        let len = self.history_len();
        if len == 0 {
            return;
        }

        if let Some(idx) = self.focused_history_index {
            if idx < len - 1 {
                self.focused_history_index = Some(idx + 1);
            }
        } else {
            self.focused_history_index = Some(0);
        }
    }

    /// Move focus by one rendered page.
    pub fn history_page(&mut self, down: bool) {
        let len = self.history_len();
        if len == 0 {
            return;
        }
        let page = self.history_view_height.max(1);
        let current = self.focused_history_index.unwrap_or(0);
        self.focused_history_index = Some(if down {
            (current + page).min(len - 1)
        } else {
            current.saturating_sub(page)
        });
    }

    /// Keep the focused row inside the visible window of `max_rows`.
    pub fn clamp_history_scroll(&mut self, max_rows: usize) {
        self.history_view_height = max_rows;
        let Some(focused) = self.focused_history_index else {
            return;
        };
        if max_rows == 0 {
            return;
        }
        if focused >= self.history_scroll + max_rows {
            self.history_scroll = focused + 1 - max_rows;
        }
        if focused < self.history_scroll {
            self.history_scroll = focused;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::test_app;
    use super::*;

    #[test]
    fn test_focus_moves_within_bounds() {
        let (mut app, _, _) = test_app();
        app.history_focus_down();
        assert_eq!(app.focused_history_index, None);

        for task in ["A", "B", "C"] {
            app.session.create_cycle(task, 5).unwrap();
            app.session.stop_active_cycle();
        }

        app.history_focus_down();
        assert_eq!(app.focused_history_index, Some(0));
        app.history_focus_down();
        app.history_focus_down();
        app.history_focus_down();
        assert_eq!(app.focused_history_index, Some(2));
        app.history_focus_up();
        assert_eq!(app.focused_history_index, Some(1));
    }

    #[test]
    fn test_scroll_follows_focus() {
        let (mut app, _, _) = test_app();
        for i in 0..10 {
            app.session.create_cycle(&format!("Task {}", i), 5).unwrap();
            app.session.stop_active_cycle();
        }

        app.focused_history_index = Some(7);
        app.clamp_history_scroll(4);
        assert_eq!(app.history_scroll, 4);

        app.focused_history_index = Some(1);
        app.clamp_history_scroll(4);
        assert_eq!(app.history_scroll, 1);
    }

    #[test]
    fn test_page_moves_by_last_rendered_height() {
        let (mut app, _, _) = test_app();
        for i in 0..10 {
            app.session.create_cycle(&format!("Task {}", i), 5).unwrap();
            app.session.stop_active_cycle();
        }
        app.clamp_history_scroll(4);

        app.history_page(true);
        assert_eq!(app.focused_history_index, Some(4));
        app.history_page(true);
        app.history_page(true);
        assert_eq!(app.focused_history_index, Some(9));
        app.history_page(false);
        assert_eq!(app.focused_history_index, Some(5));
    }
}
