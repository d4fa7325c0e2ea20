use crate::app::{App, View};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pomo_core::{Clock, Scheduler};

pub(super) fn handle_history_key<C: Clock, S: Scheduler>(key: KeyEvent, app: &mut App<C, S>) {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Down | KeyCode::Char('j') => app.history_focus_down(),
        KeyCode::Up | KeyCode::Char('k') => app.history_focus_up(),
        KeyCode::PageDown => app.history_page(true),
        KeyCode::PageUp => app.history_page(false),
        KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Tab => {
            app.navigate_to(View::Timer);
        }
        _ => {}
    }
}
