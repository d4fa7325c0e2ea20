use crate::app::{App, FormField, View};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pomo_core::{Clock, Scheduler};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_timer_key<C: Clock, S: Scheduler>(
    key: KeyEvent,
    app: &mut App<C, S>,
    action_tx: &ActionTx,
) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        // Ctrl+C quits from anywhere, even mid-typing
        KeyCode::Char('c') if ctrl => app.quit(),
        KeyCode::Char('x') if ctrl => {
            if app.is_running() {
                enqueue_action(action_tx, Action::StopCycle);
            } else {
                app.form_clear_field();
            }
        }
        KeyCode::Tab => app.focus_next_field(),
        KeyCode::BackTab => app.focus_previous_field(),
        KeyCode::Enter => handle_enter_key(app, action_tx),
        KeyCode::Esc => {
            if app.is_editing_input() {
                app.focused_field = FormField::Button;
            } else {
                app.clear_status();
            }
        }
        _ if app.is_editing_input() => handle_input_key(key, app),
        _ => handle_command_key(key, app, action_tx),
    }
}

fn handle_enter_key<C: Clock, S: Scheduler>(app: &mut App<C, S>, action_tx: &ActionTx) {
    if app.is_running() {
        enqueue_action(action_tx, Action::StopCycle);
    } else {
        enqueue_action(action_tx, Action::StartCycle);
    }
}

/// Keys while the task or duration input has focus.
fn handle_input_key<C: Clock, S: Scheduler>(key: KeyEvent, app: &mut App<C, S>) {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.form_input_char(c);
        }
        KeyCode::Backspace => app.form_backspace(),
        KeyCode::Left => app.form_move_cursor(true),
        KeyCode::Right => app.form_move_cursor(false),
        KeyCode::Home => app.form_cursor_edge(true),
        KeyCode::End => app.form_cursor_edge(false),
        KeyCode::Up => match app.focused_field {
            FormField::Task => app.cycle_task_suggestion(false),
            FormField::Minutes => app.step_minutes(true),
            FormField::Button => {}
        },
        KeyCode::Down => match app.focused_field {
            FormField::Task => app.cycle_task_suggestion(true),
            FormField::Minutes => app.step_minutes(false),
            FormField::Button => {}
        },
        _ => {}
    }
}

/// Single-letter commands, available when no input has focus.
fn handle_command_key<C: Clock, S: Scheduler>(
    key: KeyEvent,
    app: &mut App<C, S>,
    action_tx: &ActionTx,
) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('h') | KeyCode::Char('H') => app.navigate_to(View::History),
        KeyCode::Char('t') | KeyCode::Char('T') => app.toggle_timer_size(),
        KeyCode::Char(' ') => handle_enter_key(app, action_tx),
        KeyCode::Char('i') | KeyCode::Char('I') if !app.form_locked() => {
            app.focused_field = FormField::Task;
        }
        KeyCode::Down | KeyCode::Char('j') => app.focus_next_field(),
        KeyCode::Up | KeyCode::Char('k') => app.focus_previous_field(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::test_app;
    use crate::runtime::action_queue::channel;
    use crate::runtime::actions::run_action;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str<C: Clock, S: Scheduler>(app: &mut App<C, S>, tx: &ActionTx, s: &str) {
        for c in s.chars() {
            handle_timer_key(press(KeyCode::Char(c)), app, tx);
        }
    }

    #[test]
    fn test_typing_task_then_enter_starts_cycle() {
        let (mut app, _, _) = test_app();
        let (tx, mut rx) = channel();

        type_str(&mut app, &tx, "Write report");
        handle_timer_key(press(KeyCode::Enter), &mut app, &tx);
        assert_eq!(rx.try_recv().ok(), Some(Action::StartCycle));
        run_action(Action::StartCycle, &mut app);

        assert!(app.is_running());
        assert_eq!(app.session.cycles()[0].task, "Write report");
    }

    #[test]
    fn test_letters_go_to_input_not_commands() {
        let (mut app, _, _) = test_app();
        let (tx, _rx) = channel();

        type_str(&mut app, &tx, "qh");
        assert!(app.running);
        assert_eq!(app.current_view, View::Timer);
        assert_eq!(app.task_input.value, "qh");
    }

    #[test]
    fn test_commands_after_leaving_input() {
        let (mut app, _, _) = test_app();
        let (tx, _rx) = channel();

        handle_timer_key(press(KeyCode::Esc), &mut app, &tx);
        assert_eq!(app.focused_field, FormField::Button);
        handle_timer_key(press(KeyCode::Char('h')), &mut app, &tx);
        assert_eq!(app.current_view, View::History);
    }

    #[test]
    fn test_ctrl_x_stops_running_cycle() {
        let (mut app, _, scheduler) = test_app();
        let (tx, mut rx) = channel();
        app.task_input.set("Write report");
        app.submit_cycle();

        handle_timer_key(
            KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL),
            &mut app,
            &tx,
        );
        let action = rx.try_recv().unwrap();
        assert_eq!(action, Action::StopCycle);
        run_action(action, &mut app);

        assert!(!app.is_running());
        assert!(!scheduler.is_scheduled());
    }

    #[test]
    fn test_duration_arrows_step_by_five() {
        let (mut app, _, _) = test_app();
        let (tx, _rx) = channel();

        handle_timer_key(press(KeyCode::Tab), &mut app, &tx);
        assert_eq!(app.focused_field, FormField::Minutes);
        handle_timer_key(press(KeyCode::Up), &mut app, &tx);
        assert_eq!(app.minutes_input.value, "30");
        handle_timer_key(press(KeyCode::Down), &mut app, &tx);
        handle_timer_key(press(KeyCode::Down), &mut app, &tx);
        assert_eq!(app.minutes_input.value, "20");
    }
}
