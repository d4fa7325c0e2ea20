use crate::app::{App, View};
use pomo_core::{Clock, CycleStatus, Scheduler};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, LineGauge, Paragraph},
    Frame,
};

mod history_view;
mod timer_view;
pub(super) mod utils;

pub fn render<C: Clock, S: Scheduler>(frame: &mut Frame, app: &mut App<C, S>) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(frame.area());

    render_header(frame, root[0], app);

    let body = root[1];
    match app.current_view {
        View::Timer => timer_view::render_timer_view(frame, app, body),
        View::History => history_view::render_history_view(frame, app, body),
    }
}

/// One-line header: app name, progress of the running cycle, tallies.
fn render_header<C: Clock, S: Scheduler>(frame: &mut Frame, area: Rect, app: &App<C, S>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);
    let content_row = rows[1];
    let area = Rect {
        x: content_row.x + 2,
        y: content_row.y,
        width: content_row.width.saturating_sub(4),
        height: content_row.height,
    };

    let snapshot = app.session.snapshot();
    let completed = snapshot.history.count_by_status(CycleStatus::Completed);
    let interrupted = snapshot.history.count_by_status(CycleStatus::Interrupted);

    let muted = Style::default().fg(Color::DarkGray);
    let white = Style::default().fg(Color::White);
    let tallies = Line::from(vec![
        Span::styled(" Completed:", Style::default().fg(Color::Green)),
        Span::styled(format!(" {} ", completed), white),
        Span::styled(" | ", muted),
        Span::styled(" Interrupted:", Style::default().fg(Color::Red)),
        Span::styled(format!(" {} ", interrupted), white),
    ]);
    let tallies_width = tallies.width() as u16;

    const LABEL: &str = " pomo";
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(LABEL.len() as u16 + 2),
            Constraint::Min(10),
            Constraint::Length(tallies_width),
        ])
        .split(area);

    let label = Paragraph::new(Span::styled(
        LABEL,
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(label, cols[0]);

    let ratio = snapshot
        .active_cycle
        .as_ref()
        .filter(|_| snapshot.is_running)
        .map(|cycle| {
            let target = cycle.target_seconds().max(1) as f64;
            let remaining = (snapshot.remaining_minutes * 60 + snapshot.remaining_seconds) as f64;
            ((target - remaining) / target).clamp(0.0, 1.0)
        })
        .unwrap_or(0.0);
    let gauge = LineGauge::default()
        .ratio(ratio)
        .label(snapshot.remaining_display())
        .filled_style(Style::default().fg(Color::Green))
        .unfilled_style(muted);
    frame.render_widget(gauge, cols[1]);

    frame.render_widget(Paragraph::new(tallies).alignment(Alignment::Right), cols[2]);
}

/// Bordered block in the app's look: padded, optional accent colour.
fn boxed(title: &str, border: Style) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(border)
        .padding(ratatui::widgets::Padding::horizontal(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::test_app;
    use ratatui::{backend::TestBackend, Terminal};
    use time::Duration;

    fn screen_text<C: Clock, S: Scheduler>(app: &mut App<C, S>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_timer_view_shows_form_and_countdown() {
        let (mut app, _, _) = test_app();
        app.toggle_timer_size();
        let text = screen_text(&mut app);
        assert!(text.contains("Task"));
        assert!(text.contains("minutes"));
        assert!(text.contains("00:00"));
        assert!(text.contains("Start"));
    }

    #[test]
    fn test_running_cycle_shows_remaining_time_and_stop() {
        let (mut app, clock, scheduler) = test_app();
        app.toggle_timer_size();
        app.task_input.set("Write report");
        app.submit_cycle();
        clock.advance(Duration::seconds(125));
        app.on_tick(scheduler.active_token().unwrap());

        let text = screen_text(&mut app);
        assert!(text.contains("22:55"));
        assert!(text.contains("Stop"));
        assert!(text.contains("Write report"));
    }

    #[test]
    fn test_history_view_lists_cycles_with_status() {
        let (mut app, _, _) = test_app();
        app.session.create_cycle("Write report", 25).unwrap();
        app.session.stop_active_cycle();
        app.navigate_to(View::History);

        let text = screen_text(&mut app);
        assert!(text.contains("Write report"));
        assert!(text.contains("25 minutes"));
        assert!(text.contains("Interrupted"));
    }

    #[test]
    fn test_empty_history_message() {
        let (mut app, _, _) = test_app();
        app.navigate_to(View::History);
        let text = screen_text(&mut app);
        assert!(text.contains("No cycles yet"));
    }
}
