use super::utils::local_hh_mm;
use super::*;
use pomo_core::HistoryRow;
use ratatui::widgets::{Cell, Row, Table};

pub fn render_history_view<C: Clock, S: Scheduler>(frame: &mut Frame, app: &mut App<C, S>, body: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Min(0),    // Table
            Constraint::Length(3), // Controls
        ])
        .split(body);

    let history = app.session.history();

    if history.is_empty() {
        let empty_msg = Paragraph::new("No cycles yet. Start one from the timer view.")
            .alignment(Alignment::Center)
            .block(boxed(" History ", Style::default().fg(Color::White)));
        frame.render_widget(empty_msg, chunks[0]);
    } else {
        let title = format!(" History ({} cycles) ", history.len());
        let block = boxed(&title, Style::default().fg(Color::White));
        let inner_area = block.inner(chunks[0]);
        frame.render_widget(block, chunks[0]);

        // One line goes to the header row
        let max_rows = (inner_area.height as usize).saturating_sub(1);
        app.clamp_history_scroll(max_rows);
        let scroll = app.history_scroll.min(history.len().saturating_sub(max_rows));
        app.history_scroll = scroll;

        let rows: Vec<Row> = history
            .rows
            .iter()
            .enumerate()
            .skip(scroll)
            .take(max_rows)
            .map(|(idx, row)| build_row(row, app.focused_history_index == Some(idx)))
            .collect();

        let header = Row::new(["Task", "Duration", "Started", "Status"]).style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
        let table = Table::new(
            rows,
            [
                Constraint::Min(20),
                Constraint::Length(12),
                Constraint::Length(32),
                Constraint::Length(12),
            ],
        )
        .header(header)
        .column_spacing(2);
        frame.render_widget(table, inner_area);
    }

    render_controls(frame, chunks[1]);
}

fn build_row(row: &HistoryRow, is_focused: bool) -> Row<'static> {
    let status_color = match row.status {
        CycleStatus::Completed => Color::Green,
        CycleStatus::Interrupted => Color::Red,
        CycleStatus::InProgress => Color::Yellow,
    };

    let started = format!("{} ago ({})", row.started_label, local_hh_mm(row.start_date));
    let cells = vec![
        Cell::from(row.task.clone()).style(Style::default().fg(Color::Cyan)),
        Cell::from(row.duration_label.clone()).style(Style::default().fg(Color::Magenta)),
        Cell::from(started).style(Style::default().fg(Color::Gray)),
        Cell::from(row.status.to_string()).style(Style::default().fg(status_color)),
    ];

    let table_row = Row::new(cells);
    if is_focused {
        table_row.style(
            Style::default()
                .bg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        table_row
    }
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let key = Style::default().fg(Color::Yellow);
    let controls = Paragraph::new(Line::from(vec![
        Span::styled("↑↓ / j/k", key),
        Span::raw(": Navigate  "),
        Span::styled("Esc / H", key),
        Span::raw(": Back to timer  "),
        Span::styled("Q", key),
        Span::raw(": Quit"),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(controls, area);
}
