use super::utils::local_hh_mm;
use super::*;
use crate::app::{FormField, TextInput, TimerSize};

pub fn render_timer_view<C: Clock, S: Scheduler>(frame: &mut Frame, app: &mut App<C, S>, body: Rect) {
    let timer_height = match app.timer_size {
        TimerSize::Normal => 3,
        TimerSize::Large => 11,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(3),            // Form
            Constraint::Length(timer_height), // Countdown
            Constraint::Min(4),               // Current cycle
            Constraint::Length(3),            // Status
            Constraint::Length(4),            // Controls
        ])
        .split(body);

    render_form(frame, chunks[0], app);
    render_countdown(frame, chunks[1], app);
    render_current_cycle(frame, chunks[2], app);
    render_status(frame, chunks[3], app);
    render_controls(frame, chunks[4]);
}

fn render_form<C: Clock, S: Scheduler>(frame: &mut Frame, area: Rect, app: &App<C, S>) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(20),
            Constraint::Length(18),
            Constraint::Length(12),
        ])
        .split(area);

    let locked = app.form_locked();

    let task_focused = app.is_editing_input() && app.focused_field == FormField::Task;
    let task_line = if task_focused {
        input_with_cursor(&app.task_input, "")
    } else if app.task_input.value.is_empty() {
        Line::from(Span::styled(
            "What are you working on?",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(app.task_input.value.clone())
    };
    let task = Paragraph::new(task_line)
        .style(Style::default().fg(text_color(locked)))
        .block(boxed(" Task ", field_border(task_focused, locked)));
    frame.render_widget(task, cols[0]);

    let minutes_focused = app.is_editing_input() && app.focused_field == FormField::Minutes;
    let minutes_line = if minutes_focused {
        input_with_cursor(&app.minutes_input, " minutes")
    } else {
        Line::from(format!("{} minutes", app.minutes_input.value))
    };
    let minutes = Paragraph::new(minutes_line)
        .style(Style::default().fg(text_color(locked)))
        .block(boxed(" Duration ", field_border(minutes_focused, locked)));
    frame.render_widget(minutes, cols[1]);

    let button_focused = app.focused_field == FormField::Button;
    let (label, color) = if app.is_running() {
        ("Stop", Color::Red)
    } else if app.can_submit() {
        ("Start", Color::Green)
    } else {
        ("Start", Color::DarkGray)
    };
    let mut label_style = Style::default().fg(color);
    if button_focused {
        label_style = label_style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
    }
    let button = Paragraph::new(Span::styled(format!(" {} ", label), label_style))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(if button_focused {
                    Style::default().fg(Color::Magenta)
                } else {
                    Style::default().fg(color)
                }),
        );
    frame.render_widget(button, cols[2]);
}

fn field_border(focused: bool, locked: bool) -> Style {
    if focused {
        Style::default().fg(Color::Magenta)
    } else if locked {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    }
}

fn text_color(locked: bool) -> Color {
    if locked {
        Color::DarkGray
    } else {
        Color::White
    }
}

/// Input value with a reversed block at the cursor.
fn input_with_cursor(input: &TextInput, suffix: &'static str) -> Line<'static> {
    let (before, after) = input.split_at_cursor();
    let mut rest = after.chars();
    let under_cursor = rest.next().map(String::from).unwrap_or_else(|| " ".to_string());
    Line::from(vec![
        Span::raw(before.to_string()),
        Span::styled(
            under_cursor,
            Style::default().add_modifier(Modifier::REVERSED),
        ),
        Span::raw(rest.as_str().to_string()),
        Span::styled(suffix, Style::default().fg(Color::DarkGray)),
    ])
}

fn render_countdown<C: Clock, S: Scheduler>(frame: &mut Frame, area: Rect, app: &App<C, S>) {
    let is_running = app.is_running();
    let remaining = app.session.remaining().to_string();
    let border_style = if is_running {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };

    match app.timer_size {
        TimerSize::Normal => {
            let text = if is_running {
                format!("{} ⏵ (running)", remaining)
            } else {
                format!("{} (idle)", remaining)
            };
            let timer = Paragraph::new(text)
                .style(Style::default().fg(Color::White))
                .block(boxed(" Countdown ", border_style));
            frame.render_widget(timer, area);
        }
        TimerSize::Large => {
            let mut lines = vec![Line::from("")];
            lines.extend(render_large_time(&remaining));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                if is_running { "⏵ Running" } else { "Idle" },
                Style::default().fg(Color::White),
            )));

            let timer = Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(boxed(" Countdown ", border_style));
            frame.render_widget(timer, area);
        }
    }
}

fn render_current_cycle<C: Clock, S: Scheduler>(frame: &mut Frame, area: Rect, app: &App<C, S>) {
    let label = Style::default().fg(Color::Yellow);
    let lines = match app.session.active_cycle() {
        Some(cycle) => vec![
            Line::from(vec![
                Span::styled("Task: ", label),
                Span::styled(cycle.task.clone(), Style::default().fg(Color::Cyan)),
            ]),
            Line::from(vec![
                Span::styled("Started: ", label),
                Span::raw(local_hh_mm(cycle.start_date)),
                Span::styled("  Length: ", label),
                Span::raw(format!("{} minutes", cycle.minutes_amount)),
            ]),
        ],
        None => vec![Line::from(Span::styled(
            "No cycle running",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    let widget = Paragraph::new(lines).block(boxed(" Current ", Style::default()));
    frame.render_widget(widget, area);
}

pub fn render_status<C: Clock, S: Scheduler>(frame: &mut Frame, area: Rect, app: &App<C, S>) {
    let contextual_status = app.get_contextual_status();
    let status_text = app.status_message.as_deref().unwrap_or(&contextual_status);

    let status_lower = status_text.to_lowercase();
    let is_error = status_lower.contains("error")
        || status_lower.contains("cannot")
        || status_lower.contains("already running")
        || status_lower.contains("no active cycle");
    let is_warning = status_lower.contains("interrupted");
    let is_success = status_lower.contains("started") || status_lower.contains("completed");

    let color = if is_error {
        Color::Red
    } else if is_warning {
        Color::Yellow
    } else if is_success {
        Color::Green
    } else {
        Color::White
    };

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(color))
        .block(boxed(" Status ", Style::default().fg(color)));
    frame.render_widget(status, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let key = Style::default().fg(Color::Yellow);
    let line1 = vec![
        Span::styled("Enter", key),
        Span::raw(": Start/Stop  "),
        Span::styled("Ctrl+X", key),
        Span::raw(": Stop / Clear  "),
        Span::styled("Tab", key),
        Span::raw(": Next field  "),
        Span::styled("↑↓", key),
        Span::raw(": Suggest / Step"),
    ];
    let line2 = vec![
        Span::styled("Esc", key),
        Span::raw(": Exit edit  "),
        Span::styled("Space", key),
        Span::raw(": Start/Stop  "),
        Span::styled("H", key),
        Span::raw(": History  "),
        Span::styled("T", key),
        Span::raw(": Toggle timer size  "),
        Span::styled("Q", key),
        Span::raw(": Quit"),
    ];

    let controls = Paragraph::new(vec![Line::from(line1), Line::from(line2)])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" Controls ", Style::default().fg(Color::DarkGray)))
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(controls, area);
}

const DIGIT_ROWS: usize = 5;

/// Block glyphs for 0-9, one string per row.
#[rustfmt::skip]
const DIGITS: [[&str; DIGIT_ROWS]; 10] = [
    ["█████", "██ ██", "██ ██", "██ ██", "█████"],
    ["   ██", "   ██", "   ██", "   ██", "   ██"],
    ["█████", "   ██", "█████", "██   ", "█████"],
    ["█████", "   ██", "█████", "   ██", "█████"],
    ["██ ██", "██ ██", "█████", "   ██", "   ██"],
    ["█████", "██   ", "█████", "   ██", "█████"],
    ["█████", "██   ", "█████", "██ ██", "█████"],
    ["█████", "   ██", "   ██", "   ██", "   ██"],
    ["█████", "██ ██", "█████", "██ ██", "█████"],
    ["█████", "██ ██", "█████", "   ██", "█████"],
];

const COLON: [&str; DIGIT_ROWS] = ["     ", " ██  ", "     ", " ██  ", "     "];

/// Render an `MM:SS` string as large block digits.
fn render_large_time(time_str: &str) -> Vec<Line<'static>> {
    let mut rows = vec![String::new(); DIGIT_ROWS];

    for ch in time_str.chars() {
        let glyph = match ch {
            ':' => &COLON,
            _ => match ch.to_digit(10) {
                Some(d) => &DIGITS[d as usize],
                None => continue,
            },
        };
        for (row, part) in rows.iter_mut().zip(glyph) {
            row.push_str(part);
            row.push(' ');
        }
    }

    rows.into_iter()
        .map(|row| {
            Line::from(Span::styled(
                row,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ))
        })
        .collect()
}
