//! Screens shown before any question is available.

use ratatui::{prelude::*, widgets::Paragraph};

pub fn render_loading(frame: &mut Frame, area: Rect) {
    render_centered(
        frame,
        area,
        Span::styled("Loading questions...", Style::default().fg(Color::Yellow)),
    );
}

pub fn render_error(frame: &mut Frame, area: Rect) {
    render_centered(
        frame,
        area,
        Span::styled(
            "There was an error fetching questions.",
            Style::default().fg(Color::Red).bold(),
        ),
    );
}

fn render_centered(frame: &mut Frame, area: Rect, message: Span) {
    let chunks = Layout::vertical([
        Constraint::Percentage(40),
        Constraint::Length(7),
        Constraint::Percentage(40),
    ])
    .split(area);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "TIMED QUIZ",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(message),
        Line::from(""),
        Line::from("q to quit".fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center);
    frame.render_widget(widget, chunks[1]);
}
