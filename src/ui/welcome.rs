use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::models::{QuizState, SECONDS_PER_QUESTION};

pub fn render(frame: &mut Frame, area: Rect, state: &QuizState) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(10),
        Constraint::Fill(1),
    ])
    .split(area);

    let num_questions = state.num_questions();
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "TIMED QUIZ",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(
            format!("{} questions to test your knowledge", num_questions).fg(Color::Gray),
        ),
        Line::from(
            format!(
                "{} seconds per question · {} points to win",
                SECONDS_PER_QUESTION,
                state.max_possible_points()
            )
            .fg(Color::DarkGray),
        ),
        Line::from(""),
        Line::from(Span::styled(
            "ENTER",
            Style::default().fg(Color::Green).bold(),
        )),
        Line::from("to start".fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );

    frame.render_widget(widget, chunks[1]);
}
