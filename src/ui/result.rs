use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::models::QuizState;

pub fn render(frame: &mut Frame, area: Rect, state: &QuizState) {
    let percentage = state.percentage();
    let grade = Grade::from_percentage(percentage);

    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(10),
        Constraint::Length(2),
        Constraint::Fill(1),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[1], state, percentage, grade);
    render_controls(frame, chunks[2]);
}

/// Verdict shown above the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Grade {
    Perfect,
    Great,
    NotBad,
    KeepPractising,
    NoPoints,
}

impl Grade {
    fn from_percentage(percentage: f64) -> Self {
        if percentage >= 100.0 {
            Grade::Perfect
        } else if percentage >= 80.0 {
            Grade::Great
        } else if percentage >= 50.0 {
            Grade::NotBad
        } else if percentage > 0.0 {
            Grade::KeepPractising
        } else {
            Grade::NoPoints
        }
    }

    fn label(self) -> &'static str {
        match self {
            Grade::Perfect => "PERFECT",
            Grade::Great => "GREAT",
            Grade::NotBad => "NOT BAD",
            Grade::KeepPractising => "KEEP PRACTISING",
            Grade::NoPoints => "NO POINTS",
        }
    }

    fn color(self) -> Color {
        match self {
            Grade::Perfect => Color::Green,
            Grade::Great => Color::Cyan,
            Grade::NotBad => Color::Yellow,
            Grade::KeepPractising | Grade::NoPoints => Color::Red,
        }
    }
}

fn render_score_summary(
    frame: &mut Frame,
    area: Rect,
    state: &QuizState,
    percentage: f64,
    grade: Grade,
) {
    let timed_out = state.seconds_remaining == Some(0);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            grade.label(),
            Style::default().fg(grade.color()).bold(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("You scored "),
            Span::styled(
                state.points.to_string(),
                Style::default().fg(grade.color()).bold(),
            ),
            Span::raw(format!(
                " out of {} ({:.0}%)",
                state.max_possible_points(),
                percentage.ceil()
            )),
        ]),
        Line::from(""),
        Line::from(
            format!("(Highscore: {} points)", state.highscore).fg(Color::DarkGray),
        ),
        Line::from(if timed_out {
            "Time's up".fg(Color::Red)
        } else {
            "".fg(Color::Reset)
        }),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("r restart  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_boundaries() {
        assert_eq!(Grade::from_percentage(100.0), Grade::Perfect);
        assert_eq!(Grade::from_percentage(80.0), Grade::Great);
        assert_eq!(Grade::from_percentage(79.9), Grade::NotBad);
        assert_eq!(Grade::from_percentage(50.0), Grade::NotBad);
        assert_eq!(Grade::from_percentage(10.0), Grade::KeepPractising);
        assert_eq!(Grade::from_percentage(0.0), Grade::NoPoints);
    }
}
