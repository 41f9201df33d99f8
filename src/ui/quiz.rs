use ratatui::{
    prelude::*,
    widgets::{Gauge, Paragraph, Wrap},
};

use crate::models::{Question, QuizState};

pub fn render(frame: &mut Frame, area: Rect, state: &QuizState, cursor: usize) {
    let Some(question) = state.current_question() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_progress(frame, chunks[0], chunks[1], state);
    render_question_text(frame, chunks[3], &question.text);
    render_options(frame, chunks[4], question, state.answer, cursor);
    render_footer(frame, chunks[5], state);
}

fn render_progress(frame: &mut Frame, label_area: Rect, bar_area: Rect, state: &QuizState) {
    let halves = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).split(label_area);

    let position = Line::from(vec![
        Span::styled("Question ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            (state.index + 1).to_string(),
            Style::default().fg(Color::White).bold(),
        ),
        Span::styled(
            format!(" / {}", state.num_questions()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(position), halves[0]);

    let points = Line::from(vec![
        Span::styled(
            state.points.to_string(),
            Style::default().fg(Color::White).bold(),
        ),
        Span::styled(
            format!(" / {}", state.max_possible_points()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(points).alignment(Alignment::Right),
        halves[1],
    );

    let total = state.num_questions().max(1);
    let ratio = (state.progress() as f64 / total as f64).clamp(0.0, 1.0);
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::DarkGray))
        .ratio(ratio)
        .label("");
    frame.render_widget(gauge, bar_area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_options(
    frame: &mut Frame,
    area: Rect,
    question: &Question,
    answer: Option<usize>,
    cursor: usize,
) {
    let mut lines: Vec<Line> = Vec::with_capacity(question.options.len() * 2);

    for (index, option) in question.options.iter().enumerate() {
        let style = option_style(question, answer, cursor, index);
        let marker = match answer {
            Some(chosen) if chosen == index => ">",
            None if cursor == index => ">",
            _ => " ",
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", index + 1), style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// Before answering the cursor is highlighted; afterwards the correct option
/// is green and a wrong pick is red.
fn option_style(question: &Question, answer: Option<usize>, cursor: usize, index: usize) -> Style {
    match answer {
        None if index == cursor => Style::default().fg(Color::Cyan).bold(),
        None => Style::default().fg(Color::Gray),
        Some(_) if question.is_correct(index) => Style::default().fg(Color::Green).bold(),
        Some(chosen) if chosen == index => Style::default().fg(Color::Red).bold(),
        Some(_) => Style::default().fg(Color::DarkGray),
    }
}

fn render_footer(frame: &mut Frame, area: Rect, state: &QuizState) {
    let halves = Layout::horizontal([Constraint::Length(9), Constraint::Fill(1)]).split(area);

    let seconds = state.seconds_remaining.unwrap_or(0);
    let clock_color = if seconds <= 10 { Color::Red } else { Color::Yellow };
    let clock = Paragraph::new(format_clock(seconds)).fg(clock_color).bold();
    frame.render_widget(clock, halves[0]);

    let hint = match (state.is_answered(), state.is_last_question()) {
        (false, _) => "j/k navigate  ·  1-9 pick  ·  enter answer  ·  q quit",
        (true, false) => "enter next  ·  q quit",
        (true, true) => "enter finish  ·  q quit",
    };
    let widget = Paragraph::new(hint)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, halves[1]);
}

/// Format seconds as `mm:ss`.
fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
