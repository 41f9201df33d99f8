mod quiz;
mod result;
mod status;
mod welcome;

use ratatui::{prelude::*, widgets::Block};

use crate::app::App;
use crate::models::QuizStatus;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    let state = app.state();
    match state.status {
        QuizStatus::Loading => status::render_loading(frame, area),
        QuizStatus::Error => status::render_error(frame, area),
        QuizStatus::Ready => welcome::render(frame, area, state),
        QuizStatus::Active => quiz::render(frame, area, state, app.cursor()),
        QuizStatus::Finished => result::render(frame, area, state),
    }
}
