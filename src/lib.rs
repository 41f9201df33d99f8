//! # timed-quiz
//!
//! A terminal quiz with a session countdown.
//!
//! Questions are fetched once from an HTTP endpoint or a JSON file, the
//! player answers them against a clock of 30 seconds per question, and a
//! results screen shows the score and the best score of the process.
//!
//! The progression rules live in [`quiz::transition`], a pure reducer over
//! [`QuizState`]. [`QuizStore`] owns the state and the session timer.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use timed_quiz::{QuestionSource, Quiz, QuizError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), QuizError> {
//!     let source = QuestionSource::Http("http://localhost:9000/questions".into());
//!     Quiz::new(source).run().await
//! }
//! ```

mod app;
pub mod config;
mod data;
pub mod logging;
mod models;
pub mod quiz;
pub mod replay;
pub mod terminal;
mod ui;

use std::io;

use crossterm::event::EventStream;
use futures_util::StreamExt;
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{debug, info};

pub use app::{App, AppEvent};
pub use data::{
    fetch_questions, load_questions_from_json, LoadError, QuestionSource, DEFAULT_QUESTIONS_URL,
};
pub use models::{Question, QuizState, QuizStatus, SECONDS_PER_QUESTION};
pub use quiz::{Event, QuizStore, TransitionError};

/// Error type for quiz operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    /// Error loading questions.
    #[error("failed to load questions: {0}")]
    Load(#[from] LoadError),
    /// Terminal IO error while the quiz runs.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A quiz that can be run in the terminal.
pub struct Quiz {
    source: QuestionSource,
}

impl Quiz {
    pub fn new(source: QuestionSource) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &QuestionSource {
        &self.source
    }

    /// Run the quiz in the terminal.
    ///
    /// This takes over the terminal, loads the questions in the background
    /// and returns when the user quits. A failed load is shown on screen, not
    /// returned as an error.
    pub async fn run(self) -> Result<(), QuizError> {
        let (tx, mut rx) = mpsc::unbounded_channel::<AppEvent>();

        let input_task = tokio::spawn(forward_terminal_events(tx.clone()));

        let load_tx = tx.clone();
        let source = self.source;
        let load_task = tokio::spawn(async move {
            info!(%source, "loading questions");
            let result = source.load().await;
            let _ = load_tx.send(AppEvent::QuestionsFetched(result));
        });

        let mut app = App::new(tx);
        let result = run_event_loop(&mut app, &mut rx).await;

        input_task.abort();
        load_task.abort();
        result
    }
}

async fn run_event_loop(
    app: &mut App,
    events: &mut mpsc::UnboundedReceiver<AppEvent>,
) -> Result<(), QuizError> {
    let mut term = terminal::init()?;

    loop {
        term.draw(|frame| ui::render(frame, app))?;

        let Some(event) = events.recv().await else {
            debug!("event channel closed");
            break;
        };
        app.handle_event(event);

        if app.should_quit() {
            break;
        }
    }

    match app.take_input_error() {
        Some(err) => Err(QuizError::Io(err)),
        None => Ok(()),
    }
}

/// Forward terminal input until the stream ends or fails, then report why.
async fn forward_terminal_events(events: mpsc::UnboundedSender<AppEvent>) {
    let mut reader = EventStream::new();
    let closed = loop {
        match reader.next().await {
            Some(Ok(event)) => {
                if events.send(AppEvent::Terminal(event)).is_err() {
                    return;
                }
            }
            Some(Err(err)) => break Some(err),
            None => break None,
        }
    };
    let _ = events.send(AppEvent::InputClosed(closed));
}
