//! Headless replay of an event script.
//!
//! A script holds one JSON event per line, for example:
//!
//! ```text
//! {"type":"start"}
//! {"type":"answerSelected","payload":0}
//! {"type":"finish"}
//! ```
//!
//! Ticks in a script are applied directly; no timer runs.

use std::io::BufRead;

use thiserror::Error;
use tracing::debug;

use crate::models::{Question, QuizState};
use crate::quiz::{transition, Event, TransitionError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReplayError {
    #[error("line {line}: {source}")]
    Event {
        line: usize,
        #[source]
        source: TransitionError,
    },
    #[error("failed to read script: {0}")]
    Io(#[from] std::io::Error),
}

/// Apply every event in `script` in order, starting from the initial state
/// or, when `questions` is given, from the state after loading them.
pub fn replay<R: BufRead>(
    script: R,
    questions: Option<Vec<Question>>,
) -> Result<QuizState, ReplayError> {
    let mut state = QuizState::new();

    if let Some(questions) = questions {
        state = transition(&state, Event::QuestionsLoaded(questions))
            .map_err(|source| ReplayError::Event { line: 0, source })?;
    }

    for (number, line) in script.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let number = number + 1;
        let event = Event::from_json(trimmed).map_err(|source| ReplayError::Event {
            line: number,
            source,
        })?;
        debug!(line = number, %event, "replaying");

        state = transition(&state, event).map_err(|source| ReplayError::Event {
            line: number,
            source,
        })?;
    }

    Ok(state)
}
