//! Events accepted by the quiz reducer.
//!
//! Events are plain values. On the wire they use an adjacently tagged JSON
//! form, e.g. `{"type": "answerSelected", "payload": 2}`.

use serde::{Deserialize, Serialize};

use crate::models::Question;

use super::reducer::TransitionError;

/// Every event the reducer understands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum Event {
    /// The question source delivered its list.
    QuestionsLoaded(Vec<Question>),
    /// The question source failed.
    LoadFailed,
    /// Begin a session.
    Start,
    /// The player picked an option of the current question.
    AnswerSelected(usize),
    /// Advance to the following question.
    NextQuestion,
    /// End the session after the last question.
    Finish,
    /// One second elapsed on the session timer.
    Tick,
    /// Return to the start screen keeping the loaded questions.
    Restart,
}

/// Wire names of every event kind, in declaration order.
pub const EVENT_KINDS: [&str; 8] = [
    "questionsLoaded",
    "loadFailed",
    "start",
    "answerSelected",
    "nextQuestion",
    "finish",
    "tick",
    "restart",
];

impl Event {
    /// Wire name of this event.
    pub fn name(&self) -> &'static str {
        match self {
            Event::QuestionsLoaded(_) => EVENT_KINDS[0],
            Event::LoadFailed => EVENT_KINDS[1],
            Event::Start => EVENT_KINDS[2],
            Event::AnswerSelected(_) => EVENT_KINDS[3],
            Event::NextQuestion => EVENT_KINDS[4],
            Event::Finish => EVENT_KINDS[5],
            Event::Tick => EVENT_KINDS[6],
            Event::Restart => EVENT_KINDS[7],
        }
    }

    /// Decode an event from its JSON form.
    ///
    /// An unrecognised `type` yields [`TransitionError::UnknownEvent`] rather
    /// than a generic decode failure, so callers can tell a bad event kind
    /// apart from a bad payload.
    pub fn from_json(json: &str) -> Result<Self, TransitionError> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(TransitionError::MalformedEvent)?;

        let kind = value
            .get("type")
            .and_then(serde_json::Value::as_str)
            .ok_or_else(|| TransitionError::UnknownEvent(String::new()))?;

        if !EVENT_KINDS.contains(&kind) {
            return Err(TransitionError::UnknownEvent(kind.to_string()));
        }

        serde_json::from_value(value).map_err(TransitionError::MalformedEvent)
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Event::QuestionsLoaded(questions) => {
                write!(f, "{}({} questions)", self.name(), questions.len())
            }
            Event::AnswerSelected(option) => write!(f, "{}({})", self.name(), option),
            _ => f.write_str(self.name()),
        }
    }
}
