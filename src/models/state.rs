use serde::Serialize;

use super::Question;

/// Seconds granted per question when a session starts.
pub const SECONDS_PER_QUESTION: u32 = 30;

/// Top-level phase of the quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizStatus {
    /// Waiting for the question source.
    Loading,
    /// The question source failed.
    Error,
    /// Questions loaded, waiting for the player to start.
    Ready,
    /// A session is running and the timer is counting down.
    Active,
    /// The session ended by finishing or running out of time.
    Finished,
}

impl std::fmt::Display for QuizStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            QuizStatus::Loading => "loading",
            QuizStatus::Error => "error",
            QuizStatus::Ready => "ready",
            QuizStatus::Active => "active",
            QuizStatus::Finished => "finished",
        };
        f.write_str(name)
    }
}

/// Complete quiz state. Only the reducer produces new values of this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizState {
    pub questions: Vec<Question>,
    pub status: QuizStatus,
    /// Index of the current question; meaningful only while active.
    pub index: usize,
    /// Option chosen for the current question, `None` until answered.
    pub answer: Option<usize>,
    pub points: u32,
    pub highscore: u32,
    /// Countdown for the running session; `Some` while active, kept as the final
    /// value once finished, `None` in every other status.
    pub seconds_remaining: Option<u32>,
}

impl Default for QuizState {
    fn default() -> Self {
        Self {
            questions: Vec::new(),
            status: QuizStatus::Loading,
            index: 0,
            answer: None,
            points: 0,
            highscore: 0,
            seconds_remaining: None,
        }
    }
}

impl QuizState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn num_questions(&self) -> usize {
        self.questions.len()
    }

    /// Sum of the point values of every loaded question.
    pub fn max_possible_points(&self) -> u32 {
        self.questions
            .iter()
            .map(|q| q.points)
            .fold(0u32, u32::saturating_add)
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.index)
    }

    pub fn is_answered(&self) -> bool {
        self.answer.is_some()
    }

    pub fn is_last_question(&self) -> bool {
        self.index + 1 == self.questions.len()
    }

    /// Number of questions already dealt with, counting the current one once answered.
    pub fn progress(&self) -> usize {
        self.index + usize::from(self.answer.is_some())
    }

    pub fn percentage(&self) -> f64 {
        let max = self.max_possible_points();
        if max > 0 {
            f64::from(self.points) / f64::from(max) * 100.0
        } else {
            0.0
        }
    }
}
