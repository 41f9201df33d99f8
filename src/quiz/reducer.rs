//! Pure state transition function for the quiz.

use thiserror::Error;

use crate::models::{QuizState, QuizStatus, SECONDS_PER_QUESTION};

use super::event::Event;

/// Reasons the reducer refuses an event. All of them point at a caller bug.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TransitionError {
    #[error("event `{event}` is not valid while the quiz is {status}")]
    InvalidEvent {
        event: &'static str,
        status: QuizStatus,
    },
    #[error("the current question is already answered")]
    AlreadyAnswered,
    #[error("the current question has not been answered")]
    NotAnswered,
    #[error("cannot start a quiz without questions")]
    NoQuestions,
    #[error("option {index} is out of range for a question with {len} options")]
    OptionOutOfRange { index: usize, len: usize },
    #[error("already on the last question, finish the quiz instead")]
    PastLastQuestion,
    #[error("cannot finish before the last question")]
    NotLastQuestion,
    #[error("unknown event kind `{0}`")]
    UnknownEvent(String),
    #[error("malformed event: {0}")]
    MalformedEvent(#[source] serde_json::Error),
}

/// Compute the state that follows `state` once `event` is applied.
///
/// The input is never modified; on error it remains the current state.
pub fn transition(state: &QuizState, event: Event) -> Result<QuizState, TransitionError> {
    match event {
        Event::QuestionsLoaded(questions) => Ok(QuizState {
            questions,
            status: QuizStatus::Ready,
            seconds_remaining: None,
            ..state.clone()
        }),
        Event::LoadFailed => Ok(QuizState {
            status: QuizStatus::Error,
            seconds_remaining: None,
            ..state.clone()
        }),
        Event::Start => {
            require_status(state, QuizStatus::Ready, "start")?;
            if state.questions.is_empty() {
                return Err(TransitionError::NoQuestions);
            }
            let total = u32::try_from(state.questions.len())
                .unwrap_or(u32::MAX)
                .saturating_mul(SECONDS_PER_QUESTION);

            Ok(QuizState {
                status: QuizStatus::Active,
                index: 0,
                answer: None,
                points: 0,
                seconds_remaining: Some(total),
                ..state.clone()
            })
        }
        Event::AnswerSelected(option) => {
            let question = active_question(state, "answerSelected")?;
            if state.answer.is_some() {
                return Err(TransitionError::AlreadyAnswered);
            }
            if option >= question.options.len() {
                return Err(TransitionError::OptionOutOfRange {
                    index: option,
                    len: question.options.len(),
                });
            }
            let points = if question.is_correct(option) {
                state.points.saturating_add(question.points)
            } else {
                state.points
            };

            Ok(QuizState {
                answer: Some(option),
                points,
                ..state.clone()
            })
        }
        Event::NextQuestion => {
            active_question(state, "nextQuestion")?;
            if state.answer.is_none() {
                return Err(TransitionError::NotAnswered);
            }
            if state.is_last_question() {
                return Err(TransitionError::PastLastQuestion);
            }

            Ok(QuizState {
                index: state.index + 1,
                answer: None,
                ..state.clone()
            })
        }
        Event::Finish => {
            active_question(state, "finish")?;
            if !state.is_last_question() {
                return Err(TransitionError::NotLastQuestion);
            }
            if state.answer.is_none() {
                return Err(TransitionError::NotAnswered);
            }

            Ok(finish(state.clone()))
        }
        Event::Tick => {
            require_status(state, QuizStatus::Active, "tick")?;
            let remaining = state.seconds_remaining.unwrap_or(0).saturating_sub(1);
            let next = QuizState {
                seconds_remaining: Some(remaining),
                ..state.clone()
            };

            if remaining == 0 {
                Ok(finish(next))
            } else {
                Ok(next)
            }
        }
        Event::Restart => Ok(QuizState {
            questions: state.questions.clone(),
            status: QuizStatus::Ready,
            highscore: state.highscore,
            ..QuizState::default()
        }),
    }
}

/// Shared by `Finish` and a tick that exhausts the countdown.
fn finish(state: QuizState) -> QuizState {
    QuizState {
        status: QuizStatus::Finished,
        highscore: state.highscore.max(state.points),
        ..state
    }
}

fn require_status(
    state: &QuizState,
    expected: QuizStatus,
    event: &'static str,
) -> Result<(), TransitionError> {
    if state.status == expected {
        Ok(())
    } else {
        Err(TransitionError::InvalidEvent {
            event,
            status: state.status,
        })
    }
}

fn active_question<'a>(
    state: &'a QuizState,
    event: &'static str,
) -> Result<&'a crate::models::Question, TransitionError> {
    require_status(state, QuizStatus::Active, event)?;
    state.current_question().ok_or(TransitionError::InvalidEvent {
        event,
        status: state.status,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Question;

    fn question(correct_option: usize, points: u32) -> Question {
        Question {
            text: "Which one?".to_string(),
            options: vec!["a".into(), "b".into(), "c".into()],
            correct_option,
            points,
        }
    }

    fn ready(questions: Vec<Question>) -> QuizState {
        transition(&QuizState::new(), Event::QuestionsLoaded(questions)).unwrap()
    }

    fn apply(state: QuizState, events: impl IntoIterator<Item = Event>) -> QuizState {
        events
            .into_iter()
            .fold(state, |state, event| transition(&state, event).unwrap())
    }

    #[test]
    fn test_load_moves_to_ready() {
        let state = ready(vec![question(0, 10)]);
        assert_eq!(state.status, QuizStatus::Ready);
        assert_eq!(state.num_questions(), 1);
    }

    #[test]
    fn test_load_failed_from_any_status() {
        let active = apply(ready(vec![question(0, 10)]), [Event::Start]);
        let state = transition(&active, Event::LoadFailed).unwrap();
        assert_eq!(state.status, QuizStatus::Error);
    }

    #[test]
    fn test_leaving_active_without_finishing_clears_countdown() {
        let active = apply(ready(vec![question(0, 10)]), [Event::Start]);

        let failed = transition(&active, Event::LoadFailed).unwrap();
        assert_eq!(failed.status, QuizStatus::Error);
        assert_eq!(failed.seconds_remaining, None);

        let reloaded = transition(&active, Event::QuestionsLoaded(vec![question(1, 5)])).unwrap();
        assert_eq!(reloaded.status, QuizStatus::Ready);
        assert_eq!(reloaded.seconds_remaining, None);
    }

    #[test]
    fn test_huge_point_values_saturate() {
        let state = apply(
            ready(vec![question(0, 3_000_000_000), question(0, 3_000_000_000)]),
            [
                Event::Start,
                Event::AnswerSelected(0),
                Event::NextQuestion,
                Event::AnswerSelected(0),
                Event::Finish,
            ],
        );
        assert_eq!(state.points, u32::MAX);
        assert_eq!(state.highscore, u32::MAX);
    }

    #[test]
    fn test_start_sets_countdown() {
        let state = apply(ready(vec![question(0, 10), question(1, 5)]), [Event::Start]);
        assert_eq!(state.status, QuizStatus::Active);
        assert_eq!(state.seconds_remaining, Some(2 * SECONDS_PER_QUESTION));
        assert_eq!(state.index, 0);
        assert_eq!(state.answer, None);
    }

    #[test]
    fn test_start_requires_ready() {
        let err = transition(&QuizState::new(), Event::Start).unwrap_err();
        assert!(matches!(
            err,
            TransitionError::InvalidEvent {
                event: "start",
                status: QuizStatus::Loading
            }
        ));
    }

    #[test]
    fn test_start_without_questions() {
        let err = transition(&ready(Vec::new()), Event::Start).unwrap_err();
        assert!(matches!(err, TransitionError::NoQuestions));
    }

    #[test]
    fn test_wrong_answer_keeps_points() {
        let state = apply(
            ready(vec![question(0, 10)]),
            [Event::Start, Event::AnswerSelected(2)],
        );
        assert_eq!(state.answer, Some(2));
        assert_eq!(state.points, 0);
    }

    #[test]
    fn test_second_answer_rejected() {
        let state = apply(
            ready(vec![question(0, 10)]),
            [Event::Start, Event::AnswerSelected(0)],
        );
        let err = transition(&state, Event::AnswerSelected(0)).unwrap_err();
        assert!(matches!(err, TransitionError::AlreadyAnswered));
        assert_eq!(state.points, 10);
    }

    #[test]
    fn test_answer_out_of_range() {
        let state = apply(ready(vec![question(0, 10)]), [Event::Start]);
        let err = transition(&state, Event::AnswerSelected(3)).unwrap_err();
        assert!(matches!(
            err,
            TransitionError::OptionOutOfRange { index: 3, len: 3 }
        ));
    }

    #[test]
    fn test_next_question_resets_answer() {
        let state = apply(
            ready(vec![question(0, 10), question(1, 5)]),
            [Event::Start, Event::AnswerSelected(0), Event::NextQuestion],
        );
        assert_eq!(state.index, 1);
        assert_eq!(state.answer, None);
        assert_eq!(state.points, 10);
    }

    #[test]
    fn test_next_question_requires_answer() {
        let state = apply(ready(vec![question(0, 10), question(1, 5)]), [Event::Start]);
        let err = transition(&state, Event::NextQuestion).unwrap_err();
        assert!(matches!(err, TransitionError::NotAnswered));
    }

    #[test]
    fn test_next_question_on_last_is_rejected() {
        let state = apply(
            ready(vec![question(0, 10)]),
            [Event::Start, Event::AnswerSelected(0)],
        );
        let err = transition(&state, Event::NextQuestion).unwrap_err();
        assert!(matches!(err, TransitionError::PastLastQuestion));
    }

    #[test]
    fn test_finish_before_last_question() {
        let state = apply(
            ready(vec![question(0, 10), question(1, 5)]),
            [Event::Start, Event::AnswerSelected(0)],
        );
        let err = transition(&state, Event::Finish).unwrap_err();
        assert!(matches!(err, TransitionError::NotLastQuestion));
    }

    #[test]
    fn test_finish_requires_answer() {
        let state = apply(ready(vec![question(0, 10)]), [Event::Start]);
        let err = transition(&state, Event::Finish).unwrap_err();
        assert!(matches!(err, TransitionError::NotAnswered));
    }

    #[test]
    fn test_finish_keeps_highest_score() {
        let finished = apply(
            ready(vec![question(0, 10)]),
            [Event::Start, Event::AnswerSelected(0), Event::Finish],
        );
        assert_eq!(finished.highscore, 10);

        let again = apply(
            finished,
            [
                Event::Restart,
                Event::Start,
                Event::AnswerSelected(1),
                Event::Finish,
            ],
        );
        assert_eq!(again.points, 0);
        assert_eq!(again.highscore, 10);
    }

    #[test]
    fn test_tick_counts_down() {
        let state = apply(ready(vec![question(0, 10)]), [Event::Start, Event::Tick]);
        assert_eq!(state.seconds_remaining, Some(SECONDS_PER_QUESTION - 1));
        assert_eq!(state.status, QuizStatus::Active);
    }

    #[test]
    fn test_tick_to_zero_finishes_like_finish() {
        let mut state = apply(
            ready(vec![question(0, 10), question(0, 10)]),
            [Event::Start, Event::AnswerSelected(0)],
        );
        state.seconds_remaining = Some(1);

        let state = transition(&state, Event::Tick).unwrap();
        assert_eq!(state.status, QuizStatus::Finished);
        assert_eq!(state.seconds_remaining, Some(0));
        assert_eq!(state.highscore, 10);
    }

    #[test]
    fn test_tick_outside_active() {
        let err = transition(&ready(vec![question(0, 10)]), Event::Tick).unwrap_err();
        assert!(matches!(
            err,
            TransitionError::InvalidEvent {
                event: "tick",
                status: QuizStatus::Ready
            }
        ));
    }

    #[test]
    fn test_restart_keeps_questions_and_highscore() {
        let finished = apply(
            ready(vec![question(0, 10)]),
            [Event::Start, Event::AnswerSelected(0), Event::Finish],
        );
        let state = transition(&finished, Event::Restart).unwrap();
        assert_eq!(state.status, QuizStatus::Ready);
        assert_eq!(state.questions, finished.questions);
        assert_eq!(state.highscore, 10);
        assert_eq!(state.points, 0);
        assert_eq!(state.index, 0);
        assert_eq!(state.answer, None);
        assert_eq!(state.seconds_remaining, None);
    }

    #[test]
    fn test_error_leaves_input_untouched() {
        let state = apply(ready(vec![question(0, 10)]), [Event::Start]);
        let before = state.clone();
        let _ = transition(&state, Event::Finish);
        assert_eq!(state, before);
    }
}
