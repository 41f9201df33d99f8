//! The single owner of the quiz state.

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::app::AppEvent;
use crate::models::{QuizState, QuizStatus};

use super::event::Event;
use super::reducer::{transition, TransitionError};
use super::timer::{SessionId, Timer, TICK_PERIOD};

/// Holds the current [`QuizState`] and the timer of the running session.
///
/// Every state change goes through [`QuizStore::dispatch`]; the timer is
/// started when the quiz becomes active and stopped as soon as it is not.
pub struct QuizStore {
    state: QuizState,
    timer: Option<Timer>,
    events: mpsc::UnboundedSender<AppEvent>,
}

impl QuizStore {
    /// Create a store in the initial loading state. Ticks of future sessions
    /// are delivered on `events`.
    pub fn new(events: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self {
            state: QuizState::new(),
            timer: None,
            events,
        }
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    /// Session of the running timer, if any.
    pub fn session(&self) -> Option<SessionId> {
        self.timer.as_ref().map(Timer::session)
    }

    /// Apply one event. On error the state is left as it was.
    pub fn dispatch(&mut self, event: Event) -> Result<&QuizState, TransitionError> {
        let name = event.name();
        let next = transition(&self.state, event)?;
        let previous = std::mem::replace(&mut self.state, next);

        debug!(
            event = name,
            from = %previous.status,
            to = %self.state.status,
            "applied event"
        );

        self.sync_timer(previous.status);
        Ok(&self.state)
    }

    /// Apply a tick from `session`. Ticks from a stopped session are dropped
    /// and `Ok(None)` is returned.
    pub fn tick(&mut self, session: SessionId) -> Result<Option<&QuizState>, TransitionError> {
        if self.session() != Some(session) {
            debug!(%session, "dropping tick from stale session");
            return Ok(None);
        }
        self.dispatch(Event::Tick).map(Some)
    }

    fn sync_timer(&mut self, previous: QuizStatus) {
        let active = self.state.status == QuizStatus::Active;

        if active && previous != QuizStatus::Active {
            if let Some(old) = self.timer.take() {
                old.stop();
            }
            let timer = Timer::start(TICK_PERIOD, self.events.clone());
            info!(
                session = %timer.session(),
                seconds = ?self.state.seconds_remaining,
                "session started"
            );
            self.timer = Some(timer);
        } else if !active {
            if let Some(timer) = self.timer.take() {
                info!(
                    session = %timer.session(),
                    status = %self.state.status,
                    points = self.state.points,
                    highscore = self.state.highscore,
                    "session ended"
                );
                timer.stop();
            }
        }
    }
}
