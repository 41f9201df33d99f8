use std::io;

use crossterm::event::{Event as TerminalEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;
use tracing::{error, info, warn};

use crate::data::LoadError;
use crate::models::{Question, QuizState, QuizStatus};
use crate::quiz::{Event, QuizStore, SessionId};

/// Everything the event loop reacts to, in arrival order.
#[derive(Debug)]
pub enum AppEvent {
    /// Raw terminal input.
    Terminal(TerminalEvent),
    /// Result of the one-time question load.
    QuestionsFetched(Result<Vec<Question>, LoadError>),
    /// One second elapsed in the given session.
    Tick(SessionId),
    /// The terminal input stream ended, carrying the read error if it failed.
    InputClosed(Option<io::Error>),
}

/// Interactive front end: owns the store and translates keys into events.
pub struct App {
    store: QuizStore,
    cursor: usize,
    should_quit: bool,
    input_error: Option<io::Error>,
}

impl App {
    pub fn new(events: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self {
            store: QuizStore::new(events),
            cursor: 0,
            should_quit: false,
            input_error: None,
        }
    }

    pub fn state(&self) -> &QuizState {
        self.store.state()
    }

    /// Option currently highlighted on the question screen.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Read error that closed the input stream, if any.
    pub fn take_input_error(&mut self) -> Option<io::Error> {
        self.input_error.take()
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Terminal(TerminalEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                self.handle_key(key);
            }
            AppEvent::Terminal(_) => {}
            AppEvent::InputClosed(err) => {
                match &err {
                    Some(err) => error!(error = %err, "terminal input failed"),
                    None => info!("terminal input closed"),
                }
                self.input_error = err;
                self.should_quit = true;
            }
            AppEvent::QuestionsFetched(Ok(questions)) => {
                info!(count = questions.len(), "questions loaded");
                self.dispatch(Event::QuestionsLoaded(questions));
            }
            AppEvent::QuestionsFetched(Err(err)) => {
                error!(error = %err, "failed to load questions");
                self.dispatch(Event::LoadFailed);
            }
            AppEvent::Tick(session) => {
                if let Err(err) = self.store.tick(session) {
                    warn!(error = %err, "tick rejected");
                }
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if is_quit(key) {
            self.should_quit = true;
            return;
        }

        let key = key.code;
        let status = self.state().status;
        let event = match status {
            QuizStatus::Ready => ready_key(key),
            QuizStatus::Active => self.active_key(key),
            QuizStatus::Finished => finished_key(key),
            QuizStatus::Loading | QuizStatus::Error => None,
        };

        if let Some(event) = event {
            self.dispatch(event);
        }
    }

    fn active_key(&mut self, key: KeyCode) -> Option<Event> {
        let state = self.store.state();
        let options = state.current_question().map_or(0, |q| q.options.len());
        let answered = state.is_answered();

        match key {
            KeyCode::Up | KeyCode::Char('k') if !answered && options > 0 => {
                self.cursor = (self.cursor + options - 1) % options;
                None
            }
            KeyCode::Down | KeyCode::Char('j') if !answered && options > 0 => {
                self.cursor = (self.cursor + 1) % options;
                None
            }
            KeyCode::Char(c @ '1'..='9') if !answered => {
                let option = c as usize - '1' as usize;
                (option < options).then_some(Event::AnswerSelected(option))
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if !answered {
                    Some(Event::AnswerSelected(self.cursor))
                } else if state.is_last_question() {
                    Some(Event::Finish)
                } else {
                    Some(Event::NextQuestion)
                }
            }
            _ => None,
        }
    }

    fn dispatch(&mut self, event: Event) {
        let resets_cursor = matches!(event, Event::Start | Event::NextQuestion | Event::Restart);
        let name = event.name();

        match self.store.dispatch(event) {
            Ok(_) if resets_cursor => self.cursor = 0,
            Ok(_) => {}
            Err(err) => warn!(event = name, error = %err, "event rejected"),
        }
    }
}

fn is_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('C') => key.modifiers.contains(KeyModifiers::CONTROL),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        _ => false,
    }
}

fn ready_key(key: KeyCode) -> Option<Event> {
    match key {
        KeyCode::Enter | KeyCode::Char(' ') => Some(Event::Start),
        _ => None,
    }
}

fn finished_key(key: KeyCode) -> Option<Event> {
    match key {
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Event::Restart),
        _ => None,
    }
}
