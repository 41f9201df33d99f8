//! Quiz progression: events, the reducer, the session timer and the store
//! that ties them together.

mod event;
mod reducer;
mod store;
mod timer;

pub use event::{Event, EVENT_KINDS};
pub use reducer::{transition, TransitionError};
pub use store::QuizStore;
pub use timer::{SessionId, Timer, TICK_PERIOD};
