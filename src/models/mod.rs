mod question;
mod state;

pub use question::Question;
pub use state::{QuizState, QuizStatus, SECONDS_PER_QUESTION};
