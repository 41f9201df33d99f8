mod loader;

pub use loader::{
    fetch_questions, load_questions_from_json, LoadError, QuestionSource, DEFAULT_QUESTIONS_URL,
};
