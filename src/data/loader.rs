use std::fs;
use std::path::{Path, PathBuf};

use reqwest::Client;
use thiserror::Error;

use crate::models::Question;

/// Endpoint the questions are served from unless configured otherwise.
pub const DEFAULT_QUESTIONS_URL: &str = "http://localhost:9000/questions";

/// Errors raised while obtaining the question list.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("question server answered with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Where the question list comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionSource {
    /// `GET` a JSON array from this URL.
    Http(String),
    /// Read a JSON array from a local file.
    File(PathBuf),
}

impl Default for QuestionSource {
    fn default() -> Self {
        Self::Http(DEFAULT_QUESTIONS_URL.to_string())
    }
}

impl std::fmt::Display for QuestionSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuestionSource::Http(url) => f.write_str(url),
            QuestionSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl QuestionSource {
    /// Fetch the question list once. There is no retry.
    pub async fn load(&self) -> Result<Vec<Question>, LoadError> {
        match self {
            QuestionSource::Http(url) => fetch_questions(&Client::new(), url).await,
            QuestionSource::File(path) => load_questions_from_json(path),
        }
    }
}

pub async fn fetch_questions(client: &Client, url: &str) -> Result<Vec<Question>, LoadError> {
    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        return Err(LoadError::HttpStatus(response.status()));
    }

    let questions: Vec<Question> = response.json().await?;
    Ok(questions)
}

pub fn load_questions_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Question>, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&json_content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
