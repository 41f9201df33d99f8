//! Configuration data model.
//!
//! Every field has a default so a missing or partial file still works.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::data::{QuestionSource, DEFAULT_QUESTIONS_URL};

/// Root application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where questions are loaded from. A file takes precedence over the URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_url")]
    pub url: String,
    #[serde(default)]
    pub questions_file: Option<PathBuf>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            questions_file: None,
        }
    }
}

impl SourceConfig {
    pub fn question_source(&self) -> QuestionSource {
        match &self.questions_file {
            Some(path) => QuestionSource::File(path.clone()),
            None => QuestionSource::Http(self.url.clone()),
        }
    }
}

fn default_url() -> String {
    DEFAULT_QUESTIONS_URL.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_level")]
    pub level: String,
    /// Log file for interactive runs. Defaults to the user cache directory.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            file: None,
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}
