use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use timed_quiz::config::{self, AppConfig};
use timed_quiz::logging::{self, LogTarget};
use timed_quiz::{load_questions_from_json, replay, QuestionSource, Quiz};
use tracing::info;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the questions from instead of the question server
    /// (`questions.json` in the repository is a ready-made sample)
    #[arg(short, long, global = true)]
    questions: Option<PathBuf>,

    /// URL of the question server
    #[arg(short, long)]
    url: Option<String>,

    /// Config file (defaults to the user config directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Apply a JSON-lines event script without a terminal and print the final state
    Replay {
        /// Script with one JSON event per line
        script: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let cfg = config::load_config(args.config.as_deref())?;

    match args.command {
        Some(Command::Replay { ref script }) => run_replay(&args, &cfg, script),
        None => run_interactive(&args, &cfg).await,
    }
}

async fn run_interactive(args: &Args, cfg: &AppConfig) -> Result<()> {
    let log_file = cfg
        .logging
        .file
        .clone()
        .unwrap_or_else(logging::default_log_file);
    logging::init_logging(&cfg.logging.level, args.verbose, &LogTarget::File(log_file.clone()))
        .with_context(|| format!("Failed to open log file {}", log_file.display()))?;

    let source = question_source(args, cfg);
    let quiz = Quiz::new(source);
    info!(source = %quiz.source(), "starting quiz");

    quiz.run().await.context("Error running quiz")?;
    Ok(())
}

fn run_replay(args: &Args, cfg: &AppConfig, script: &Path) -> Result<()> {
    logging::init_logging(&cfg.logging.level, args.verbose, &LogTarget::Stderr)?;

    let questions = args
        .questions
        .as_ref()
        .or(cfg.source.questions_file.as_ref())
        .map(load_questions_from_json)
        .transpose()?;

    let file = File::open(script)
        .with_context(|| format!("Failed to open script {}", script.display()))?;
    let state = replay::replay(BufReader::new(file), questions)?;

    println!("{}", serde_json::to_string_pretty(&state)?);
    Ok(())
}

/// Command line flags win over the config file.
fn question_source(args: &Args, cfg: &AppConfig) -> QuestionSource {
    if let Some(path) = &args.questions {
        QuestionSource::File(path.clone())
    } else if let Some(url) = &args.url {
        QuestionSource::Http(url.clone())
    } else {
        cfg.source.question_source()
    }
}
