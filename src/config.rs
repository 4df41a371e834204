use std::path::PathBuf;

use clap::Parser;

/// Command line and environment configuration.
#[derive(Parser, Debug, Clone)]
#[command(version, about = "Answer a JSON question bank and get it graded", long_about = None)]
pub struct Config {
    /// JSON file to load the questions from (`-` reads standard input)
    #[arg(short, long, env = "QUIZ_QUESTIONS")]
    pub questions: PathBuf,

    /// Grade this JSON answer sheet and print a report instead of starting the UI
    #[arg(short, long)]
    pub answers: Option<PathBuf>,

    /// Print the grade as JSON (with --answers)
    #[arg(long, requires = "answers")]
    pub json: bool,

    /// Append log output to this file
    #[arg(long, env = "QUIZ_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Whether the run grades an answer sheet rather than opening the UI.
    pub fn is_batch(&self) -> bool {
        self.answers.is_some()
    }
}
