use std::io;

use crate::data::{AnswerSheetError, LoadError};

/// Error type for quiz operations.
#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    #[error("Failed to load questions: {0}")]
    Load(#[from] LoadError),

    #[error("Failed to load answers: {0}")]
    Answers(#[from] AnswerSheetError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to encode report: {0}")]
    Report(#[source] serde_json::Error),
}
