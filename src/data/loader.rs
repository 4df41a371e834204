use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;

use crate::models::{Question, QuestionKind, QuestionSet};

/// Fields every question object must carry.
const REQUIRED_FIELDS: [&str; 3] = ["question", "options", "correct_answers"];

/// Path that stands for standard input.
pub const STDIN_PATH: &str = "-";

/// Why a question bank was rejected. Loading is all-or-nothing.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid JSON: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("the question bank must be a JSON list of questions")]
    NotAList,

    #[error("question #{} is not a JSON object", .index + 1)]
    NotAnObject { index: usize },

    #[error("question #{} is missing the '{field}' field", .index + 1)]
    MissingField { field: &'static str, index: usize },

    #[error("question #{} has an invalid field: {source}", .index + 1)]
    InvalidField {
        index: usize,
        source: serde_json::Error,
    },
}

/// Failure to produce a question set from a file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

#[derive(Deserialize)]
struct RawQuestion {
    id: Option<u64>,
    question: String,
    #[serde(rename = "type")]
    kind: Option<String>,
    options: Vec<String>,
    explanations: Option<Vec<String>>,
    correct_answers: Vec<usize>,
}

impl RawQuestion {
    fn into_question(self, position: usize) -> Question {
        let kind = match self.kind.as_deref() {
            None => QuestionKind::Single,
            Some(label) => {
                let kind = QuestionKind::from_label(label);
                if kind == QuestionKind::Multiple && label != "multiple" {
                    tracing::warn!(
                        question = position + 1,
                        label,
                        "unknown question type, grading as multiple choice"
                    );
                }
                kind
            }
        };

        let mut correct_answers = self.correct_answers;
        correct_answers.sort_unstable();
        correct_answers.dedup();

        Question {
            id: self.id.unwrap_or(position as u64 + 1),
            text: self.question,
            kind,
            options: self.options,
            explanations: self.explanations.unwrap_or_default(),
            correct_answers,
        }
    }
}

/// Parse and validate a question bank.
///
/// Only the JSON shape is checked here. Answer keys pointing past the option
/// list are accepted and flagged when the set is graded.
pub fn load(raw: &str) -> Result<QuestionSet, ValidationError> {
    let document: Value = serde_json::from_str(raw).map_err(ValidationError::Parse)?;
    let Value::Array(items) = document else {
        return Err(ValidationError::NotAList);
    };

    let mut questions = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let Some(object) = item.as_object() else {
            return Err(ValidationError::NotAnObject { index });
        };

        if let Some(field) = REQUIRED_FIELDS
            .into_iter()
            .find(|field| !object.contains_key(*field))
        {
            return Err(ValidationError::MissingField { field, index });
        }

        let raw_question: RawQuestion = serde_json::from_value(item)
            .map_err(|source| ValidationError::InvalidField { index, source })?;
        if raw_question.options.is_empty() {
            return Err(ValidationError::InvalidField {
                index,
                source: serde::de::Error::custom("`options` must list at least one option"),
            });
        }
        questions.push(raw_question.into_question(index));
    }

    if questions.is_empty() {
        tracing::warn!("question bank is empty");
    }

    Ok(QuestionSet::new(questions))
}

/// Read raw text from a file, or from standard input when the path is `-`.
pub(crate) fn read_text(path: &Path) -> io::Result<String> {
    if path == Path::new(STDIN_PATH) {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        fs::read_to_string(path)
    }
}

pub fn read_source<P: AsRef<Path>>(path: P) -> Result<String, LoadError> {
    let path = path.as_ref();
    read_text(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_questions_from_json<P: AsRef<Path>>(path: P) -> Result<QuestionSet, LoadError> {
    let path = path.as_ref();
    let raw = read_source(path)?;
    let questions = load(&raw)?;
    tracing::info!(path = %path.display(), count = questions.len(), "loaded question bank");
    Ok(questions)
}
