use std::collections::BTreeSet;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::data::loader::read_text;
use crate::models::{QuestionKind, QuestionSet, Selection, Selections};

#[derive(Debug, thiserror::Error)]
pub enum AnswerSheetError {
    #[error("failed to read answer sheet {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid answer sheet: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One entry of an answer sheet: a single index or a list of them.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SheetEntry {
    One(usize),
    Many(Vec<usize>),
}

/// Turn a JSON answer sheet into selections for `questions`.
///
/// The sheet is a list parallel to the question set whose entries are
/// `null`, an option index, or a list of option indices.
pub fn selections_from_sheet(
    raw: &str,
    questions: &QuestionSet,
) -> Result<Selections, AnswerSheetError> {
    let entries: Vec<Option<SheetEntry>> = serde_json::from_str(raw)?;
    if entries.len() > questions.len() {
        tracing::warn!(
            entries = entries.len(),
            questions = questions.len(),
            "answer sheet has more entries than questions, ignoring the extra ones"
        );
    }

    let mut selections = Selections::new();
    for (position, (entry, question)) in entries.into_iter().zip(questions).enumerate() {
        let Some(entry) = entry else {
            continue;
        };

        let selection = match (question.kind, entry) {
            (QuestionKind::Single, SheetEntry::One(index)) => Selection::Single(index),
            (QuestionKind::Single, SheetEntry::Many(indices)) => match indices.len() {
                0 => continue,
                1 => Selection::Single(indices[0]),
                _ => Selection::Multiple(indices.into_iter().collect()),
            },
            (QuestionKind::Multiple, SheetEntry::One(index)) => {
                Selection::Multiple(BTreeSet::from([index]))
            }
            (QuestionKind::Multiple, SheetEntry::Many(indices)) => {
                Selection::Multiple(indices.into_iter().collect())
            }
        };
        selections.set(position, selection);
    }

    Ok(selections)
}

pub fn load_answer_sheet<P: AsRef<Path>>(
    path: P,
    questions: &QuestionSet,
) -> Result<Selections, AnswerSheetError> {
    let path = path.as_ref();
    let raw = read_text(path).map_err(|source| AnswerSheetError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    selections_from_sheet(&raw, questions)
}
