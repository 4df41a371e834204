//! Explicitly-owned state of one quiz-taking session.

use crate::data::{self, ValidationError};
use crate::grader;
use crate::models::{GradeResult, Phase, QuestionKind, QuestionSet, Selection, Selections};

/// Current question set, the user's selections and the last grade.
///
/// Loading a new set always discards the selections and the stored result.
#[derive(Debug, Default)]
pub struct Session {
    questions: Option<QuestionSet>,
    selections: Selections,
    last_result: Option<GradeResult>,
    phase: Phase,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `raw` and make it the current set.
    ///
    /// On failure the session ends up unloaded; no half-parsed set is kept.
    pub fn load(&mut self, raw: &str) -> Result<&QuestionSet, ValidationError> {
        match data::load(raw) {
            Ok(questions) => Ok(self.replace(questions)),
            Err(err) => {
                tracing::info!(error = %err, "question bank rejected");
                self.unload();
                Err(err)
            }
        }
    }

    /// Install an already-parsed set, resetting answers and results.
    pub fn replace(&mut self, questions: QuestionSet) -> &QuestionSet {
        tracing::info!(count = questions.len(), "question set loaded, answers cleared");
        self.reset_answers();
        self.phase = Phase::Loaded;
        self.questions.insert(questions)
    }

    /// Forget the current set, e.g. when its source can no longer be read.
    pub fn unload(&mut self) {
        self.questions = None;
        self.reset_answers();
        self.phase = Phase::Unloaded;
    }

    pub fn questions(&self) -> Option<&QuestionSet> {
        self.questions.as_ref()
    }

    pub fn selections(&self) -> &Selections {
        &self.selections
    }

    pub fn selection(&self, question: usize) -> Option<&Selection> {
        self.selections.get(question)
    }

    pub fn last_result(&self) -> Option<&GradeResult> {
        self.last_result.as_ref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Set the answer of a single-choice question.
    pub fn choose(&mut self, question: usize, option: usize) {
        if self.accepts(question) {
            self.selections.choose(question, option);
            self.phase = Phase::Answering;
        }
    }

    /// Tick or untick one option of a multiple-choice question.
    pub fn toggle(&mut self, question: usize, option: usize) {
        if self.accepts(question) {
            self.selections.toggle(question, option);
            self.phase = Phase::Answering;
        }
    }

    /// Choose or toggle depending on the kind of the question.
    pub fn pick(&mut self, question: usize, option: usize) {
        let Some(kind) = self.question_kind(question) else {
            tracing::debug!(question, "ignoring pick outside the loaded set");
            return;
        };
        self.selections.pick(kind, question, option);
        self.phase = Phase::Answering;
    }

    pub fn clear_selection(&mut self, question: usize) {
        if self.accepts(question) {
            self.selections.clear_question(question);
            self.phase = Phase::Answering;
        }
    }

    /// Replace every selection at once, e.g. from an answer sheet.
    pub fn set_selections(&mut self, selections: Selections) {
        if self.questions.is_some() {
            self.selections = selections;
            self.phase = Phase::Answering;
        }
    }

    /// Drop every selection and the stored result.
    pub fn clear_answers(&mut self) {
        self.reset_answers();
        if self.questions.is_some() {
            self.phase = Phase::Loaded;
        }
    }

    /// Grade the current selections and keep the result.
    ///
    /// Returns `None` when no set is loaded.
    pub fn submit(&mut self) -> Option<&GradeResult> {
        let questions = self.questions.as_ref()?;
        let result = grader::grade(questions, &self.selections);
        tracing::info!(
            total = result.total,
            max_score = result.max_score,
            anomalies = result.anomalies().count(),
            "submission graded"
        );
        self.phase = Phase::Graded;
        Some(&*self.last_result.insert(result))
    }

    fn question_kind(&self, question: usize) -> Option<QuestionKind> {
        self.questions
            .as_ref()
            .and_then(|questions| questions.get(question))
            .map(|q| q.kind)
    }

    fn accepts(&self, question: usize) -> bool {
        let in_range = self.question_kind(question).is_some();
        if !in_range {
            tracing::debug!(question, "ignoring selection outside the loaded set");
        }
        in_range
    }

    fn reset_answers(&mut self) {
        self.selections.clear();
        self.last_result = None;
    }
}
