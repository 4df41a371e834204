use std::fmt;

use serde::Serialize;

/// Whether a question accepts one option or any subset of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    #[default]
    Single,
    Multiple,
}

impl QuestionKind {
    /// Map the `type` label of the question bank to a kind.
    ///
    /// Anything that is not exactly `"single"` grades as a multiple-choice
    /// question.
    pub fn from_label(label: &str) -> Self {
        if label == "single" {
            Self::Single
        } else {
            Self::Multiple
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Multiple => "multiple",
        }
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Question {
    /// Display identifier. Cosmetic only, questions are addressed by position.
    pub id: u64,
    pub text: String,
    pub kind: QuestionKind,
    pub options: Vec<String>,
    pub explanations: Vec<String>,
    /// Indices into `options`. Order and repeats carry no meaning.
    pub correct_answers: Vec<usize>,
}

impl Question {
    /// Explanation text for an option, if one was given and is not blank.
    pub fn explanation(&self, option: usize) -> Option<&str> {
        self.explanations
            .get(option)
            .map(String::as_str)
            .filter(|text| !text.is_empty())
    }

    pub fn is_correct(&self, option: usize) -> bool {
        self.correct_answers.contains(&option)
    }
}

/// The ordered questions currently loaded into a session.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct QuestionSet {
    questions: Vec<Question>,
}

impl QuestionSet {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }

    pub fn as_slice(&self) -> &[Question] {
        &self.questions
    }
}

impl<'a> IntoIterator for &'a QuestionSet {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_label() {
        assert_eq!(QuestionKind::from_label("single"), QuestionKind::Single);
        assert_eq!(QuestionKind::from_label("Single"), QuestionKind::Multiple);
        assert_eq!(QuestionKind::from_label(" single "), QuestionKind::Multiple);
        assert_eq!(QuestionKind::from_label("multiple"), QuestionKind::Multiple);
        assert_eq!(QuestionKind::from_label("checkbox"), QuestionKind::Multiple);
    }

    #[test]
    fn test_blank_explanation_is_absent() {
        let question = Question {
            id: 1,
            text: "Pick one".to_string(),
            kind: QuestionKind::Single,
            options: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            explanations: vec!["because".to_string(), String::new()],
            correct_answers: vec![0],
        };

        assert_eq!(question.explanation(0), Some("because"));
        assert_eq!(question.explanation(1), None);
        assert_eq!(question.explanation(2), None);
        assert!(question.is_correct(0));
        assert!(!question.is_correct(2));
    }
}
