use serde::Serialize;

use crate::models::QuestionKind;

/// Feedback category of one option once a question has been graded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionFeedback {
    /// Correct option the user picked.
    Hit,
    /// Correct option the user left out.
    Missed,
    /// Wrong option the user picked.
    WrongPick,
    /// Wrong option left alone.
    Neutral,
}

impl OptionFeedback {
    pub fn classify(is_correct: bool, is_chosen: bool) -> Self {
        match (is_correct, is_chosen) {
            (true, true) => Self::Hit,
            (true, false) => Self::Missed,
            (false, true) => Self::WrongPick,
            (false, false) => Self::Neutral,
        }
    }

    pub fn marker(self) -> &'static str {
        match self {
            Self::Hit => "[+]",
            Self::Missed => "[*]",
            Self::WrongPick => "[x]",
            Self::Neutral => "[ ]",
        }
    }

    pub fn note(self) -> &'static str {
        match self {
            Self::Hit => "(your answer, correct)",
            Self::Missed => "(correct answer, missed)",
            Self::WrongPick => "(your answer, wrong)",
            Self::Neutral => "",
        }
    }
}

/// Inconsistency found while grading a question. The question scores 0.0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GradeAnomaly {
    /// A chosen index does not name any option.
    ChosenOutOfRange { index: usize, options: usize },
    /// The answer key names an option that does not exist.
    CorrectOutOfRange { index: usize, options: usize },
    /// A single-choice question received more than one choice.
    SeveralChoicesForSingle { chosen: usize },
}

impl std::fmt::Display for GradeAnomaly {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ChosenOutOfRange { index, options } => {
                write!(f, "chosen option {} does not exist ({} options)", index, options)
            }
            Self::CorrectOutOfRange { index, options } => {
                write!(f, "answer key names option {} but only {} exist", index, options)
            }
            Self::SeveralChoicesForSingle { chosen } => {
                write!(f, "{} options chosen for a single-choice question", chosen)
            }
        }
    }
}

/// Graded view of one question.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreDetail {
    pub id: u64,
    pub text: String,
    pub kind: QuestionKind,
    pub options: Vec<String>,
    pub explanations: Vec<String>,
    pub score: f64,
    pub chosen_indices: Vec<usize>,
    pub correct_indices: Vec<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anomaly: Option<GradeAnomaly>,
}

impl ScoreDetail {
    pub fn feedback(&self, option: usize) -> OptionFeedback {
        OptionFeedback::classify(
            self.correct_indices.contains(&option),
            self.chosen_indices.contains(&option),
        )
    }

    pub fn explanation(&self, option: usize) -> Option<&str> {
        self.explanations
            .get(option)
            .map(String::as_str)
            .filter(|text| !text.is_empty())
    }

    /// Every option with its feedback category and explanation.
    pub fn annotated_options(
        &self,
    ) -> impl Iterator<Item = (usize, &str, OptionFeedback, Option<&str>)> + '_ {
        self.options.iter().enumerate().map(move |(index, option)| {
            (
                index,
                option.as_str(),
                self.feedback(index),
                self.explanation(index),
            )
        })
    }

    pub fn is_full_marks(&self) -> bool {
        self.score >= 1.0
    }
}

/// Outcome of one submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeResult {
    pub total: f64,
    pub max_score: usize,
    pub details: Vec<ScoreDetail>,
}

impl GradeResult {
    /// Share of the maximum score in percent, 0.0 for an empty set.
    pub fn percentage(&self) -> f64 {
        if self.max_score > 0 {
            self.total / self.max_score as f64 * 100.0
        } else {
            0.0
        }
    }

    pub fn anomalies(&self) -> impl Iterator<Item = (&ScoreDetail, &GradeAnomaly)> {
        self.details
            .iter()
            .filter_map(|detail| detail.anomaly.as_ref().map(|anomaly| (detail, anomaly)))
    }
}
