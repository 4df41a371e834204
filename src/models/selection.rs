use std::collections::{BTreeMap, BTreeSet};

use crate::models::QuestionKind;

/// What the user picked for one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The one option chosen for a single-choice question.
    Single(usize),
    /// Every ticked option of a multiple-choice question, possibly none.
    Multiple(BTreeSet<usize>),
}

impl Selection {
    /// Chosen option indices in ascending order.
    pub fn indices(&self) -> Vec<usize> {
        match self {
            Self::Single(index) => vec![*index],
            Self::Multiple(set) => set.iter().copied().collect(),
        }
    }

    pub fn contains(&self, option: usize) -> bool {
        match self {
            Self::Single(index) => *index == option,
            Self::Multiple(set) => set.contains(&option),
        }
    }
}

/// Selections of the whole form, keyed by question position.
///
/// An absent entry means the question was never answered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selections {
    by_question: BTreeMap<usize, Selection>,
}

impl Selections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, question: usize) -> Option<&Selection> {
        self.by_question.get(&question)
    }

    pub fn is_empty(&self) -> bool {
        self.by_question.is_empty()
    }

    /// Number of questions with a selection entry.
    pub fn len(&self) -> usize {
        self.by_question.len()
    }

    pub fn set(&mut self, question: usize, selection: Selection) {
        self.by_question.insert(question, selection);
    }

    /// Replace the choice of a single-choice question.
    pub fn choose(&mut self, question: usize, option: usize) {
        self.by_question.insert(question, Selection::Single(option));
    }

    /// Tick or untick one option of a multiple-choice question.
    pub fn toggle(&mut self, question: usize, option: usize) {
        let entry = self
            .by_question
            .entry(question)
            .or_insert_with(|| Selection::Multiple(BTreeSet::new()));

        if let Selection::Single(previous) = *entry {
            *entry = Selection::Multiple(BTreeSet::from([previous]));
        }
        if let Selection::Multiple(set) = entry {
            if !set.remove(&option) {
                set.insert(option);
            }
        }
    }

    /// Apply the UI gesture that fits the question kind.
    pub fn pick(&mut self, kind: QuestionKind, question: usize, option: usize) {
        match kind {
            QuestionKind::Single => self.choose(question, option),
            QuestionKind::Multiple => self.toggle(question, option),
        }
    }

    pub fn clear_question(&mut self, question: usize) {
        self.by_question.remove(&question);
    }

    pub fn clear(&mut self) {
        self.by_question.clear();
    }

    /// Whether the user has picked anything for this question.
    pub fn is_answered(&self, question: usize) -> bool {
        match self.by_question.get(&question) {
            Some(Selection::Single(_)) => true,
            Some(Selection::Multiple(set)) => !set.is_empty(),
            None => false,
        }
    }
}
