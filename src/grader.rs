//! Scoring of a submitted form.
//!
//! Every question is worth one point. Single-choice questions are all or
//! nothing; multiple-choice questions earn `(hits - wrong picks) / |key|`,
//! floored at zero. Grading never fails: a question whose data is
//! inconsistent scores zero and carries a [`GradeAnomaly`].

use std::collections::BTreeSet;

use crate::models::{
    GradeAnomaly, GradeResult, Question, QuestionKind, QuestionSet, ScoreDetail, Selection,
    Selections,
};

/// Score of one question together with what was chosen.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionScore {
    pub score: f64,
    pub chosen: Vec<usize>,
    pub anomaly: Option<GradeAnomaly>,
}

impl QuestionScore {
    fn flagged(chosen: Vec<usize>, anomaly: GradeAnomaly) -> Self {
        Self {
            score: 0.0,
            chosen,
            anomaly: Some(anomaly),
        }
    }
}

/// Grade every question of `questions` against `selections`.
pub fn grade(questions: &QuestionSet, selections: &Selections) -> GradeResult {
    let mut total = 0.0;
    let mut details = Vec::with_capacity(questions.len());

    for (position, question) in questions.iter().enumerate() {
        let scored = score_question(question, selections.get(position));
        match &scored.anomaly {
            Some(anomaly) => tracing::warn!(
                question = position + 1,
                id = question.id,
                %anomaly,
                "question graded as zero"
            ),
            None => tracing::debug!(
                question = position + 1,
                id = question.id,
                score = scored.score,
                "graded question"
            ),
        }

        total += scored.score;
        details.push(ScoreDetail {
            id: question.id,
            text: question.text.clone(),
            kind: question.kind,
            options: question.options.clone(),
            explanations: question.explanations.clone(),
            score: scored.score,
            chosen_indices: scored.chosen,
            correct_indices: answer_key(question).into_iter().collect(),
            anomaly: scored.anomaly,
        });
    }

    GradeResult {
        total,
        max_score: questions.len(),
        details,
    }
}

/// Score a single question against its (possibly absent) selection.
pub fn score_question(question: &Question, selection: Option<&Selection>) -> QuestionScore {
    let option_count = question.options.len();
    let chosen: BTreeSet<usize> = selection
        .map(|selection| selection.indices().into_iter().collect())
        .unwrap_or_default();
    let chosen_indices: Vec<usize> = chosen.iter().copied().collect();

    if let Some(&index) = chosen.iter().find(|index| **index >= option_count) {
        return QuestionScore::flagged(
            chosen_indices,
            GradeAnomaly::ChosenOutOfRange {
                index,
                options: option_count,
            },
        );
    }
    if let Some(&index) = question
        .correct_answers
        .iter()
        .find(|index| **index >= option_count)
    {
        return QuestionScore::flagged(
            chosen_indices,
            GradeAnomaly::CorrectOutOfRange {
                index,
                options: option_count,
            },
        );
    }

    let score = match question.kind {
        QuestionKind::Single => {
            if chosen.len() > 1 {
                return QuestionScore::flagged(
                    chosen_indices,
                    GradeAnomaly::SeveralChoicesForSingle {
                        chosen: chosen.len(),
                    },
                );
            }
            single_choice_score(question, chosen.first().copied())
        }
        QuestionKind::Multiple => multiple_choice_score(question, &chosen),
    };

    QuestionScore {
        score,
        chosen: chosen_indices,
        anomaly: None,
    }
}

/// Distinct correct indices, whatever order or repeats the question holds.
fn answer_key(question: &Question) -> BTreeSet<usize> {
    question.correct_answers.iter().copied().collect()
}

fn single_choice_score(question: &Question, chosen: Option<usize>) -> f64 {
    match chosen {
        Some(index) if question.is_correct(index) => 1.0,
        _ => 0.0,
    }
}

fn multiple_choice_score(question: &Question, chosen: &BTreeSet<usize>) -> f64 {
    let key = answer_key(question);
    let key_size = key.len();
    if key_size == 0 {
        return 0.0;
    }

    let hits = chosen.intersection(&key).count();
    let wrong_picks = chosen.len() - hits;
    let raw = (hits as f64 - wrong_picks as f64) / key_size as f64;
    raw.max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(kind: QuestionKind, options: usize, correct: &[usize]) -> Question {
        Question {
            id: 1,
            text: "q".to_string(),
            kind,
            options: (0..options).map(|i| format!("option {i}")).collect(),
            explanations: Vec::new(),
            correct_answers: correct.to_vec(),
        }
    }

    fn multiple(indices: &[usize]) -> Selection {
        Selection::Multiple(indices.iter().copied().collect())
    }

    #[test]
    fn test_single_choice_correct_pick() {
        let q = question(QuestionKind::Single, 3, &[2]);
        let scored = score_question(&q, Some(&Selection::Single(2)));

        assert_eq!(scored.score, 1.0);
        assert_eq!(scored.chosen, vec![2]);
        assert_eq!(scored.anomaly, None);
    }

    #[test]
    fn test_single_choice_wrong_or_missing() {
        let q = question(QuestionKind::Single, 3, &[2]);

        assert_eq!(score_question(&q, Some(&Selection::Single(0))).score, 0.0);

        let unanswered = score_question(&q, None);
        assert_eq!(unanswered.score, 0.0);
        assert!(unanswered.chosen.is_empty());
        assert_eq!(unanswered.anomaly, None);
    }

    #[test]
    fn test_single_choice_is_all_or_nothing() {
        let q = question(QuestionKind::Single, 4, &[1]);
        for option in 0..4 {
            let score = score_question(&q, Some(&Selection::Single(option))).score;
            assert_eq!(score, if option == 1 { 1.0 } else { 0.0 });
        }
    }

    #[test]
    fn test_multiple_choice_partial_credit() {
        let q = question(QuestionKind::Multiple, 4, &[0, 2]);

        assert_eq!(score_question(&q, Some(&multiple(&[0, 2]))).score, 1.0);
        assert_eq!(score_question(&q, Some(&multiple(&[0]))).score, 0.5);
        assert_eq!(score_question(&q, Some(&multiple(&[0, 1]))).score, 0.0);
        assert_eq!(score_question(&q, Some(&multiple(&[1, 3]))).score, 0.0);
        assert_eq!(score_question(&q, Some(&multiple(&[0, 1, 2]))).score, 0.5);
        assert_eq!(score_question(&q, Some(&multiple(&[]))).score, 0.0);
        assert_eq!(score_question(&q, None).score, 0.0);
    }

    #[test]
    fn test_multiple_choice_scores_stay_in_unit_range() {
        let q = question(QuestionKind::Multiple, 5, &[1, 3, 4]);
        for mask in 0u32..32 {
            let picked: Vec<usize> = (0..5).filter(|bit| mask & (1 << bit) != 0).collect();
            let score = score_question(&q, Some(&multiple(&picked))).score;

            assert!((0.0..=1.0).contains(&score), "mask {mask:05b} scored {score}");
            assert_eq!(score == 1.0, picked == vec![1, 3, 4], "mask {mask:05b}");
        }
    }

    #[test]
    fn test_multiple_choice_chosen_indices_are_sorted() {
        let q = question(QuestionKind::Multiple, 4, &[0]);
        let scored = score_question(&q, Some(&multiple(&[3, 0, 2])));
        assert_eq!(scored.chosen, vec![0, 2, 3]);
    }

    #[test]
    fn test_unordered_and_repeated_answer_keys() {
        let single = question(QuestionKind::Single, 3, &[2, 0, 1]);
        assert_eq!(score_question(&single, Some(&Selection::Single(2))).score, 1.0);

        let multiple_key = question(QuestionKind::Multiple, 4, &[2, 0]);
        assert_eq!(score_question(&multiple_key, Some(&multiple(&[0, 2]))).score, 1.0);

        let repeated = question(QuestionKind::Multiple, 2, &[0, 0]);
        assert_eq!(score_question(&repeated, Some(&multiple(&[0]))).score, 1.0);

        let questions = QuestionSet::new(vec![question(QuestionKind::Multiple, 4, &[2, 0, 2])]);
        let result = grade(&questions, &Selections::new());
        assert_eq!(result.details[0].correct_indices, vec![0, 2]);
    }

    #[test]
    fn test_empty_answer_key_scores_zero() {
        let q = question(QuestionKind::Multiple, 3, &[]);
        let scored = score_question(&q, Some(&multiple(&[0, 1, 2])));

        assert_eq!(scored.score, 0.0);
        assert_eq!(scored.anomaly, None);
    }

    #[test]
    fn test_out_of_range_choice_is_flagged() {
        let q = question(QuestionKind::Single, 3, &[0]);
        let scored = score_question(&q, Some(&Selection::Single(9)));

        assert_eq!(scored.score, 0.0);
        assert_eq!(
            scored.anomaly,
            Some(GradeAnomaly::ChosenOutOfRange {
                index: 9,
                options: 3
            })
        );
    }

    #[test]
    fn test_out_of_range_answer_key_is_flagged() {
        let q = question(QuestionKind::Multiple, 2, &[0, 4]);
        let scored = score_question(&q, Some(&multiple(&[0])));

        assert_eq!(scored.score, 0.0);
        assert_eq!(
            scored.anomaly,
            Some(GradeAnomaly::CorrectOutOfRange {
                index: 4,
                options: 2
            })
        );
    }

    #[test]
    fn test_several_choices_on_single_question() {
        let q = question(QuestionKind::Single, 3, &[0]);
        let scored = score_question(&q, Some(&multiple(&[0, 1])));

        assert_eq!(scored.score, 0.0);
        assert_eq!(
            scored.anomaly,
            Some(GradeAnomaly::SeveralChoicesForSingle { chosen: 2 })
        );

        let coerced = score_question(&q, Some(&multiple(&[0])));
        assert_eq!(coerced.score, 1.0);
    }

    #[test]
    fn test_single_index_on_multiple_question() {
        let q = question(QuestionKind::Multiple, 4, &[0, 2]);
        assert_eq!(score_question(&q, Some(&Selection::Single(2))).score, 0.5);
    }

    #[test]
    fn test_totals_across_questions() {
        let questions = QuestionSet::new(vec![
            question(QuestionKind::Single, 3, &[2]),
            question(QuestionKind::Multiple, 4, &[0, 2]),
            question(QuestionKind::Single, 2, &[0]),
        ]);
        let mut selections = Selections::new();
        selections.choose(0, 2);
        selections.toggle(1, 0);
        selections.choose(2, 1);

        let result = grade(&questions, &selections);
        let scores: Vec<f64> = result.details.iter().map(|d| d.score).collect();

        assert_eq!(scores, vec![1.0, 0.5, 0.0]);
        assert_eq!(result.total, 1.5);
        assert_eq!(result.total, scores.iter().sum::<f64>());
        assert_eq!(result.max_score, 3);
        assert_eq!(result.percentage(), 50.0);
    }

    #[test]
    fn test_one_bad_question_does_not_spoil_the_rest() {
        let questions = QuestionSet::new(vec![
            question(QuestionKind::Single, 2, &[7]),
            question(QuestionKind::Single, 2, &[1]),
        ]);
        let mut selections = Selections::new();
        selections.choose(0, 0);
        selections.choose(1, 1);

        let result = grade(&questions, &selections);
        assert_eq!(result.total, 1.0);
        assert_eq!(result.anomalies().count(), 1);
        assert_eq!(result.details[1].anomaly, None);
    }

    #[test]
    fn test_grading_is_repeatable() {
        let questions = QuestionSet::new(vec![
            question(QuestionKind::Multiple, 4, &[1, 2]),
            question(QuestionKind::Single, 3, &[0]),
        ]);
        let mut selections = Selections::new();
        selections.toggle(0, 1);
        selections.toggle(0, 3);

        assert_eq!(grade(&questions, &selections), grade(&questions, &selections));
    }

    #[test]
    fn test_empty_set() {
        let result = grade(&QuestionSet::default(), &Selections::new());
        assert_eq!(result.total, 0.0);
        assert_eq!(result.max_score, 0);
        assert!(result.details.is_empty());
        assert_eq!(result.percentage(), 0.0);
    }
}
