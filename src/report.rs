//! Plain-text rendering of a grade, used by batch mode.

use std::fmt::Write;

use crate::models::{GradeResult, OptionFeedback};

pub fn summary_line(result: &GradeResult) -> String {
    format!(
        "Score: {:.2} / {} ({:.1}%)",
        result.total,
        result.max_score,
        result.percentage()
    )
}

/// Aggregate score followed by every question with its option markers.
pub fn render_report(result: &GradeResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", summary_line(result));

    for detail in &result.details {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "Question {} ({}) - score: {:.2}",
            detail.id, detail.kind, detail.score
        );
        let _ = writeln!(out, "{}", detail.text);
        if let Some(anomaly) = &detail.anomaly {
            let _ = writeln!(out, "  ! {}", anomaly);
        }

        for (_, option, feedback, explanation) in detail.annotated_options() {
            let note = feedback.note();
            if note.is_empty() {
                let _ = writeln!(out, "  {} {}", feedback.marker(), option);
            } else {
                let _ = writeln!(out, "  {} {} {}", feedback.marker(), option, note);
            }
            if let Some(explanation) = explanation {
                let _ = writeln!(out, "      {}", explanation);
            }
        }
    }

    out
}

/// Legend for the option markers.
pub fn legend() -> String {
    [
        OptionFeedback::Hit,
        OptionFeedback::Missed,
        OptionFeedback::WrongPick,
    ]
    .iter()
    .map(|feedback| format!("{} {}", feedback.marker(), feedback.note()))
    .collect::<Vec<_>>()
    .join("  ")
}
