mod grade;
mod question;
mod selection;
mod state;

pub use grade::{GradeAnomaly, GradeResult, OptionFeedback, ScoreDetail};
pub use question::{Question, QuestionKind, QuestionSet};
pub use selection::{Selection, Selections};
pub use state::{AppState, Phase};
