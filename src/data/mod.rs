mod answers;
mod loader;

pub use answers::{load_answer_sheet, selections_from_sheet, AnswerSheetError};
pub use loader::{load, load_questions_from_json, read_source, LoadError, ValidationError, STDIN_PATH};
