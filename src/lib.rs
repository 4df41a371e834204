//! # quiz-grader
//!
//! Load a JSON question bank, answer single- and multiple-choice questions
//! and get a per-question and aggregate grade with answer-key feedback.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use quiz_grader::{Quiz, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     // Load questions from a JSON file
//!     let quiz = Quiz::from_json("questions.json")?;
//!
//!     // Run the quiz in the terminal
//!     quiz.run()?;
//!
//!     Ok(())
//! }
//! ```
//!
//! The grading core does not need a terminal:
//!
//! ```rust
//! use quiz_grader::Session;
//!
//! let mut session = Session::new();
//! session
//!     .load(r#"[{"question": "2 + 2?", "options": ["3", "4"], "correct_answers": [1]}]"#)
//!     .unwrap();
//! session.choose(0, 1);
//!
//! let result = session.submit().unwrap();
//! assert_eq!(result.total, 1.0);
//! assert_eq!(result.percentage(), 100.0);
//! ```

mod app;
pub mod config;
pub mod data;
mod error;
pub mod grader;
pub mod logger;
mod models;
pub mod report;
mod session;
pub mod terminal;
mod ui;

use std::path::Path;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

pub use app::App;
pub use config::Config;
pub use data::{load, load_questions_from_json, AnswerSheetError, LoadError, ValidationError};
pub use error::QuizError;
pub use grader::grade;
pub use models::{
    AppState, GradeAnomaly, GradeResult, OptionFeedback, Phase, Question, QuestionKind,
    QuestionSet, ScoreDetail, Selection, Selections,
};
pub use session::Session;

/// A quiz instance that can be run in the terminal.
pub struct Quiz {
    app: App,
}

impl Quiz {
    /// Create a new quiz from an already-loaded question set.
    pub fn new(questions: QuestionSet) -> Self {
        Self {
            app: App::with_questions(questions),
        }
    }

    /// Load a quiz from a JSON file, or from standard input for `-`.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use quiz_grader::Quiz;
    ///
    /// let quiz = Quiz::from_json("questions.json").expect("Failed to load quiz");
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, QuizError> {
        Ok(Self {
            app: App::open(path)?,
        })
    }

    /// Run the quiz in the terminal.
    ///
    /// This will take over the terminal, display the quiz UI, and return
    /// when the user quits.
    pub fn run(mut self) -> Result<(), QuizError> {
        let mut guard = terminal::TerminalGuard::enter()?;
        run_event_loop(guard.terminal(), &mut self.app)
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

/// Grade an answer sheet against a question bank without a terminal UI.
///
/// Returns the text report, or the grade as pretty JSON when `json` is set.
pub fn grade_answer_sheet<P, Q>(questions: P, answers: Q, json: bool) -> Result<String, QuizError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let question_set = load_questions_from_json(questions)?;
    let selections = data::load_answer_sheet(answers, &question_set)?;

    let mut session = Session::new();
    session.replace(question_set);
    session.set_selections(selections);

    let Some(result) = session.submit() else {
        return Ok(String::new());
    };
    if json {
        serde_json::to_string_pretty(result).map_err(QuizError::Report)
    } else {
        Ok(report::render_report(result))
    }
}

fn run_event_loop(terminal: &mut terminal::AppTerminal, app: &mut App) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code) {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    match app.state {
        AppState::Welcome => handle_welcome_input(app, key),
        AppState::Quiz => handle_quiz_input(app, key),
        AppState::Result => handle_result_input(app, key),
    }
}

fn handle_welcome_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Enter => {
            app.start_quiz();
            false
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.reload();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_previous_option();
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_next_option();
            false
        }
        KeyCode::Right | KeyCode::Tab | KeyCode::Char('n') => {
            app.next_question();
            false
        }
        KeyCode::Left | KeyCode::BackTab | KeyCode::Char('p') => {
            app.previous_question();
            false
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.pick_selected_option();
            false
        }
        KeyCode::Backspace | KeyCode::Delete => {
            app.clear_current_answer();
            false
        }
        KeyCode::Char('s') | KeyCode::Char('S') => {
            app.submit();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_result_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Down | KeyCode::Char('j') => {
            app.scroll_results_down();
            false
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.scroll_results_up();
            false
        }
        KeyCode::Char('e') | KeyCode::Char('E') | KeyCode::Esc => {
            app.edit_answers();
            false
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.reload();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    const BANK: &str = r#"[
        {"id": 1, "question": "Pick c", "options": ["a", "b", "c"], "correct_answers": [2]},
        {"id": 2, "question": "Pick a and c", "type": "multiple",
         "options": ["a", "b", "c", "d"], "correct_answers": [0, 2]},
        {"id": 3, "question": "Pick a", "options": ["a", "b"], "correct_answers": [0]}
    ]"#;

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("quiz-grader-{}-{}", std::process::id(), name));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_key_driven_session() {
        let mut quiz = Quiz::new(load(BANK).unwrap());
        let app = quiz.app_mut();

        assert!(!handle_input(app, KeyCode::Enter));
        assert_eq!(app.state, AppState::Quiz);

        // question 1: move to "c" and pick it
        for key in [KeyCode::Down, KeyCode::Down, KeyCode::Char(' '), KeyCode::Char('n')] {
            handle_input(app, key);
        }
        // question 2: tick "a" only
        for key in [KeyCode::Enter, KeyCode::Tab] {
            handle_input(app, key);
        }
        // question 3: pick "b", then clear it
        for key in [KeyCode::Char('j'), KeyCode::Enter, KeyCode::Backspace] {
            handle_input(app, key);
        }

        handle_input(app, KeyCode::Char('s'));
        assert_eq!(app.state, AppState::Result);

        let result = app.last_result().unwrap();
        let scores: Vec<f64> = result.details.iter().map(|d| d.score).collect();
        assert_eq!(scores, vec![1.0, 0.5, 0.0]);
        assert_eq!(result.total, 1.5);
        assert_eq!(result.percentage(), 50.0);

        handle_input(app, KeyCode::Char('e'));
        assert_eq!(app.state, AppState::Quiz);
        assert!(handle_input(app, KeyCode::Char('q')));
    }

    #[test]
    fn test_grade_answer_sheet_text_and_json() {
        let questions = write_temp("bank.json", BANK);
        let answers = write_temp("sheet.json", "[2, [0, 1], null]");

        let text = grade_answer_sheet(&questions, &answers, false).unwrap();
        assert!(text.starts_with("Score: 1.00 / 3 (33.3%)\n"));

        let json = grade_answer_sheet(&questions, &answers, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["total"], 1.0);
        assert_eq!(value["max_score"], 3);
        assert_eq!(value["details"][1]["chosen_indices"], serde_json::json!([0, 1]));
        assert_eq!(value["details"][0]["kind"], "single");

        fs::remove_file(questions).unwrap();
        fs::remove_file(answers).unwrap();
    }

    #[test]
    fn test_grade_answer_sheet_errors() {
        let questions = write_temp("bad-bank.json", r#"{"not": "a list"}"#);
        let answers = write_temp("bad-sheet.json", "[0]");

        let err = grade_answer_sheet(&questions, &answers, false).unwrap_err();
        assert!(matches!(
            err,
            QuizError::Load(LoadError::Invalid(ValidationError::NotAList))
        ));

        fs::write(&questions, BANK).unwrap();
        fs::write(&answers, "oops").unwrap();
        let err = grade_answer_sheet(&questions, &answers, false).unwrap_err();
        assert!(matches!(err, QuizError::Answers(AnswerSheetError::Parse(_))));

        fs::remove_file(questions).unwrap();
        fs::remove_file(answers).unwrap();
    }
}
