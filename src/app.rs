use std::path::{Path, PathBuf};

use crate::data::{read_source, LoadError, STDIN_PATH};
use crate::models::{AppState, GradeResult, Question, QuestionSet, Selection};
use crate::session::Session;

/// Terminal front end state: the session plus cursor positions.
pub struct App {
    pub state: AppState,
    session: Session,
    source: Option<PathBuf>,
    stdin_text: Option<String>,
    load_error: Option<String>,
    current_question_index: usize,
    selected_option: usize,
    result_scroll: usize,
}

impl App {
    /// Read and load the question bank at `source`.
    pub fn open<P: AsRef<Path>>(source: P) -> Result<Self, LoadError> {
        let source = source.as_ref().to_path_buf();
        let raw = read_source(&source)?;

        let mut session = Session::new();
        session.load(&raw)?;

        let stdin_text = (source == Path::new(STDIN_PATH)).then_some(raw);
        let mut app = Self::with_session(session);
        app.source = Some(source);
        app.stdin_text = stdin_text;
        Ok(app)
    }

    pub fn with_questions(questions: QuestionSet) -> Self {
        let mut session = Session::new();
        session.replace(questions);
        Self::with_session(session)
    }

    fn with_session(session: Session) -> Self {
        Self {
            state: AppState::Welcome,
            session,
            source: None,
            stdin_text: None,
            load_error: None,
            current_question_index: 0,
            selected_option: 0,
            result_scroll: 0,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// Load the question bank again and start over with empty answers.
    ///
    /// Standard input can only be read once, so a bank piped in is reused.
    pub fn reload(&mut self) {
        self.state = AppState::Welcome;
        self.current_question_index = 0;
        self.selected_option = 0;
        self.result_scroll = 0;

        let Some(source) = self.source.clone() else {
            self.session.clear_answers();
            return;
        };

        let raw = match &self.stdin_text {
            Some(text) => Ok(text.clone()),
            None => read_source(&source),
        };
        let loaded = raw.and_then(|raw| self.session.load(&raw).map(|_| ()).map_err(LoadError::from));

        match loaded {
            Ok(()) => self.load_error = None,
            Err(err) => {
                tracing::warn!(path = %source.display(), error = %err, "reload failed");
                self.session.unload();
                self.load_error = Some(err.to_string());
            }
        }
    }

    pub fn questions(&self) -> &[Question] {
        self.session
            .questions()
            .map(QuestionSet::as_slice)
            .unwrap_or_default()
    }

    pub fn total_questions(&self) -> usize {
        self.questions().len()
    }

    pub fn can_start(&self) -> bool {
        self.total_questions() > 0
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions().get(self.current_question_index)
    }

    pub fn current_question_index(&self) -> usize {
        self.current_question_index
    }

    pub fn current_question_number(&self) -> usize {
        self.current_question_index + 1
    }

    pub fn current_selection(&self) -> Option<&Selection> {
        self.session.selection(self.current_question_index)
    }

    pub fn selected_option(&self) -> usize {
        self.selected_option
    }

    pub fn answered_count(&self) -> usize {
        (0..self.total_questions())
            .filter(|index| self.session.selections().is_answered(*index))
            .count()
    }

    pub fn last_result(&self) -> Option<&GradeResult> {
        self.session.last_result()
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    fn option_count(&self) -> usize {
        self.current_question().map_or(0, |q| q.options.len())
    }

    pub fn select_next_option(&mut self) {
        let count = self.option_count();
        if count > 0 {
            self.selected_option = (self.selected_option + 1) % count;
        }
    }

    pub fn select_previous_option(&mut self) {
        let count = self.option_count();
        if count > 0 {
            self.selected_option = (self.selected_option + count - 1) % count;
        }
    }

    pub fn next_question(&mut self) {
        if self.current_question_index + 1 < self.total_questions() {
            self.current_question_index += 1;
            self.selected_option = 0;
        }
    }

    pub fn previous_question(&mut self) {
        if self.current_question_index > 0 {
            self.current_question_index -= 1;
            self.selected_option = 0;
        }
    }

    pub fn start_quiz(&mut self) {
        if self.can_start() {
            self.state = AppState::Quiz;
        }
    }

    /// Choose or toggle the highlighted option.
    pub fn pick_selected_option(&mut self) {
        if self.option_count() > 0 {
            self.session
                .pick(self.current_question_index, self.selected_option);
        }
    }

    pub fn clear_current_answer(&mut self) {
        self.session.clear_selection(self.current_question_index);
    }

    pub fn submit(&mut self) {
        if self.session.submit().is_some() {
            self.state = AppState::Result;
            self.result_scroll = 0;
        }
    }

    /// Go back from the results to the form, keeping the answers.
    pub fn edit_answers(&mut self) {
        if self.can_start() {
            self.state = AppState::Quiz;
        }
    }

    pub fn scroll_results_down(&mut self) {
        self.result_scroll = self.result_scroll.saturating_add(1);
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }
}
