/// Screen the terminal front end is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Welcome,
    Quiz,
    Result,
}

/// Where a session is in its load / answer / grade cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No question set loaded.
    #[default]
    Unloaded,
    /// A set was just loaded, nothing answered yet.
    Loaded,
    /// Selections changed since the last load or submit.
    Answering,
    /// The current selections have been graded.
    Graded,
}
