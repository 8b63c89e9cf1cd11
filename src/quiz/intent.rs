use crate::trivia::Question;
use crate::ui::mvi::Intent;

use super::error::SessionError;

/// Transitions of a quiz session.
#[derive(Debug, Clone)]
pub enum QuizIntent {
    /// A question fetch was started. Begins a fresh session in the loading state.
    LoadStarted,

    /// The fetch succeeded with decoded questions.
    Loaded { questions: Vec<Question> },

    /// The fetch failed.
    LoadFailed { error: SessionError },

    /// New ordering of the current question's options.
    AnswersShuffled { answers: Vec<String> },

    /// User picked the option at this slot.
    AnswerSelected { option: usize },

    /// User asked for the next question.
    Continue,

    /// Drop the session.
    Reset,
}

impl Intent for QuizIntent {}
