use thiserror::Error;

use crate::trivia::ProviderError;

/// Failure recorded in [`QuizState`](super::QuizState) so the view can react.
///
/// Kept cloneable and comparable, unlike [`ProviderError`], because it lives
/// inside UI state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Failed to fetch questions: {message}")]
    ProviderFailure { message: String },
}

impl From<&ProviderError> for SessionError {
    fn from(err: &ProviderError) -> Self {
        SessionError::ProviderFailure {
            message: err.to_string(),
        }
    }
}

/// Errors returned by session operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("No questions loaded")]
    NotLoaded,

    #[error("Question {index} out of range (session has {len} questions)")]
    QuestionOutOfRange { index: usize, len: usize },

    #[error("Answer option {option} out of range")]
    OptionOutOfRange { option: usize },

    #[error("Current question already answered")]
    AlreadyAnswered,

    #[error("Session is over")]
    SessionOver,

    /// Shuffled options do not contain the correct answer of the current
    /// question.
    #[error("Correct answer missing from the options of '{question}'")]
    CorrectAnswerMissing { question: String },
}

impl QuizError {
    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        QuizError::InvalidInput {
            message: message.into(),
        }
    }
}
