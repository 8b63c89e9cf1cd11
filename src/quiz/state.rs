use crate::trivia::{AnswerStatus, Question, ANSWER_SLOTS};
use crate::ui::mvi::UiState;

use super::error::SessionError;

/// Highlight of one answer slot after the user has answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlotLabel {
    #[default]
    None,
    Correct,
    Wrong,
}

/// Coarse session phase, derived from [`QuizState`] for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    /// Nothing loaded yet.
    Idle,
    Loading,
    /// Last fetch failed; `error` is set.
    Failed,
    /// Current question waits for an answer.
    Answering,
    /// Current question answered; waiting for continue.
    Answered,
    GameOver,
}

/// One answered question as shown on the results screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewEntry {
    pub text: String,
    pub chosen: String,
    pub correct: String,
    pub status: AnswerStatus,
}

/// Snapshot of a quiz session.
///
/// Invariants while a session is active:
/// - `current_question < questions.len()`
/// - `shuffled_answers` is a permutation of the current question's options
/// - `saved_answers.len()` equals the number of answered questions
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QuizState {
    pub is_loading: bool,
    pub error: Option<SessionError>,
    pub questions: Vec<Question>,
    pub current_question: usize,
    pub shuffled_answers: Vec<String>,
    pub slot_labels: [SlotLabel; ANSWER_SLOTS],
    pub right_answers: u32,
    pub saved_answers: Vec<String>,
    pub press_to_continue: bool,
    pub game_over: bool,
}

impl UiState for QuizState {}

impl QuizState {
    pub fn phase(&self) -> QuizPhase {
        if self.is_loading {
            QuizPhase::Loading
        } else if self.error.is_some() {
            QuizPhase::Failed
        } else if self.questions.is_empty() {
            QuizPhase::Idle
        } else if self.game_over {
            QuizPhase::GameOver
        } else if self.press_to_continue {
            QuizPhase::Answered
        } else {
            QuizPhase::Answering
        }
    }

    /// The question being asked, if a session is loaded.
    pub fn current(&self) -> Option<&Question> {
        self.questions.get(self.current_question)
    }

    /// Slot holding the current question's correct answer. First match wins.
    pub fn correct_slot(&self) -> Option<usize> {
        let correct = &self.current()?.correct_answer;
        self.shuffled_answers
            .iter()
            .position(|answer| answer == correct)
    }

    pub fn is_last_question(&self) -> bool {
        self.current_question + 1 >= self.questions.len()
    }

    /// Share of correct answers over all questions, 0-100.
    pub fn score_percent(&self) -> u32 {
        if self.questions.is_empty() {
            return 0;
        }
        (self.right_answers * 100) / self.questions.len() as u32
    }

    /// Answered questions paired with the answer the user gave.
    pub fn review(&self) -> Vec<ReviewEntry> {
        self.questions
            .iter()
            .filter(|q| q.is_answered())
            .zip(&self.saved_answers)
            .map(|(question, chosen)| ReviewEntry {
                text: question.text.clone(),
                chosen: chosen.clone(),
                correct: question.correct_answer.clone(),
                status: question.answer_status,
            })
            .collect()
    }
}
