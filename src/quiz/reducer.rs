//! Reducer for quiz session state.

use crate::trivia::{AnswerStatus, ANSWER_SLOTS};
use crate::ui::mvi::Reducer;

use super::intent::QuizIntent;
use super::state::{QuizState, SlotLabel};

/// Pure state transitions of a quiz session.
///
/// Shuffling needs randomness, so the reducer never shuffles itself: the
/// session computes an ordering and dispatches [`QuizIntent::AnswersShuffled`].
pub struct QuizReducer;

impl Reducer for QuizReducer {
    type State = QuizState;
    type Intent = QuizIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            QuizIntent::LoadStarted => QuizState {
                is_loading: true,
                ..QuizState::default()
            },

            QuizIntent::Loaded { questions } => QuizState {
                questions,
                ..QuizState::default()
            },

            QuizIntent::LoadFailed { error } => QuizState {
                is_loading: false,
                error: Some(error),
                ..state
            },

            QuizIntent::AnswersShuffled { answers } => QuizState {
                shuffled_answers: answers,
                ..state
            },

            QuizIntent::AnswerSelected { option } => answer(state, option),

            QuizIntent::Continue => {
                let next = state.current_question + 1;
                if next >= state.questions.len() {
                    return QuizState {
                        game_over: true,
                        ..state
                    };
                }
                QuizState {
                    current_question: next,
                    slot_labels: [SlotLabel::None; ANSWER_SLOTS],
                    press_to_continue: false,
                    ..state
                }
            }

            QuizIntent::Reset => QuizState::default(),
        }
    }
}

/// Record the answer in `option`. Leaves the state untouched when the option
/// does not exist or the correct answer is not in one of the answer slots.
fn answer(state: QuizState, option: usize) -> QuizState {
    if option >= ANSWER_SLOTS {
        return state;
    }
    let (Some(correct), Some(chosen)) = (
        state.correct_slot().filter(|slot| *slot < ANSWER_SLOTS),
        state.shuffled_answers.get(option).cloned(),
    ) else {
        return state;
    };

    let mut slot_labels = [SlotLabel::None; ANSWER_SLOTS];
    slot_labels[correct] = SlotLabel::Correct;
    let is_correct = option == correct;
    if !is_correct {
        slot_labels[option] = SlotLabel::Wrong;
    }

    let mut questions = state.questions;
    if let Some(question) = questions.get_mut(state.current_question) {
        question.answer_status = if is_correct {
            AnswerStatus::Correct
        } else {
            AnswerStatus::Incorrect
        };
    }

    let mut saved_answers = state.saved_answers;
    saved_answers.push(chosen);

    QuizState {
        questions,
        slot_labels,
        right_answers: state.right_answers + u32::from(is_correct),
        saved_answers,
        press_to_continue: true,
        ..state
    }
}
