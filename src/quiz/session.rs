use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::sync::Arc;

use crate::trivia::{ProviderError, Question, QuestionProvider, RawQuestion, ANSWER_SLOTS};
use crate::ui::mvi::Reducer;

use super::error::{QuizError, SessionError};
use super::intent::QuizIntent;
use super::reducer::QuizReducer;
use super::request::LoadRequest;
use super::state::QuizState;

/// Owner of one quiz session.
///
/// Holds the current [`QuizState`], the random source used for shuffling and
/// the provider questions come from. All state changes go through
/// [`QuizReducer`]; each operation hands back the resulting snapshot.
///
/// Operations are meant to be issued one at a time from a single caller
/// (the UI event loop), so there is no internal locking.
pub struct QuizSession {
    state: QuizState,
    provider: Arc<dyn QuestionProvider>,
    rng: StdRng,
}

impl QuizSession {
    pub fn new(provider: Arc<dyn QuestionProvider>) -> Self {
        Self::with_rng(provider, StdRng::from_os_rng())
    }

    /// Session with a caller-supplied random source (seeded in tests).
    pub fn with_rng(provider: Arc<dyn QuestionProvider>, rng: StdRng) -> Self {
        Self {
            state: QuizState::default(),
            provider,
            rng,
        }
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    fn dispatch(&mut self, intent: QuizIntent) {
        self.state = QuizReducer::reduce(std::mem::take(&mut self.state), intent);
    }

    /// Fetch questions and start a new session with them.
    ///
    /// Provider failures are not returned: they end up in
    /// [`QuizState::error`] with `is_loading` cleared.
    pub async fn load(&mut self, request: &LoadRequest) -> &QuizState {
        self.begin_load(request);
        let provider = Arc::clone(&self.provider);
        let result = provider.fetch(request).await;
        self.finish_load(result)
    }

    /// First half of [`load`](Self::load): enter the loading state.
    pub fn begin_load(&mut self, request: &LoadRequest) -> &QuizState {
        tracing::info!(
            category = request.category.name,
            amount = request.amount,
            difficulty = %request.difficulty,
            "Loading questions"
        );
        self.dispatch(QuizIntent::LoadStarted);
        &self.state
    }

    /// Second half of [`load`](Self::load): apply the provider's answer.
    pub fn finish_load(
        &mut self,
        result: Result<Vec<RawQuestion>, ProviderError>,
    ) -> &QuizState {
        match result.and_then(decode_questions) {
            Ok(questions) => {
                tracing::info!(count = questions.len(), "Questions loaded");
                self.dispatch(QuizIntent::Loaded { questions });
                self.shuffle_current();
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to load questions");
                self.dispatch(QuizIntent::LoadFailed {
                    error: SessionError::from(&err),
                });
            }
        }
        &self.state
    }

    /// Put the options of `question_number` in a fresh random order.
    pub fn shuffle_answers(&mut self, question_number: usize) -> Result<&QuizState, QuizError> {
        let len = self.state.questions.len();
        let mut answers = self
            .state
            .questions
            .get(question_number)
            .ok_or(QuizError::QuestionOutOfRange {
                index: question_number,
                len,
            })?
            .answer_pool();
        answers.shuffle(&mut self.rng);
        self.dispatch(QuizIntent::AnswersShuffled { answers });
        Ok(&self.state)
    }

    /// Answer the current question with the option in slot `option`.
    pub fn check_answer(&mut self, option: usize) -> Result<&QuizState, QuizError> {
        self.ensure_active()?;
        if self.state.press_to_continue {
            return Err(QuizError::AlreadyAnswered);
        }
        if option >= ANSWER_SLOTS {
            return Err(QuizError::OptionOutOfRange { option });
        }
        if !self.state.correct_slot().is_some_and(|slot| slot < ANSWER_SLOTS) {
            let question = self
                .state
                .current()
                .map(|q| q.text.clone())
                .unwrap_or_default();
            tracing::warn!(%question, "Correct answer not among shuffled options");
            return Err(QuizError::CorrectAnswerMissing { question });
        }

        self.dispatch(QuizIntent::AnswerSelected { option });
        tracing::debug!(
            question = self.state.current_question,
            option,
            right_answers = self.state.right_answers,
            "Answer recorded"
        );
        Ok(&self.state)
    }

    /// Move on to the next question, or end the session after the last one.
    pub fn press_continue(&mut self) -> Result<&QuizState, QuizError> {
        self.ensure_active()?;
        self.dispatch(QuizIntent::Continue);
        if self.state.game_over {
            tracing::info!(
                right_answers = self.state.right_answers,
                total = self.state.questions.len(),
                "Session over"
            );
        } else {
            self.shuffle_current();
        }
        Ok(&self.state)
    }

    /// Drop the current session.
    pub fn reset(&mut self) -> &QuizState {
        self.dispatch(QuizIntent::Reset);
        &self.state
    }

    fn ensure_active(&self) -> Result<(), QuizError> {
        if self.state.questions.is_empty() {
            return Err(QuizError::NotLoaded);
        }
        if self.state.game_over {
            return Err(QuizError::SessionOver);
        }
        Ok(())
    }

    fn shuffle_current(&mut self) {
        let current = self.state.current_question;
        if let Err(err) = self.shuffle_answers(current) {
            tracing::warn!(error = %err, "Could not shuffle answers");
        }
    }
}

fn decode_questions(raw: Vec<RawQuestion>) -> Result<Vec<Question>, ProviderError> {
    if raw.is_empty() {
        return Err(ProviderError::Empty);
    }
    raw.into_iter().map(Question::try_from).collect()
}
