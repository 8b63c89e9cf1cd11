//! Shared test utilities: scripted question providers and fixtures.

#![allow(dead_code, unused_imports)]

pub mod mock_provider;

use async_trait::async_trait;
use quizterm::quiz::LoadRequest;
use quizterm::trivia::{ProviderError, QuestionProvider, RawQuestion};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Provider that replays scripted results and records every request.
#[derive(Default)]
pub struct FakeProvider {
    responses: Mutex<VecDeque<Result<Vec<RawQuestion>, ProviderError>>>,
    requests: Mutex<Vec<LoadRequest>>,
}

impl FakeProvider {
    pub fn with_questions(questions: Vec<RawQuestion>) -> Self {
        let provider = Self::default();
        provider.push(Ok(questions));
        provider
    }

    pub fn failing(error: ProviderError) -> Self {
        let provider = Self::default();
        provider.push(Err(error));
        provider
    }

    pub fn push(&self, response: Result<Vec<RawQuestion>, ProviderError>) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub fn requests(&self) -> Vec<LoadRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl QuestionProvider for FakeProvider {
    async fn fetch(&self, request: &LoadRequest) -> Result<Vec<RawQuestion>, ProviderError> {
        self.requests.lock().unwrap().push(*request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

/// A four-option question whose wrong answers are derived from `correct`.
pub fn raw_question(text: &str, correct: &str) -> RawQuestion {
    RawQuestion {
        category: "History".to_string(),
        kind: "multiple".to_string(),
        difficulty: "easy".to_string(),
        question: text.to_string(),
        correct_answer: correct.to_string(),
        incorrect_answers: vec![
            format!("{correct} (wrong 1)"),
            format!("{correct} (wrong 2)"),
            format!("{correct} (wrong 3)"),
        ],
    }
}

pub fn history_request(amount: u32) -> LoadRequest {
    LoadRequest::parse(Some("History"), Some(amount), Some("Easy")).unwrap()
}

pub fn sorted(mut items: Vec<String>) -> Vec<String> {
    items.sort();
    items
}
