use serde::{Deserialize, Serialize};

use super::provider::ProviderError;

/// Number of answer options shown per question (three wrong, one right).
pub const ANSWER_SLOTS: usize = 4;

/// Outcome recorded on a question once the user has answered it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnswerStatus {
    #[default]
    Unanswered,
    Correct,
    Incorrect,
}

/// Question record as served by the provider. Text fields are HTML-escaped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawQuestion {
    pub category: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub difficulty: String,
    pub question: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
}

/// A decoded question held by a quiz session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub category: String,
    pub correct_answer: String,
    pub difficulty: String,
    pub incorrect_answers: Vec<String>,
    pub text: String,
    pub kind: String,
    pub answer_status: AnswerStatus,
}

impl Question {
    /// The unshuffled answer pool: incorrect answers followed by the correct one.
    pub fn answer_pool(&self) -> Vec<String> {
        let mut pool = Vec::with_capacity(ANSWER_SLOTS);
        pool.extend(self.incorrect_answers.iter().cloned());
        pool.push(self.correct_answer.clone());
        pool
    }

    pub fn is_answered(&self) -> bool {
        self.answer_status != AnswerStatus::Unanswered
    }
}

impl TryFrom<RawQuestion> for Question {
    type Error = ProviderError;

    fn try_from(raw: RawQuestion) -> Result<Self, Self::Error> {
        if raw.incorrect_answers.len() != ANSWER_SLOTS - 1 {
            return Err(ProviderError::MalformedQuestion {
                question: decode_entities(&raw.question),
                reason: format!(
                    "expected {} incorrect answers, got {}",
                    ANSWER_SLOTS - 1,
                    raw.incorrect_answers.len()
                ),
            });
        }

        Ok(Question {
            category: decode_entities(&raw.category),
            correct_answer: decode_entities(&raw.correct_answer),
            difficulty: raw.difficulty,
            incorrect_answers: raw
                .incorrect_answers
                .iter()
                .map(|answer| decode_entities(answer))
                .collect(),
            text: decode_entities(&raw.question),
            kind: raw.kind,
            answer_status: AnswerStatus::Unanswered,
        })
    }
}

/// Decode HTML entities (`&quot;`, `&#039;`, `&amp;`, ...) into plain text.
pub fn decode_entities(text: &str) -> String {
    html_escape::decode_html_entities(text).into_owned()
}
