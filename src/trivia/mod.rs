//! Trivia domain: categories, difficulties, questions and the provider that
//! supplies them.
//!
//! The only provider shipped is [`OpenTdbClient`], which talks to the public
//! Open Trivia Database. Anything implementing [`QuestionProvider`] can stand
//! in for it (tests use in-memory fakes).

mod category;
mod difficulty;
mod opentdb;
mod provider;
mod question;

pub use category::{Category, CATEGORIES};
pub use difficulty::{Difficulty, ParseDifficultyError};
pub use opentdb::{response_code_meaning, OpenTdbClient, OpenTdbResponse};
pub use provider::{ProviderError, QuestionProvider};
pub use question::{decode_entities, AnswerStatus, Question, RawQuestion, ANSWER_SLOTS};
