//! Question provider contract.

use async_trait::async_trait;
use thiserror::Error;

use crate::quiz::LoadRequest;

use super::question::RawQuestion;

/// Errors a provider can report for a fetch.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The configured base URL does not form a valid request URL.
    #[error("Invalid provider URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Could not reach the provider or the transfer failed.
    #[error("Connection to '{url}' failed: {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The request exceeded the configured timeout.
    #[error("Request timed out after {seconds}s")]
    Timeout { seconds: u64 },

    /// Provider answered with a non-success HTTP status.
    #[error("Provider returned HTTP {status}")]
    Status { status: u16 },

    /// Response body was not the expected JSON document.
    #[error("Failed to decode provider response: {0}")]
    Decode(String),

    /// Provider reported an application-level error code.
    #[error("Provider response code {code}: {meaning}")]
    ResponseCode { code: u8, meaning: &'static str },

    /// A returned question cannot be shown as a four-option question.
    #[error("Malformed question '{question}': {reason}")]
    MalformedQuestion { question: String, reason: String },

    /// The background fetch worker is gone.
    #[error("Question provider is unavailable")]
    Unavailable,

    /// The provider succeeded but returned no questions.
    #[error("Provider returned no questions")]
    Empty,
}

/// Source of quiz questions.
///
/// Implementations return the questions in the order they should be asked.
#[async_trait]
pub trait QuestionProvider: Send + Sync {
    async fn fetch(&self, request: &LoadRequest) -> Result<Vec<RawQuestion>, ProviderError>;
}
