//! HTTP client for the Open Trivia Database (`https://opentdb.com`).

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::ProviderConfig;
use crate::quiz::LoadRequest;

use super::provider::{ProviderError, QuestionProvider};
use super::question::RawQuestion;

/// Only four-option questions fit the session model.
const QUESTION_TYPE: &str = "multiple";

/// Top-level document returned by `api.php`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenTdbResponse {
    pub response_code: u8,
    #[serde(default)]
    pub results: Vec<RawQuestion>,
}

pub struct OpenTdbClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl OpenTdbClient {
    pub fn new(config: &ProviderConfig) -> Result<Self, ProviderError> {
        let timeout = Duration::from_secs(u64::from(config.timeout_seconds));
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .timeout(timeout)
            .build()
            .map_err(ProviderError::Client)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout,
        })
    }

    /// Build the `api.php` URL for a request.
    pub fn request_url(&self, request: &LoadRequest) -> Result<Url, ProviderError> {
        let endpoint = format!("{}/api.php", self.base_url);
        let mut params = vec![
            ("amount", request.amount.to_string()),
            ("category", request.category.id.to_string()),
            ("type", QUESTION_TYPE.to_string()),
        ];
        let difficulty = request.difficulty.query_value();
        if !difficulty.is_empty() {
            params.push(("difficulty", difficulty.to_string()));
        }

        Url::parse_with_params(&endpoint, &params).map_err(|e| ProviderError::InvalidUrl {
            url: endpoint,
            reason: e.to_string(),
        })
    }
}

#[async_trait]
impl QuestionProvider for OpenTdbClient {
    async fn fetch(&self, request: &LoadRequest) -> Result<Vec<RawQuestion>, ProviderError> {
        let url = self.request_url(request)?;
        tracing::debug!(%url, "Fetching questions");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| self.transport_error(&url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(&url, e))?;
        let document: OpenTdbResponse =
            serde_json::from_str(&body).map_err(|e| ProviderError::Decode(e.to_string()))?;

        if document.response_code != 0 {
            return Err(ProviderError::ResponseCode {
                code: document.response_code,
                meaning: response_code_meaning(document.response_code),
            });
        }

        tracing::debug!(count = document.results.len(), "Questions received");
        Ok(document.results)
    }
}

impl OpenTdbClient {
    fn transport_error(&self, url: &Url, err: reqwest::Error) -> ProviderError {
        if err.is_timeout() {
            ProviderError::Timeout {
                seconds: self.timeout.as_secs(),
            }
        } else {
            ProviderError::Connection {
                url: url.to_string(),
                source: err,
            }
        }
    }
}

/// Human-readable meaning of an Open Trivia DB `response_code`.
pub fn response_code_meaning(code: u8) -> &'static str {
    match code {
        0 => "success",
        1 => "not enough questions for the query",
        2 => "invalid parameter",
        3 => "session token not found",
        4 => "session token exhausted",
        5 => "rate limit exceeded",
        _ => "unknown response code",
    }
}
