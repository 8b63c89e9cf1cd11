//! Mock Open Trivia DB server for exercising the HTTP client.

#![allow(dead_code)]

use axum::body::Body;
use axum::extract::{Query, State};
use axum::http::Response;
use axum::routing::get;
use axum::Router;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// What the mock answers to every `api.php` request.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
    pub delay_ms: u64,
}

impl MockResponse {
    pub fn json(body: &str) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
            delay_ms: 0,
        }
    }

    pub fn error(status: u16) -> Self {
        Self {
            status,
            body: r#"{"error": "unavailable"}"#.to_string(),
            delay_ms: 0,
        }
    }

    pub fn delayed(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }
}

struct MockState {
    response: MockResponse,
    queries: Mutex<Vec<HashMap<String, String>>>,
}

pub struct MockTrivia {
    pub addr: SocketAddr,
    state: Arc<MockState>,
}

impl MockTrivia {
    pub async fn start(response: MockResponse) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock listener");
        let addr = listener.local_addr().expect("mock local addr");
        let state = Arc::new(MockState {
            response,
            queries: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/api.php", get(handle))
            .with_state(Arc::clone(&state));
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self { addr, state }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Query parameters of every request received so far.
    pub async fn queries(&self) -> Vec<HashMap<String, String>> {
        self.state.queries.lock().await.clone()
    }
}

async fn handle(
    State(state): State<Arc<MockState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response<Body> {
    state.queries.lock().await.push(params);
    let response = &state.response;
    if response.delay_ms > 0 {
        tokio::time::sleep(Duration::from_millis(response.delay_ms)).await;
    }
    Response::builder()
        .status(response.status)
        .header("content-type", "application/json")
        .body(Body::from(response.body.clone()))
        .expect("valid mock response")
}

/// Open Trivia DB document with the given results and response code.
pub fn opentdb_body(response_code: u8, results: &[quizterm::trivia::RawQuestion]) -> String {
    serde_json::json!({
        "response_code": response_code,
        "results": results,
    })
    .to_string()
}
