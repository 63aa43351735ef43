//! Local stand-in for the Gemini API, plus config helpers for tests.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use serde_json::Value;
use tokio::net::TcpListener;
use url::Url;

use crate::{
    AppState,
    config::{ApiKey, Config},
};

pub const TEST_ORIGIN: &str = "http://localhost:3000";

pub fn test_config(base_url: &str) -> Config {
    Config {
        app_host: "127.0.0.1".to_string(),
        app_port: 0,
        gemini_api_key: ApiKey::new("test-key"),
        gemini_base_url: Url::parse(base_url).unwrap(),
        gemini_model: "gemini-1.5-flash".to_string(),
        frontend_origin: TEST_ORIGIN.parse().unwrap(),
    }
}

pub fn test_state(base_url: &str) -> AppState {
    AppState {
        cfg: test_config(base_url),
        http: reqwest::Client::new(),
    }
}

/// Base URL of a port nothing listens on.
pub async fn refused_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/v1beta/models/")
}

#[derive(Debug, Clone)]
pub struct SeenRequest {
    pub action: String,
    pub key: Option<String>,
    pub content_type: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    body: String,
    seen: Arc<Mutex<Vec<SeenRequest>>>,
}

pub struct MockGemini {
    addr: SocketAddr,
    seen: Arc<Mutex<Vec<SeenRequest>>>,
}

impl MockGemini {
    /// Serves `body` with `status` for every `generateContent` call.
    pub async fn spawn(status: StatusCode, body: &str) -> Self {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            status,
            body: body.to_string(),
            seen: seen.clone(),
        };
        let app = Router::new()
            .route("/v1beta/models/{action}", post(generate_content))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, seen }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}/v1beta/models/", self.addr)
    }

    pub fn hits(&self) -> usize {
        self.seen.lock().unwrap().len()
    }

    pub fn last_request(&self) -> Option<SeenRequest> {
        self.seen.lock().unwrap().last().cloned()
    }

    /// The prompt text of the last request.
    pub fn last_prompt(&self) -> Option<String> {
        let req = self.last_request()?;
        req.body
            .pointer("/contents/0/parts/0/text")
            .and_then(|x| x.as_str())
            .map(|s| s.to_string())
    }
}

async fn generate_content(
    State(state): State<MockState>,
    Path(action): Path<String>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    body: String,
) -> impl IntoResponse {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string());
    state.seen.lock().unwrap().push(SeenRequest {
        action,
        key: query.get("key").cloned(),
        content_type,
        body: serde_json::from_str(&body).unwrap_or(Value::Null),
    });

    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body,
    )
}
