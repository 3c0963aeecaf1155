use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

pub const HOMEWORK_PATH: &str = "/api/user_api/homework_statuses/";

// Allow dead_code for utilities used by other test files
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub authorization: Option<String>,
    pub query: HashMap<String, String>,
    pub body: Option<Value>,
}

#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct Recorder {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

#[allow(dead_code)]
impl Recorder {
    fn push(&self, request: RecordedRequest) {
        self.requests.lock().unwrap().push(request);
    }

    pub fn all(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

/// Serve `router` on an ephemeral local port and return its base URL
#[allow(dead_code)]
pub async fn spawn_server(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock server");
    let addr = listener.local_addr().expect("Mock server has no address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.ok();
    });
    format!("http://{}", addr)
}

/// URL on which nothing is listening
#[allow(dead_code)]
pub async fn closed_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}{}", addr, HOMEWORK_PATH)
}

// =============================================================================
// PRACTICUM MOCK
// =============================================================================

#[derive(Clone)]
struct PracticumMock {
    status: StatusCode,
    body: String,
    delay: Duration,
    recorder: Recorder,
}

async fn homework_statuses(
    State(mock): State<PracticumMock>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> (StatusCode, String) {
    mock.recorder.push(RecordedRequest {
        path: HOMEWORK_PATH.to_string(),
        authorization: headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        query,
        body: None,
    });
    if !mock.delay.is_zero() {
        tokio::time::sleep(mock.delay).await;
    }
    (mock.status, mock.body.clone())
}

/// Practicum endpoint answering every request with `status` and `body`.
/// Returns the full endpoint URL.
#[allow(dead_code)]
pub async fn practicum_server(status: StatusCode, body: impl Into<String>) -> (String, Recorder) {
    practicum_server_with_delay(status, body, Duration::ZERO).await
}

#[allow(dead_code)]
pub async fn practicum_server_with_delay(
    status: StatusCode,
    body: impl Into<String>,
    delay: Duration,
) -> (String, Recorder) {
    let recorder = Recorder::default();
    let mock = PracticumMock {
        status,
        body: body.into(),
        delay,
        recorder: recorder.clone(),
    };
    let router = Router::new()
        .route(HOMEWORK_PATH, get(homework_statuses))
        .with_state(mock);
    let base = spawn_server(router).await;
    (format!("{}{}", base, HOMEWORK_PATH), recorder)
}

// =============================================================================
// TELEGRAM MOCK
// =============================================================================

#[derive(Clone)]
struct TelegramMock {
    accept: bool,
    recorder: Recorder,
}

async fn send_message(
    State(mock): State<TelegramMock>,
    Path(bot): Path<String>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    mock.recorder.push(RecordedRequest {
        path: format!("/{}/sendMessage", bot),
        authorization: None,
        query: HashMap::new(),
        body: Some(body),
    });
    if mock.accept {
        (
            StatusCode::OK,
            Json(json!({"ok": true, "result": {"message_id": 1}})),
        )
    } else {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({"ok": false, "error_code": 400, "description": "Bad Request: chat not found"})),
        )
    }
}

/// Bot API base URL; `accept = false` rejects every message
#[allow(dead_code)]
pub async fn telegram_server(accept: bool) -> (String, Recorder) {
    let recorder = Recorder::default();
    let mock = TelegramMock {
        accept,
        recorder: recorder.clone(),
    };
    let router = Router::new()
        .route("/{bot}/sendMessage", post(send_message))
        .with_state(mock);
    (spawn_server(router).await, recorder)
}

/// Text of every message the Telegram mock received
#[allow(dead_code)]
pub fn sent_texts(recorder: &Recorder) -> Vec<String> {
    recorder
        .all()
        .into_iter()
        .filter_map(|r| r.body)
        .filter_map(|b| b["text"].as_str().map(str::to_string))
        .collect()
}
