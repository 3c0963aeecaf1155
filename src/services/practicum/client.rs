use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum PracticumError {
    #[error("Request to the homework API failed: {0}")]
    Transport(String),
    #[error(
        "Homework API returned {status}. Code: {}. Message: {}",
        .code.as_deref().unwrap_or("-"),
        .message.as_deref().unwrap_or("-")
    )]
    Api {
        status: u16,
        code: Option<String>,
        message: Option<String>,
    },
    #[error("Homework API returned an unreadable body: {0}")]
    Decode(String),
}

impl PracticumError {
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

/// Source of homework status updates
#[async_trait]
pub trait HomeworkApi: Send + Sync {
    /// Fetch statuses changed since `from_date` (Unix seconds).
    ///
    /// The body is returned unvalidated; callers run it through
    /// `validate_response` before use.
    async fn fetch(&self, from_date: i64) -> Result<serde_json::Value, PracticumError>;
}

/// Practicum homework status API client
pub struct PracticumClient {
    client: Client,
    endpoint: String,
    token: String,
}

/// Error body the API sends alongside non-200 statuses
#[derive(Debug, Default, Deserialize)]
struct ApiErrorBody {
    code: Option<String>,
    message: Option<String>,
}

impl PracticumClient {
    pub fn new(endpoint: String, token: String, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
            endpoint,
            token,
        }
    }

    fn authorization(&self) -> String {
        format!("OAuth {}", self.token)
    }
}

#[async_trait]
impl HomeworkApi for PracticumClient {
    async fn fetch(&self, from_date: i64) -> Result<serde_json::Value, PracticumError> {
        let response = self
            .client
            .get(&self.endpoint)
            .header(reqwest::header::AUTHORIZATION, self.authorization())
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|e| PracticumError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| PracticumError::Transport(e.to_string()))?;

        if status != StatusCode::OK {
            let details: ApiErrorBody = serde_json::from_str(&body).unwrap_or_default();
            return Err(PracticumError::Api {
                status: status.as_u16(),
                code: details.code,
                message: details.message,
            });
        }

        tracing::info!("Homework API answered {}", status.as_u16());

        serde_json::from_str(&body).map_err(|e| PracticumError::Decode(e.to_string()))
    }
}
