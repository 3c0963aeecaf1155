use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum NotifierError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Timeout")]
    Timeout,
    #[error("Chat API rejected the message ({status}): {description}")]
    Rejected { status: u16, description: String },
}

impl From<reqwest::Error> for NotifierError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Network(err.to_string())
        }
    }
}

/// Capability to deliver a text message to a chat
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, chat_id: &str, text: &str) -> Result<(), NotifierError>;
}
