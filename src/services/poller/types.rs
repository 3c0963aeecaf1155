use crate::modules::homework::HomeworkError;
use crate::services::practicum::PracticumError;

/// Mutable loop state, owned by the polling loop and lent to each cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollState {
    /// `from_date` sent with the next request (Unix seconds)
    pub watermark: i64,
    /// Last status message successfully delivered
    pub last_message: Option<String>,
}

impl PollState {
    pub fn new(watermark: i64) -> Self {
        Self {
            watermark,
            last_message: None,
        }
    }
}

/// What a single cycle ended with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// No submissions changed since the watermark
    Idle,
    /// Latest status matches the last delivered message
    Unchanged,
    /// A status message was dispatched, or its dispatch was attempted and failed
    Notified { delivered: bool },
    /// The cycle failed; holds the diagnostic sent to the operator
    Failed(String),
}

#[derive(Debug, thiserror::Error)]
pub enum CycleError {
    #[error(transparent)]
    Api(#[from] PracticumError),
    #[error(transparent)]
    Homework(#[from] HomeworkError),
}

impl CycleError {
    /// Diagnostic text sent to the chat when a cycle fails
    pub fn operator_message(&self) -> String {
        format!("Program failure: {}", self)
    }
}
