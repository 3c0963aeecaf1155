use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Review statuses reported by the homework API
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    pub const ALL: [HomeworkStatus; 3] = [Self::Approved, Self::Reviewing, Self::Rejected];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Reviewing => "reviewing",
            Self::Rejected => "rejected",
        }
    }

    /// Operator-facing text for this status
    pub fn verdict(&self) -> &'static str {
        match self {
            Self::Approved => "The work has been reviewed: the reviewer liked everything. Hooray!",
            Self::Reviewing => "The work has been taken for review.",
            Self::Rejected => "The work has been reviewed: the reviewer has remarks.",
        }
    }
}

impl FromStr for HomeworkStatus {
    type Err = HomeworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| HomeworkError::UnknownStatus(s.to_string()))
    }
}

/// Body of a successful poll, after shape validation
#[derive(Debug, Clone, PartialEq)]
pub struct PollResponse {
    pub current_date: i64,
    pub homeworks: Vec<serde_json::Value>,
}

impl PollResponse {
    /// Most recent submission; the API lists newest first
    pub fn latest(&self) -> Option<&serde_json::Value> {
        self.homeworks.first()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub homework_name: String,
    pub status: String,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum HomeworkError {
    #[error("Invalid response shape: {0}")]
    InvalidResponseShape(String),
    #[error("Missing key \"{0}\" in submission")]
    MissingField(&'static str),
    #[error("Unknown homework status: {0}")]
    UnknownStatus(String),
}
