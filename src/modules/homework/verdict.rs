use serde_json::Value;

use crate::modules::homework::model::{HomeworkError, HomeworkStatus, Submission};

impl Submission {
    /// Pull the name and status out of a raw submission entry.
    pub fn from_value(homework: &Value) -> Result<Self, HomeworkError> {
        let Value::Object(fields) = homework else {
            return Err(HomeworkError::InvalidResponseShape(
                "submission is not a mapping".to_string(),
            ));
        };

        let homework_name = match fields.get("homework_name").and_then(Value::as_str) {
            Some(name) => name.to_string(),
            None => {
                tracing::error!("Key \"homework_name\" is missing from the submission");
                return Err(HomeworkError::MissingField("homework_name"));
            }
        };

        let status = match fields.get("status") {
            Some(Value::String(status)) => status.clone(),
            // A non-string status can never be in the catalog
            Some(other) => return Err(HomeworkError::UnknownStatus(other.to_string())),
            None => {
                tracing::error!("Key \"status\" is missing from the submission");
                return Err(HomeworkError::MissingField("status"));
            }
        };

        Ok(Self {
            homework_name,
            status,
        })
    }

    pub fn message(&self) -> Result<String, HomeworkError> {
        let status: HomeworkStatus = self.status.parse()?;
        Ok(format!(
            "Status changed for submission \"{}\": {}",
            self.homework_name,
            status.verdict()
        ))
    }
}

/// Render the notification text for a submission, or fail if its status is
/// not one the bot knows how to describe.
pub fn parse_status(homework: &Value) -> Result<String, HomeworkError> {
    Submission::from_value(homework)?.message()
}
