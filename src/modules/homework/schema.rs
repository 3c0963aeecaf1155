use serde_json::Value;

use crate::modules::homework::model::{HomeworkError, PollResponse};

/// Check an API response against the documented shape.
///
/// Every missing key is logged before the type check, which is the only
/// thing that decides whether the response is accepted.
pub fn validate_response(response: Value) -> Result<PollResponse, HomeworkError> {
    let Value::Object(mut body) = response else {
        return Err(HomeworkError::InvalidResponseShape("not a mapping".to_string()));
    };

    let current_date = body.remove("current_date");
    if current_date.is_none() {
        tracing::error!("Key \"current_date\" is missing from the response");
    }
    let homeworks = body.remove("homeworks");
    if homeworks.is_none() {
        tracing::error!("Key \"homeworks\" is missing from the response");
    }

    let current_date = match current_date {
        Some(Value::Number(n)) => n.as_i64().ok_or_else(|| {
            HomeworkError::InvalidResponseShape(format!("\"current_date\" is not an integer: {}", n))
        })?,
        Some(other) => {
            return Err(HomeworkError::InvalidResponseShape(format!(
                "\"current_date\" has type {}, expected integer",
                type_name(&other)
            )))
        }
        None => {
            return Err(HomeworkError::InvalidResponseShape(
                "\"current_date\" is missing".to_string(),
            ))
        }
    };

    let homeworks = match homeworks {
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(HomeworkError::InvalidResponseShape(format!(
                "\"homeworks\" has type {}, expected list",
                type_name(&other)
            )))
        }
        None => {
            return Err(HomeworkError::InvalidResponseShape(
                "\"homeworks\" is missing".to_string(),
            ))
        }
    };

    Ok(PollResponse {
        current_date,
        homeworks,
    })
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "mapping",
    }
}
