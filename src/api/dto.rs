//! Response bodies and request-body parsing.

use crate::task::domain::{Priority, Task};
use chrono::SecondsFormat;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::ApiError;

/// Wire representation of a task, shared by every endpoint returning one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskResponse {
    /// Task identifier.
    pub id: i64,
    /// Title.
    pub title: String,
    /// Description, empty when none was given.
    pub description: String,
    /// Priority name.
    pub priority: Priority,
    /// Completion flag.
    pub completed: bool,
    /// Creation time as RFC 3339 UTC with microseconds.
    pub created_at: String,
}

impl From<&Task> for TaskResponse {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id().value(),
            title: task.title().to_owned(),
            description: task.description().to_owned(),
            priority: task.priority(),
            completed: task.is_completed(),
            created_at: task
                .created_at()
                .to_rfc3339_opts(SecondsFormat::Micros, true),
        }
    }
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self::from(&task)
    }
}

/// Plain confirmation body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageResponse {
    /// Human-readable message.
    pub message: &'static str,
}

/// Error body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

/// Parses an optional JSON request body.
///
/// An empty (or whitespace-only) body, a literal `null` and any JSON value
/// that is not an object all yield `Ok(None)`, so they are validated like a
/// request that supplied no fields.
///
/// # Errors
///
/// Returns [`ApiError::BadRequest`] when the body is not valid JSON or an
/// object field has the wrong type.
pub fn parse_json_body<T: DeserializeOwned>(body: &[u8]) -> Result<Option<T>, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    let value = serde_json::from_slice::<Value>(body).map_err(invalid_body)?;
    if !value.is_object() {
        return Ok(None);
    }
    serde_json::from_value(value).map(Some).map_err(invalid_body)
}

fn invalid_body(err: serde_json::Error) -> ApiError {
    ApiError::BadRequest(format!("Invalid JSON body: {err}"))
}
