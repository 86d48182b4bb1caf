//! HTTP error mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use super::dto::ErrorResponse;
use crate::task::domain::{Priority, TaskDomainError};
use crate::task::services::TaskServiceError;

/// Message returned for unknown task identifiers.
pub const TASK_NOT_FOUND: &str = "Task not found";

/// Errors surfaced by task handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request was malformed or failed validation (400).
    #[error("{0}")]
    BadRequest(String),

    /// The referenced task does not exist (404).
    #[error("Task not found")]
    NotFound,

    /// An unexpected failure, logged and reported without detail (500).
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Returns the HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<TaskDomainError> for ApiError {
    fn from(err: TaskDomainError) -> Self {
        let message = match err {
            TaskDomainError::MissingTitle => "Title is required".to_owned(),
            TaskDomainError::InvalidPriority(_) => {
                let names: Vec<&str> = Priority::ALL.iter().map(|p| p.as_str()).collect();
                format!("Priority must be one of: {}", names.join(", "))
            }
            TaskDomainError::EmptyUpdate => "No data provided".to_owned(),
        };
        Self::BadRequest(message)
    }
}

impl From<TaskServiceError> for ApiError {
    fn from(err: TaskServiceError) -> Self {
        match err {
            TaskServiceError::Validation(domain) => Self::from(domain),
            TaskServiceError::NotFound(_) => Self::NotFound,
            TaskServiceError::Repository(repository) => Self::Internal(repository.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            Self::BadRequest(message) => message,
            Self::NotFound => TASK_NOT_FOUND.to_owned(),
            Self::Internal(detail) => {
                tracing::error!(%detail, "request failed");
                "Internal server error".to_owned()
            }
        };
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
