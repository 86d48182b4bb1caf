//! Task endpoint handlers.
//!
//! Handlers own no state: each extracts its inputs, makes one call into the
//! injected [`TaskService`], and shapes the JSON response.

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use mockable::Clock;

use super::ApiError;
use super::dto::{MessageResponse, TaskResponse, parse_json_body};
use crate::task::domain::{TaskId, TaskStats};
use crate::task::ports::TaskRepository;
use crate::task::services::{CreateTaskRequest, ListTasksQuery, TaskService, UpdateTaskRequest};

/// Non-numeric identifiers can never name a task.
fn parse_task_id(raw: &str) -> Result<TaskId, ApiError> {
    raw.parse::<TaskId>().map_err(|_| ApiError::NotFound)
}

/// `GET /api/tasks/`
///
/// Repeated parameters keep their first value; unknown ones are ignored.
///
/// # Errors
///
/// Returns [`ApiError::Internal`] when the store fails.
pub async fn list_tasks<R, C>(
    State(service): State<TaskService<R, C>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<TaskResponse>>, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let query = ListTasksQuery::from_pairs(pairs);
    let tasks = service.list(&query).await?;
    Ok(Json(tasks.iter().map(TaskResponse::from).collect()))
}

/// `GET /api/tasks/{id}`
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] for unknown identifiers.
pub async fn get_task<R, C>(
    State(service): State<TaskService<R, C>>,
    Path(raw_id): Path<String>,
) -> Result<Json<TaskResponse>, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let id = parse_task_id(&raw_id)?;
    let task = service.get(id).await?;
    Ok(Json(TaskResponse::from(task)))
}

/// `POST /api/tasks/`
///
/// # Errors
///
/// Returns [`ApiError::BadRequest`] when the body is malformed, the title is
/// missing, or the priority is unknown.
pub async fn create_task<R, C>(
    State(service): State<TaskService<R, C>>,
    body: Bytes,
) -> Result<(StatusCode, Json<TaskResponse>), ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let request = parse_json_body::<CreateTaskRequest>(&body)?;
    let task = service.create(request).await?;
    tracing::info!(task_id = %task.id(), priority = %task.priority(), "created task");
    Ok((StatusCode::CREATED, Json(TaskResponse::from(task))))
}

/// `PUT /api/tasks/{id}`
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] for unknown identifiers, whatever the
/// body, and [`ApiError::BadRequest`] for a missing, empty or invalid body.
pub async fn update_task<R, C>(
    State(service): State<TaskService<R, C>>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> Result<Json<TaskResponse>, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let id = parse_task_id(&raw_id)?;
    // An unknown id is reported even when the body would not parse.
    service.get(id).await?;
    let request = parse_json_body::<UpdateTaskRequest>(&body)?;
    let task = service.update(id, request).await?;
    tracing::info!(task_id = %id, "updated task");
    Ok(Json(TaskResponse::from(task)))
}

/// `PATCH /api/tasks/{id}/complete`
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] for unknown identifiers.
pub async fn complete_task<R, C>(
    State(service): State<TaskService<R, C>>,
    Path(raw_id): Path<String>,
) -> Result<Json<TaskResponse>, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let id = parse_task_id(&raw_id)?;
    let task = service.complete(id).await?;
    tracing::info!(task_id = %id, "completed task");
    Ok(Json(TaskResponse::from(task)))
}

/// `DELETE /api/tasks/{id}`
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] for unknown identifiers.
pub async fn delete_task<R, C>(
    State(service): State<TaskService<R, C>>,
    Path(raw_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let id = parse_task_id(&raw_id)?;
    service.delete(id).await?;
    tracing::info!(task_id = %id, "deleted task");
    Ok(Json(MessageResponse {
        message: "Task deleted successfully",
    }))
}

/// `GET /api/tasks/stats`
///
/// # Errors
///
/// Returns [`ApiError::Internal`] when the store fails.
pub async fn task_stats<R, C>(
    State(service): State<TaskService<R, C>>,
) -> Result<Json<TaskStats>, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Ok(Json(service.stats().await?))
}
