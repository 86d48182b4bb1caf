//! Service layer for task creation, lookup, mutation and statistics.

use crate::task::{
    domain::{
        NewTask, Priority, PriorityCounts, Task, TaskChanges, TaskDomainError, TaskFilter, TaskId,
        TaskStats,
    },
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;

/// Raw create payload. Fields are validated by [`TaskService::create`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CreateTaskRequest {
    /// Required, non-blank title.
    pub title: Option<String>,
    /// Optional description; empty when omitted.
    pub description: Option<String>,
    /// Optional priority name; `medium` when omitted.
    pub priority: Option<String>,
    /// Optional initial completion flag; `false` when omitted.
    pub completed: Option<bool>,
}

impl CreateTaskRequest {
    /// Creates a request carrying only a title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the priority name.
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Sets the initial completion flag.
    #[must_use]
    pub const fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }
}

/// Raw partial-update payload. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UpdateTaskRequest {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement description.
    pub description: Option<String>,
    /// Replacement completion flag.
    pub completed: Option<bool>,
    /// Replacement priority name.
    pub priority: Option<String>,
}

impl UpdateTaskRequest {
    fn into_changes(self) -> Result<TaskChanges, TaskDomainError> {
        let Self {
            title,
            description,
            completed,
            priority,
        } = self;
        let changes = TaskChanges {
            title,
            description,
            priority: priority.as_deref().map(Priority::try_from).transpose()?,
            completed,
        };
        if changes.is_empty() {
            return Err(TaskDomainError::EmptyUpdate);
        }
        Ok(changes)
    }
}

/// Raw list filters as they arrive in the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ListTasksQuery {
    /// `"true"` (any case) selects completed tasks; any other value selects
    /// pending ones.
    pub completed: Option<String>,
    /// Priority name; an empty value is ignored.
    pub priority: Option<String>,
}

impl ListTasksQuery {
    /// Builds a query from raw key/value pairs. The first occurrence of a
    /// key wins and unrecognised keys are ignored.
    #[must_use]
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "completed" if query.completed.is_none() => query.completed = Some(value),
                "priority" if query.priority.is_none() => query.priority = Some(value),
                _ => {}
            }
        }
        query
    }

    /// Converts the raw query into a store filter.
    ///
    /// Returns `None` when the query names a priority that does not exist,
    /// in which case no task can match.
    #[must_use]
    pub fn to_filter(&self) -> Option<TaskFilter> {
        let mut filter = TaskFilter::all();
        if let Some(completed) = &self.completed {
            filter = filter.with_completed(completed.eq_ignore_ascii_case("true"));
        }
        match self.priority.as_deref() {
            None | Some("") => {}
            Some(name) => filter = filter.with_priority(Priority::try_from(name).ok()?),
        }
        Some(filter)
    }
}

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Request validation failed.
    #[error(transparent)]
    Validation(#[from] TaskDomainError),
    /// The referenced task does not exist.
    #[error("task not found: {0}")]
    NotFound(TaskId),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(TaskRepositoryError),
}

impl From<TaskRepositoryError> for TaskServiceError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::NotFound(id) => Self::NotFound(id),
            other @ TaskRepositoryError::Persistence(_) => Self::Repository(other),
        }
    }
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task orchestration service.
///
/// Stateless apart from its injected repository and clock; each call performs
/// at most one read and one write, except [`TaskService::stats`] which issues
/// one count per bucket.
pub struct TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> Clone for TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Lists tasks matching `query`, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn list(&self, query: &ListTasksQuery) -> TaskServiceResult<Vec<Task>> {
        let Some(filter) = query.to_filter() else {
            tracing::debug!(?query, "unknown priority filter, nothing can match");
            return Ok(Vec::new());
        };
        Ok(self.repository.list(&filter).await?)
    }

    /// Fetches a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist.
    pub async fn get(&self, id: TaskId) -> TaskServiceResult<Task> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TaskServiceError::NotFound(id))
    }

    /// Validates `request` and stores a new task.
    ///
    /// A missing body (`None`) is treated like a body without a title.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] when the title is missing or
    /// blank, or the priority is not recognised.
    pub async fn create(&self, request: Option<CreateTaskRequest>) -> TaskServiceResult<Task> {
        let CreateTaskRequest {
            title,
            description,
            priority,
            completed,
        } = request.unwrap_or_default();

        let title_text = title.ok_or(TaskDomainError::MissingTitle)?;
        let mut new_task = NewTask::new(title_text, &*self.clock)?;
        if let Some(name) = priority {
            let parsed = Priority::try_from(name.as_str()).map_err(TaskDomainError::from)?;
            new_task = new_task.with_priority(parsed);
        }
        if let Some(text) = description {
            new_task = new_task.with_description(text);
        }
        if let Some(flag) = completed {
            new_task = new_task.with_completed(flag);
        }

        let task = self.repository.insert(new_task).await?;
        tracing::debug!(task_id = %task.id(), "task created");
        Ok(task)
    }

    /// Applies a partial update to an existing task.
    ///
    /// Existence is checked before the payload is validated, so an unknown
    /// identifier always yields [`TaskServiceError::NotFound`].
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist and
    /// [`TaskServiceError::Validation`] when the body is missing, carries no
    /// fields, or names an unknown priority.
    pub async fn update(
        &self,
        id: TaskId,
        request: Option<UpdateTaskRequest>,
    ) -> TaskServiceResult<Task> {
        if self.repository.find_by_id(id).await?.is_none() {
            return Err(TaskServiceError::NotFound(id));
        }
        let changes = request
            .ok_or(TaskDomainError::EmptyUpdate)?
            .into_changes()?;
        let task = self.repository.update(id, &changes).await?;
        tracing::debug!(task_id = %id, "task updated");
        Ok(task)
    }

    /// Marks a task as completed. Completing twice yields the same task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist.
    pub async fn complete(&self, id: TaskId) -> TaskServiceResult<Task> {
        Ok(self.repository.set_completed(id, true).await?)
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist.
    pub async fn delete(&self, id: TaskId) -> TaskServiceResult<()> {
        self.repository.delete(id).await?;
        tracing::debug!(task_id = %id, "task deleted");
        Ok(())
    }

    /// Computes aggregate counts over all tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when a count query fails.
    pub async fn stats(&self) -> TaskServiceResult<TaskStats> {
        let total = self.repository.count(&TaskFilter::all()).await?;
        let completed = self
            .repository
            .count(&TaskFilter::all().with_completed(true))
            .await?;

        let mut by_priority = PriorityCounts::default();
        for priority in Priority::ALL {
            let count = self
                .repository
                .count(&TaskFilter::all().with_priority(priority))
                .await?;
            by_priority.set(priority, count);
        }

        Ok(TaskStats {
            total,
            completed,
            pending: total.saturating_sub(completed),
            by_priority,
        })
    }
}
