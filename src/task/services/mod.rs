//! Application services for task tracking.

mod tasks;

pub use tasks::{
    CreateTaskRequest, ListTasksQuery, TaskService, TaskServiceError, TaskServiceResult,
    UpdateTaskRequest,
};
