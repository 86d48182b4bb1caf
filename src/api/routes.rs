//! Router assembly.

use axum::Router;
use axum::routing::{get, patch};
use mockable::Clock;
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::task::ports::TaskRepository;
use crate::task::services::TaskService;

/// Collection path; the trailing-slash form is served too.
pub const TASKS_PATH: &str = "/api/tasks";

/// Builds the task API router around an injected service.
///
/// ```ignore
/// let service = TaskService::new(Arc::new(InMemoryTaskRepository::new()), Arc::new(DefaultClock));
/// let router = create_router(service);
/// axum::serve(listener, router).await?;
/// ```
pub fn create_router<R, C>(service: TaskService<R, C>) -> Router
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let collection = get(handlers::list_tasks::<R, C>).post(handlers::create_task::<R, C>);

    Router::new()
        .route(TASKS_PATH, collection.clone())
        .route(&format!("{TASKS_PATH}/"), collection)
        .route(
            &format!("{TASKS_PATH}/stats"),
            get(handlers::task_stats::<R, C>),
        )
        .route(
            &format!("{TASKS_PATH}/{{id}}"),
            get(handlers::get_task::<R, C>)
                .put(handlers::update_task::<R, C>)
                .delete(handlers::delete_task::<R, C>),
        )
        .route(
            &format!("{TASKS_PATH}/{{id}}/complete"),
            patch(handlers::complete_task::<R, C>),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}
