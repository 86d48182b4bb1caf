//! Persistence failures surface as 500 responses without leaking detail.

use std::sync::Arc;

use crate::in_memory::helpers::{empty_request, json_request, send};
use async_trait::async_trait;
use axum::Router;
use axum::http::{Method, StatusCode};
use mockable::DefaultClock;
use mockall::mock;
use rstest::{fixture, rstest};
use serde_json::json;
use tasktrack::api::create_router;
use tasktrack::task::{
    domain::{NewTask, Task, TaskChanges, TaskFilter, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
    services::TaskService,
};

mock! {
    pub Repository {}

    #[async_trait]
    impl TaskRepository for Repository {
        async fn insert(&self, task: NewTask) -> TaskRepositoryResult<Task>;
        async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;
        async fn list(&self, filter: &TaskFilter) -> TaskRepositoryResult<Vec<Task>>;
        async fn update(&self, id: TaskId, changes: &TaskChanges) -> TaskRepositoryResult<Task>;
        async fn set_completed(&self, id: TaskId, completed: bool) -> TaskRepositoryResult<Task>;
        async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()>;
        async fn count(&self, filter: &TaskFilter) -> TaskRepositoryResult<u64>;
    }
}

fn outage() -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other("database unavailable"))
}

#[fixture]
fn broken_app() -> Router {
    let mut repository = MockRepository::new();
    repository.expect_insert().returning(|_| Err(outage()));
    repository.expect_find_by_id().returning(|_| Err(outage()));
    repository.expect_list().returning(|_| Err(outage()));
    repository.expect_update().returning(|_, _| Err(outage()));
    repository.expect_set_completed().returning(|_, _| Err(outage()));
    repository.expect_delete().returning(|_| Err(outage()));
    repository.expect_count().returning(|_| Err(outage()));
    create_router(TaskService::new(Arc::new(repository), Arc::new(DefaultClock)))
}

#[rstest]
#[case(Method::GET, "/api/tasks/")]
#[case(Method::GET, "/api/tasks/stats")]
#[case(Method::GET, "/api/tasks/1")]
#[case(Method::PATCH, "/api/tasks/1/complete")]
#[case(Method::DELETE, "/api/tasks/1")]
#[tokio::test]
async fn store_failure_is_internal_error(
    broken_app: Router,
    #[case] method: Method,
    #[case] uri: &str,
) {
    let (status, body) = send(&broken_app, empty_request(method, uri)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Internal server error"}));
}

#[rstest]
#[tokio::test]
async fn failed_create_is_internal_error(broken_app: Router) {
    let (status, body) = send(
        &broken_app,
        json_request(Method::POST, "/api/tasks/", &json!({"title": "lost"})),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Internal server error");
}
