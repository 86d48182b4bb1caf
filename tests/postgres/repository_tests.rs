//! Repository contract tests against a migrated `PostgreSQL` database.

use crate::postgres::cluster::{PostgresCluster, TemporaryDatabase, postgres_cluster, test_runtime};
use chrono::SubsecRound;
use mockable::DefaultClock;
use rstest::{fixture, rstest};
use tasktrack::task::{
    adapters::postgres::PostgresTaskRepository,
    domain::{NewTask, Priority, TaskChanges, TaskFilter, TaskId},
    ports::{TaskRepository, TaskRepositoryError},
};
use tokio::runtime::Runtime;

struct RepositoryContext {
    _database: TemporaryDatabase,
    repo: PostgresTaskRepository,
    rt: Runtime,
}

#[fixture]
fn context(postgres_cluster: PostgresCluster) -> RepositoryContext {
    let (database, repo) = postgres_cluster
        .temporary_database("tasks")
        .expect("temporary database");
    RepositoryContext {
        _database: database,
        repo,
        rt: test_runtime().expect("tokio runtime"),
    }
}

fn new_task(title: &str, priority: Priority) -> NewTask {
    NewTask::new(title, &DefaultClock)
        .expect("valid title")
        .with_priority(priority)
}

#[rstest]
#[ignore = "starts an embedded PostgreSQL server"]
fn insert_and_find_round_trip(context: RepositoryContext) {
    let pending = new_task("persist me", Priority::High).with_description("details");
    let created_at = pending.created_at();

    let stored = context
        .rt
        .block_on(context.repo.insert(pending))
        .expect("insert should succeed");
    let found = context
        .rt
        .block_on(context.repo.find_by_id(stored.id()))
        .expect("lookup should succeed");

    assert_eq!(found.as_ref(), Some(&stored));
    assert_eq!(stored.title(), "persist me");
    assert_eq!(stored.description(), "details");
    assert_eq!(stored.priority(), Priority::High);
    assert_eq!(stored.created_at(), created_at.trunc_subsecs(6));
}

#[rstest]
#[ignore = "starts an embedded PostgreSQL server"]
fn ids_increase_and_are_not_reused(context: RepositoryContext) {
    let first = context
        .rt
        .block_on(context.repo.insert(new_task("first", Priority::Low)))
        .expect("insert should succeed");
    context
        .rt
        .block_on(context.repo.delete(first.id()))
        .expect("delete should succeed");
    let second = context
        .rt
        .block_on(context.repo.insert(new_task("second", Priority::Low)))
        .expect("insert should succeed");

    assert!(second.id().value() > first.id().value());
}

#[rstest]
#[ignore = "starts an embedded PostgreSQL server"]
fn list_orders_newest_first_and_filters(context: RepositoryContext) {
    let high = context
        .rt
        .block_on(context.repo.insert(new_task("high", Priority::High)))
        .expect("insert should succeed");
    context
        .rt
        .block_on(context.repo.insert(new_task("low", Priority::Low)))
        .expect("insert should succeed");
    context
        .rt
        .block_on(context.repo.set_completed(high.id(), true))
        .expect("complete should succeed");

    let all = context
        .rt
        .block_on(context.repo.list(&TaskFilter::all()))
        .expect("list should succeed");
    let completed_high = context
        .rt
        .block_on(
            context
                .repo
                .list(&TaskFilter::all().with_completed(true).with_priority(Priority::High)),
        )
        .expect("list should succeed");
    let pending = context
        .rt
        .block_on(context.repo.count(&TaskFilter::all().with_completed(false)))
        .expect("count should succeed");

    let titles: Vec<&str> = all.iter().map(|task| task.title()).collect();
    assert_eq!(titles, vec!["low", "high"]);
    assert_eq!(completed_high.len(), 1);
    assert_eq!(pending, 1);
}

#[rstest]
#[ignore = "starts an embedded PostgreSQL server"]
fn update_changes_only_supplied_fields(context: RepositoryContext) {
    let stored = context
        .rt
        .block_on(
            context
                .repo
                .insert(new_task("draft", Priority::Medium).with_description("keep")),
        )
        .expect("insert should succeed");

    let updated = context
        .rt
        .block_on(context.repo.update(
            stored.id(),
            &TaskChanges {
                priority: Some(Priority::Low),
                completed: Some(true),
                ..TaskChanges::default()
            },
        ))
        .expect("update should succeed");

    assert_eq!(updated.title(), "draft");
    assert_eq!(updated.description(), "keep");
    assert_eq!(updated.priority(), Priority::Low);
    assert!(updated.is_completed());
    assert_eq!(updated.created_at(), stored.created_at());
}

#[rstest]
#[ignore = "starts an embedded PostgreSQL server"]
fn mutations_on_missing_task_report_not_found(context: RepositoryContext) {
    let missing = TaskId::new(424_242);
    let changes = TaskChanges {
        title: Some("ghost".to_owned()),
        ..TaskChanges::default()
    };

    let update = context.rt.block_on(context.repo.update(missing, &changes));
    let complete = context.rt.block_on(context.repo.set_completed(missing, true));
    let delete = context.rt.block_on(context.repo.delete(missing));

    assert!(matches!(update, Err(TaskRepositoryError::NotFound(_))));
    assert!(matches!(complete, Err(TaskRepositoryError::NotFound(_))));
    assert!(matches!(delete, Err(TaskRepositoryError::NotFound(_))));
}
