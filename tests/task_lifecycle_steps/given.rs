//! Given steps for task lifecycle BDD scenarios.

use super::world::{TaskLifecycleWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use tasktrack::task::services::CreateTaskRequest;

#[given("an empty task store")]
fn empty_store(world: &mut TaskLifecycleWorld) {
    world.last_task = None;
    world.last_error = None;
}

#[given(r#"a task titled "{title}" with priority "{priority}""#)]
fn task_with_priority(
    world: &mut TaskLifecycleWorld,
    title: String,
    priority: String,
) -> Result<(), eyre::Report> {
    let created = run_async(
        world
            .service
            .create(Some(CreateTaskRequest::new(title).with_priority(priority))),
    )
    .wrap_err("create task for scenario setup")?;
    world.last_task = Some(created);
    Ok(())
}

#[given("the latest task has been completed")]
fn latest_task_completed(world: &mut TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let id = world.task()?.id();
    let completed =
        run_async(world.service.complete(id)).wrap_err("complete task for scenario setup")?;
    world.last_task = Some(completed);
    Ok(())
}
