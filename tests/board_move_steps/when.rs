//! When steps for board movement BDD scenarios.

use super::world::BoardWorld;
use chrono::Utc;
use kanban_core::board::{
    domain::{ColumnId, Task, TaskId, TaskPatch, TaskTitle},
    services::MoveTaskRequest,
};
use rstest_bdd_macros::when;

#[when(r#"task "{task}" is moved from "{from}" to "{to}" at position {index:u64}"#)]
fn move_task(
    world: &mut BoardWorld,
    task: String,
    from: String,
    to: String,
    index: u64,
) -> Result<(), eyre::Report> {
    let request = MoveTaskRequest::new(
        TaskId::new(task)?,
        ColumnId::new(from)?,
        ColumnId::new(to)?,
        usize::try_from(index)?,
    );
    let result = world.coordinator_mut()?.move_task(request).map(|_| ());
    world.record(result);
    Ok(())
}

#[when(r#"task "{task}" is deleted"#)]
fn delete_task(world: &mut BoardWorld, task: String) -> Result<(), eyre::Report> {
    let task_id = TaskId::new(task)?;
    let result = world.coordinator_mut()?.delete_task(&task_id).map(|_| ());
    world.record(result);
    Ok(())
}

#[when(r#"task "{task}" titled "{title}" is created in "{column}""#)]
fn create_task(
    world: &mut BoardWorld,
    task: String,
    title: String,
    column: String,
) -> Result<(), eyre::Report> {
    let column_id = ColumnId::new(column)?;
    let record = Task::new(
        TaskId::new(task)?,
        TaskTitle::new(title)?,
        column_id.clone(),
        Utc::now(),
    );
    let result = world
        .coordinator_mut()?
        .create_task(column_id, record)
        .map(|_| ());
    world.record(result);
    Ok(())
}

#[when(r#"task "{task}" is retitled "{title}""#)]
fn retitle_task(world: &mut BoardWorld, task: String, title: String) -> Result<(), eyre::Report> {
    let task_id = TaskId::new(task)?;
    let result = world
        .coordinator_mut()?
        .update_task(&task_id, TaskPatch::new().with_title(title))
        .map(|_| ());
    world.record(result);
    Ok(())
}
