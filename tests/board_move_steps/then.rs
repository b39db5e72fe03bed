//! Then steps for board movement BDD scenarios.

use super::world::{BoardWorld, parse_task_ids};
use kanban_core::board::domain::{BoardDomainError, ColumnId, TaskId};
use rstest_bdd_macros::then;

#[then(r#"column "{column}" lists "{tasks}""#)]
fn column_lists(world: &BoardWorld, column: String, tasks: String) -> Result<(), eyre::Report> {
    let expected = parse_task_ids(&tasks)?;
    let board = world.board()?;
    let found = board
        .column(&ColumnId::new(column.as_str())?)
        .ok_or_else(|| eyre::eyre!("missing column {column}"))?;

    if found.task_ids() != expected.as_slice() {
        return Err(eyre::eyre!(
            "expected column {column} to list {expected:?}, found {:?}",
            found.task_ids()
        ));
    }
    board.check_invariants()?;
    Ok(())
}

#[then(r#"task "{task}" has status "{column}""#)]
fn task_has_status(world: &BoardWorld, task: String, column: String) -> Result<(), eyre::Report> {
    let task_id = TaskId::new(task)?;
    let stored = world
        .board()?
        .task(&task_id)
        .ok_or_else(|| eyre::eyre!("missing task {task_id}"))?;

    if stored.status().as_str() != column {
        return Err(eyre::eyre!(
            "expected status {column}, found {}",
            stored.status()
        ));
    }
    Ok(())
}

#[then(r#"task "{task}" no longer exists"#)]
fn task_no_longer_exists(world: &BoardWorld, task: String) -> Result<(), eyre::Report> {
    let task_id = TaskId::new(task)?;
    let board = world.board()?;

    if board.task(&task_id).is_some() || board.column_of(&task_id).is_some() {
        return Err(eyre::eyre!("task {task_id} is still on the board"));
    }
    Ok(())
}

#[then("the operation fails with a WIP limit error")]
fn fails_with_wip_limit(world: &BoardWorld) -> Result<(), eyre::Report> {
    match &world.last_error {
        Some(BoardDomainError::WipLimitExceeded { .. }) => Ok(()),
        other => Err(eyre::eyre!("expected WipLimitExceeded, got {other:?}")),
    }
}

#[then("the operation fails with a task not found error")]
fn fails_with_task_not_found(world: &BoardWorld) -> Result<(), eyre::Report> {
    match &world.last_error {
        Some(BoardDomainError::TaskNotFound(_)) => Ok(()),
        other => Err(eyre::eyre!("expected TaskNotFound, got {other:?}")),
    }
}
