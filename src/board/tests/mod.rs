//! Unit tests for the board module.

mod wip_tests;

use crate::board::domain::{Board, Column, ColumnId, Task, TaskId, TaskTitle};
use chrono::Utc;

/// Column layout used to build test boards: id, listed tasks, WIP limit.
pub(super) type ColumnLayout<'a> = (&'a str, &'a [&'a str], Option<usize>);

pub(super) fn task_id(raw: &str) -> TaskId {
    TaskId::new(raw).expect("valid task id")
}

pub(super) fn column_id(raw: &str) -> ColumnId {
    ColumnId::new(raw).expect("valid column id")
}

pub(super) fn task(id: &str, status: &str) -> Task {
    Task::new(
        task_id(id),
        TaskTitle::new(format!("Task {id}")).expect("valid title"),
        column_id(status),
        Utc::now(),
    )
}

pub(super) fn column(id: &str, task_ids: &[&str], max_tasks: Option<usize>) -> Column {
    let column = Column::new(column_id(id), id.to_uppercase(), "#6b7280")
        .with_task_ids(task_ids.iter().map(|raw| task_id(raw)));
    match max_tasks {
        Some(limit) => column.with_max_tasks(limit),
        None => column,
    }
}

/// Builds a consistent board where every listed task has a record.
pub(super) fn board(layout: &[ColumnLayout<'_>]) -> Board {
    let columns = layout
        .iter()
        .map(|(id, task_ids, max_tasks)| column(id, task_ids, *max_tasks))
        .collect();
    let tasks = layout.iter().flat_map(|(id, task_ids, _)| {
        task_ids.iter().map(move |raw| task(raw, id))
    });
    Board::from_parts(columns, tasks).expect("consistent test board")
}

/// Lists a column's task ids as plain strings.
pub(super) fn listed(board: &Board, id: &str) -> Vec<String> {
    board
        .column(&column_id(id))
        .expect("column exists")
        .task_ids()
        .iter()
        .map(|task| task.as_str().to_owned())
        .collect()
}
