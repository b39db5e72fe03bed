//! Shared world state for board movement BDD scenarios.

use std::sync::Arc;

use chrono::Utc;
use kanban_core::board::{
    domain::{Board, BoardDomainError, Column, ColumnId, Task, TaskId, TaskTitle},
    services::BoardCoordinator,
};
use mockable::DefaultClock;
use rstest::fixture;

/// Coordinator type used by the BDD world.
pub type TestCoordinator = BoardCoordinator<DefaultClock>;

/// Scenario world for board movement behaviour tests.
///
/// Given steps collect the layout; the first When step builds the
/// coordinator from it.
pub struct BoardWorld {
    pub pending_columns: Vec<Column>,
    pub pending_tasks: Vec<Task>,
    pub coordinator: Option<TestCoordinator>,
    pub last_error: Option<BoardDomainError>,
}

impl BoardWorld {
    /// Creates a world with an empty layout.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pending_columns: Vec::new(),
            pending_tasks: Vec::new(),
            coordinator: None,
            last_error: None,
        }
    }

    /// Adds a column and task records for every listed id.
    pub fn add_column(
        &mut self,
        id: &str,
        listed: &str,
        max_tasks: Option<usize>,
    ) -> Result<(), eyre::Report> {
        let column_id = ColumnId::new(id)?;
        let task_ids = parse_task_ids(listed)?;
        for task_id in &task_ids {
            self.pending_tasks.push(Task::new(
                task_id.clone(),
                TaskTitle::new(format!("Task {task_id}"))?,
                column_id.clone(),
                Utc::now(),
            ));
        }
        let column = Column::new(column_id, id.to_uppercase(), "#6b7280").with_task_ids(task_ids);
        self.pending_columns.push(match max_tasks {
            Some(limit) => column.with_max_tasks(limit),
            None => column,
        });
        Ok(())
    }

    /// Returns the coordinator, building it from the pending layout first.
    pub fn coordinator_mut(&mut self) -> Result<&mut TestCoordinator, eyre::Report> {
        if self.coordinator.is_none() {
            let board = Board::from_parts(
                std::mem::take(&mut self.pending_columns),
                std::mem::take(&mut self.pending_tasks),
            )?;
            self.coordinator = Some(BoardCoordinator::new(board, Arc::new(DefaultClock)));
        }
        self.coordinator
            .as_mut()
            .ok_or_else(|| eyre::eyre!("coordinator was not built"))
    }

    /// Returns the current board snapshot.
    pub fn board(&self) -> Result<&Board, eyre::Report> {
        self.coordinator
            .as_ref()
            .map(TestCoordinator::board)
            .ok_or_else(|| eyre::eyre!("no operation has run in this scenario"))
    }

    /// Records the outcome of a coordinator operation.
    pub fn record<T>(&mut self, result: Result<T, BoardDomainError>) {
        self.last_error = result.err();
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses a comma-separated task id list such as `"t1, t2"`.
pub fn parse_task_ids(listed: &str) -> Result<Vec<TaskId>, eyre::Report> {
    listed
        .split(',')
        .map(str::trim)
        .filter(|raw| !raw.is_empty())
        .map(|raw| TaskId::new(raw).map_err(eyre::Report::from))
        .collect()
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}
