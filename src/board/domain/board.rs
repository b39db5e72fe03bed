//! The board aggregate: ordered columns plus the task mapping.

use super::{BoardDomainError, BoardResult, Column, ColumnId, Task, TaskId};
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

/// Full board snapshot.
///
/// Every task is listed by exactly one column, at most once, and its status
/// names that column. Boards are only built through [`Board::from_parts`],
/// which checks this, and only mutated by the board coordinator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    columns: Vec<Column>,
    tasks: BTreeMap<TaskId, Task>,
}

impl Board {
    /// Builds a board from columns and task records.
    ///
    /// # Errors
    ///
    /// Returns a [`BoardDomainError`] naming the first broken board invariant.
    pub fn from_parts(
        columns: Vec<Column>,
        tasks: impl IntoIterator<Item = Task>,
    ) -> BoardResult<Self> {
        let mut task_map = BTreeMap::new();
        for task in tasks {
            let task_id = task.id().clone();
            if task_map.insert(task_id.clone(), task).is_some() {
                return Err(BoardDomainError::DuplicateTask(task_id));
            }
        }

        let board = Self {
            columns,
            tasks: task_map,
        };
        board.check_invariants()?;
        Ok(board)
    }

    /// Builds a board with the given columns and no tasks.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::DuplicateColumn`] when two columns share an
    /// identifier, or [`BoardDomainError::UnknownTaskListed`] when a column
    /// already lists tasks.
    pub fn with_columns(columns: Vec<Column>) -> BoardResult<Self> {
        Self::from_parts(columns, Vec::new())
    }

    /// The four-stage column set used by a fresh board.
    #[must_use]
    pub fn default_columns() -> Vec<Column> {
        [
            ("todo", "To Do", "#6b7280", Some(10)),
            ("in-progress", "In Progress", "#3b82f6", Some(5)),
            ("review", "Review", "#f59e0b", Some(3)),
            ("done", "Done", "#10b981", None),
        ]
        .into_iter()
        .filter_map(|(id, title, color, max_tasks)| {
            let column = Column::new(ColumnId::new(id).ok()?, title, color);
            Some(match max_tasks {
                Some(limit) => column.with_max_tasks(limit),
                None => column,
            })
        })
        .collect()
    }

    /// Verifies the board invariants.
    ///
    /// # Errors
    ///
    /// Returns the first violation found: duplicate columns, tasks listed
    /// twice, dangling listings, status mismatches, then unlisted tasks.
    pub fn check_invariants(&self) -> BoardResult<()> {
        let mut column_ids = HashSet::new();
        let mut listed = HashSet::new();

        for column in &self.columns {
            if !column_ids.insert(column.id()) {
                return Err(BoardDomainError::DuplicateColumn(column.id().clone()));
            }
            for task_id in column.task_ids() {
                if !listed.insert(task_id) {
                    return Err(BoardDomainError::TaskListedTwice(task_id.clone()));
                }
                let task = self.tasks.get(task_id).ok_or_else(|| {
                    BoardDomainError::UnknownTaskListed {
                        column_id: column.id().clone(),
                        task_id: task_id.clone(),
                    }
                })?;
                if task.status() != column.id() {
                    return Err(BoardDomainError::StatusMismatch {
                        task_id: task_id.clone(),
                        status: task.status().clone(),
                        column_id: column.id().clone(),
                    });
                }
            }
        }

        match self.tasks.keys().find(|task_id| !listed.contains(task_id)) {
            Some(unlisted) => Err(BoardDomainError::UnlistedTask(unlisted.clone())),
            None => Ok(()),
        }
    }

    /// Returns the columns in board order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the task mapping.
    #[must_use]
    pub const fn tasks(&self) -> &BTreeMap<TaskId, Task> {
        &self.tasks
    }

    /// Finds a column by identifier.
    #[must_use]
    pub fn column(&self, column_id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|column| column.id() == column_id)
    }

    /// Finds a task by identifier.
    #[must_use]
    pub fn task(&self, task_id: &TaskId) -> Option<&Task> {
        self.tasks.get(task_id)
    }

    /// Returns the column currently listing the task.
    #[must_use]
    pub fn column_of(&self, task_id: &TaskId) -> Option<&Column> {
        self.columns.iter().find(|column| column.contains(task_id))
    }

    /// Returns the tasks of a column in display order.
    ///
    /// Listed identifiers without a task record are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::ColumnNotFound`] for unknown columns.
    pub fn tasks_in_column(&self, column_id: &ColumnId) -> BoardResult<Vec<&Task>> {
        let column = self
            .column(column_id)
            .ok_or_else(|| BoardDomainError::ColumnNotFound(column_id.clone()))?;
        Ok(column
            .task_ids()
            .iter()
            .filter_map(|task_id| self.tasks.get(task_id))
            .collect())
    }

    /// Returns the number of tasks on the board.
    #[must_use]
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    pub(crate) fn column_mut(&mut self, column_id: &ColumnId) -> BoardResult<&mut Column> {
        self.columns
            .iter_mut()
            .find(|column| column.id() == column_id)
            .ok_or_else(|| BoardDomainError::ColumnNotFound(column_id.clone()))
    }

    pub(crate) fn task_mut(&mut self, task_id: &TaskId) -> BoardResult<&mut Task> {
        self.tasks
            .get_mut(task_id)
            .ok_or_else(|| BoardDomainError::TaskNotFound(task_id.clone()))
    }

    pub(crate) fn unlist_everywhere(&mut self, task_id: &TaskId) {
        for column in &mut self.columns {
            column.remove_task(task_id);
        }
    }

    pub(crate) fn insert_task(&mut self, task: Task) -> Option<Task> {
        self.tasks.insert(task.id().clone(), task)
    }

    /// Removes a task record and every listing of it.
    pub(crate) fn detach_task(&mut self, task_id: &TaskId) -> Option<Task> {
        let removed = self.tasks.remove(task_id)?;
        self.unlist_everywhere(task_id);
        Some(removed)
    }
}
