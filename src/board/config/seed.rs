//! JSON board seed.

use crate::board::{
    domain::{Board, BoardDomainError, Column, Task, TaskId, WipPolicy},
    services::BoardCoordinator,
};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;

/// Errors returned while loading a board seed.
#[derive(Debug, Error)]
pub enum BoardSeedError {
    /// The document is not valid seed JSON.
    #[error("invalid board seed: {0}")]
    Parse(#[from] serde_json::Error),

    /// A task is stored under a key that differs from its identifier.
    #[error("task stored under key {key} has identifier {task_id}")]
    TaskKeyMismatch {
        /// Map key used in the document.
        key: TaskId,
        /// Identifier carried by the task record.
        task_id: TaskId,
    },

    /// The seeded columns and tasks break a board invariant.
    #[error(transparent)]
    Invalid(#[from] BoardDomainError),
}

/// Initial board contents.
///
/// ```
/// use kanban_core::board::config::BoardSeed;
///
/// let seed = BoardSeed::from_json(
///     r##"{
///         "columns": [
///             {"id": "todo", "title": "To Do", "color": "#6b7280", "task_ids": [], "max_tasks": 10},
///             {"id": "done", "title": "Done", "color": "#10b981"}
///         ]
///     }"##,
/// )?;
/// let board = seed.into_board()?;
/// assert_eq!(board.columns().len(), 2);
/// # Ok::<(), kanban_core::board::config::BoardSeedError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSeed {
    columns: Vec<Column>,
    #[serde(default)]
    tasks: BTreeMap<TaskId, Task>,
    #[serde(default)]
    wip: WipPolicy,
}

impl BoardSeed {
    /// Creates a seed from columns and tasks with the default WIP policy.
    #[must_use]
    pub fn new(columns: Vec<Column>, tasks: impl IntoIterator<Item = Task>) -> Self {
        Self {
            columns,
            tasks: tasks
                .into_iter()
                .map(|task| (task.id().clone(), task))
                .collect(),
            wip: WipPolicy::default(),
        }
    }

    /// Sets the WIP policy.
    #[must_use]
    pub const fn with_wip_policy(mut self, wip: WipPolicy) -> Self {
        self.wip = wip;
        self
    }

    /// Parses a seed document.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSeedError::Parse`] for malformed JSON, blank
    /// identifiers or titles, or an out-of-range WIP threshold.
    pub fn from_json(document: &str) -> Result<Self, BoardSeedError> {
        Ok(serde_json::from_str(document)?)
    }

    /// Renders the seed as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSeedError::Parse`] if serialization fails.
    pub fn to_json(&self) -> Result<String, BoardSeedError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Returns the configured WIP policy.
    #[must_use]
    pub const fn wip_policy(&self) -> WipPolicy {
        self.wip
    }

    /// Validates the seed into a board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSeedError::TaskKeyMismatch`] when a task is keyed by the
    /// wrong identifier, or [`BoardSeedError::Invalid`] when the board
    /// invariants do not hold.
    pub fn into_board(self) -> Result<Board, BoardSeedError> {
        if let Some((key, task)) = self.tasks.iter().find(|(key, task)| *key != task.id()) {
            return Err(BoardSeedError::TaskKeyMismatch {
                key: key.clone(),
                task_id: task.id().clone(),
            });
        }
        Ok(Board::from_parts(self.columns, self.tasks.into_values())?)
    }

    /// Validates the seed and hands the board to a coordinator configured
    /// with the seed's WIP policy.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`BoardSeed::into_board`].
    pub fn into_coordinator<C>(self, clock: Arc<C>) -> Result<BoardCoordinator<C>, BoardSeedError>
    where
        C: Clock + Send + Sync,
    {
        let wip = self.wip;
        let board = self.into_board()?;
        Ok(BoardCoordinator::new(board, clock).with_wip_policy(wip))
    }
}

impl From<&Board> for BoardSeed {
    fn from(board: &Board) -> Self {
        Self::new(board.columns().to_vec(), board.tasks().values().cloned())
    }
}
