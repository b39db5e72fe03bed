//! Error types for board validation and board mutations.

use super::{ColumnId, TaskId};
use thiserror::Error;

/// Errors returned while constructing board values or applying mutations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// An identifier was empty after trimming.
    #[error("identifier must not be empty")]
    EmptyIdentifier,

    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTaskTitle,

    /// An index fell outside the valid range of the target sequence.
    #[error("index {index} is out of range for a sequence of length {len}")]
    InvalidIndex {
        /// The rejected index.
        index: usize,
        /// Length of the sequence the index was checked against.
        len: usize,
    },

    /// The referenced column does not exist on the board.
    #[error("column not found: {0}")]
    ColumnNotFound(ColumnId),

    /// The referenced task does not exist, or is not in the claimed column.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// The destination column is already at its WIP limit.
    #[error("column {column_id} is at its WIP limit of {max_tasks}")]
    WipLimitExceeded {
        /// Column that rejected the task.
        column_id: ColumnId,
        /// Configured limit of that column.
        max_tasks: usize,
    },

    /// The approaching threshold is not a percentage.
    #[error("approaching threshold must be between 0 and 100, got {0}")]
    InvalidApproachingPercent(u8),

    /// Two columns share the same identifier.
    #[error("duplicate column identifier: {0}")]
    DuplicateColumn(ColumnId),

    /// Two task records share the same identifier.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// A task identifier is listed more than once across the board.
    #[error("task {0} is listed more than once")]
    TaskListedTwice(TaskId),

    /// A task exists in the mapping but no column lists it.
    #[error("task {0} is not listed in any column")]
    UnlistedTask(TaskId),

    /// A column lists a task identifier with no mapping entry.
    #[error("column {column_id} lists unknown task {task_id}")]
    UnknownTaskListed {
        /// Column holding the dangling reference.
        column_id: ColumnId,
        /// The dangling task identifier.
        task_id: TaskId,
    },

    /// A task's status disagrees with the column that lists it.
    #[error("task {task_id} has status {status} but is listed in {column_id}")]
    StatusMismatch {
        /// The inconsistent task.
        task_id: TaskId,
        /// Status recorded on the task.
        status: ColumnId,
        /// Column that actually lists the task.
        column_id: ColumnId,
    },
}

/// Error returned while parsing task priorities from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParsePriorityError(pub String);

/// Result type for board operations.
pub type BoardResult<T> = Result<T, BoardDomainError>;
