//! Domain model for the board state engine.
//!
//! Holds the value types (identifiers, tasks, columns, the board snapshot)
//! and the two pure rule sets the coordinator composes: column ordering and
//! the WIP limit policy. Nothing here owns state beyond the values
//! themselves.

mod board;
mod column;
mod error;
mod ids;
mod ordering;
mod task;
mod wip;

pub use board::Board;
pub use column::Column;
pub use error::{BoardDomainError, BoardResult, ParsePriorityError};
pub use ids::{ColumnId, TaskId, TaskTitle};
pub use ordering::{move_between_columns, reorder_within_column};
pub use task::{Priority, Task, TaskPatch};
pub use wip::{DEFAULT_APPROACHING_PERCENT, FillLevel, WipPolicy, can_accept, fill_level};

pub(crate) use task::normalize_tags;
