//! Request payloads accepted by the board coordinator.

use crate::board::domain::{ColumnId, Priority, TaskId, normalize_tags};
use chrono::{DateTime, Utc};
use std::collections::BTreeSet;

/// Request to move a task within or between columns.
///
/// For a move inside one column `destination_index` is the task's final
/// position. Across columns it is an insertion index into the destination
/// as it was before the move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveTaskRequest {
    pub(crate) task_id: TaskId,
    pub(crate) from_column: ColumnId,
    pub(crate) to_column: ColumnId,
    pub(crate) destination_index: usize,
}

impl MoveTaskRequest {
    /// Creates a move request.
    #[must_use]
    pub const fn new(
        task_id: TaskId,
        from_column: ColumnId,
        to_column: ColumnId,
        destination_index: usize,
    ) -> Self {
        Self {
            task_id,
            from_column,
            to_column,
            destination_index,
        }
    }

    /// Returns `true` when the task stays in its column.
    #[must_use]
    pub fn is_reorder(&self) -> bool {
        self.from_column == self.to_column
    }
}

/// Request payload for drafting a new task into a column.
///
/// The coordinator mints the identifier and creation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    pub(crate) column_id: ColumnId,
    pub(crate) title: String,
    pub(crate) description: Option<String>,
    pub(crate) priority: Priority,
    pub(crate) assignee: Option<String>,
    pub(crate) tags: BTreeSet<String>,
    pub(crate) due_date: Option<DateTime<Utc>>,
}

impl CreateTaskRequest {
    /// Creates a request with the required fields and medium priority.
    #[must_use]
    pub fn new(column_id: ColumnId, title: impl Into<String>) -> Self {
        Self {
            column_id,
            title: title.into(),
            description: None,
            priority: Priority::default(),
            assignee: None,
            tags: BTreeSet::new(),
            due_date: None,
        }
    }

    /// Sets the description. Blank descriptions are dropped.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = non_blank(description.into());
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the assignee. Blank names are dropped.
    #[must_use]
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = non_blank(assignee.into());
        self
    }

    /// Sets the tags.
    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = String>) -> Self {
        self.tags = normalize_tags(tags);
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

fn non_blank(value: String) -> Option<String> {
    (!value.trim().is_empty()).then_some(value)
}
