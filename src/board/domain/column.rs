//! Board columns: ordered task references with an optional WIP limit.

use super::{ColumnId, TaskId};
use serde::{Deserialize, Serialize};

/// A named, ordered bucket of task references.
///
/// The order of `task_ids` is the on-screen order of the column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    id: ColumnId,
    title: String,
    color: String,
    #[serde(default)]
    task_ids: Vec<TaskId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    max_tasks: Option<usize>,
}

impl Column {
    /// Creates an empty, unlimited column.
    #[must_use]
    pub fn new(id: ColumnId, title: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            color: color.into(),
            task_ids: Vec::new(),
            max_tasks: None,
        }
    }

    /// Sets the WIP limit.
    #[must_use]
    pub const fn with_max_tasks(mut self, max_tasks: usize) -> Self {
        self.max_tasks = Some(max_tasks);
        self
    }

    /// Sets the initial task order.
    #[must_use]
    pub fn with_task_ids(mut self, task_ids: impl IntoIterator<Item = TaskId>) -> Self {
        self.task_ids = task_ids.into_iter().collect();
        self
    }

    /// Returns the column identifier.
    #[must_use]
    pub const fn id(&self) -> &ColumnId {
        &self.id
    }

    /// Returns the display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the display color.
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Returns the ordered task identifiers.
    #[must_use]
    pub fn task_ids(&self) -> &[TaskId] {
        &self.task_ids
    }

    /// Returns the WIP limit; `None` means unlimited.
    #[must_use]
    pub const fn max_tasks(&self) -> Option<usize> {
        self.max_tasks
    }

    /// Returns the number of tasks in the column.
    #[must_use]
    pub fn task_count(&self) -> usize {
        self.task_ids.len()
    }

    /// Returns the position of a task in this column.
    #[must_use]
    pub fn position_of(&self, task_id: &TaskId) -> Option<usize> {
        self.task_ids.iter().position(|id| id == task_id)
    }

    /// Returns `true` when the column lists the task.
    #[must_use]
    pub fn contains(&self, task_id: &TaskId) -> bool {
        self.task_ids.contains(task_id)
    }

    pub(crate) fn replace_task_ids(&mut self, task_ids: Vec<TaskId>) {
        self.task_ids = task_ids;
    }

    pub(crate) fn push_task(&mut self, task_id: TaskId) {
        self.task_ids.push(task_id);
    }

    pub(crate) fn remove_task(&mut self, task_id: &TaskId) {
        self.task_ids.retain(|id| id != task_id);
    }
}
