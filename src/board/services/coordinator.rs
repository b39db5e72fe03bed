//! Board mutation coordinator.

use super::{CreateTaskRequest, MoveTaskRequest};
use crate::board::domain::{
    Board, BoardDomainError, BoardResult, Column, ColumnId, FillLevel, Task, TaskId, TaskPatch,
    TaskTitle, WipPolicy, move_between_columns, reorder_within_column,
};
use mockable::Clock;
use std::sync::Arc;
use tracing::{debug, warn};

/// Owns the current board snapshot and applies every mutation to it.
///
/// Each operation either replaces the snapshot as a whole or fails with a
/// [`BoardDomainError`] and leaves it untouched.
#[derive(Debug, Clone)]
pub struct BoardCoordinator<C>
where
    C: Clock + Send + Sync,
{
    board: Board,
    clock: Arc<C>,
    policy: WipPolicy,
}

impl<C> BoardCoordinator<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a coordinator over an existing board with the default WIP
    /// policy.
    #[must_use]
    pub fn new(board: Board, clock: Arc<C>) -> Self {
        Self {
            board,
            clock,
            policy: WipPolicy::default(),
        }
    }

    /// Replaces the WIP policy.
    #[must_use]
    pub const fn with_wip_policy(mut self, policy: WipPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the current board snapshot.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the active WIP policy.
    #[must_use]
    pub const fn wip_policy(&self) -> WipPolicy {
        self.policy
    }

    /// Consumes the coordinator and returns the final snapshot.
    #[must_use]
    pub fn into_board(self) -> Board {
        self.board
    }

    /// Reports whether a column can take one more task.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::ColumnNotFound`] for unknown columns.
    pub fn can_accept(&self, column_id: &ColumnId) -> BoardResult<bool> {
        self.find_column(column_id)
            .map(|column| self.policy.can_accept(column))
    }

    /// Classifies a column's fill level for display.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::ColumnNotFound`] for unknown columns.
    pub fn fill_level(&self, column_id: &ColumnId) -> BoardResult<FillLevel> {
        self.find_column(column_id)
            .map(|column| self.policy.fill_level(column))
    }

    /// Moves a task within its column or into another column.
    ///
    /// Moves into a different column are gated by the WIP policy; reordering
    /// inside a column never is. A cross-column move also sets the task's
    /// status to the destination column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::ColumnNotFound`] when either column is
    /// missing, [`BoardDomainError::WipLimitExceeded`] when the destination is
    /// full, [`BoardDomainError::TaskNotFound`] when the source column does not
    /// list the task, or [`BoardDomainError::InvalidIndex`] for an
    /// out-of-range destination index.
    pub fn move_task(&mut self, request: MoveTaskRequest) -> BoardResult<&Board> {
        let is_reorder = request.is_reorder();
        let MoveTaskRequest {
            task_id,
            from_column,
            to_column,
            destination_index,
        } = request;

        let source = self.find_column(&from_column)?;
        let destination = self.find_column(&to_column)?;
        if !is_reorder {
            self.ensure_capacity(destination, &task_id)?;
        }
        let from_index = source
            .position_of(&task_id)
            .ok_or_else(|| BoardDomainError::TaskNotFound(task_id.clone()))?;

        let mut next = self.board.clone();
        if is_reorder {
            let reordered =
                reorder_within_column(source.task_ids(), from_index, destination_index)?;
            next.column_mut(&from_column)?.replace_task_ids(reordered);
        } else {
            let (new_source, new_destination) = move_between_columns(
                source.task_ids(),
                destination.task_ids(),
                from_index,
                destination_index,
            )?;
            next.column_mut(&from_column)?.replace_task_ids(new_source);
            next.column_mut(&to_column)?
                .replace_task_ids(new_destination);
            next.task_mut(&task_id)?.set_status(to_column.clone());
        }

        debug!(
            task_id = %task_id,
            from_column = %from_column,
            to_column = %to_column,
            from_index,
            destination_index,
            "moved task"
        );
        Ok(self.commit(next))
    }

    /// Adds a task record and appends it to the end of a column.
    ///
    /// An existing record with the same identifier is overwritten and any
    /// earlier listing of it is dropped, so the task ends up listed once. The
    /// stored status is the target column. No WIP check is applied.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::ColumnNotFound`] when the column is missing.
    pub fn create_task(&mut self, column_id: ColumnId, mut task: Task) -> BoardResult<&Board> {
        self.find_column(&column_id)?;
        let task_id = task.id().clone();

        let mut next = self.board.clone();
        next.unlist_everywhere(&task_id);
        next.column_mut(&column_id)?.push_task(task_id.clone());
        task.set_status(column_id);
        let replaced = next.insert_task(task).is_some();

        debug!(task_id = %task_id, replaced, "created task");
        Ok(self.commit(next))
    }

    /// Drafts a task from a request and appends it to the requested column.
    ///
    /// The identifier and creation time are minted here. Returns the stored
    /// task.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTaskTitle`] for a blank title or
    /// [`BoardDomainError::ColumnNotFound`] when the column is missing.
    pub fn create_task_in_column(&mut self, request: CreateTaskRequest) -> BoardResult<Task> {
        let CreateTaskRequest {
            column_id,
            title,
            description,
            priority,
            assignee,
            tags,
            due_date,
        } = request;

        let mut task = Task::draft(column_id.clone(), TaskTitle::new(title)?, &*self.clock)
            .with_priority(priority)
            .with_tags(tags);
        if let Some(text) = description {
            task = task.with_description(text);
        }
        if let Some(name) = assignee {
            task = task.with_assignee(name);
        }
        if let Some(due) = due_date {
            task = task.with_due_date(due);
        }

        let created = task.clone();
        self.create_task(column_id, task)?;
        Ok(created)
    }

    /// Merges a patch into an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::TaskNotFound`] when the task does not exist
    /// or [`BoardDomainError::EmptyTaskTitle`] when the patch blanks the title.
    pub fn update_task(&mut self, task_id: &TaskId, patch: TaskPatch) -> BoardResult<&Board> {
        let mut task = self
            .board
            .task(task_id)
            .cloned()
            .ok_or_else(|| BoardDomainError::TaskNotFound(task_id.clone()))?;
        task.apply_patch(patch)?;

        self.board.insert_task(task);
        debug!(task_id = %task_id, "updated task");
        Ok(&self.board)
    }

    /// Removes a task record together with its column listing.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::TaskNotFound`] when the task does not exist.
    pub fn delete_task(&mut self, task_id: &TaskId) -> BoardResult<&Board> {
        if self.board.task(task_id).is_none() {
            return Err(BoardDomainError::TaskNotFound(task_id.clone()));
        }

        self.board.detach_task(task_id);
        debug!(task_id = %task_id, "deleted task");
        Ok(&self.board)
    }

    fn find_column(&self, column_id: &ColumnId) -> BoardResult<&Column> {
        self.board
            .column(column_id)
            .ok_or_else(|| BoardDomainError::ColumnNotFound(column_id.clone()))
    }

    fn ensure_capacity(&self, column: &Column, task_id: &TaskId) -> BoardResult<()> {
        match column.max_tasks() {
            Some(max_tasks) if !self.policy.can_accept(column) => {
                warn!(
                    task_id = %task_id,
                    column_id = %column.id(),
                    max_tasks,
                    "move rejected: WIP limit reached"
                );
                Err(BoardDomainError::WipLimitExceeded {
                    column_id: column.id().clone(),
                    max_tasks,
                })
            }
            _ => Ok(()),
        }
    }

    fn commit(&mut self, next: Board) -> &Board {
        debug_assert!(
            next.check_invariants().is_ok(),
            "board mutation broke an invariant"
        );
        self.board = next;
        &self.board
    }
}
