use crate::{Board, Column, ColumnId, Comment, Task, TaskId};
use chrono::{DateTime, Utc};
use fjnotes_core::FjnotesResult;

/// Operations a presentation layer drives the board through.
///
/// Every mutating call returns `Ok(Some(_))` when it changed the board,
/// `Ok(None)` when its target no longer exists or nothing would change,
/// and `Err(Validation)` when the input is unusable. Only the first case
/// records history and flushes to storage.
pub trait BoardOperations {
    fn board(&self) -> &Board;

    // Column operations
    fn add_column(&mut self, title: &str) -> FjnotesResult<Option<Column>>;
    fn delete_column(&mut self, column_id: ColumnId) -> FjnotesResult<Option<Column>>;

    // Task operations
    fn add_task(
        &mut self,
        column_id: ColumnId,
        title: &str,
        due_date: Option<DateTime<Utc>>,
    ) -> FjnotesResult<Option<Task>>;
    fn delete_task(&mut self, task_id: TaskId, column_id: ColumnId) -> FjnotesResult<Option<Task>>;
    fn move_task(
        &mut self,
        task_id: TaskId,
        from_column_id: ColumnId,
        to_column_id: ColumnId,
        position: Option<usize>,
    ) -> FjnotesResult<Option<Task>>;
    fn update_progress(
        &mut self,
        task_id: TaskId,
        column_id: ColumnId,
        input: &str,
    ) -> FjnotesResult<Option<Task>>;
    fn cycle_priority(&mut self, task_id: TaskId, column_id: ColumnId)
        -> FjnotesResult<Option<Task>>;
    fn rename_task(
        &mut self,
        task_id: TaskId,
        column_id: ColumnId,
        title: &str,
    ) -> FjnotesResult<Option<Task>>;
    fn add_comment(
        &mut self,
        task_id: TaskId,
        column_id: ColumnId,
        author: &str,
        text: &str,
    ) -> FjnotesResult<Option<Comment>>;

    // History
    fn undo(&mut self) -> FjnotesResult<bool>;
    fn redo(&mut self) -> FjnotesResult<bool>;
}
