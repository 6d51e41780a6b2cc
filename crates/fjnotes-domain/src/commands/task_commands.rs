use super::{required_text, Command, CommandContext};
use crate::task::parse_progress;
use crate::{ColumnId, Comment, Task, TaskId};
use chrono::{DateTime, Utc};
use fjnotes_core::config::DEFAULT_AUTHOR;
use fjnotes_core::{FjnotesError, FjnotesResult};

/// Append a new task to a column
pub struct CreateTask {
    pub column_id: ColumnId,
    pub title: String,
    pub due_date: Option<DateTime<Utc>>,
}

impl Command for CreateTask {
    type Output = Task;

    fn execute(&self, context: &mut CommandContext) -> FjnotesResult<Option<Task>> {
        let title = required_text("Task title", &self.title)?;
        let Some(column) = context.board.column_mut(self.column_id) else {
            return Ok(None);
        };
        let task = Task::new(title, self.due_date);
        column.tasks.push(task.clone());
        Ok(Some(task))
    }

    fn description(&self) -> String {
        format!("Create task: '{}'", self.title.trim())
    }
}

/// Remove a task from its column
pub struct DeleteTask {
    pub task_id: TaskId,
    pub column_id: ColumnId,
}

impl Command for DeleteTask {
    type Output = Task;

    fn execute(&self, context: &mut CommandContext) -> FjnotesResult<Option<Task>> {
        let Some(column) = context.board.column_mut(self.column_id) else {
            return Ok(None);
        };
        Ok(column
            .position_of(self.task_id)
            .map(|index| column.tasks.remove(index)))
    }

    fn description(&self) -> String {
        format!("Delete task {}", self.task_id)
    }
}

/// Move a task into another column at a given position
///
/// Positions past the end of the destination append. Moving within the
/// same column is not a change.
pub struct MoveTask {
    pub task_id: TaskId,
    pub from_column_id: ColumnId,
    pub to_column_id: ColumnId,
    pub position: Option<usize>,
}

impl Command for MoveTask {
    type Output = Task;

    fn execute(&self, context: &mut CommandContext) -> FjnotesResult<Option<Task>> {
        if self.from_column_id == self.to_column_id {
            return Ok(None);
        }
        let board = &mut *context.board;
        if board.column(self.to_column_id).is_none() {
            return Ok(None);
        }
        let Some(source) = board.column_mut(self.from_column_id) else {
            return Ok(None);
        };
        let Some(index) = source.position_of(self.task_id) else {
            return Ok(None);
        };
        let task = source.tasks.remove(index);

        let Some(destination) = board.column_mut(self.to_column_id) else {
            return Err(FjnotesError::Internal(format!(
                "column {} vanished while moving task {}",
                self.to_column_id, self.task_id
            )));
        };
        let position = self
            .position
            .unwrap_or(destination.tasks.len())
            .min(destination.tasks.len());
        destination.tasks.insert(position, task.clone());
        Ok(Some(task))
    }

    fn description(&self) -> String {
        format!(
            "Move task {} from column {} to column {}",
            self.task_id, self.from_column_id, self.to_column_id
        )
    }
}

/// Set a task's progress from raw user input
pub struct UpdateProgress {
    pub task_id: TaskId,
    pub column_id: ColumnId,
    pub input: String,
}

impl Command for UpdateProgress {
    type Output = Task;

    fn execute(&self, context: &mut CommandContext) -> FjnotesResult<Option<Task>> {
        let progress = parse_progress(&self.input).ok_or_else(|| {
            FjnotesError::validation(format!("Progress must be an integer, got '{}'", self.input))
        })?;
        let Some(task) = context.board.task_mut(self.column_id, self.task_id) else {
            return Ok(None);
        };
        if task.progress == progress {
            return Ok(None);
        }
        task.set_progress(progress.into());
        Ok(Some(task.clone()))
    }

    fn description(&self) -> String {
        format!("Set progress of task {} to '{}'", self.task_id, self.input)
    }
}

/// Advance a task's priority one step through High → Medium → Low
pub struct CyclePriority {
    pub task_id: TaskId,
    pub column_id: ColumnId,
}

impl Command for CyclePriority {
    type Output = Task;

    fn execute(&self, context: &mut CommandContext) -> FjnotesResult<Option<Task>> {
        Ok(context
            .board
            .task_mut(self.column_id, self.task_id)
            .map(|task| {
                task.cycle_priority();
                task.clone()
            }))
    }

    fn description(&self) -> String {
        format!("Cycle priority of task {}", self.task_id)
    }
}

/// Replace a task's title with the trimmed new title
pub struct RenameTask {
    pub task_id: TaskId,
    pub column_id: ColumnId,
    pub title: String,
}

impl Command for RenameTask {
    type Output = Task;

    fn execute(&self, context: &mut CommandContext) -> FjnotesResult<Option<Task>> {
        let title = required_text("Task title", &self.title)?;
        let Some(task) = context.board.task_mut(self.column_id, self.task_id) else {
            return Ok(None);
        };
        if task.title == title {
            return Ok(None);
        }
        task.title = title;
        Ok(Some(task.clone()))
    }

    fn description(&self) -> String {
        format!("Rename task {} to '{}'", self.task_id, self.title.trim())
    }
}

/// Append a timestamped comment to a task
pub struct AddComment {
    pub task_id: TaskId,
    pub column_id: ColumnId,
    pub author: String,
    pub text: String,
}

impl Command for AddComment {
    type Output = Comment;

    fn execute(&self, context: &mut CommandContext) -> FjnotesResult<Option<Comment>> {
        let text = required_text("Comment", &self.text)?;
        let Some(task) = context.board.task_mut(self.column_id, self.task_id) else {
            return Ok(None);
        };
        let author = match self.author.trim() {
            "" => DEFAULT_AUTHOR.to_string(),
            author => author.to_string(),
        };
        let comment = Comment::new(author, text);
        task.add_comment(comment.clone());
        Ok(Some(comment))
    }

    fn description(&self) -> String {
        format!("Comment on task {}", self.task_id)
    }
}
