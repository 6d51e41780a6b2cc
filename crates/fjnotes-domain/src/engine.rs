//! The mutation engine.
//!
//! `BoardEngine` owns the board, its history, and the storage adapter. Each
//! successful change is snapshotted into the history and the whole envelope
//! is flushed to storage before the call returns. Storage failures never
//! undo an in-memory change; they are kept for the caller to report.

use crate::commands::{
    AddComment, Command, CommandContext, CreateColumn, CreateTask, CyclePriority, DeleteColumn,
    DeleteTask, MoveTask, RenameTask, UpdateProgress,
};
use crate::search::{overdue_tasks, search_tasks};
use crate::{
    Board, BoardOperations, Column, ColumnId, Comment, Envelope, HistoryManager, Snapshot, Task,
    TaskHit, TaskId, TaskRef,
};
use chrono::{DateTime, NaiveDate, Utc};
use fjnotes_core::{AppConfig, FjnotesError, FjnotesResult};
use fjnotes_persistence::{KeyValueStore, Loaded, StateAdapter};

pub struct BoardEngine<S> {
    state: Envelope,
    adapter: StateAdapter<S>,
    flush_error: Option<FjnotesError>,
}

impl<S: KeyValueStore> BoardEngine<S> {
    /// Load the persisted envelope from `store`, or start a default board.
    ///
    /// When nothing is stored yet, the default board is recorded as the first
    /// history entry and flushed right away. When the stored envelope cannot
    /// be read, the default board is only recorded: the stored bytes stay
    /// untouched until the first change. A loaded board with no history gets
    /// its current state recorded as the baseline.
    pub fn open(store: S, history_limit: usize) -> FjnotesResult<Self> {
        let adapter = StateAdapter::new(store);
        let loaded: Loaded<Envelope> = adapter.load();
        let mut engine = Self {
            state: Envelope::new(
                Board::with_default_columns(),
                HistoryManager::with_capacity(history_limit),
            ),
            adapter,
            flush_error: None,
        };

        match loaded {
            Loaded::Found(mut state) => {
                state.history.set_capacity(history_limit);
                if state.history.is_empty() {
                    state.history.record(Snapshot::capture(&state.board)?);
                }
                engine.state = state;
                engine.refresh_current_task();
                tracing::info!(
                    "Loaded board with {} columns, {} tasks, {} history entries",
                    engine.state.board.columns.len(),
                    engine.state.board.task_count(),
                    engine.state.history.len()
                );
            }
            Loaded::Missing => {
                tracing::info!("No saved state, starting with the default board");
                engine.commit()?;
            }
            Loaded::Unreadable => {
                tracing::warn!(
                    "Saved state is unreadable, showing the default board without saving"
                );
                let snapshot = Snapshot::capture(&engine.state.board)?;
                engine.state.history.record(snapshot);
            }
        }

        Ok(engine)
    }

    pub fn with_config(store: S, config: &AppConfig) -> FjnotesResult<Self> {
        Self::open(store, config.effective_history_limit())
    }

    pub fn history(&self) -> &HistoryManager {
        &self.state.history
    }

    pub fn envelope(&self) -> &Envelope {
        &self.state
    }

    pub fn can_undo(&self) -> bool {
        self.state.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.state.history.can_redo()
    }

    /// The most recent storage failure, if the latest flush did not succeed.
    pub fn take_flush_error(&mut self) -> Option<FjnotesError> {
        self.flush_error.take()
    }

    pub fn current_task(&self) -> Option<TaskRef> {
        self.state.current_task
    }

    /// Point the UI selection at a task. Unknown tasks are ignored.
    /// Selection is persisted but never enters the undo history.
    pub fn set_current_task(&mut self, task_id: TaskId, column_id: ColumnId) -> bool {
        if self.state.board.task(column_id, task_id).is_none() {
            tracing::debug!("Ignoring selection of unknown task {}", task_id);
            return false;
        }
        self.state.current_task = Some(TaskRef { task_id, column_id });
        self.flush();
        true
    }

    pub fn clear_current_task(&mut self) {
        if self.state.current_task.take().is_some() {
            self.flush();
        }
    }

    pub fn search(&self, query: &str) -> Vec<TaskHit<'_>> {
        search_tasks(&self.state.board, query)
    }

    pub fn overdue_tasks(&self, today: NaiveDate) -> Vec<TaskHit<'_>> {
        overdue_tasks(&self.state.board, today)
    }

    pub fn store(&self) -> &S {
        self.adapter.backend()
    }

    pub fn into_store(self) -> S {
        self.adapter.into_backend()
    }

    fn run<C: Command>(&mut self, command: C) -> FjnotesResult<Option<C::Output>> {
        let description = command.description();
        let mut context = CommandContext {
            board: &mut self.state.board,
        };

        let output = match command.execute(&mut context) {
            Ok(output) => output,
            Err(e) => {
                tracing::debug!("Rejected '{}': {}", description, e);
                return Err(e);
            }
        };

        match output {
            Some(_) => {
                self.commit()?;
                tracing::debug!("Applied '{}'", description);
            }
            None => tracing::debug!("No change for '{}'", description),
        }
        Ok(output)
    }

    fn commit(&mut self) -> FjnotesResult<()> {
        let snapshot = Snapshot::capture(&self.state.board)?;
        self.state.history.record(snapshot);
        self.refresh_current_task();
        self.flush();
        Ok(())
    }

    fn restore(&mut self, board: Board) {
        self.state.board = board;
        self.refresh_current_task();
        self.flush();
    }

    fn flush(&mut self) {
        match self.adapter.store(&self.state) {
            Ok(()) => self.flush_error = None,
            Err(e) => {
                tracing::warn!("Failed to persist board state: {}", e);
                self.flush_error = Some(e);
            }
        }
    }

    // Follow the selected task across moves; drop it once it is gone.
    fn refresh_current_task(&mut self) {
        if let Some(current) = self.state.current_task {
            self.state.current_task = self
                .state
                .board
                .locate_task(current.task_id)
                .map(|column_id| TaskRef {
                    task_id: current.task_id,
                    column_id,
                });
        }
    }
}

impl<S: KeyValueStore> BoardOperations for BoardEngine<S> {
    fn board(&self) -> &Board {
        &self.state.board
    }

    fn add_column(&mut self, title: &str) -> FjnotesResult<Option<Column>> {
        self.run(CreateColumn {
            title: title.to_string(),
        })
    }

    fn delete_column(&mut self, column_id: ColumnId) -> FjnotesResult<Option<Column>> {
        self.run(DeleteColumn { column_id })
    }

    fn add_task(
        &mut self,
        column_id: ColumnId,
        title: &str,
        due_date: Option<DateTime<Utc>>,
    ) -> FjnotesResult<Option<Task>> {
        self.run(CreateTask {
            column_id,
            title: title.to_string(),
            due_date,
        })
    }

    fn delete_task(&mut self, task_id: TaskId, column_id: ColumnId) -> FjnotesResult<Option<Task>> {
        self.run(DeleteTask { task_id, column_id })
    }

    fn move_task(
        &mut self,
        task_id: TaskId,
        from_column_id: ColumnId,
        to_column_id: ColumnId,
        position: Option<usize>,
    ) -> FjnotesResult<Option<Task>> {
        self.run(MoveTask {
            task_id,
            from_column_id,
            to_column_id,
            position,
        })
    }

    fn update_progress(
        &mut self,
        task_id: TaskId,
        column_id: ColumnId,
        input: &str,
    ) -> FjnotesResult<Option<Task>> {
        self.run(UpdateProgress {
            task_id,
            column_id,
            input: input.to_string(),
        })
    }

    fn cycle_priority(
        &mut self,
        task_id: TaskId,
        column_id: ColumnId,
    ) -> FjnotesResult<Option<Task>> {
        self.run(CyclePriority { task_id, column_id })
    }

    fn rename_task(
        &mut self,
        task_id: TaskId,
        column_id: ColumnId,
        title: &str,
    ) -> FjnotesResult<Option<Task>> {
        self.run(RenameTask {
            task_id,
            column_id,
            title: title.to_string(),
        })
    }

    fn add_comment(
        &mut self,
        task_id: TaskId,
        column_id: ColumnId,
        author: &str,
        text: &str,
    ) -> FjnotesResult<Option<Comment>> {
        self.run(AddComment {
            task_id,
            column_id,
            author: author.to_string(),
            text: text.to_string(),
        })
    }

    fn undo(&mut self) -> FjnotesResult<bool> {
        let restored = match self.state.history.undo() {
            Some(snapshot) => snapshot.restore(),
            None => {
                tracing::debug!("Nothing to undo");
                return Ok(false);
            }
        };
        match restored {
            Ok(board) => {
                self.restore(board);
                Ok(true)
            }
            Err(e) => {
                // keep the cursor on the entry that is still displayed
                self.state.history.redo();
                Err(e)
            }
        }
    }

    fn redo(&mut self) -> FjnotesResult<bool> {
        let restored = match self.state.history.redo() {
            Some(snapshot) => snapshot.restore(),
            None => {
                tracing::debug!("Nothing to redo");
                return Ok(false);
            }
        };
        match restored {
            Ok(board) => {
                self.restore(board);
                Ok(true)
            }
            Err(e) => {
                self.state.history.undo();
                Err(e)
            }
        }
    }
}
