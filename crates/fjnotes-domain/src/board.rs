use serde::{Deserialize, Serialize};

use crate::column::{Column, ColumnId};
use crate::task::{Task, TaskId};

/// Titles of the columns a brand new board starts with.
pub const DEFAULT_COLUMN_TITLES: [&str; 3] = ["Para Fazer", "Em Progresso", "Concluído"];

/// Ordered columns with their tasks.
///
/// Serialized as a bare array of columns. The board only offers lookups;
/// id uniqueness and single ownership of tasks are maintained by the
/// commands that mutate it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    pub columns: Vec<Column>,
}

impl Board {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    pub fn with_default_columns() -> Self {
        Self::new(
            DEFAULT_COLUMN_TITLES
                .iter()
                .map(|title| Column::new(title.to_string()))
                .collect(),
        )
    }

    pub fn column(&self, column_id: ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == column_id)
    }

    pub fn column_mut(&mut self, column_id: ColumnId) -> Option<&mut Column> {
        self.columns.iter_mut().find(|c| c.id == column_id)
    }

    pub fn column_by_title(&self, title: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.title == title)
    }

    pub fn task(&self, column_id: ColumnId, task_id: TaskId) -> Option<&Task> {
        self.column(column_id).and_then(|c| c.task(task_id))
    }

    pub fn task_mut(&mut self, column_id: ColumnId, task_id: TaskId) -> Option<&mut Task> {
        self.column_mut(column_id).and_then(|c| c.task_mut(task_id))
    }

    /// Column holding `task_id`, if any column does.
    pub fn locate_task(&self, task_id: TaskId) -> Option<ColumnId> {
        self.columns
            .iter()
            .find(|c| c.task(task_id).is_some())
            .map(|c| c.id)
    }

    pub fn task_count(&self) -> usize {
        self.columns.iter().map(|c| c.tasks.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
