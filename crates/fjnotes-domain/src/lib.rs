pub mod board;
pub mod column;
pub mod commands;
pub mod comment;
pub mod engine;
pub mod envelope;
pub mod history;
pub mod operations;
pub mod search;
pub mod snapshot;
pub mod task;

pub use board::Board;
pub use column::{Column, ColumnId};
pub use comment::Comment;
pub use engine::BoardEngine;
pub use envelope::{Envelope, TaskRef};
pub use history::HistoryManager;
pub use operations::BoardOperations;
pub use search::{overdue_tasks, search_tasks, TaskHit};
pub use snapshot::Snapshot;
pub use task::{Task, TaskId, TaskPriority};
