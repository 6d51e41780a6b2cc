use chrono::NaiveDate;
use serde::Serialize;

use crate::{Board, ColumnId, Task};

/// A task found on the board, with the column that holds it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskHit<'a> {
    pub column_id: ColumnId,
    pub column_title: &'a str,
    pub task: &'a Task,
}

/// Tasks whose title contains `query`, ignoring case, in board order.
/// A blank query matches every task.
pub fn search_tasks<'a>(board: &'a Board, query: &str) -> Vec<TaskHit<'a>> {
    let needle = query.trim().to_lowercase();
    collect(board, |task| task.title.to_lowercase().contains(&needle))
}

/// Unfinished tasks whose due date is before `today`.
pub fn overdue_tasks(board: &Board, today: NaiveDate) -> Vec<TaskHit<'_>> {
    collect(board, |task| task.is_overdue(today))
}

fn collect<'a>(board: &'a Board, matches: impl Fn(&Task) -> bool) -> Vec<TaskHit<'a>> {
    board
        .columns
        .iter()
        .flat_map(|column| {
            column.tasks.iter().map(move |task| TaskHit {
                column_id: column.id,
                column_title: &column.title,
                task,
            })
        })
        .filter(|hit| matches(hit.task))
        .collect()
}
