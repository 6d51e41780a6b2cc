use serde::{Deserialize, Serialize};

use crate::{Board, ColumnId, HistoryManager, TaskId};

/// Pointer to the task the user currently has open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRef {
    pub task_id: TaskId,
    pub column_id: ColumnId,
}

/// Everything persisted under the storage key, written as one unit.
///
/// All fields default so that partial or older blobs still load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    #[serde(rename = "columns", default)]
    pub board: Board,
    #[serde(default)]
    pub history: HistoryManager,
    #[serde(default)]
    pub current_task: Option<TaskRef>,
}

impl Envelope {
    pub fn new(board: Board, history: HistoryManager) -> Self {
        Self {
            board,
            history,
            current_task: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_without_tasks_loads() {
        let json = r#"{
            "columns": [
                { "id": "9d3b7c2a-5e1f-4a6b-8c9d-0e1f2a3b4c5d", "title": "Para Fazer" }
            ],
            "history": { "entries": [], "cursor": 0 },
            "currentTask": null
        }"#;
        let envelope: Envelope = serde_json::from_str(json).unwrap();

        assert_eq!(envelope.board.columns.len(), 1);
        assert!(envelope.board.columns[0].tasks.is_empty());
        assert!(envelope.current_task.is_none());
    }

    #[test]
    fn test_wire_layout() {
        let mut envelope = Envelope::new(Board::with_default_columns(), HistoryManager::new());
        envelope.current_task = Some(TaskRef {
            task_id: uuid::Uuid::new_v4(),
            column_id: envelope.board.columns[0].id,
        });

        let value = serde_json::to_value(&envelope).unwrap();
        assert!(value["columns"].is_array());
        assert!(value["history"]["entries"].is_array());
        assert_eq!(value["history"]["cursor"], 0);
        assert!(value["currentTask"]["taskId"].is_string());
        assert!(value["currentTask"]["columnId"].is_string());
    }

    #[test]
    fn test_empty_object_loads_as_empty_envelope() {
        let envelope: Envelope = serde_json::from_str("{}").unwrap();
        assert!(envelope.board.is_empty());
        assert!(envelope.history.is_empty());
    }
}
