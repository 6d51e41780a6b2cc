//! Undo/redo history management.
//!
//! Snapshot-based: every committed change appends a full copy of the board,
//! and undo/redo only move a cursor over those copies. No inverse
//! operations are ever computed.

use crate::Snapshot;
use fjnotes_core::config::DEFAULT_HISTORY_LIMIT;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Bounded list of board snapshots plus a cursor.
///
/// `entries[cursor]` is the snapshot of what is currently displayed. After a
/// change is recorded the cursor sits on the newest entry; undo and redo move
/// it back and forth without adding entries.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryManager {
    /// Oldest snapshot at the front.
    entries: VecDeque<Snapshot>,

    /// Index of the displayed snapshot. Zero when `entries` is empty.
    cursor: usize,

    /// Maximum number of entries kept. Never zero.
    capacity: usize,
}

impl HistoryManager {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_LIMIT)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            cursor: 0,
            capacity: capacity.max(1),
        }
    }

    /// Record the state produced by a new change.
    ///
    /// Entries after the cursor are dropped first, so a change made after
    /// an undo invalidates the redo history. The oldest entries are evicted
    /// while the list is over capacity.
    pub fn record(&mut self, snapshot: Snapshot) {
        if !self.entries.is_empty() {
            self.entries.truncate(self.cursor + 1);
        }
        self.entries.push_back(snapshot);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
        self.cursor = self.entries.len() - 1;
    }

    /// Step back one entry. `None` when already at the oldest entry.
    pub fn undo(&mut self) -> Option<&Snapshot> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor)
    }

    /// Step forward one entry. `None` when already at the newest entry.
    pub fn redo(&mut self) -> Option<&Snapshot> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        self.entries.get(self.cursor)
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0 && !self.entries.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Snapshot at the cursor.
    pub fn current(&self) -> Option<&Snapshot> {
        self.entries.get(self.cursor)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Change the bound, evicting entries if needed.
    ///
    /// The entry at the cursor is always kept. Entries older than the cursor
    /// go first; if the list is still too long, the newest redo entries are
    /// dropped.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity.max(1);
        while self.entries.len() > self.capacity && self.cursor > 0 {
            self.entries.pop_front();
            self.cursor -= 1;
        }
        self.entries.truncate(self.capacity);
    }
}

impl Default for HistoryManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Persisted form of the history: `{ "entries": [...], "cursor": n }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryState {
    #[serde(default)]
    pub entries: Vec<Snapshot>,
    #[serde(default)]
    pub cursor: usize,
}

impl From<HistoryState> for HistoryManager {
    fn from(state: HistoryState) -> Self {
        let mut history = Self::new();
        history.entries = state.entries.into();
        history.cursor = state.cursor.min(history.entries.len().saturating_sub(1));
        history.set_capacity(history.capacity);
        history
    }
}

impl Serialize for HistoryManager {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Borrowed<'a> {
            entries: &'a VecDeque<Snapshot>,
            cursor: usize,
        }

        Borrowed {
            entries: &self.entries,
            cursor: self.cursor,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for HistoryManager {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        HistoryState::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Column};

    fn snapshot(label: &str) -> Snapshot {
        let board = Board::new(vec![Column::new(label.to_string())]);
        Snapshot::capture(&board).unwrap()
    }

    fn label(snapshot: &Snapshot) -> String {
        snapshot.restore().unwrap().columns[0].title.clone()
    }

    #[test]
    fn test_record_moves_cursor_to_newest() {
        let mut history = HistoryManager::new();
        assert!(history.is_empty());

        history.record(snapshot("a"));
        history.record(snapshot("b"));

        assert_eq!(history.len(), 2);
        assert_eq!(history.cursor(), 1);
        assert_eq!(label(history.current().unwrap()), "b");
    }

    #[test]
    fn test_undo_redo() {
        let mut history = HistoryManager::new();
        history.record(snapshot("a"));
        history.record(snapshot("b"));
        history.record(snapshot("c"));

        assert_eq!(label(history.undo().unwrap()), "b");
        assert_eq!(label(history.undo().unwrap()), "a");
        assert!(history.undo().is_none());
        assert_eq!(history.cursor(), 0);

        assert_eq!(label(history.redo().unwrap()), "b");
        assert_eq!(label(history.redo().unwrap()), "c");
        assert!(history.redo().is_none());
        assert_eq!(history.cursor(), 2);
    }

    #[test]
    fn test_undo_redo_on_empty_history() {
        let mut history = HistoryManager::new();
        assert!(history.undo().is_none());
        assert!(history.redo().is_none());
        assert_eq!(history.cursor(), 0);
    }

    #[test]
    fn test_record_after_undo_discards_redo() {
        let mut history = HistoryManager::new();
        history.record(snapshot("a"));
        history.record(snapshot("b"));
        history.record(snapshot("c"));
        history.undo();
        history.undo();

        history.record(snapshot("d"));

        assert_eq!(history.len(), 2);
        assert!(!history.can_redo());
        assert_eq!(label(history.current().unwrap()), "d");
        assert_eq!(label(history.undo().unwrap()), "a");
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut history = HistoryManager::with_capacity(3);
        for name in ["a", "b", "c", "d", "e"] {
            history.record(snapshot(name));
            assert!(history.len() <= 3);
        }

        assert_eq!(history.len(), 3);
        assert_eq!(history.cursor(), 2);
        assert_eq!(label(history.undo().unwrap()), "d");
        assert_eq!(label(history.undo().unwrap()), "c");
        assert!(history.undo().is_none());
    }

    #[test]
    fn test_default_capacity_is_fifty() {
        let mut history = HistoryManager::new();
        for i in 0..75 {
            history.record(snapshot(&i.to_string()));
        }

        assert_eq!(history.len(), 50);
        assert_eq!(history.cursor(), 49);
        while history.undo().is_some() {}
        assert_eq!(label(history.current().unwrap()), "25");
    }

    #[test]
    fn test_set_capacity_keeps_cursor_on_same_entry() {
        let mut history = HistoryManager::new();
        for name in ["a", "b", "c", "d"] {
            history.record(snapshot(name));
        }
        history.undo();

        history.set_capacity(2);

        assert_eq!(history.len(), 2);
        assert_eq!(label(history.current().unwrap()), "c");
    }

    #[test]
    fn test_set_capacity_drops_redo_entries_when_cursor_is_old() {
        let mut history = HistoryManager::new();
        for name in ["a", "b", "c", "d", "e", "f"] {
            history.record(snapshot(name));
        }
        for _ in 0..4 {
            history.undo();
        }
        assert_eq!(label(history.current().unwrap()), "b");

        history.set_capacity(3);

        assert_eq!(history.len(), 3);
        assert_eq!(history.cursor(), 0);
        assert_eq!(label(history.current().unwrap()), "b");
        assert_eq!(label(history.redo().unwrap()), "c");
        assert_eq!(label(history.redo().unwrap()), "d");
        assert!(history.redo().is_none());
    }

    #[test]
    fn test_zero_capacity_is_raised_to_one() {
        let mut history = HistoryManager::with_capacity(0);
        history.record(snapshot("a"));
        history.record(snapshot("b"));

        assert_eq!(history.capacity(), 1);
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_serialized_shape() {
        let mut history = HistoryManager::new();
        history.record(snapshot("a"));
        history.record(snapshot("b"));
        history.undo();

        let value = serde_json::to_value(&history).unwrap();
        assert_eq!(value["cursor"], 0);
        assert!(value["entries"][0].is_string());

        let restored: HistoryManager = serde_json::from_value(value).unwrap();
        assert_eq!(restored, history);
    }

    #[test]
    fn test_out_of_range_cursor_is_clamped() {
        let entries = vec![snapshot("a"), snapshot("b")];
        let json = serde_json::json!({ "entries": entries, "cursor": 9 });

        let history: HistoryManager = serde_json::from_value(json).unwrap();
        assert_eq!(history.cursor(), 1);
        assert!(!history.can_redo());
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let history: HistoryManager = serde_json::from_str("{}").unwrap();
        assert!(history.is_empty());
        assert_eq!(history.cursor(), 0);
    }
}
