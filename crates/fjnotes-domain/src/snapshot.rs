//! Point-in-time capture of the board.
//!
//! A `Snapshot` is the board's columns serialized to JSON text at one
//! instant. Holding the serialized form rather than a cloned `Board` keeps
//! entries immutable and lets them be written into the persisted envelope
//! verbatim.

use crate::Board;
use fjnotes_core::{FjnotesError, FjnotesResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot(String);

impl Snapshot {
    /// Serialize the full board.
    pub fn capture(board: &Board) -> FjnotesResult<Self> {
        serde_json::to_string(board)
            .map(Self)
            .map_err(|e| FjnotesError::Serialization(e.to_string()))
    }

    /// Rebuild the board this snapshot was taken from.
    pub fn restore(&self) -> FjnotesResult<Board> {
        serde_json::from_str(&self.0).map_err(|e| FjnotesError::Serialization(e.to_string()))
    }
}
