use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A note left on a task. Comments are only ever appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub author: String,
    pub text: String,
    pub date: DateTime<Utc>,
}

impl Comment {
    pub fn new(author: String, text: String) -> Self {
        Self {
            author,
            text,
            date: Utc::now(),
        }
    }
}
