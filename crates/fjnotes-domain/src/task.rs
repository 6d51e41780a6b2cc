use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::comment::Comment;

pub type TaskId = Uuid;

pub const MAX_PROGRESS: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TaskPriority {
    High,
    #[default]
    Medium,
    Low,
}

impl TaskPriority {
    /// Next priority in the fixed High → Medium → Low → High rotation.
    pub fn next(self) -> Self {
        match self {
            Self::High => Self::Medium,
            Self::Medium => Self::Low,
            Self::Low => Self::High,
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_priority")]
    pub priority: TaskPriority,
    #[serde(default, deserialize_with = "deserialize_due_date")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_progress")]
    pub progress: u8,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Task {
    pub fn new(title: String, due_date: Option<DateTime<Utc>>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            priority: TaskPriority::Medium,
            due_date,
            progress: 0,
            comments: Vec::new(),
        }
    }

    /// Store `value` clamped into 0..=100.
    pub fn set_progress(&mut self, value: i64) {
        self.progress = clamp_progress(value);
    }

    pub fn cycle_priority(&mut self) {
        self.priority = self.priority.next();
    }

    pub fn add_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
    }

    pub fn is_complete(&self) -> bool {
        self.progress >= MAX_PROGRESS
    }

    /// Due strictly before `today` and not yet complete.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        match self.due_date {
            Some(due) => due.date_naive() < today && !self.is_complete(),
            None => false,
        }
    }
}

pub fn clamp_progress(value: i64) -> u8 {
    value.clamp(0, MAX_PROGRESS as i64) as u8
}

/// Parse user-entered progress. Only integers are accepted; range is clamped.
pub fn parse_progress(input: &str) -> Option<u8> {
    input.trim().parse::<i64>().ok().map(clamp_progress)
}

// Older envelopes may hold null, out-of-range or fractional progress values
fn deserialize_progress<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<f64>::deserialize(deserializer)?;
    Ok(raw.map_or(0, |value| value.clamp(0.0, MAX_PROGRESS as f64) as u8))
}

fn deserialize_priority<'de, D>(deserializer: D) -> Result<TaskPriority, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<TaskPriority>::deserialize(deserializer)?.unwrap_or_default())
}

// Accepts full RFC 3339 timestamps and bare `YYYY-MM-DD` dates (midnight UTC).
// An empty string means no due date.
fn deserialize_due_date<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.trim().is_empty() => raw,
        _ => return Ok(None),
    };
    parse_due_date(raw.trim())
        .map(Some)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid due date '{}'", raw)))
}

fn parse_due_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
}
