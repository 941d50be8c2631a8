//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical record the dashboard persists and displays.
//! - Provide the monotonic id source used when finalizing new tasks.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `due_date` carries an ISO `YYYY-MM-DD` calendar date.
//! - Wire field names and status strings match the persisted layout exactly.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::fmt::{Display, Formatter};

/// Stable identifier for every task.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = i64;

/// Task lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Created but not started.
    Pending,
    /// Work is underway.
    #[serde(rename = "In Progress")]
    InProgress,
    /// Finished.
    Completed,
}

impl TaskStatus {
    /// All statuses in display order.
    pub const ALL: [TaskStatus; 3] = [
        TaskStatus::Pending,
        TaskStatus::InProgress,
        TaskStatus::Completed,
    ];

    /// Wire/display string for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }

    /// Parses a wire/display string back into a status.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Pending" => Some(Self::Pending),
            "In Progress" => Some(Self::InProgress),
            "Completed" => Some(Self::Completed),
            _ => None,
        }
    }
}

impl Display for TaskStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical task record, serialized exactly as the dashboard persists it:
/// `{"id": 1, "title": ..., "description": ..., "status": "Pending", "dueDate": "2024-01-05"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    /// Non-empty, `[A-Za-z0-9 ]` only. Enforced by the form layer; the store
    /// trusts its callers.
    pub title: String,
    /// Free text, may be empty.
    pub description: String,
    pub status: TaskStatus,
    /// ISO calendar date (`YYYY-MM-DD`).
    pub due_date: String,
}

impl Task {
    /// Parses the due date as a calendar point in time.
    ///
    /// Returns `None` when the stored string is not a valid ISO date.
    pub fn due(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.due_date, "%Y-%m-%d").ok()
    }
}

/// Monotonically-increasing id source, derived from wall-clock milliseconds.
///
/// Collisions at human edit rates are ruled out by bumping past the last
/// handed-out id whenever the clock has not advanced between calls.
#[derive(Debug, Default)]
pub struct IdSource {
    last: Cell<TaskId>,
}

impl IdSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a fresh id, strictly greater than every id returned before.
    pub fn next(&self) -> TaskId {
        let now = Utc::now().timestamp_millis();
        let id = now.max(self.last.get() + 1);
        self.last.set(id);
        id
    }
}
