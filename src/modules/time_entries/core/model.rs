use serde::{Deserialize, Serialize};

/// A tracked interval. `end_time = None` means the entry is open: tracking
/// is still running. An entry closes exactly once and never reopens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub id: String,
    pub user_id: String,
    pub task_id: String,
    pub start_time: i64,
    pub end_time: Option<i64>,
    pub notes: Option<String>,
}

impl TimeEntry {
    pub fn is_open(&self) -> bool {
        self.end_time.is_none()
    }
}
