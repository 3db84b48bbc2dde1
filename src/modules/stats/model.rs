use std::collections::BTreeMap;

use serde::Serialize;

/// Derived metrics over one date range. Pure data, produced by
/// `engine::summarize` and serialized as-is.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivitySummary {
    pub completed_tasks: usize,
    pub pending_tasks: usize,
    pub total_hours: f64,
    pub productivity_score: u8,
    pub tasks_by_status: StatusBreakdown,
    pub tasks_by_priority: PriorityBreakdown,
    /// Hours per local calendar day (`YYYY-MM-DD`), closed entries only.
    pub time_by_day: BTreeMap<String, f64>,
    /// Top five tasks by tracked hours, descending.
    pub time_by_task: Vec<TaskHours>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusBreakdown {
    pub todo: usize,
    pub in_progress: usize,
    pub completed: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PriorityBreakdown {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskHours {
    pub title: String,
    pub hours: f64,
}
