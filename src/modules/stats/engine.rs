// Statistics over a snapshot of tasks and time entries.
//
// Purpose
// - Pure aggregation: no state, no clock, no storage. The caller supplies
//   the range and full entity lists; absent data yields zeroed metrics,
//   never an error.
//
// Responsibilities
// - Filter by range, count task outcomes, total tracked hours, blend the
//   productivity score, and bucket hours by day and by task.

use std::collections::BTreeMap;

use chrono::{DateTime, Local};

use crate::modules::stats::model::{
    ActivitySummary, PriorityBreakdown, StatusBreakdown, TaskHours,
};
use crate::modules::stats::range::DateRange;
use crate::modules::tasks::core::model::{Task, TaskPriority, TaskStatus};
use crate::modules::time_entries::core::model::TimeEntry;

/// Weight of task completion against time utilization in the score.
const COMPLETION_WEIGHT: f64 = 0.7;
const UTILIZATION_WEIGHT: f64 = 0.3;
/// A full tracked week; utilization saturates here.
const FULL_WEEK_HOURS: f64 = 40.0;
const TOP_TASKS: usize = 5;

pub fn summarize(range: DateRange, tasks: &[Task], entries: &[TimeEntry]) -> ActivitySummary {
    let in_range_tasks: Vec<&Task> = tasks
        .iter()
        .filter(|task| range.contains(task.created_at))
        .collect();
    // Entries are scoped by their start stamp; open entries stay out of the
    // hour totals below but still count as "in range".
    let in_range_entries: Vec<&TimeEntry> = entries
        .iter()
        .filter(|entry| range.contains(entry.start_time))
        .collect();

    let completed_tasks = in_range_tasks
        .iter()
        .filter(|task| task.status == TaskStatus::Completed)
        .count();
    let pending_tasks = in_range_tasks.len() - completed_tasks;

    let total_seconds: i64 = in_range_entries
        .iter()
        .filter_map(|entry| entry.end_time.map(|end| (end - entry.start_time) / 1000))
        .sum();
    let total_hours = round_tenth(total_seconds as f64 / 3600.0);

    let completion_rate = if in_range_tasks.is_empty() {
        0.0
    } else {
        completed_tasks as f64 / in_range_tasks.len() as f64
    };
    let time_utilization = (total_hours / FULL_WEEK_HOURS).min(1.0);
    let productivity_score =
        ((completion_rate * COMPLETION_WEIGHT + time_utilization * UTILIZATION_WEIGHT) * 100.0)
            .round() as u8;

    let mut tasks_by_status = StatusBreakdown::default();
    let mut tasks_by_priority = PriorityBreakdown::default();
    for task in &in_range_tasks {
        match task.status {
            TaskStatus::Todo => tasks_by_status.todo += 1,
            TaskStatus::InProgress => tasks_by_status.in_progress += 1,
            TaskStatus::Completed => tasks_by_status.completed += 1,
        }
        match task.priority {
            TaskPriority::Low => tasks_by_priority.low += 1,
            TaskPriority::Medium => tasks_by_priority.medium += 1,
            TaskPriority::High => tasks_by_priority.high += 1,
        }
    }

    ActivitySummary {
        completed_tasks,
        pending_tasks,
        total_hours,
        productivity_score,
        tasks_by_status,
        tasks_by_priority,
        time_by_day: time_by_day(&in_range_entries),
        time_by_task: time_by_task(&in_range_entries, tasks),
    }
}

fn time_by_day(entries: &[&TimeEntry]) -> BTreeMap<String, f64> {
    let mut buckets: BTreeMap<String, f64> = BTreeMap::new();
    for entry in entries {
        let Some(end) = entry.end_time else { continue };
        let Some(start) = DateTime::from_timestamp_millis(entry.start_time) else {
            continue;
        };
        // Same local timezone the range presets resolve in, so a bucket key
        // never falls outside the queried window.
        let day = start
            .with_timezone(&Local)
            .date_naive()
            .format("%Y-%m-%d")
            .to_string();
        *buckets.entry(day).or_insert(0.0) += hours_between(entry.start_time, end);
    }
    for hours in buckets.values_mut() {
        *hours = round_tenth(*hours);
    }
    buckets
}

fn time_by_task(entries: &[&TimeEntry], tasks: &[Task]) -> Vec<TaskHours> {
    // First-seen order is kept so ties resolve stably under the sort below.
    let mut totals: Vec<TaskHours> = Vec::new();
    for entry in entries {
        let Some(end) = entry.end_time else { continue };
        // Entries whose task was deleted have no title to report; skip them.
        let Some(task) = tasks.iter().find(|task| task.id == entry.task_id) else {
            continue;
        };
        let hours = hours_between(entry.start_time, end);
        match totals.iter_mut().find(|t| t.title == task.title) {
            Some(total) => total.hours += hours,
            None => totals.push(TaskHours {
                title: task.title.clone(),
                hours,
            }),
        }
    }
    for total in &mut totals {
        total.hours = round_tenth(total.hours);
    }
    totals.sort_by(|a, b| b.hours.total_cmp(&a.hours));
    totals.truncate(TOP_TASKS);
    totals
}

fn hours_between(start_ms: i64, end_ms: i64) -> f64 {
    (end_ms - start_ms) as f64 / 3_600_000.0
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
