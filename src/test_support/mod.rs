// Shared fixtures: entity builders with fixed defaults, and a fully wired
// in-memory application state for inbound/e2e tests.

use std::sync::Arc;

use crate::modules::tasks::adapters::in_memory::InMemoryTaskStore;
use crate::modules::tasks::core::model::{Task, TaskPriority, TaskStatus};
use crate::modules::tasks::service::TaskService;
use crate::modules::time_entries::adapters::in_memory::InMemoryTimeEntryStore;
use crate::modules::time_entries::core::model::TimeEntry;
use crate::modules::time_entries::service::TimeEntryService;
use crate::shared::infrastructure::identity_gate::AccountProfile;
use crate::shared::infrastructure::identity_gate::static_tokens::StaticTokenGate;
use crate::shell::state::AppState;

pub const USER_A: &str = "user-fixed-0001";
pub const USER_B: &str = "user-fixed-0002";
pub const TOKEN_A: &str = "token-0001";
pub const TOKEN_B: &str = "token-0002";

/// Application state backed by empty in-memory stores, with two known
/// bearer tokens seeded into the identity gate.
pub fn make_state() -> AppState {
    wire_state(InMemoryTaskStore::new(), InMemoryTimeEntryStore::new())
}

/// Application state whose stores reject every operation, for fault-path
/// tests over the router.
pub fn make_offline_state() -> AppState {
    let mut task_store = InMemoryTaskStore::new();
    task_store.toggle_offline();
    let mut entry_store = InMemoryTimeEntryStore::new();
    entry_store.toggle_offline();
    wire_state(task_store, entry_store)
}

fn wire_state(task_store: InMemoryTaskStore, entry_store: InMemoryTimeEntryStore) -> AppState {
    let task_store = Arc::new(task_store);
    let entry_store = Arc::new(entry_store);
    let gate = StaticTokenGate::new()
        .with_token(
            TOKEN_A,
            AccountProfile {
                user_id: USER_A.into(),
                name: "Teddy Test".into(),
                email: "teddy@example.com".into(),
            },
        )
        .with_token(
            TOKEN_B,
            AccountProfile {
                user_id: USER_B.into(),
                name: "Olga Other".into(),
                email: "olga@example.com".into(),
            },
        );

    AppState {
        identity: Arc::new(gate),
        tasks: Arc::new(TaskService::new(task_store.clone())),
        entries: Arc::new(TimeEntryService::new(task_store, entry_store)),
    }
}

pub struct TaskBuilder {
    inner: Task,
}

impl Default for TaskBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl TaskBuilder {
    pub fn new() -> Self {
        Self {
            inner: Task {
                id: "task-fixed-0001".into(),
                user_id: USER_A.into(),
                title: "Write spec".into(),
                description: None,
                status: TaskStatus::Todo,
                priority: TaskPriority::Medium,
                estimated_minutes: None,
                created_at: 1_700_000_000_000,
            },
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn user_id(mut self, v: impl Into<String>) -> Self {
        self.inner.user_id = v.into();
        self
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    pub fn description(mut self, v: impl Into<String>) -> Self {
        self.inner.description = Some(v.into());
        self
    }

    pub fn status(mut self, v: TaskStatus) -> Self {
        self.inner.status = v;
        self
    }

    pub fn priority(mut self, v: TaskPriority) -> Self {
        self.inner.priority = v;
        self
    }

    pub fn estimated_minutes(mut self, v: i64) -> Self {
        self.inner.estimated_minutes = Some(v);
        self
    }

    pub fn created_at(mut self, v: i64) -> Self {
        self.inner.created_at = v;
        self
    }

    pub fn build(self) -> Task {
        self.inner
    }
}

/// Builds an open entry by default; `end_time` closes it.
pub struct TimeEntryBuilder {
    inner: TimeEntry,
}

impl Default for TimeEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl TimeEntryBuilder {
    pub fn new() -> Self {
        Self {
            inner: TimeEntry {
                id: "te-fixed-0001".into(),
                user_id: USER_A.into(),
                task_id: "task-fixed-0001".into(),
                start_time: 1_700_000_000_000,
                end_time: None,
                notes: None,
            },
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn user_id(mut self, v: impl Into<String>) -> Self {
        self.inner.user_id = v.into();
        self
    }

    pub fn task_id(mut self, v: impl Into<String>) -> Self {
        self.inner.task_id = v.into();
        self
    }

    pub fn start_time(mut self, v: i64) -> Self {
        self.inner.start_time = v;
        self
    }

    pub fn end_time(mut self, v: i64) -> Self {
        self.inner.end_time = Some(v);
        self
    }

    pub fn notes(mut self, v: impl Into<String>) -> Self {
        self.inner.notes = Some(v.into());
        self
    }

    pub fn build(self) -> TimeEntry {
        self.inner
    }
}
