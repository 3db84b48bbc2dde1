// Port describing what the tracker needs from durable storage.
//
// Purpose
// - Keep the tracker independent of any database by coding against a trait.
//
// Responsibilities
// - Carry the "at most one open entry per user" guarantee: `insert_open`
//   checks and inserts as one atomic operation. A SQL adapter would back it
//   with a partial unique index on `(user_id) WHERE end_time IS NULL`.
// - Close, annotate and delete conditionally on ownership in one step.

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::time_entries::core::model::TimeEntry;

#[derive(Debug, Error)]
pub enum InsertOpenError {
    #[error("active entry already exists")]
    ActiveEntryExists,

    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CloseOutcome {
    Closed(TimeEntry),
    AlreadyClosed,
    Missing,
}

#[async_trait]
pub trait TimeEntryRepository: Send + Sync {
    /// All entries owned by the user, newest `start_time` first.
    async fn list_by_user(&self, user_id: &str) -> anyhow::Result<Vec<TimeEntry>>;

    async fn find_active(&self, user_id: &str) -> anyhow::Result<Option<TimeEntry>>;

    /// Inserts an open entry unless the user already has one. Concurrent
    /// calls for the same user must never both succeed.
    async fn insert_open(&self, entry: TimeEntry) -> Result<TimeEntry, InsertOpenError>;

    /// Stamps the end time if the entry is owned and still open.
    async fn close(
        &self,
        user_id: &str,
        entry_id: &str,
        end_time: i64,
    ) -> anyhow::Result<CloseOutcome>;

    /// Returns `None` when no such entry exists for that owner.
    async fn set_notes(
        &self,
        user_id: &str,
        entry_id: &str,
        notes: Option<String>,
    ) -> anyhow::Result<Option<TimeEntry>>;

    /// Returns `false` when no such entry exists for that owner.
    async fn delete(&self, user_id: &str, entry_id: &str) -> anyhow::Result<bool>;
}
