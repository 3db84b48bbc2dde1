// In memory implementation of the TimeEntryRepository port.
//
// Purpose
// - Support tracker tests and local development without a database.
//
// Responsibilities
// - Store entry rows in a map keyed by entry id.
// - Hold the write lock across the open-entry check and the insert, so the
//   single-active-entry guarantee survives concurrent starts.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::modules::time_entries::core::model::TimeEntry;
use crate::modules::time_entries::core::ports::{
    CloseOutcome, InsertOpenError, TimeEntryRepository,
};

#[derive(Default)]
pub struct InMemoryTimeEntryStore {
    rows: RwLock<HashMap<String, TimeEntry>>,
    is_offline: bool,
    delay_insert_ms: u64,
}

impl InMemoryTimeEntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Widens the window between the open-entry check and the insert so
    /// tests can race two starts against each other.
    pub fn set_delay_insert_ms(&mut self, ms: u64) {
        self.delay_insert_ms = ms;
    }

    fn ensure_online(&self) -> anyhow::Result<()> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Time entry store offline"));
        }
        Ok(())
    }
}

#[async_trait]
impl TimeEntryRepository for InMemoryTimeEntryStore {
    async fn list_by_user(&self, user_id: &str) -> anyhow::Result<Vec<TimeEntry>> {
        self.ensure_online()?;
        let guard = self.rows.read().await;
        let mut items: Vec<TimeEntry> = guard
            .values()
            .filter(|entry| entry.user_id == user_id)
            .cloned()
            .collect();
        items.sort_by_key(|entry| entry.start_time);
        items.reverse();
        Ok(items)
    }

    async fn find_active(&self, user_id: &str) -> anyhow::Result<Option<TimeEntry>> {
        self.ensure_online()?;
        let guard = self.rows.read().await;
        Ok(guard
            .values()
            .find(|entry| entry.user_id == user_id && entry.is_open())
            .cloned())
    }

    async fn insert_open(&self, entry: TimeEntry) -> Result<TimeEntry, InsertOpenError> {
        self.ensure_online()?;
        let mut guard = self.rows.write().await;
        let already_open = guard
            .values()
            .any(|row| row.user_id == entry.user_id && row.is_open());
        if already_open {
            return Err(InsertOpenError::ActiveEntryExists);
        }
        if self.delay_insert_ms > 0 {
            tokio::time::sleep(std::time::Duration::from_millis(self.delay_insert_ms)).await;
        }
        guard.insert(entry.id.clone(), entry.clone());
        Ok(entry)
    }

    async fn close(
        &self,
        user_id: &str,
        entry_id: &str,
        end_time: i64,
    ) -> anyhow::Result<CloseOutcome> {
        self.ensure_online()?;
        let mut guard = self.rows.write().await;
        let Some(entry) = guard
            .get_mut(entry_id)
            .filter(|entry| entry.user_id == user_id)
        else {
            return Ok(CloseOutcome::Missing);
        };
        if !entry.is_open() {
            return Ok(CloseOutcome::AlreadyClosed);
        }
        // Clock skew guard: the end stamp never precedes the start.
        entry.end_time = Some(end_time.max(entry.start_time));
        Ok(CloseOutcome::Closed(entry.clone()))
    }

    async fn set_notes(
        &self,
        user_id: &str,
        entry_id: &str,
        notes: Option<String>,
    ) -> anyhow::Result<Option<TimeEntry>> {
        self.ensure_online()?;
        let mut guard = self.rows.write().await;
        let Some(entry) = guard
            .get_mut(entry_id)
            .filter(|entry| entry.user_id == user_id)
        else {
            return Ok(None);
        };
        entry.notes = notes;
        Ok(Some(entry.clone()))
    }

    async fn delete(&self, user_id: &str, entry_id: &str) -> anyhow::Result<bool> {
        self.ensure_online()?;
        let mut guard = self.rows.write().await;
        let owned = guard
            .get(entry_id)
            .is_some_and(|entry| entry.user_id == user_id);
        if owned {
            guard.remove(entry_id);
        }
        Ok(owned)
    }
}
