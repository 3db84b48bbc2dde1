// Application logic for the time-entry tracker.
//
// Purpose
// - Drive the entry state machine: Open --stop--> Closed, terminal.
//
// Responsibilities
// - Validate the referenced task on start; the repository settles the
//   single-active-entry race atomically.
// - Keep a closed entry closed and let notes change in any state.
// - Entry lifecycle stays independent of the task: a deleted task does not
//   block stopping, annotating or deleting its entries.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::modules::tasks::core::ports::TaskRepository;
use crate::modules::time_entries::core::model::TimeEntry;
use crate::modules::time_entries::core::ports::{
    CloseOutcome, InsertOpenError, TimeEntryRepository,
};
use crate::shared::core::errors::DomainError;

pub struct TimeEntryService<T, E>
where
    T: TaskRepository,
    E: TimeEntryRepository,
{
    tasks: Arc<T>,
    entries: Arc<E>,
}

impl<T, E> TimeEntryService<T, E>
where
    T: TaskRepository,
    E: TimeEntryRepository,
{
    pub fn new(tasks: Arc<T>, entries: Arc<E>) -> Self {
        Self { tasks, entries }
    }

    pub async fn list(&self, user_id: &str) -> Result<Vec<TimeEntry>, DomainError> {
        Ok(self.entries.list_by_user(user_id).await?)
    }

    pub async fn active(&self, user_id: &str) -> Result<Option<TimeEntry>, DomainError> {
        Ok(self.entries.find_active(user_id).await?)
    }

    pub async fn start(&self, user_id: &str, task_id: &str) -> Result<TimeEntry, DomainError> {
        self.tasks
            .find(user_id, task_id)
            .await?
            .ok_or(DomainError::NotFound("task"))?;

        let entry = TimeEntry {
            id: Uuid::now_v7().to_string(),
            user_id: user_id.to_string(),
            task_id: task_id.to_string(),
            start_time: Utc::now().timestamp_millis(),
            end_time: None,
            notes: None,
        };
        let entry = self.entries.insert_open(entry).await.map_err(|e| match e {
            InsertOpenError::ActiveEntryExists => {
                DomainError::Conflict("active entry already exists")
            }
            InsertOpenError::Backend(source) => DomainError::Storage(source),
        })?;
        tracing::info!(entry_id = %entry.id, %task_id, "time entry started");
        Ok(entry)
    }

    pub async fn stop(&self, user_id: &str, entry_id: &str) -> Result<TimeEntry, DomainError> {
        let end_time = Utc::now().timestamp_millis();
        match self.entries.close(user_id, entry_id, end_time).await? {
            CloseOutcome::Closed(entry) => {
                tracing::info!(%entry_id, "time entry stopped");
                Ok(entry)
            }
            CloseOutcome::AlreadyClosed => Err(DomainError::Conflict("time entry already stopped")),
            CloseOutcome::Missing => Err(DomainError::NotFound("time entry")),
        }
    }

    pub async fn update_notes(
        &self,
        user_id: &str,
        entry_id: &str,
        notes: Option<String>,
    ) -> Result<TimeEntry, DomainError> {
        self.entries
            .set_notes(user_id, entry_id, notes)
            .await?
            .ok_or(DomainError::NotFound("time entry"))
    }

    pub async fn delete(&self, user_id: &str, entry_id: &str) -> Result<(), DomainError> {
        if !self.entries.delete(user_id, entry_id).await? {
            return Err(DomainError::NotFound("time entry"));
        }
        Ok(())
    }
}
