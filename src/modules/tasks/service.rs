// Application logic for the task store.
//
// Purpose
// - Own task validation, defaults and ownership semantics on top of the
//   repository port.
//
// Responsibilities
// - Reject empty titles, apply status/priority defaults, stamp ids and
//   creation timestamps.
// - Surface missing or foreign-owned tasks uniformly as "not found".

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::modules::tasks::core::model::{Task, TaskDraft, UpdateTask};
use crate::modules::tasks::core::ports::TaskRepository;
use crate::shared::core::errors::DomainError;

pub struct TaskService<R: TaskRepository> {
    repo: Arc<R>,
}

impl<R: TaskRepository> TaskService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn list(&self, user_id: &str) -> Result<Vec<Task>, DomainError> {
        Ok(self.repo.list_by_user(user_id).await?)
    }

    pub async fn create(&self, user_id: &str, draft: TaskDraft) -> Result<Task, DomainError> {
        let title = valid_title(&draft.title)?;
        let task = Task {
            id: Uuid::now_v7().to_string(),
            user_id: user_id.to_string(),
            title,
            description: draft.description,
            status: draft.status.unwrap_or_default(),
            priority: draft.priority.unwrap_or_default(),
            estimated_minutes: draft.estimated_minutes,
            created_at: Utc::now().timestamp_millis(),
        };
        self.repo.insert(task.clone()).await?;
        tracing::info!(task_id = %task.id, "task created");
        Ok(task)
    }

    pub async fn update(
        &self,
        user_id: &str,
        task_id: &str,
        mut update: UpdateTask,
    ) -> Result<Task, DomainError> {
        update.title = valid_title(&update.title)?;
        self.repo
            .update(user_id, task_id, update)
            .await?
            .ok_or(DomainError::NotFound("task"))
    }

    pub async fn delete(&self, user_id: &str, task_id: &str) -> Result<(), DomainError> {
        if !self.repo.delete(user_id, task_id).await? {
            return Err(DomainError::NotFound("task"));
        }
        tracing::info!(%task_id, "task deleted");
        Ok(())
    }
}

fn valid_title(raw: &str) -> Result<String, DomainError> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(DomainError::validation("title must not be empty"));
    }
    Ok(title.to_string())
}
