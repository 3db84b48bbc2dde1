// In memory implementation of the TaskRepository port.
//
// Purpose
// - Support service tests and local development without a database.
//
// Responsibilities
// - Store task rows in a map keyed by task id.
// - Apply updates and deletes conditionally on ownership in one step.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::modules::tasks::core::model::{Task, UpdateTask};
use crate::modules::tasks::core::ports::TaskRepository;

#[derive(Default)]
pub struct InMemoryTaskStore {
    rows: RwLock<HashMap<String, Task>>,
    is_offline: bool,
}

impl InMemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> anyhow::Result<()> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Task store offline"));
        }
        Ok(())
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskStore {
    async fn list_by_user(&self, user_id: &str) -> anyhow::Result<Vec<Task>> {
        self.ensure_online()?;
        let guard = self.rows.read().await;
        let mut items: Vec<Task> = guard
            .values()
            .filter(|task| task.user_id == user_id)
            .cloned()
            .collect();
        items.sort_by_key(|task| task.created_at);
        items.reverse();
        Ok(items)
    }

    async fn insert(&self, task: Task) -> anyhow::Result<()> {
        self.ensure_online()?;
        let mut guard = self.rows.write().await;
        guard.insert(task.id.clone(), task);
        Ok(())
    }

    async fn find(&self, user_id: &str, task_id: &str) -> anyhow::Result<Option<Task>> {
        self.ensure_online()?;
        let guard = self.rows.read().await;
        Ok(guard
            .get(task_id)
            .filter(|task| task.user_id == user_id)
            .cloned())
    }

    async fn update(
        &self,
        user_id: &str,
        task_id: &str,
        update: UpdateTask,
    ) -> anyhow::Result<Option<Task>> {
        self.ensure_online()?;
        let mut guard = self.rows.write().await;
        let Some(task) = guard.get_mut(task_id).filter(|task| task.user_id == user_id) else {
            return Ok(None);
        };
        task.title = update.title;
        task.description = update.description;
        task.status = update.status;
        task.priority = update.priority;
        task.estimated_minutes = update.estimated_minutes;
        Ok(Some(task.clone()))
    }

    async fn delete(&self, user_id: &str, task_id: &str) -> anyhow::Result<bool> {
        self.ensure_online()?;
        let mut guard = self.rows.write().await;
        let owned = guard
            .get(task_id)
            .is_some_and(|task| task.user_id == user_id);
        if owned {
            guard.remove(task_id);
        }
        Ok(owned)
    }
}
