// Port describing what the task service needs from durable storage.
//
// Purpose
// - Keep the service independent of any database by coding against a trait.
//
// Responsibilities
// - Every mutation is a single conditional operation scoped to the owning
//   user, so ownership cannot change between a check and the write.
//
// Testing guidance
// - The in memory adapter in `adapters::in_memory` backs all tests.

use async_trait::async_trait;

use crate::modules::tasks::core::model::{Task, UpdateTask};

#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// All tasks owned by the user, newest `created_at` first.
    async fn list_by_user(&self, user_id: &str) -> anyhow::Result<Vec<Task>>;

    async fn insert(&self, task: Task) -> anyhow::Result<()>;

    async fn find(&self, user_id: &str, task_id: &str) -> anyhow::Result<Option<Task>>;

    /// Replaces the mutable fields of the task if it is owned by the user.
    /// Returns `None` when no such row exists for that owner.
    async fn update(
        &self,
        user_id: &str,
        task_id: &str,
        update: UpdateTask,
    ) -> anyhow::Result<Option<Task>>;

    /// Returns `false` when no such row exists for that owner.
    async fn delete(&self, user_id: &str, task_id: &str) -> anyhow::Result<bool>;
}
