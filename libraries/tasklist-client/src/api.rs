//! The data-access seam used by the dashboard.

use crate::error::Result;
use async_trait::async_trait;
use tasklist_core::{Task, TaskId, User};

/// Task and user operations offered by the backend
///
/// Each call is a single request/response round trip. Nothing is retried.
#[async_trait]
pub trait TaskApi: Send + Sync {
    /// GET /tasks
    async fn list_tasks(&self) -> Result<Vec<Task>>;

    /// POST /tasks
    async fn create_task(&self, task: &Task) -> Result<Task>;

    /// PUT /tasks/:id with a full replacement
    async fn update_task(&self, id: TaskId, task: &Task) -> Result<Task>;

    /// DELETE /tasks/:id
    async fn delete_task(&self, id: TaskId) -> Result<()>;

    /// GET /users?username=&password=
    async fn find_user(&self, username: &str, password: &str) -> Result<Option<User>>;
}
