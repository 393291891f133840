/// Core traits for the task list
use crate::error::Result;
use crate::types::{NewTask, Task, TaskId, User};
use async_trait::async_trait;
use serde_json::{Map, Value};

/// Storage seam behind the HTTP resource layer
///
/// Implementations decide how writes are serialized. Callers only rely on
/// each method being a single read-modify-write of the whole collection.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// All tasks in document order
    async fn list_tasks(&self) -> Result<Vec<Task>>;

    /// First task with the given id
    async fn get_task(&self, id: TaskId) -> Result<Option<Task>>;

    /// Append a task, assigning an id when the payload has none
    async fn create_task(&self, task: NewTask) -> Result<Task>;

    /// Replace a task in place
    ///
    /// # Errors
    /// Returns `CoreError::NotFound` when no task has this id
    async fn replace_task(&self, id: TaskId, task: Task) -> Result<Task>;

    /// Shallow-merge fields into a task
    ///
    /// # Errors
    /// Returns `CoreError::NotFound` when no task has this id, and
    /// `CoreError::InvalidInput` when the merged record is not a valid task
    async fn patch_task(&self, id: TaskId, patch: Map<String, Value>) -> Result<Task>;

    /// Remove every task with the given id, returning the number removed
    async fn delete_task(&self, id: TaskId) -> Result<usize>;

    /// Exact credential lookup
    async fn find_user(&self, username: &str, password: &str) -> Result<Option<User>>;

    /// All user records
    async fn list_users(&self) -> Result<Vec<User>>;
}
