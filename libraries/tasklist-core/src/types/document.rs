/// The persisted document
use super::{NewTask, Task, TaskId, User};
use crate::error::{CoreError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Whole persisted state: `{ "tasks": [...], "users": [...] }`
///
/// Missing collections deserialize as empty. Additional top-level
/// collections are carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub tasks: Vec<Task>,

    #[serde(default)]
    pub users: Vec<User>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Document {
    /// Create a document seeded with users and no tasks
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users,
            ..Self::default()
        }
    }

    /// First task with the given id
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Identifier for a task created at `now` without a client-supplied id
    ///
    /// Never below `now` in milliseconds and never equal to a stored id.
    pub fn next_task_id(&self, now: DateTime<Utc>) -> TaskId {
        let taken: Vec<TaskId> = self.tasks.iter().map(|t| t.id).collect();
        TaskId::fresh(TaskId::from_timestamp(now), &taken)
    }

    /// Append a task, assigning an id if the payload has none
    pub fn insert_task(&mut self, payload: NewTask, now: DateTime<Utc>) -> Task {
        let id = payload.id.unwrap_or_else(|| self.next_task_id(now));
        let task = payload.into_task(id);
        self.tasks.push(task.clone());
        task
    }

    /// Replace the first task matching `id` in place
    ///
    /// The stored record always keeps `id`, whatever the replacement carries.
    pub fn replace_task(&mut self, id: TaskId, mut task: Task) -> Option<Task> {
        let slot = self.tasks.iter_mut().find(|t| t.id == id)?;
        task.id = id;
        *slot = task.clone();
        Some(task)
    }

    /// Shallow-merge a JSON object into the first task matching `id`
    ///
    /// Returns `Ok(None)` when no task matches. A patch that would make the
    /// task unreadable (wrong field types) is rejected and nothing changes.
    pub fn patch_task(&mut self, id: TaskId, patch: Map<String, Value>) -> Result<Option<Task>> {
        let Some(slot) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return Ok(None);
        };

        let mut merged = match serde_json::to_value(&*slot)? {
            Value::Object(fields) => fields,
            _ => return Err(CoreError::storage("task did not serialize to an object")),
        };
        merged.extend(patch);
        merged.insert("id".to_string(), Value::from(id.get()));

        let task: Task = serde_json::from_value(Value::Object(merged))
            .map_err(|e| CoreError::InvalidInput(e.to_string()))?;
        *slot = task.clone();
        Ok(Some(task))
    }

    /// Remove every task matching `id`, returning how many were removed
    pub fn remove_tasks(&mut self, id: TaskId) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        before - self.tasks.len()
    }

    /// User whose username and password both match exactly
    pub fn find_user(&self, username: &str, password: &str) -> Option<&User> {
        self.users
            .iter()
            .find(|u| u.matches_credentials(username, password))
    }
}
