//! Types for task list API requests and responses.

use serde::Deserialize;
use tasklist_core::Task;

/// Configuration for connecting to a task list backend.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the server (e.g., "http://localhost:3001")
    pub url: String,
}

impl ClientConfig {
    /// Create a new config with the server URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Task body as returned by either backend variant.
///
/// The explicit variant wraps the task as `{ "ok": true, "task": {...} }`,
/// the generic variant returns the task itself.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum TaskBody {
    Wrapped { task: Task },
    Bare(Task),
}

impl TaskBody {
    pub(crate) fn into_task(self) -> Task {
        match self {
            TaskBody::Wrapped { task } | TaskBody::Bare(task) => task,
        }
    }
}

/// Error body produced by the server: `{ "error": "..." }`
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn task_json() -> serde_json::Value {
        json!({
            "id": 1,
            "author": "alice",
            "text": "buy milk",
            "completed": false,
            "createdAt": "2023-11-14T22:13:20.000Z",
            "updatedAt": "2023-11-14T22:13:20.000Z"
        })
    }

    #[test]
    fn test_bare_task_body() {
        let body: TaskBody = serde_json::from_value(task_json()).unwrap();
        assert_eq!(body.into_task().text, "buy milk");
    }

    #[test]
    fn test_wrapped_task_body() {
        let body: TaskBody =
            serde_json::from_value(json!({ "ok": true, "task": task_json() })).unwrap();
        let task = body.into_task();
        assert_eq!(task.text, "buy milk");
        assert!(task.extra.is_empty());
    }
}
