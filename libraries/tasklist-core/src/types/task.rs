/// Task domain type
use super::TaskId;
use crate::timestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const CREATED_AT: &str = "createdAt";
const UPDATED_AT: &str = "updatedAt";

/// A shared unit of work
///
/// Fields the task list does not know about are kept in `extra` so that a
/// rewrite of the document never drops data written by another client.
/// Timestamps are optional: a missing stamp stays missing, and one that is
/// not an RFC 3339 string is kept verbatim in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "TaskRecord")]
pub struct Task {
    /// Identifier (creation time in milliseconds)
    pub id: TaskId,

    /// Username of the creator
    pub author: String,

    /// Task description
    pub text: String,

    /// Completion flag
    pub completed: bool,

    /// Creation timestamp
    #[serde(
        serialize_with = "timestamp::serialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,

    /// Last modification timestamp, equal to `created_at` until first edit
    #[serde(
        serialize_with = "timestamp::serialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<DateTime<Utc>>,

    /// Unknown fields, preserved verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Task {
    /// Create a new, uncompleted task stamped with `now`
    pub fn new(
        id: TaskId,
        author: impl Into<String>,
        text: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            author: author.into(),
            text: text.into(),
            completed: false,
            created_at: Some(now),
            updated_at: Some(now),
            extra: Map::new(),
        }
    }

    /// Whether the task was modified after creation
    pub fn is_edited(&self) -> bool {
        self.updated_at != self.created_at
            || self.extra.get(UPDATED_AT) != self.extra.get(CREATED_AT)
    }

    /// Whether `username` may toggle, edit, or delete this task
    pub fn is_owned_by(&self, username: &str) -> bool {
        self.author == username
    }

    /// Case-insensitive match of an already lowercased term against author or text
    pub fn matches_lowercase(&self, term: &str) -> bool {
        self.author.to_lowercase().contains(term) || self.text.to_lowercase().contains(term)
    }

    /// Full replacement with the completion flag flipped
    #[must_use]
    pub fn toggled(&self, now: DateTime<Utc>) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
        .touched(now)
    }

    /// Full replacement with new text
    #[must_use]
    pub fn with_text(&self, text: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            text: text.into(),
            ..self.clone()
        }
        .touched(now)
    }

    /// Stamp `updatedAt` strictly after the last known stamp
    fn touched(mut self, now: DateTime<Utc>) -> Self {
        let stamp = match self.updated_at.or(self.created_at) {
            Some(previous) => timestamp::after(previous, now),
            None => now,
        };
        self.updated_at = Some(stamp);
        self.extra.remove(UPDATED_AT);
        self
    }
}

/// Create payload
///
/// Identical to [`Task`] except that the identifier may be omitted, in which
/// case the store assigns one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "TaskRecord")]
pub struct NewTask {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<TaskId>,

    pub author: String,

    pub text: String,

    pub completed: bool,

    #[serde(
        serialize_with = "timestamp::serialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(
        serialize_with = "timestamp::serialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NewTask {
    /// Attach an identifier, producing the record to store
    pub fn into_task(self, id: TaskId) -> Task {
        Task {
            id,
            author: self.author,
            text: self.text,
            completed: self.completed,
            created_at: self.created_at,
            updated_at: self.updated_at,
            extra: self.extra,
        }
    }
}

impl From<Task> for NewTask {
    fn from(task: Task) -> Self {
        Self {
            id: Some(task.id),
            author: task.author,
            text: task.text,
            completed: task.completed,
            created_at: task.created_at,
            updated_at: task.updated_at,
            extra: task.extra,
        }
    }
}

/// Task as read from the wire, before timestamps are picked out of `extra`
#[derive(Deserialize)]
struct TaskRecord {
    #[serde(default)]
    id: Option<TaskId>,

    #[serde(default)]
    author: String,

    #[serde(default)]
    text: String,

    #[serde(default)]
    completed: bool,

    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl From<TaskRecord> for NewTask {
    fn from(mut record: TaskRecord) -> Self {
        let created_at = timestamp::take(&mut record.extra, CREATED_AT);
        let updated_at = timestamp::take(&mut record.extra, UPDATED_AT);
        Self {
            id: record.id,
            author: record.author,
            text: record.text,
            completed: record.completed,
            created_at,
            updated_at,
            extra: record.extra,
        }
    }
}

impl TryFrom<TaskRecord> for Task {
    type Error = String;

    fn try_from(record: TaskRecord) -> Result<Self, Self::Error> {
        let payload = NewTask::from(record);
        let id = payload.id.ok_or_else(|| "missing field `id`".to_string())?;
        Ok(payload.into_task(id))
    }
}
