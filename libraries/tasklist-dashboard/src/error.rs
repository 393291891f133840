//! Error types for dashboard transitions

use tasklist_client::ClientError;
use tasklist_core::TaskId;
use thiserror::Error;

/// Dashboard errors
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Tasks have not been loaded yet
    #[error("Tasks are still loading")]
    NotReady,

    /// Client-side validation failed; nothing was sent
    #[error("{0}")]
    Validation(String),

    /// The current user is not the task's author
    #[error("Only the author can modify task {0}")]
    PermissionDenied(TaskId),

    /// No task with this id in local state
    #[error("Unknown task: {0}")]
    UnknownTask(TaskId),

    /// Save requested without an edit in progress
    #[error("No task is being edited")]
    NotEditing,

    /// Network or server failure
    #[error(transparent)]
    Transport(#[from] ClientError),
}

/// Result type for dashboard transitions
pub type Result<T> = std::result::Result<T, DashboardError>;
