/// API route modules
pub mod health;
pub mod resources;
pub mod tasks;
pub mod users;

use tasklist_core::TaskId;

/// Task id from a path segment; anything that is not an integer matches no task
pub(crate) fn parse_task_id(raw: &str) -> Option<TaskId> {
    raw.parse().ok()
}
