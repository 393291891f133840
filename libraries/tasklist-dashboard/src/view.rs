//! Render-ready projections of dashboard state

use tasklist_core::Task;

/// One visible entry of the (filtered) task list
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaskRow<'a> {
    pub task: &'a Task,
    /// `updatedAt` differs from `createdAt`
    pub is_edited: bool,
    /// Toggle/edit/delete actions are offered for this row
    pub can_modify: bool,
    /// This row is the one being edited
    pub is_editing: bool,
}

/// Why the visible list is empty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// A search term is set and nothing matches it
    NoMatches,
    /// There are no tasks at all
    NoTasks,
}

impl EmptyState {
    pub fn message(self) -> &'static str {
        match self {
            EmptyState::NoMatches => "No tasks match your search",
            EmptyState::NoTasks => "No tasks yet. Create the first one!",
        }
    }
}
