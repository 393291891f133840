//! Client-side projections over the task collection.

use crate::types::Task;

/// Tasks whose author or text contains `term`, ignoring case
///
/// Order is preserved. An empty term returns every task.
pub fn filter_tasks<'a>(tasks: &'a [Task], term: &str) -> Vec<&'a Task> {
    let needle = term.to_lowercase();
    tasks
        .iter()
        .filter(|task| task.matches_lowercase(&needle))
        .collect()
}

/// Summary counters shown under the task list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    /// Tasks authored by the current user
    pub mine: usize,
}

impl TaskStats {
    pub fn compute(tasks: &[Task], username: &str) -> Self {
        let completed = tasks.iter().filter(|t| t.completed).count();
        Self {
            total: tasks.len(),
            completed,
            pending: tasks.len() - completed,
            mine: tasks.iter().filter(|t| t.is_owned_by(username)).count(),
        }
    }
}
