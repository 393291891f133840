//! Dashboard state machine
//!
//! `Loading` becomes `Ready` after the first successful fetch. In `Ready`,
//! every transition sends exactly one request and touches local state only
//! once that request succeeded.

use crate::{
    error::{DashboardError, Result},
    notification::Notification,
    view::{EmptyState, TaskRow},
};
use std::collections::VecDeque;
use tasklist_client::TaskApi;
use tasklist_core::{filter_tasks, timestamp, Task, TaskId, TaskStats, User};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
}

/// The task currently being edited and its scratch text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub id: TaskId,
    pub text: String,
}

/// Task list page for one logged-in user
pub struct Dashboard<A: TaskApi> {
    api: A,
    user: User,
    state: LoadState,
    tasks: Vec<Task>,
    draft: String,
    search: String,
    editing: Option<EditSession>,
    notifications: VecDeque<Notification>,
}

impl<A: TaskApi> Dashboard<A> {
    pub fn new(api: A, user: User) -> Self {
        Self {
            api,
            user,
            state: LoadState::Loading,
            tasks: Vec::new(),
            draft: String::new(),
            search: String::new(),
            editing: None,
            notifications: VecDeque::new(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == LoadState::Ready
    }

    /// Local task collection, newest creations first
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn editing(&self) -> Option<&EditSession> {
        self.editing.as_ref()
    }

    // ===== Loading =====

    /// Fetch the task collection
    ///
    /// On failure the dashboard stays in `Loading`; calling `load` again is
    /// the only way to retry.
    pub async fn load(&mut self) -> Result<()> {
        match self.api.list_tasks().await {
            Ok(tasks) => {
                tracing::debug!(count = tasks.len(), "Tasks loaded");
                self.tasks = tasks;
                self.state = LoadState::Ready;
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load tasks");
                self.notify(Notification::error("Failed to load tasks"));
                Err(e.into())
            }
        }
    }

    // ===== Create =====

    /// Text of the new-task input
    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Create a task from the draft text
    ///
    /// A blank draft is ignored and returns `Ok(None)`. The task is prepended
    /// locally and the draft cleared only after the server stored it.
    pub async fn add_task(&mut self) -> Result<Option<Task>> {
        self.ensure_ready()?;
        let text = self.draft.trim();
        if text.is_empty() {
            return Ok(None);
        }

        let now = timestamp::now();
        let task = Task::new(self.next_id(TaskId::from_timestamp(now)), &self.user.username, text, now);

        match self.api.create_task(&task).await {
            Ok(_) => {
                self.tasks.insert(0, task.clone());
                self.draft.clear();
                self.notify(Notification::success("Task created"));
                Ok(Some(task))
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to create task");
                self.notify(Notification::error("Failed to create the task"));
                Err(e.into())
            }
        }
    }

    /// `candidate`, bumped past every id already held locally
    fn next_id(&self, candidate: TaskId) -> TaskId {
        let taken: Vec<TaskId> = self.tasks.iter().map(|t| t.id).collect();
        TaskId::fresh(candidate, &taken)
    }

    // ===== Toggle =====

    /// Flip a task's completion flag
    pub async fn toggle_task(&mut self, id: TaskId) -> Result<Task> {
        let updated = self.owned_task(id)?.toggled(timestamp::now());

        match self.api.update_task(id, &updated).await {
            Ok(_) => {
                self.store_local(&updated);
                let message = if updated.completed {
                    "Task completed"
                } else {
                    "Task marked as pending"
                };
                self.notify(Notification::success(message));
                Ok(updated)
            }
            Err(e) => {
                tracing::error!(error = %e, id = %id, "Failed to update task");
                self.notify(Notification::error("Failed to update the task"));
                Err(e.into())
            }
        }
    }

    // ===== Edit =====

    /// Enter editing mode for a task, replacing any other edit in progress
    pub fn start_edit(&mut self, id: TaskId) -> Result<()> {
        let text = self.owned_task(id)?.text.clone();
        self.editing = Some(EditSession { id, text });
        Ok(())
    }

    /// Update the scratch text of the current edit
    pub fn set_edit_text(&mut self, text: impl Into<String>) -> Result<()> {
        let session = self.editing.as_mut().ok_or(DashboardError::NotEditing)?;
        session.text = text.into();
        Ok(())
    }

    /// Leave editing mode without sending anything
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Send the edited text and leave editing mode
    ///
    /// Blank text is rejected locally and the edit stays open. On a network
    /// failure the edit also stays open so the text is not lost.
    pub async fn save_edit(&mut self) -> Result<Task> {
        let session = self.editing.clone().ok_or(DashboardError::NotEditing)?;
        let text = session.text.trim();
        if text.is_empty() {
            let err = DashboardError::Validation("Task text cannot be empty".to_string());
            self.notify(Notification::error(err.to_string()));
            return Err(err);
        }

        let updated = self.owned_task(session.id)?.with_text(text, timestamp::now());

        match self.api.update_task(session.id, &updated).await {
            Ok(_) => {
                self.store_local(&updated);
                self.editing = None;
                self.notify(Notification::success("Task edited"));
                Ok(updated)
            }
            Err(e) => {
                tracing::error!(error = %e, id = %session.id, "Failed to edit task");
                self.notify(Notification::error("Failed to edit the task"));
                Err(e.into())
            }
        }
    }

    // ===== Delete =====

    /// Delete a task after `confirm` approves it
    ///
    /// Returns `Ok(false)` when the confirmation was declined.
    pub async fn delete_task<F>(&mut self, id: TaskId, confirm: F) -> Result<bool>
    where
        F: FnOnce(&Task) -> bool,
    {
        let task = self.owned_task(id)?;
        if !confirm(task) {
            return Ok(false);
        }

        match self.api.delete_task(id).await {
            Ok(()) => {
                self.tasks.retain(|t| t.id != id);
                if self.editing.as_ref().is_some_and(|s| s.id == id) {
                    self.editing = None;
                }
                self.notify(Notification::success("Task deleted"));
                Ok(true)
            }
            Err(e) => {
                tracing::error!(error = %e, id = %id, "Failed to delete task");
                self.notify(Notification::error("Failed to delete the task"));
                Err(e.into())
            }
        }
    }

    // ===== Search & view =====

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    /// Tasks matching the search term
    pub fn filtered_tasks(&self) -> Vec<&Task> {
        filter_tasks(&self.tasks, &self.search)
    }

    /// Rows to render, in display order
    pub fn rows(&self) -> Vec<TaskRow<'_>> {
        let editing_id = self.editing.as_ref().map(|s| s.id);
        self.filtered_tasks()
            .into_iter()
            .map(|task| {
                let is_editing = editing_id == Some(task.id);
                TaskRow {
                    task,
                    is_edited: task.is_edited(),
                    can_modify: task.is_owned_by(&self.user.username) && !is_editing,
                    is_editing,
                }
            })
            .collect()
    }

    /// Why nothing is visible, if nothing is
    pub fn empty_state(&self) -> Option<EmptyState> {
        if !self.filtered_tasks().is_empty() {
            None
        } else if self.search.is_empty() {
            Some(EmptyState::NoTasks)
        } else {
            Some(EmptyState::NoMatches)
        }
    }

    /// Counters over the whole collection, ignoring the search term
    pub fn stats(&self) -> TaskStats {
        TaskStats::compute(&self.tasks, &self.user.username)
    }

    // ===== Notifications =====

    /// Take every pending notification, oldest first
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        self.notifications.drain(..).collect()
    }

    fn notify(&mut self, notification: Notification) {
        self.notifications.push_back(notification);
    }

    // ===== Guards =====

    fn ensure_ready(&self) -> Result<()> {
        if self.is_ready() {
            Ok(())
        } else {
            Err(DashboardError::NotReady)
        }
    }

    /// Local task that the current user may modify
    fn owned_task(&mut self, id: TaskId) -> Result<&Task> {
        self.ensure_ready()?;
        let Some(index) = self.tasks.iter().position(|t| t.id == id) else {
            return Err(DashboardError::UnknownTask(id));
        };
        if !self.tasks[index].is_owned_by(&self.user.username) {
            tracing::warn!(id = %id, user = %self.user.username, "Refusing to modify foreign task");
            self.notify(Notification::error("Only the author can modify this task"));
            return Err(DashboardError::PermissionDenied(id));
        }
        Ok(&self.tasks[index])
    }

    fn store_local(&mut self, updated: &Task) {
        for slot in self.tasks.iter_mut().filter(|t| t.id == updated.id) {
            *slot = updated.clone();
        }
    }
}
