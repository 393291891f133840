//! Team Task List Dashboard
//!
//! Front-end agnostic state machine behind the task list page.
//!
//! This crate provides:
//! - Loading the shared task collection once
//! - Create, toggle, edit, and delete transitions
//! - A single shared edit session (at most one task editable at a time)
//! - Case-insensitive search over author and text
//! - Summary statistics and view rows for rendering
//! - Success/error notifications for the front end to display
//!
//! # Update ordering
//!
//! Local state is changed only after the backend acknowledged the request.
//! A failed call therefore leaves local state exactly as it was and nothing
//! ever needs to be rolled back.
//!
//! # Example
//!
//! ```ignore
//! use tasklist_client::{ClientConfig, TaskListClient};
//! use tasklist_dashboard::Dashboard;
//!
//! let client = TaskListClient::new(ClientConfig::new("http://localhost:3001"))?;
//! let user = client.login("alice", "secret").await?;
//!
//! let mut dashboard = Dashboard::new(client, user);
//! dashboard.load().await?;
//!
//! dashboard.set_draft("buy milk");
//! dashboard.add_task().await?;
//!
//! for note in dashboard.drain_notifications() {
//!     println!("{}", note);
//! }
//! ```

mod dashboard;
mod error;
mod notification;
mod view;

pub use dashboard::{Dashboard, EditSession, LoadState};
pub use error::{DashboardError, Result};
pub use notification::{Notification, NotificationLevel};
pub use view::{EmptyState, TaskRow};
