//! Team Task List Core
//!
//! Platform-agnostic types, traits, and error handling shared by the task
//! list server, storage, client, and dashboard crates.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Task`, `NewTask`, `User`, `Document`
//! - **Core Traits**: `TaskStore`, the narrow storage seam used by the server
//! - **Projections**: `filter_tasks` and `TaskStats` used by the dashboard
//! - **Error Handling**: Unified `CoreError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use tasklist_core::{filter_tasks, timestamp, Task, TaskId};
//!
//! let now = timestamp::now();
//! let task = Task::new(TaskId::new(1700000000000), "alice", "buy milk", now);
//! assert!(!task.is_edited());
//!
//! let tasks = vec![task];
//! assert_eq!(filter_tasks(&tasks, "MILK").len(), 1);
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod filter;
pub mod timestamp;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{CoreError, Result};
pub use filter::{filter_tasks, TaskStats};
pub use traits::TaskStore;
pub use types::{Document, NewTask, Task, TaskId, User};
