//! Team Task List Storage
//!
//! Flat JSON document persistence. The entire state lives in one file:
//!
//! ```json
//! { "tasks": [ ... ], "users": [ ... ] }
//! ```
//!
//! Every mutation reads the whole document, changes it in memory, and
//! writes the whole document back.
//!
//! # Concurrency
//!
//! - Mutations made through one [`JsonFileStore`] are serialized by an
//!   internal write lock, so requests handled by the same process never lose
//!   each other's updates.
//! - Writes go to a sibling temporary file which is then renamed over the
//!   document, so readers never observe a half-written file.
//! - Several processes writing the same file are NOT coordinated; the last
//!   writer wins.
//!
//! # Example
//!
//! ```rust,no_run
//! use tasklist_core::TaskStore;
//! use tasklist_storage::JsonFileStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = JsonFileStore::new("db.json");
//! let tasks = store.list_tasks().await?;
//! println!("{} tasks", tasks.len());
//! # Ok(())
//! # }
//! ```

mod error;
mod json_file;

pub use error::{Result, StorageError};
pub use json_file::JsonFileStore;
