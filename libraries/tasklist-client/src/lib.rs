//! Team Task List Client
//!
//! HTTP client library for the task list backend. Works against both
//! backend variants: the generic one that answers with bare resources and
//! the explicit one that wraps them in `{ "ok": true, "task": ... }`.
//!
//! # Example
//!
//! ```ignore
//! use tasklist_client::{ClientConfig, TaskApi, TaskListClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = TaskListClient::new(ClientConfig::new("http://localhost:3001"))?;
//!
//!     // Login is a lookup against /users
//!     let user = client.login("alice", "secret").await?;
//!     println!("Logged in as {}", user.username);
//!
//!     let tasks = client.list_tasks().await?;
//!     println!("Found {} tasks", tasks.len());
//!
//!     Ok(())
//! }
//! ```

mod api;
mod client;
mod error;
mod types;

pub use api::TaskApi;
pub use client::TaskListClient;
pub use error::{ClientError, Result};
pub use types::ClientConfig;
