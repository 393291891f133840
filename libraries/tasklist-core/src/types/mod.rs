/// Domain types for the task list
mod document;
mod ids;
mod task;
mod user;

pub use document::Document;
pub use ids::TaskId;
pub use task::{NewTask, Task};
pub use user::User;
