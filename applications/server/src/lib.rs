//! Team Task List Server Library
//!
//! HTTP backend persisting shared tasks in a flat JSON document. Two
//! interchangeable route sets are available: a generic REST router and
//! explicit hand-written handlers.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod router;
pub mod state;

// Re-export commonly used types for convenience
pub use config::{ApiVariant, ServerConfig};
pub use error::{Result, ServerError};
pub use router::create_router;
pub use state::AppState;
