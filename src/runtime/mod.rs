//! Runtime module
//!
//! Provides the spawned task handle used by backend operations.

pub mod api_task;

// Re-export task types
pub use api_task::ApiTask;
