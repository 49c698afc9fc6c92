//! Course Core: shared types, errors, configuration, and file helpers.
//!
//! This crate has no internal course dependencies. Every server crate
//! builds on it.
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`files`]: Async file read/write helpers
//! - [`config`]: TOML configuration with defaults
//! - [`events`]: GitHub Actions event log shared by the webhook and PR agent

pub mod config;
pub mod error;
pub mod events;
pub mod files;

// Re-export key types at crate root for convenience
pub use config::CourseConfig;
pub use error::{Error, Result};
pub use events::{ActionsEvent, EventStore, WorkflowStatus};
