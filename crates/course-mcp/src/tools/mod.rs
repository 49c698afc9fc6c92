//! Built-in MCP tools.
//!
//! Tools provided by `course-mcp` itself, available to every course server.

pub mod health;

pub use health::{HealthResponse, HealthTools};
