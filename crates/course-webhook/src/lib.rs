//! GitHub webhook receiver.
//!
//! Accepts GitHub deliveries over HTTP and appends them to the shared
//! [`course_core::EventStore`], where the PR agent's CI/CD tools read them.
//!
//! ```rust,ignore
//! let config = CourseConfig::load(None)?;
//! course_webhook::serve(&config, course_webhook::ctrl_c()).await?;
//! ```

pub mod error;
pub mod routes;
pub mod server;

pub use error::{Error, Result};
pub use routes::{AppState, EVENT_HEADER, router};
pub use server::{bind, ctrl_c, serve, serve_listener};
