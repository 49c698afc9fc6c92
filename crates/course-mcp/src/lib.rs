//! MCP server infrastructure for the course servers.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      course-mcp                             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ToolRegistry / CompositeRegistry: tool listing + dispatch  │
//! │  PromptRegistry: prompt listing + rendering                 │
//! │  ResourceRegistry: resources, templates, reads              │
//! ├─────────────────────────────────────────────────────────────┤
//! │  CourseMcpServer: implements rmcp::ServerHandler            │
//! │  ServerConfig: name, version, instructions                  │
//! ├─────────────────────────────────────────────────────────────┤
//! │  McpErrorExt: course_core::Error → rmcp::ErrorData          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Built-in tools:                                            │
//! │  └── health: server status and tool count                   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use course_mcp::{CompositeRegistry, CourseMcpServer, HealthTools};
//!
//! let registry = CompositeRegistry::new()
//!     .add(WeatherTools)
//!     .add(HealthTools::new("Weather Service", "0.1.0", 1));
//!
//! CourseMcpServer::new(registry)
//!     .with_name("Weather Service")
//!     .serve_stdio()
//!     .await?;
//! ```

pub mod error;
pub mod helpers;
pub mod prompts;
pub mod registry;
pub mod resources;
pub mod server;
pub mod tools;
pub mod uri_template;

/// MCP model types, re-exported for server crates.
pub use rmcp::model;
pub use rmcp::ServerHandler;

// Re-exports: registries
pub use prompts::{PromptArgumentDef, PromptDef, PromptFuture, PromptRegistry};
pub use registry::{CompositeRegistry, ToolRegistry, ToolResult};
pub use resources::{ResourceBody, ResourceDef, ResourceFuture, ResourceRegistry, ResourceTemplateDef};

// Re-exports: server
pub use server::{CourseMcpServer, ServerConfig};

// Re-exports: error
pub use error::{Error, McpErrorExt, Result};

// Re-exports: built-in tools
pub use tools::{HealthResponse, HealthTools};
