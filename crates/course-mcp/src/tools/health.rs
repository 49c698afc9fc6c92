//! Health check tool for MCP servers.
//!
//! Provides a built-in `health` tool that reports server status,
//! tool count, and version information.

use crate::helpers::{empty_schema, json_result, make_tool};
use crate::registry::{ToolRegistry, ToolResult};
use rmcp::model::Tool;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Health check response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Server status ("healthy").
    pub status: String,
    /// Server name.
    pub server_name: String,
    /// Server version.
    pub version: String,
    /// Number of registered tools.
    pub tool_count: usize,
}

impl HealthResponse {
    fn healthy(server_name: &str, version: &str, tool_count: usize) -> Self {
        Self {
            status: "healthy".to_string(),
            server_name: server_name.to_string(),
            version: version.to_string(),
            tool_count,
        }
    }
}

/// A tool registry that provides the `health` tool.
///
/// Captures server metadata at construction time and reports it
/// when the tool is called.
pub struct HealthTools {
    server_name: String,
    version: String,
    total_tool_count: usize,
}

impl HealthTools {
    /// Create health tools with server metadata.
    ///
    /// `domain_tool_count` is the number of tools besides `health`; the
    /// reported count includes the health tool itself.
    pub fn new(
        server_name: impl Into<String>,
        version: impl Into<String>,
        domain_tool_count: usize,
    ) -> Self {
        Self {
            server_name: server_name.into(),
            version: version.into(),
            total_tool_count: domain_tool_count + 1,
        }
    }
}

impl ToolRegistry for HealthTools {
    fn tools(&self) -> Vec<Tool> {
        vec![make_tool(
            "health",
            "Check server health and status",
            empty_schema(),
        )]
    }

    fn call(&self, name: &str, _args: Value) -> Option<ToolResult> {
        if name != "health" {
            return None;
        }

        let response =
            HealthResponse::healthy(&self.server_name, &self.version, self.total_tool_count);
        Some(Box::pin(async move { json_result(&response) }))
    }
}

// ============================================================================
// Tests
// ============================================================================
