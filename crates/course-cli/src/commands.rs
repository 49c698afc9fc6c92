//! Handlers for `serve`, `webhook`, and `tools`.

use crate::cli::{ServeArgs, ServerKind, WebhookArgs};
use anyhow::{Context, Result};
use course_core::CourseConfig;
use course_mcp::CourseMcpServer;

/// Build the server named by `kind`.
pub fn build_server(kind: ServerKind, config: &CourseConfig) -> Result<CourseMcpServer> {
    let server = match kind {
        ServerKind::PrAgent => {
            course_pr_agent::server(config).context("Failed to set up the PR agent")?
        }
        ServerKind::Weather => course_weather::server(),
        ServerKind::Text => course_text::server(),
    };
    Ok(server)
}

/// `name: description` for every tool of `server`.
pub fn tool_lines(server: &CourseMcpServer) -> Vec<String> {
    server
        .tool_definitions()
        .iter()
        .map(|tool| format!("{}: {}", tool.name, tool.description.as_deref().unwrap_or("")))
        .collect()
}

/// Run an MCP server over stdio until the client disconnects.
pub async fn cmd_serve(args: ServeArgs, mut config: CourseConfig) -> Result<()> {
    args.apply(&mut config);
    config.validate()?;

    let server = build_server(args.server, &config)?;
    server
        .serve_stdio()
        .await
        .with_context(|| format!("MCP server '{}' failed", args.server))
}

/// Run the webhook receiver until Ctrl-C.
pub async fn cmd_webhook(args: WebhookArgs, mut config: CourseConfig) -> Result<()> {
    args.apply(&mut config);
    course_webhook::serve(&config, course_webhook::ctrl_c()).await?;
    Ok(())
}

/// Print the tools of a server.
pub fn cmd_tools(kind: ServerKind, config: &CourseConfig) -> Result<()> {
    let server = build_server(kind, config)?;
    for line in tool_lines(&server) {
        println!("{line}");
    }
    Ok(())
}
