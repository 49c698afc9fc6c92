//! mcp-course
//!
//! Command-line entry point for the course MCP servers.

#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use course_cli::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    course_cli::run(Cli::parse()).await
}
