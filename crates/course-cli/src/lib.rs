//! `mcp-course` command-line interface.
//!
//! Runs any of the course MCP servers over stdio, runs the GitHub webhook
//! receiver, lists server tools, and manages the configuration file.

pub mod cli;
pub mod commands;
pub mod config_handlers;
pub mod logging;

use anyhow::Result;
use cli::{Cli, Command};
use course_core::CourseConfig;

/// Execute a parsed command line.
///
/// `config` commands skip loading the configuration so a broken file can
/// still be inspected or replaced.
pub async fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_deref();
    let config = match &cli.command {
        Command::Config { .. } => None,
        _ => Some(CourseConfig::load(config_path)?),
    };

    let level = config.as_ref().map_or("info", |c| c.logging.level.as_str());
    logging::init(cli.verbose, level);
    let config = config.unwrap_or_default();

    match cli.command {
        Command::Serve(args) => commands::cmd_serve(args, config).await,
        Command::Webhook(args) => commands::cmd_webhook(args, config).await,
        Command::Tools { server } => commands::cmd_tools(server, &config),
        Command::Config { action } => {
            config_handlers::handle_config_command(config_path, action)?;
            Ok(())
        }
    }
}
