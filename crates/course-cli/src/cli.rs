//! Command-line definitions.

use clap::{Args, Parser, Subcommand, ValueEnum};
use course_core::CourseConfig;
use std::fmt;
use std::path::PathBuf;

/// Run the course MCP servers and the GitHub webhook receiver.
#[derive(Parser, Debug)]
#[command(name = "mcp-course", author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = course_core::config::CONFIG_ENV_VAR)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run an MCP server over stdio
    Serve(ServeArgs),
    /// Run the GitHub webhook receiver
    Webhook(WebhookArgs),
    /// List the tools a server exposes
    Tools {
        /// Server to inspect
        server: ServerKind,
    },
    /// Configuration file operations
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// The MCP servers this binary can run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ServerKind {
    /// PR review agent with CI/CD tools
    PrAgent,
    /// Weather demo server
    Weather,
    /// Letter counting and sentiment analysis
    Text,
}

impl fmt::Display for ServerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::PrAgent => "pr-agent",
            Self::Weather => "weather",
            Self::Text => "text",
        };
        f.write_str(name)
    }
}

/// Arguments of `serve`.
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Server to run
    pub server: ServerKind,

    /// Git repository analyzed by the PR agent
    #[arg(long)]
    pub repo_dir: Option<PathBuf>,

    /// Directory of PR templates
    #[arg(long)]
    pub templates_dir: Option<PathBuf>,

    /// Event log written by the webhook receiver
    #[arg(long)]
    pub events_file: Option<PathBuf>,
}

impl ServeArgs {
    /// Overlay the flags onto `config`.
    pub fn apply(&self, config: &mut CourseConfig) {
        if let Some(dir) = &self.repo_dir {
            config.pr_agent.repo_dir = Some(dir.clone());
        }
        if let Some(dir) = &self.templates_dir {
            config.pr_agent.templates_dir = Some(dir.clone());
        }
        if let Some(file) = &self.events_file {
            config.events.file = file.clone();
        }
    }
}

/// Arguments of `webhook`.
#[derive(Args, Debug)]
pub struct WebhookArgs {
    /// Interface to bind
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Event log to append to
    #[arg(long)]
    pub events_file: Option<PathBuf>,
}

impl WebhookArgs {
    /// Overlay the flags onto `config`.
    pub fn apply(&self, config: &mut CourseConfig) {
        if let Some(host) = &self.host {
            config.webhook.host = host.clone();
        }
        if let Some(port) = self.port {
            config.webhook.port = port;
        }
        if let Some(file) = &self.events_file {
            config.events.file = file.clone();
        }
    }
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the resolved config file path
    Path,
    /// Print the effective configuration as TOML
    Show,
    /// Write a default config file
    Init {
        /// Where to write it (default: the platform config directory)
        #[arg(long)]
        file: Option<String>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
