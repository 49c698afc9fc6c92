//! PR review agent MCP server.
//!
//! Exposes tools for reviewing a branch before opening a pull request
//! and for following its CI/CD runs:
//!
//! - `analyze_file_changes`: changed files, stats, commits, and diff
//! - `get_pr_templates` / `suggest_pr_template`: PR description templates
//! - `get_recent_actions_events` / `get_workflow_status`: GitHub Actions
//!   events recorded by the webhook receiver
//!
//! plus four prompts that chain those tools into CI/CD reports.

pub mod analysis;
pub mod git;
pub mod prompts;
pub mod response;
pub mod templates;
pub mod tools;

pub use analysis::{ChangeAnalysis, analyze_changes, truncate_diff};
pub use git::{GitBackend, GitCli, GitOutput};
pub use prompts::PrAgentPrompts;
pub use templates::{PrTemplate, TemplateCatalog, TemplateSuggestion};
pub use tools::{AnalysisDefaults, PrAgentTools};

use course_core::{CourseConfig, EventStore, Result};
use course_mcp::{CompositeRegistry, CourseMcpServer, HealthTools, ToolRegistry};
use std::sync::Arc;

/// Server name reported to clients.
pub const SERVER_NAME: &str = "pr-agent";

const INSTRUCTIONS: &str = "Reviews the current git branch and its GitHub Actions runs. \
Start with analyze_file_changes, then suggest_pr_template. CI/CD tools read events \
recorded by the webhook receiver (`mcp-course webhook`).";

/// Build the tool set from configuration.
pub fn tools_from_config(config: &CourseConfig) -> Result<PrAgentTools> {
    let git = match &config.pr_agent.repo_dir {
        Some(dir) => GitCli::new(dir),
        None => GitCli::current_dir()?,
    };
    let templates = TemplateCatalog::from_config(config.pr_agent.templates_dir.clone());
    let events = Arc::new(EventStore::new(
        config.events.file.clone(),
        config.events.max_events,
    ));

    tracing::debug!(
        repo = %git.work_dir().display(),
        templates = %templates.location(),
        events = %events.path().display(),
        "Configured PR agent"
    );

    Ok(PrAgentTools::new(git, templates, events).with_defaults(AnalysisDefaults {
        base_branch: config.pr_agent.default_base_branch.clone(),
        max_diff_lines: config.pr_agent.max_diff_lines,
    }))
}

/// Assemble the complete "pr-agent" MCP server.
pub fn server(config: &CourseConfig) -> Result<CourseMcpServer> {
    let tools = tools_from_config(config)?;
    let version = env!("CARGO_PKG_VERSION");
    let health = HealthTools::new(SERVER_NAME, version, tools.tool_count());

    Ok(CourseMcpServer::new(CompositeRegistry::new().add(tools).add(health))
        .with_name(SERVER_NAME)
        .with_version(version)
        .with_instructions(INSTRUCTIONS)
        .with_prompts(PrAgentPrompts))
}
