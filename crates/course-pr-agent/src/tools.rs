//! MCP tools of the PR agent.
//!
//! Failures are reported in-band as JSON payloads with `isError` set, so
//! the model sees what went wrong instead of a protocol error.

use crate::analysis::analyze_changes;
use crate::git::GitBackend;
use crate::response::ErrorResponse;
use crate::templates::TemplateCatalog;
use course_core::{Error, EventStore};
use course_mcp::helpers::{json_error_result, json_result, make_tool, parse_args, schema_for};
use course_mcp::model::{CallToolResult, ErrorData, Tool};
use course_mcp::{ToolRegistry, ToolResult};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;

/// Tool names, in listing order.
pub const TOOL_NAMES: [&str; 5] = [
    "analyze_file_changes",
    "get_pr_templates",
    "suggest_pr_template",
    "get_recent_actions_events",
    "get_workflow_status",
];

/// Arguments for `analyze_file_changes`.
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct AnalyzeArgs {
    /// Base branch to compare against (default "main")
    #[serde(default)]
    pub base_branch: Option<String>,
    /// Include the full diff content (default true)
    #[serde(default)]
    pub include_diff: Option<bool>,
    /// Maximum number of diff lines to include (default 500)
    #[serde(default)]
    pub max_diff_lines: Option<usize>,
}

/// Arguments for `suggest_pr_template`.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SuggestArgs {
    /// Analysis of what the changes do
    pub changes_summary: String,
    /// Type of change identified (bug, feature, docs, refactor, test, performance, security)
    pub change_type: String,
}

/// Arguments for `get_recent_actions_events`.
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct RecentEventsArgs {
    /// Maximum number of events to return (default 10)
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Arguments for `get_workflow_status`.
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct WorkflowStatusArgs {
    /// Optional specific workflow name to filter by
    #[serde(default)]
    pub workflow_name: Option<String>,
}

/// Defaults applied when the caller omits analysis arguments.
#[derive(Clone, Debug, PartialEq)]
pub struct AnalysisDefaults {
    /// Base branch.
    pub base_branch: String,
    /// Diff line budget.
    pub max_diff_lines: usize,
}

impl Default for AnalysisDefaults {
    fn default() -> Self {
        Self {
            base_branch: "main".to_string(),
            max_diff_lines: 500,
        }
    }
}

const NO_EVENTS_MESSAGE: &str = "No GitHub Actions events received yet";

/// The PR agent tool set.
#[derive(Clone)]
pub struct PrAgentTools {
    git: Arc<dyn GitBackend>,
    templates: Arc<TemplateCatalog>,
    events: Arc<EventStore>,
    defaults: AnalysisDefaults,
}

impl PrAgentTools {
    /// Assemble the tools from their collaborators.
    pub fn new<G: GitBackend + 'static>(
        git: G,
        templates: TemplateCatalog,
        events: Arc<EventStore>,
    ) -> Self {
        Self {
            git: Arc::new(git),
            templates: Arc::new(templates),
            events,
            defaults: AnalysisDefaults::default(),
        }
    }

    /// Override the analysis defaults.
    pub fn with_defaults(mut self, defaults: AnalysisDefaults) -> Self {
        self.defaults = defaults;
        self
    }
}

impl ToolRegistry for PrAgentTools {
    fn tools(&self) -> Vec<Tool> {
        vec![
            make_tool(
                "analyze_file_changes",
                "Get the full diff and list of changed files in the current git repository",
                schema_for::<AnalyzeArgs>(),
            ),
            make_tool(
                "get_pr_templates",
                "List available Pull Request templates with their content",
                course_mcp::helpers::empty_schema(),
            ),
            make_tool(
                "suggest_pr_template",
                "Suggest the most appropriate Pull Request template for the analyzed changes",
                schema_for::<SuggestArgs>(),
            ),
            make_tool(
                "get_recent_actions_events",
                "Get recent GitHub Actions events received via webhook",
                schema_for::<RecentEventsArgs>(),
            ),
            make_tool(
                "get_workflow_status",
                "Get the current status of GitHub Actions workflows",
                schema_for::<WorkflowStatusArgs>(),
            ),
        ]
    }

    fn call(&self, name: &str, args: Value) -> Option<ToolResult> {
        let tools = self.clone();
        match name {
            "analyze_file_changes" => Some(Box::pin(async move {
                tools.analyze_file_changes(parse_args(args)?).await
            })),
            "get_pr_templates" => Some(Box::pin(async move { tools.get_pr_templates().await })),
            "suggest_pr_template" => Some(Box::pin(async move {
                tools.suggest_pr_template(parse_args(args)?).await
            })),
            "get_recent_actions_events" => Some(Box::pin(async move {
                tools.get_recent_actions_events(parse_args(args)?).await
            })),
            "get_workflow_status" => Some(Box::pin(async move {
                tools.get_workflow_status(parse_args(args)?).await
            })),
            _ => None,
        }
    }
}

impl PrAgentTools {
    async fn analyze_file_changes(&self, args: AnalyzeArgs) -> Result<CallToolResult, ErrorData> {
        let base_branch = args
            .base_branch
            .filter(|b| !b.trim().is_empty())
            .unwrap_or_else(|| self.defaults.base_branch.clone());
        let include_diff = args.include_diff.unwrap_or(true);
        let max_diff_lines = args.max_diff_lines.unwrap_or(self.defaults.max_diff_lines);

        match analyze_changes(self.git.as_ref(), &base_branch, include_diff, max_diff_lines).await {
            Ok(analysis) => json_result(&analysis),
            Err(err @ Error::Git { .. }) => {
                tracing::warn!(error = %err, "Change analysis failed");
                json_error_result(&json!({ "error": err.to_string() }))
            }
            Err(err) => {
                tracing::warn!(error = %err, "Change analysis failed");
                json_error_result(&ErrorResponse::from_error(
                    format!("Error analyzing the changes against the {base_branch} branch"),
                    &err,
                ))
            }
        }
    }

    async fn get_pr_templates(&self) -> Result<CallToolResult, ErrorData> {
        match self.templates.list().await {
            Ok(templates) => json_result(&templates),
            Err(err) => json_error_result(&ErrorResponse::from_error(
                format!(
                    "Error retrieving files from folder = \"{}\"",
                    self.templates.location()
                ),
                &err,
            )),
        }
    }

    async fn suggest_pr_template(&self, args: SuggestArgs) -> Result<CallToolResult, ErrorData> {
        match self
            .templates
            .suggest(&args.changes_summary, &args.change_type)
            .await
        {
            Ok(suggestion) => json_result(&suggestion),
            Err(Error::NotFoundItem { .. }) => {
                json_error_result(&ErrorResponse::new(
                    format!("No Pull Request template was found for {}", args.change_type),
                    404,
                ))
            }
            Err(err) => json_error_result(&ErrorResponse::from_error(
                "Error while suggesting which Pull Request template to use",
                &err,
            )),
        }
    }

    async fn get_recent_actions_events(
        &self,
        args: RecentEventsArgs,
    ) -> Result<CallToolResult, ErrorData> {
        let limit = args.limit.unwrap_or(10);
        match self.events.recent(limit).await {
            Ok(events) => json_result(&events),
            Err(err) => json_error_result(&ErrorResponse::from_error(
                "Error reading GitHub Actions events",
                &err,
            )),
        }
    }

    async fn get_workflow_status(
        &self,
        args: WorkflowStatusArgs,
    ) -> Result<CallToolResult, ErrorData> {
        let filter = args.workflow_name.as_deref().filter(|n| !n.is_empty());
        match self.events.workflow_status(filter).await {
            Ok(statuses) => json_result(&statuses),
            Err(err) if err.is_not_found() => {
                json_error_result(&ErrorResponse::new(NO_EVENTS_MESSAGE, 404))
            }
            Err(err) => json_error_result(&ErrorResponse::from_error(
                "Error reading GitHub Actions events",
                &err,
            )),
        }
    }
}
