//! Text tools MCP server.
//!
//! Two small text utilities exposed as MCP tools:
//!
//! - `letter_counter`: case-insensitive occurrences of a letter in a word
//! - `sentiment_analysis`: polarity, subjectivity, and an overall reading

pub mod letters;
pub mod sentiment;

pub use letters::count_letter;
pub use sentiment::{Assessment, Sentiment, analyze};

use course_mcp::helpers::{make_tool, parse_args, schema_for, text_result};
use course_mcp::model::{CallToolResult, ErrorData, Tool};
use course_mcp::{
    CompositeRegistry, CourseMcpServer, HealthTools, McpErrorExt, ToolRegistry, ToolResult,
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

/// Server name reported to clients.
pub const SERVER_NAME: &str = "text-tools";

/// Arguments for `letter_counter`.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct LetterCountArgs {
    /// The input text to search through
    pub word: String,
    /// The letter to search for
    pub letter: String,
}

/// Arguments for `sentiment_analysis`.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SentimentArgs {
    /// The text to analyze
    pub text: String,
}

/// The text tool set.
pub struct TextTools;

impl ToolRegistry for TextTools {
    fn tools(&self) -> Vec<Tool> {
        vec![
            make_tool(
                "letter_counter",
                "Count the occurrences of a letter within a word (e.g. \"strawberry\" has 3 'r's)",
                schema_for::<LetterCountArgs>(),
            ),
            make_tool(
                "sentiment_analysis",
                "Analyze the sentiment of a text, returning polarity, subjectivity, and assessment as JSON",
                schema_for::<SentimentArgs>(),
            ),
        ]
    }

    fn call(&self, name: &str, args: Value) -> Option<ToolResult> {
        match name {
            "letter_counter" => Some(Box::pin(async move { letter_counter(parse_args(args)?) })),
            "sentiment_analysis" => {
                Some(Box::pin(async move { sentiment_analysis(parse_args(args)?) }))
            }
            _ => None,
        }
    }
}

fn letter_counter(args: LetterCountArgs) -> Result<CallToolResult, ErrorData> {
    if args.letter.is_empty() {
        return Err(course_core::Error::invalid_argument("letter must not be empty").to_mcp_error());
    }
    let count = count_letter(&args.word, &args.letter);
    tracing::debug!(count, "Counted letters");
    Ok(text_result(count.to_string()))
}

fn sentiment_analysis(args: SentimentArgs) -> Result<CallToolResult, ErrorData> {
    let sentiment = analyze(&args.text);
    tracing::debug!(assessment = %sentiment.assessment, "Analyzed sentiment");
    let json =
        serde_json::to_string(&sentiment).map_err(|e| ErrorData::internal_error(e.to_string(), None))?;
    Ok(text_result(json))
}

/// Assemble the complete text tools MCP server.
pub fn server() -> CourseMcpServer {
    let version = env!("CARGO_PKG_VERSION");
    let health = HealthTools::new(SERVER_NAME, version, TextTools.tool_count());

    CourseMcpServer::new(CompositeRegistry::new().add(TextTools).add(health))
        .with_name(SERVER_NAME)
        .with_version(version)
}
