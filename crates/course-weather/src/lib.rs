//! Weather MCP server.
//!
//! The smallest server that uses all three MCP primitives: a tool
//! (`get_weather`), a resource template (`weather://{location}`), and a
//! prompt (`weather_report`). Weather data is a fixed report.

use course_mcp::helpers::{make_tool, parse_args, schema_for, text_result};
use course_mcp::model::Tool;
use course_mcp::prompts::required_arg;
use course_mcp::uri_template::match_template;
use course_mcp::{
    CompositeRegistry, CourseMcpServer, HealthTools, PromptDef, PromptFuture, PromptRegistry,
    ResourceBody, ResourceFuture, ResourceRegistry, ResourceTemplateDef, ToolRegistry, ToolResult,
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Server name reported to clients.
pub const SERVER_NAME: &str = "Weather Service";

/// URI template of the weather resource.
pub const WEATHER_URI_TEMPLATE: &str = "weather://{location}";

const CONDITIONS: &str = "Sunny, 72°F";

/// Current weather at `location`.
pub fn current_weather(location: &str) -> String {
    format!("Weather in {location}: {CONDITIONS}")
}

/// Resource text for `location`.
pub fn weather_data(location: &str) -> String {
    format!("Weather data for {location}: {CONDITIONS}")
}

/// Prompt text asking for a report on `location`.
pub fn weather_report(location: &str) -> String {
    format!("You are a weather reporter. Weather report for {location}?")
}

/// Arguments for `get_weather`.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct WeatherArgs {
    /// Location for which to retrieve the weather
    pub location: String,
}

/// The `get_weather` tool.
pub struct WeatherTools;

impl ToolRegistry for WeatherTools {
    fn tools(&self) -> Vec<Tool> {
        vec![make_tool(
            "get_weather",
            "Get the current weather for a specified location",
            schema_for::<WeatherArgs>(),
        )]
    }

    fn call(&self, name: &str, args: Value) -> Option<ToolResult> {
        if name != "get_weather" {
            return None;
        }
        Some(Box::pin(async move {
            let args: WeatherArgs = parse_args(args)?;
            tracing::debug!(location = %args.location, "Weather lookup");
            Ok(text_result(current_weather(&args.location)))
        }))
    }
}

/// The `weather://{location}` resource template.
pub struct WeatherResources;

impl ResourceRegistry for WeatherResources {
    fn resource_templates(&self) -> Vec<ResourceTemplateDef> {
        vec![ResourceTemplateDef {
            uri_template: WEATHER_URI_TEMPLATE.to_string(),
            name: "weather_resource".to_string(),
            description: "Weather information for a location".to_string(),
            mime_type: "text/plain".to_string(),
        }]
    }

    fn read(&self, uri: &str) -> Option<ResourceFuture> {
        let vars = match_template(WEATHER_URI_TEMPLATE, uri)?;
        let location = vars.get("location")?.clone();
        let uri = uri.to_string();
        Some(Box::pin(async move {
            Ok(ResourceBody::plain(uri, weather_data(&location)))
        }))
    }
}

/// The `weather_report` prompt.
pub struct WeatherPrompts;

impl PromptRegistry for WeatherPrompts {
    fn prompts(&self) -> Vec<PromptDef> {
        vec![
            PromptDef::new("weather_report", "Create a weather report prompt").argument(
                "location",
                "Location for which to report the weather",
                true,
            ),
        ]
    }

    fn get(&self, name: &str, args: Map<String, Value>) -> Option<PromptFuture> {
        if name != "weather_report" {
            return None;
        }
        Some(Box::pin(async move {
            Ok(weather_report(&required_arg(&args, "location")?))
        }))
    }
}

/// Assemble the complete weather MCP server.
pub fn server() -> CourseMcpServer {
    let version = env!("CARGO_PKG_VERSION");
    let health = HealthTools::new(SERVER_NAME, version, WeatherTools.tool_count());

    CourseMcpServer::new(CompositeRegistry::new().add(WeatherTools).add(health))
        .with_name(SERVER_NAME)
        .with_version(version)
        .with_prompts(WeatherPrompts)
        .with_resources(WeatherResources)
}
