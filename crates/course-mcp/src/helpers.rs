//! Helpers for building tool definitions and results.

use rmcp::model::{CallToolResult, Content, ErrorData, RawContent, Tool};
use schemars::JsonSchema;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

/// JSON object type used for tool input schemas.
pub type JsonObject = serde_json::Map<String, Value>;

/// Wrap a `serde_json::json!` object as a tool input schema.
pub fn json_schema(value: Value) -> Arc<JsonObject> {
    match value {
        Value::Object(map) => Arc::new(map),
        _ => Arc::new(serde_json::Map::new()),
    }
}

/// Schema for a tool that takes no arguments.
pub fn empty_schema() -> Arc<JsonObject> {
    json_schema(serde_json::json!({
        "type": "object",
        "properties": {}
    }))
}

/// Derive a tool input schema from an argument type.
pub fn schema_for<T: JsonSchema>() -> Arc<JsonObject> {
    let schema = schemars::schema_for!(T);
    match serde_json::to_value(&schema) {
        Ok(value) => json_schema(value),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to serialize tool schema");
            empty_schema()
        }
    }
}

/// Build a tool definition.
pub fn make_tool(name: &str, description: &str, input_schema: Arc<JsonObject>) -> Tool {
    Tool::new(name.to_string(), description.to_string(), input_schema)
}

/// Deserialize tool arguments; missing arguments are an empty object.
pub fn parse_args<T: DeserializeOwned>(args: Value) -> Result<T, ErrorData> {
    let args = match args {
        Value::Null => Value::Object(serde_json::Map::new()),
        other => other,
    };
    serde_json::from_value(args).map_err(|e| ErrorData::invalid_params(e.to_string(), None))
}

/// Successful result carrying pretty-printed JSON.
pub fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, ErrorData> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| ErrorData::internal_error(e.to_string(), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

/// Successful result carrying plain text.
pub fn text_result(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}

/// Tool-level failure (`isError: true`) carrying a JSON payload.
pub fn json_error_result<T: Serialize>(value: &T) -> Result<CallToolResult, ErrorData> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| ErrorData::internal_error(e.to_string(), None))?;
    Ok(CallToolResult::error(vec![Content::text(json)]))
}

/// Concatenated text of every text content item in a result.
pub fn result_text(result: &CallToolResult) -> String {
    result
        .content
        .iter()
        .filter_map(|c| match &c.raw {
            RawContent::Text(t) => Some(t.text.clone()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("\n")
}
