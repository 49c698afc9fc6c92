//! Prompt registry trait.
//!
//! Prompts are described with [`PromptDef`], which serializes to the MCP
//! wire shape of a prompt listing entry. Rendering a prompt yields the text
//! of a single user message.

use rmcp::model::ErrorData;
use serde::Serialize;
use serde_json::{Map, Value};
use std::future::Future;
use std::pin::Pin;

/// Type alias for async prompt rendering.
pub type PromptFuture = Pin<Box<dyn Future<Output = Result<String, ErrorData>> + Send>>;

/// A prompt argument as advertised to clients.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PromptArgumentDef {
    /// Argument name.
    pub name: String,
    /// What the argument means.
    pub description: String,
    /// Whether the client must supply it.
    pub required: bool,
}

/// A prompt as advertised to clients.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PromptDef {
    /// Prompt name.
    pub name: String,
    /// What the prompt is for.
    pub description: String,
    /// Accepted arguments.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<PromptArgumentDef>,
}

impl PromptDef {
    /// A prompt without arguments.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            arguments: Vec::new(),
        }
    }

    /// Add an argument.
    pub fn argument(
        mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        required: bool,
    ) -> Self {
        self.arguments.push(PromptArgumentDef {
            name: name.into(),
            description: description.into(),
            required,
        });
        self
    }
}

/// Trait for registering and rendering MCP prompts.
pub trait PromptRegistry: Send + Sync {
    /// Returns all available prompts.
    fn prompts(&self) -> Vec<PromptDef>;

    /// Renders a prompt by name.
    ///
    /// Returns `None` if the prompt is not recognized by this registry.
    fn get(&self, name: &str, args: Map<String, Value>) -> Option<PromptFuture>;

    /// Check if a prompt exists by name.
    fn has_prompt(&self, name: &str) -> bool {
        self.prompts().iter().any(|p| p.name == name)
    }
}

/// Fetch a required string argument.
pub fn required_arg(args: &Map<String, Value>, name: &str) -> Result<String, ErrorData> {
    args.get(name)
        .and_then(Value::as_str)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or_else(|| ErrorData::invalid_params(format!("Missing required argument: {name}"), None))
}
