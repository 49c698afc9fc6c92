//! Generic MCP server.
//!
//! `CourseMcpServer` holds a tool registry plus any number of prompt and
//! resource registries and implements `rmcp::ServerHandler` by delegating
//! to them. Prompt, resource and template listings are assembled in their
//! wire shape and decoded into the SDK's model types.

use crate::error::{Error, Result};
use crate::prompts::{PromptDef, PromptRegistry};
use crate::registry::ToolRegistry;
use crate::resources::{ResourceDef, ResourceRegistry, ResourceTemplateDef};
use rmcp::model::{
    CallToolRequestParams, CallToolResult, ErrorData, GetPromptRequestParams, GetPromptResult,
    ListPromptsResult, ListResourceTemplatesResult, ListResourcesResult, ListToolsResult,
    PaginatedRequestParams, Prompt, ReadResourceRequestParams, ReadResourceResult, Resource,
    ResourceTemplate, ServerCapabilities, ServerInfo, Tool,
};
use rmcp::service::RequestContext;
use rmcp::{RoleServer, ServerHandler, ServiceExt};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};

/// Server metadata reported during initialization.
#[derive(Clone, Debug, PartialEq)]
pub struct ServerConfig {
    /// Server name, e.g. `pr-agent`.
    pub name: String,
    /// Server version.
    pub version: String,
    /// Usage hints for the client.
    pub instructions: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "course-mcp".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            instructions: None,
        }
    }
}

/// MCP server delegating to registries.
///
/// # Example
///
/// ```rust,ignore
/// CourseMcpServer::new(CompositeRegistry::new().add(WeatherTools))
///     .with_name("Weather Service")
///     .with_prompts(WeatherPrompts)
///     .with_resources(WeatherResources)
///     .serve_stdio()
///     .await?;
/// ```
pub struct CourseMcpServer {
    config: ServerConfig,
    tools: Box<dyn ToolRegistry>,
    prompts: Vec<Box<dyn PromptRegistry>>,
    resources: Vec<Box<dyn ResourceRegistry>>,
}

impl CourseMcpServer {
    /// Create a server exposing the tools of `registry`.
    pub fn new<R: ToolRegistry + 'static>(registry: R) -> Self {
        Self {
            config: ServerConfig::default(),
            tools: Box::new(registry),
            prompts: Vec::new(),
            resources: Vec::new(),
        }
    }

    /// Replace the server metadata.
    pub fn with_config(mut self, config: ServerConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the server name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.config.name = name.into();
        self
    }

    /// Set the server version.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.config.version = version.into();
        self
    }

    /// Set the client instructions.
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.config.instructions = Some(instructions.into());
        self
    }

    /// Add a prompt registry.
    pub fn with_prompts<P: PromptRegistry + 'static>(mut self, prompts: P) -> Self {
        self.prompts.push(Box::new(prompts));
        self
    }

    /// Add a resource registry.
    pub fn with_resources<R: ResourceRegistry + 'static>(mut self, resources: R) -> Self {
        self.resources.push(Box::new(resources));
        self
    }

    /// Server metadata.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// All tool definitions.
    pub fn tool_definitions(&self) -> Vec<Tool> {
        self.tools.tools()
    }

    /// All prompt descriptors.
    pub fn prompt_definitions(&self) -> Vec<PromptDef> {
        self.prompts.iter().flat_map(|p| p.prompts()).collect()
    }

    /// All resource template descriptors.
    pub fn resource_template_definitions(&self) -> Vec<ResourceTemplateDef> {
        self.resources
            .iter()
            .flat_map(|r| r.resource_templates())
            .collect()
    }

    /// All fixed resource descriptors.
    pub fn resource_definitions(&self) -> Vec<ResourceDef> {
        self.resources.iter().flat_map(|r| r.resources()).collect()
    }

    /// Run a tool by name.
    pub async fn dispatch_tool(&self, name: &str, args: Value) -> std::result::Result<CallToolResult, ErrorData> {
        tracing::debug!(tool = name, "Tool call");
        match self.tools.call(name, args) {
            Some(future) => future.await,
            None => Err(ErrorData::invalid_params(format!("Unknown tool: {name}"), None)),
        }
    }

    /// Render a prompt by name.
    pub async fn render_prompt(
        &self,
        name: &str,
        args: Map<String, Value>,
    ) -> std::result::Result<GetPromptResult, ErrorData> {
        tracing::debug!(prompt = name, "Prompt request");
        let def = self
            .prompt_definitions()
            .into_iter()
            .find(|p| p.name == name);
        let future = self.prompts.iter().find_map(|p| p.get(name, args.clone()));

        let (Some(def), Some(future)) = (def, future) else {
            return Err(ErrorData::invalid_params(format!("Unknown prompt: {name}"), None));
        };

        let text = future.await?;
        from_wire(json!({
            "description": def.description,
            "messages": [{
                "role": "user",
                "content": { "type": "text", "text": text }
            }]
        }))
    }

    /// Read a resource by URI.
    pub async fn read(&self, uri: &str) -> std::result::Result<ReadResourceResult, ErrorData> {
        tracing::debug!(uri, "Resource read");
        let Some(future) = self.resources.iter().find_map(|r| r.read(uri)) else {
            return Err(ErrorData::resource_not_found(
                format!("Resource not found: {uri}"),
                None,
            ));
        };

        let body = future.await?;
        from_wire(json!({
            "contents": [{
                "uri": body.uri,
                "mimeType": body.mime_type,
                "text": body.text
            }]
        }))
    }

    fn wire_prompts(&self) -> std::result::Result<Vec<Prompt>, ErrorData> {
        self.prompt_definitions().iter().map(to_wire).collect()
    }

    fn wire_resource_templates(&self) -> std::result::Result<Vec<ResourceTemplate>, ErrorData> {
        self.resource_template_definitions().iter().map(to_wire).collect()
    }

    fn wire_resources(&self) -> std::result::Result<Vec<Resource>, ErrorData> {
        self.resource_definitions().iter().map(to_wire).collect()
    }

    /// Serve over stdin/stdout until the client disconnects.
    pub async fn serve_stdio(self) -> Result<()> {
        tracing::info!(
            server = %self.config.name,
            tools = self.tools.tool_count(),
            prompts = self.prompt_definitions().len(),
            "Starting MCP server on stdio"
        );

        let running = self
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;
        let reason = running
            .waiting()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        tracing::info!(?reason, "MCP server stopped");
        Ok(())
    }
}

fn from_wire<T: DeserializeOwned>(value: Value) -> std::result::Result<T, ErrorData> {
    serde_json::from_value(value).map_err(|e| ErrorData::internal_error(e.to_string(), None))
}

fn to_wire<S: serde::Serialize, T: DeserializeOwned>(def: &S) -> std::result::Result<T, ErrorData> {
    let value = serde_json::to_value(def).map_err(|e| ErrorData::internal_error(e.to_string(), None))?;
    from_wire(value)
}

impl ServerHandler for CourseMcpServer {
    fn get_info(&self) -> ServerInfo {
        let mut info = ServerInfo::default();
        info.capabilities = ServerCapabilities::builder()
            .enable_prompts()
            .enable_resources()
            .enable_tools()
            .build();
        info.server_info.name = self.config.name.clone();
        info.server_info.version = self.config.version.clone();
        info.instructions = self.config.instructions.clone();
        info
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, ErrorData> {
        Ok(ListToolsResult::with_all_items(self.tool_definitions()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, ErrorData> {
        let args = Value::Object(request.arguments.unwrap_or_default());
        self.dispatch_tool(&request.name, args).await
    }

    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListPromptsResult, ErrorData> {
        Ok(ListPromptsResult::with_all_items(self.wire_prompts()?))
    }

    async fn get_prompt(
        &self,
        request: GetPromptRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<GetPromptResult, ErrorData> {
        self.render_prompt(&request.name, request.arguments.unwrap_or_default())
            .await
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListResourcesResult, ErrorData> {
        Ok(ListResourcesResult::with_all_items(self.wire_resources()?))
    }

    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListResourceTemplatesResult, ErrorData> {
        Ok(ListResourceTemplatesResult::with_all_items(
            self.wire_resource_templates()?,
        ))
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ReadResourceResult, ErrorData> {
        self.read(&request.uri).await
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::helpers::{empty_schema, make_tool, result_text, text_result};
    use crate::prompts::{PromptFuture, required_arg};
    use crate::registry::{CompositeRegistry, ToolResult};
    use crate::resources::{ResourceBody, ResourceFuture};
    use crate::uri_template::match_template;
    use rmcp::model::ErrorCode;

    struct EchoTools;

    impl ToolRegistry for EchoTools {
        fn tools(&self) -> Vec<Tool> {
            vec![make_tool("echo", "Echo arguments", empty_schema())]
        }

        fn call(&self, name: &str, args: Value) -> Option<ToolResult> {
            (name == "echo").then(|| -> ToolResult {
                Box::pin(async move { Ok(text_result(args.to_string())) })
            })
        }
    }

    struct GreetingPrompts;

    impl PromptRegistry for GreetingPrompts {
        fn prompts(&self) -> Vec<PromptDef> {
            vec![PromptDef::new("greet", "Greet someone").argument("who", "Name", true)]
        }

        fn get(&self, name: &str, args: Map<String, Value>) -> Option<PromptFuture> {
            (name == "greet").then(|| -> PromptFuture {
                Box::pin(async move { Ok(format!("Say hello to {}", required_arg(&args, "who")?)) })
            })
        }
    }

    struct NoteResources;

    impl ResourceRegistry for NoteResources {
        fn resource_templates(&self) -> Vec<ResourceTemplateDef> {
            vec![ResourceTemplateDef {
                uri_template: "note://{id}".to_string(),
                name: "note".to_string(),
                description: "A note".to_string(),
                mime_type: "text/plain".to_string(),
            }]
        }

        fn read(&self, uri: &str) -> Option<ResourceFuture> {
            let vars = match_template("note://{id}", uri)?;
            let uri = uri.to_string();
            Some(Box::pin(async move {
                Ok(ResourceBody::plain(uri, format!("note {}", vars["id"])))
            }))
        }
    }

    fn server() -> CourseMcpServer {
        CourseMcpServer::new(CompositeRegistry::new().add(EchoTools))
            .with_name("test-server")
            .with_version("9.9.9")
            .with_instructions("Use the echo tool")
            .with_prompts(GreetingPrompts)
            .with_resources(NoteResources)
    }

    #[test]
    fn test_get_info() {
        let info = server().get_info();
        assert_eq!(info.server_info.name, "test-server");
        assert_eq!(info.server_info.version, "9.9.9");
        assert_eq!(info.instructions.as_deref(), Some("Use the echo tool"));
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.prompts.is_some());
        assert!(info.capabilities.resources.is_some());
    }

    #[tokio::test]
    async fn test_dispatch_tool() {
        let result = server()
            .dispatch_tool("echo", json!({"x": 1}))
            .await
            .unwrap();
        assert_eq!(result_text(&result), r#"{"x":1}"#);
    }

    #[tokio::test]
    async fn test_dispatch_unknown_tool() {
        let err = server().dispatch_tool("nope", json!({})).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert!(err.message.contains("Unknown tool: nope"));
    }

    #[tokio::test]
    async fn test_render_prompt() {
        let args = json!({"who": "Ada"}).as_object().unwrap().clone();
        let result = server().render_prompt("greet", args).await.unwrap();

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["description"], "Greet someone");
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["messages"][0]["content"]["text"], "Say hello to Ada");
    }

    #[tokio::test]
    async fn test_render_prompt_errors() {
        let err = server().render_prompt("greet", Map::new()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);

        let err = server().render_prompt("nope", Map::new()).await.unwrap_err();
        assert!(err.message.contains("Unknown prompt"));
    }

    #[tokio::test]
    async fn test_read_resource() {
        let result = server().read("note://42").await.unwrap();
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["contents"][0]["text"], "note 42");
        assert_eq!(value["contents"][0]["uri"], "note://42");
        assert_eq!(value["contents"][0]["mimeType"], "text/plain");

        let err = server().read("other://1").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::RESOURCE_NOT_FOUND);
    }

    #[test]
    fn test_wire_listings() {
        let server = server();

        let prompts = server.wire_prompts().unwrap();
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0].name, "greet");

        let templates = server.wire_resource_templates().unwrap();
        assert_eq!(templates.len(), 1);
        assert_eq!(templates[0].uri_template, "note://{id}");

        assert!(server.wire_resources().unwrap().is_empty());
    }

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.name, "course-mcp");
        assert!(config.instructions.is_none());
    }
}
