//! Resource registry trait.
//!
//! Resources come in two forms: fixed resources listed by URI and
//! parameterized resource templates such as `weather://{location}`.
//! Both descriptor types serialize to their MCP wire shapes.

use rmcp::model::ErrorData;
use serde::Serialize;
use std::future::Future;
use std::pin::Pin;

/// Body of a read resource.
#[derive(Clone, Debug, PartialEq)]
pub struct ResourceBody {
    /// URI that was read.
    pub uri: String,
    /// MIME type of `text`.
    pub mime_type: String,
    /// Resource text.
    pub text: String,
}

impl ResourceBody {
    /// A `text/plain` body.
    pub fn plain(uri: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            mime_type: "text/plain".to_string(),
            text: text.into(),
        }
    }
}

/// Type alias for async resource reads.
pub type ResourceFuture = Pin<Box<dyn Future<Output = Result<ResourceBody, ErrorData>> + Send>>;

/// A fixed resource as advertised to clients.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDef {
    /// Resource URI.
    pub uri: String,
    /// Display name.
    pub name: String,
    /// What the resource holds.
    pub description: String,
    /// MIME type.
    pub mime_type: String,
}

/// A resource template as advertised to clients.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceTemplateDef {
    /// RFC 6570 level-1 template, e.g. `weather://{location}`.
    pub uri_template: String,
    /// Display name.
    pub name: String,
    /// What the resource holds.
    pub description: String,
    /// MIME type.
    pub mime_type: String,
}

/// Trait for registering and reading MCP resources.
pub trait ResourceRegistry: Send + Sync {
    /// Parameterized resources.
    fn resource_templates(&self) -> Vec<ResourceTemplateDef> {
        Vec::new()
    }

    /// Fixed resources.
    fn resources(&self) -> Vec<ResourceDef> {
        Vec::new()
    }

    /// Reads a resource by URI.
    ///
    /// Returns `None` if no resource or template of this registry matches.
    fn read(&self, uri: &str) -> Option<ResourceFuture>;
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_template_wire_shape() {
        let def = ResourceTemplateDef {
            uri_template: "weather://{location}".to_string(),
            name: "weather".to_string(),
            description: "Weather data".to_string(),
            mime_type: "text/plain".to_string(),
        };
        let value = serde_json::to_value(&def).unwrap();
        assert_eq!(value["uriTemplate"], "weather://{location}");
        assert_eq!(value["mimeType"], "text/plain");
    }

    #[test]
    fn test_plain_body() {
        let body = ResourceBody::plain("weather://Oslo", "Sunny");
        assert_eq!(body.mime_type, "text/plain");
        assert_eq!(body.uri, "weather://Oslo");
    }
}
