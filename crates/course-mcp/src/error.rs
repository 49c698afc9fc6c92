//! Error types for course-mcp

use rmcp::model::ErrorData;
use thiserror::Error;

/// Result type alias for course-mcp operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in course-mcp
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The stdio transport failed to start or terminated abnormally
    #[error("Transport error: {0}")]
    Transport(String),
}

/// Conversion of domain errors into MCP protocol errors.
pub trait McpErrorExt {
    /// Map to the closest JSON-RPC error category.
    fn to_mcp_error(&self) -> ErrorData;
}

impl McpErrorExt for course_core::Error {
    fn to_mcp_error(&self) -> ErrorData {
        use course_core::Error as E;

        let message = self.to_string();
        match self {
            E::NotFound { .. } | E::NotFoundItem { .. } => {
                ErrorData::resource_not_found(message, None)
            }
            E::InvalidArgument { .. } | E::NotJson { .. } | E::IsDirectory { .. } | E::Json(_) => {
                ErrorData::invalid_params(message, None)
            }
            _ => ErrorData::internal_error(message, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::ErrorCode;

    #[test]
    fn test_not_found_maps_to_resource_not_found() {
        let err = course_core::Error::not_found("template", "bug");
        let data = err.to_mcp_error();
        assert_eq!(data.code, ErrorCode::RESOURCE_NOT_FOUND);
        assert!(data.message.contains("bug"));
    }

    #[test]
    fn test_invalid_argument_maps_to_invalid_params() {
        let err = course_core::Error::invalid_argument("letter must not be empty");
        assert_eq!(err.to_mcp_error().code, ErrorCode::INVALID_PARAMS);
    }

    #[test]
    fn test_git_maps_to_internal() {
        let err = course_core::Error::git("fatal");
        assert_eq!(err.to_mcp_error().code, ErrorCode::INTERNAL_ERROR);
    }

    #[test]
    fn test_transport_display() {
        let err = Error::Transport("connection closed".to_string());
        assert_eq!(err.to_string(), "Transport error: connection closed");
    }
}
