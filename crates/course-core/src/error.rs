//! Error types for the course servers.

use std::path::{Path, PathBuf};

/// Errors shared by every course crate.
///
/// All error variants are marked with `#[non_exhaustive]` so new failure
/// kinds can be added without breaking downstream matches.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// I/O error on a specific path
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// Path the operation targeted
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// File does not exist
    #[error("{} does not exist", path.display())]
    NotFound {
        /// Missing path
        path: PathBuf,
    },

    /// A file operation targeted a directory
    #[error("{} is a directory", path.display())]
    IsDirectory {
        /// Offending path
        path: PathBuf,
    },

    /// A JSON read targeted a file without the `.json` extension
    #[error("{} is not a JSON file", path.display())]
    NotJson {
        /// Offending path
        path: PathBuf,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// A git command failed
    #[error("Git error: {message}")]
    Git {
        /// Captured stderr or spawn failure
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// A named item (template, prompt, resource, event log) is missing
    #[error("{kind} not found: {name}")]
    NotFoundItem {
        /// Kind of item, e.g. "template"
        kind: &'static str,
        /// Name that was looked up
        name: String,
    },

    /// A caller supplied an invalid argument
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// What was wrong with the argument
        message: String,
    },
}

/// Convenience `Result` type alias for course operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates an I/O error attributed to `path`.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        if source.kind() == std::io::ErrorKind::NotFound {
            return Error::NotFound { path };
        }
        Error::Io { path, source }
    }

    /// Creates an I/O error attributed to `path`, whatever its kind.
    pub fn io(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a new git error.
    pub fn git<S: Into<String>>(message: S) -> Self {
        Error::Git {
            message: message.into(),
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates a new not-found error for a named item.
    pub fn not_found(kind: &'static str, name: impl Into<String>) -> Self {
        Error::NotFoundItem {
            kind,
            name: name.into(),
        }
    }

    /// Creates a new invalid-argument error.
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Error::InvalidArgument {
            message: message.into(),
        }
    }

    /// HTTP-like status code used in tool error payloads.
    pub fn status_code(&self) -> u16 {
        match self {
            Error::NotFound { .. } | Error::NotFoundItem { .. } => 404,
            Error::IsDirectory { .. }
            | Error::NotJson { .. }
            | Error::Json(_)
            | Error::InvalidArgument { .. } => 400,
            Error::Io { .. } | Error::Git { .. } | Error::Config { .. } => 500,
        }
    }

    /// Returns `true` for the not-found family of errors.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. } | Error::NotFoundItem { .. })
    }
}
