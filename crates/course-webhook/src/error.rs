//! Error types for course-webhook.

use thiserror::Error;

/// Result type alias for webhook operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while running the receiver.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from course-core.
    #[error("Core error: {0}")]
    Core(#[from] course_core::Error),

    /// The listener could not bind its address.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        /// Address that was requested.
        addr: String,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The HTTP server stopped with an error.
    #[error("Webhook server error: {0}")]
    Serve(#[source] std::io::Error),
}
