//! Error types and handling for the MCP server.
//!
//! This module defines a unified error type spanning configuration, upstream
//! and serialization failures. Tool invocations never surface these directly;
//! they are converted into error result envelopes at the tool boundary.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Normalized failure from the upstream print API.
    #[error("Upstream error: {0}")]
    Api(#[from] crate::upstream::ApiError),

    /// Configuration-related errors. Fatal at startup.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors from transport communication.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Internal server errors that should not occur under normal operation.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new internal error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
