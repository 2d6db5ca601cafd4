//! Error types for the dashboard API client.

use thiserror::Error;

/// Errors from talking to the dashboard REST API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure (connect, timeout, TLS).
    #[error("http transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response from the API.
    #[error("api returned {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    /// 404 for a specific resource id.
    #[error("{resource} '{id}' not found")]
    NotFound { resource: String, id: String },

    /// Response body did not match the expected shape.
    #[error("failed to decode {context} response: {message}")]
    Decode { context: String, message: String },
}

/// Result alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
