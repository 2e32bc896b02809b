//! Error types for the blog API client.
//!
//! # Design
//! Three failure classes reach the store boundary: transport failures,
//! non-2xx statuses, and body decode failures. All are handled the same
//! way there (logged, snapshot untouched, no retry), but they stay
//! distinct variants so tests and callers can tell them apart. `NotFound`
//! gets its own variant because "the resource does not exist" is worth
//! distinguishing from an unexpected status.

use std::fmt;

use crate::http::TransportError;

/// Errors produced by `BlogClient` parsing and `PostStore` operations.
#[derive(Debug)]
pub enum ApiError {
    /// The HTTP round-trip never completed.
    Transport(String),

    /// The server returned 404 — the requested post does not exist.
    NotFound,

    /// The server returned a non-2xx status other than 404.
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    SerializationError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "transport failure: {msg}"),
            ApiError::NotFound => write!(f, "post not found"),
            ApiError::HttpError { status, body } => {
                write!(f, "HTTP {status}: {body}")
            }
            ApiError::DeserializationError(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
            ApiError::SerializationError(msg) => {
                write!(f, "serialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        ApiError::Transport(err.message)
    }
}
