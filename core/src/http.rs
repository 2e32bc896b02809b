//! HTTP transport types and the transport seam.
//!
//! # Design
//! Requests and responses are plain data. `BlogClient` builds `HttpRequest`
//! values and parses `HttpResponse` values; the `Transport` implementation
//! is the only place real I/O happens. `PostStore` is generic over
//! `Transport`, so unit tests script responses without a socket and the
//! cli plugs in a blocking HTTP agent.
//!
//! `execute` is async: every outstanding call is an ordinary future that
//! can be dropped mid-flight, even though nothing cancels one today.

use std::fmt;

/// HTTP method for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built by `BlogClient::build_*` methods and handed to a `Transport` for
/// execution.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Produced by a `Transport`, then passed to `BlogClient::parse_*` methods
/// for status interpretation and deserialization.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// Failure to complete an HTTP round-trip at all: network unreachable,
/// connection refused, malformed request. Service-level rejections arrive
/// as an `HttpResponse` with a non-2xx status instead.
#[derive(Debug, Clone)]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "transport failure: {}", self.message)
    }
}

impl std::error::Error for TransportError {}

/// Executes an `HttpRequest` against the network.
///
/// Returns `Err` only when no response was obtained at all; a non-2xx
/// status is a successful round-trip and comes back as data.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}
