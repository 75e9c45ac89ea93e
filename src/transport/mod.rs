//! HTTP transport layer for the Meeting Summarization client.
//!
//! Provides the HTTP transport abstraction and its reqwest implementation.
//! A transport either returns a response (any status) or a
//! [`TransportError`] when no response could be obtained at all.

mod http;

pub use http::{HttpRequest, HttpResponse, HttpTransport, HttpTransportImpl};

use std::time::Duration;

/// Transport error types.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Connection error (DNS, refused, reset).
    #[error("Connection error: {message}")]
    Connection {
        /// Error message.
        message: String,
    },

    /// Timeout error.
    #[error("Timeout after {timeout:?}")]
    Timeout {
        /// Timeout duration.
        timeout: Duration,
    },

    /// The request could not be built (for example an invalid header value).
    #[error("Invalid request: {message}")]
    InvalidRequest {
        /// Error message.
        message: String,
    },

    /// The exchange failed after the request was sent.
    #[error("Invalid response: {message}")]
    InvalidResponse {
        /// Error message.
        message: String,
    },
}

impl TransportError {
    /// Classifies a reqwest error.
    pub(crate) fn from_reqwest(err: reqwest::Error, timeout: Option<Duration>) -> Self {
        if err.is_builder() {
            TransportError::InvalidRequest {
                message: err.to_string(),
            }
        } else if err.is_timeout() {
            TransportError::Timeout {
                timeout: timeout.unwrap_or_default(),
            }
        } else if err.is_connect() {
            TransportError::Connection {
                message: err.to_string(),
            }
        } else {
            TransportError::InvalidResponse {
                message: err.to_string(),
            }
        }
    }
}
