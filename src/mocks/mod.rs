//! Mock implementations for testing.
//!
//! Provides a mock transport that replays queued responses or transport
//! failures and records every request it receives.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use crate::transport::{HttpRequest, HttpResponse, HttpTransport, TransportError};

/// A recorded request.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Request path.
    pub path: String,
    /// Request body.
    pub body: Option<Vec<u8>>,
    /// Request headers.
    pub headers: HashMap<String, String>,
    /// Request timeout.
    pub timeout: Option<Duration>,
}

/// A mock response.
#[derive(Debug, Clone)]
pub struct MockResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body.
    pub body: Vec<u8>,
}

impl MockResponse {
    /// Creates a successful JSON response.
    pub fn json<T: serde::Serialize>(value: &T) -> Self {
        Self {
            status: 200,
            body: serde_json::to_vec(value).unwrap_or_default(),
        }
    }

    /// Creates a response with a verbatim body.
    pub fn raw(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.as_bytes().to_vec(),
        }
    }
}

#[derive(Debug, Clone)]
enum MockReply {
    Response(MockResponse),
    Connection(String),
    Timeout(Duration),
}

/// Mock HTTP transport for testing.
#[derive(Debug, Default)]
pub struct MockTransport {
    replies: Mutex<VecDeque<MockReply>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

fn locked<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MockTransport {
    /// Creates a new mock transport.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a response.
    pub fn queue(&self, response: MockResponse) {
        locked(&self.replies).push_back(MockReply::Response(response));
    }

    /// Queues a JSON response.
    pub fn queue_json<T: serde::Serialize>(&self, value: &T) {
        self.queue(MockResponse::json(value));
    }

    /// Queues a connection failure.
    pub fn queue_connection_error(&self, message: &str) {
        locked(&self.replies).push_back(MockReply::Connection(message.to_string()));
    }

    /// Queues a timeout.
    pub fn queue_timeout(&self, timeout: Duration) {
        locked(&self.replies).push_back(MockReply::Timeout(timeout));
    }

    /// Gets all recorded requests.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        locked(&self.requests).clone()
    }

    /// Gets the last recorded request.
    pub fn last_request(&self) -> Option<RecordedRequest> {
        locked(&self.requests).last().cloned()
    }

    /// Returns the number of requests made.
    pub fn request_count(&self) -> usize {
        locked(&self.requests).len()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        locked(&self.requests).push(RecordedRequest {
            path: request.path,
            body: request.body,
            headers: request.headers,
            timeout: request.timeout,
        });

        let reply = locked(&self.replies).pop_front();
        match reply {
            Some(MockReply::Response(response)) => Ok(HttpResponse {
                status: response.status,
                body: response.body,
            }),
            Some(MockReply::Connection(message)) => Err(TransportError::Connection { message }),
            Some(MockReply::Timeout(timeout)) => Err(TransportError::Timeout { timeout }),
            None => Err(TransportError::Connection {
                message: "no mock response queued".to_string(),
            }),
        }
    }
}
