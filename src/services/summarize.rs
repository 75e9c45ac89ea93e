//! Summarize service.

use std::sync::Arc;
use std::time::Duration;
use tracing::instrument;

use crate::auth::AuthProvider;
use crate::config::SUMMARIZE_PATH;
use crate::errors::SummarizerResult;
use crate::transport::{HttpRequest, HttpResponse, HttpTransport};
use crate::types::{SummarizeRequest, SummarizeResponse};

/// Result of a single summarization call.
///
/// Each variant is terminal; the service never retries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummarizeOutcome {
    /// The API accepted the transcript.
    Success(SummarizeResponse),
    /// The API was reached but answered with a non-2xx status.
    RemoteRejected {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },
    /// No usable response was obtained.
    TransportFailure {
        /// Error message from the transport.
        message: String,
    },
}

impl SummarizeOutcome {
    /// Returns true for [`SummarizeOutcome::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, SummarizeOutcome::Success(_))
    }

    fn label(&self) -> &'static str {
        match self {
            SummarizeOutcome::Success(_) => "success",
            SummarizeOutcome::RemoteRejected { .. } => "remote_rejected",
            SummarizeOutcome::TransportFailure { .. } => "transport_failure",
        }
    }
}

/// Summarize service for `POST /summarize`.
pub struct SummarizeService {
    transport: Arc<dyn HttpTransport>,
    auth: Arc<dyn AuthProvider>,
    timeout: Option<Duration>,
}

impl SummarizeService {
    /// Creates a new summarize service.
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        auth: Arc<dyn AuthProvider>,
        timeout: Option<Duration>,
    ) -> Self {
        Self {
            transport,
            auth,
            timeout,
        }
    }

    /// Sends one summarization request and reports what happened.
    ///
    /// Returns `Err` only when the request cannot be encoded; everything
    /// after that is expressed as a [`SummarizeOutcome`].
    #[instrument(skip(self, request), fields(text_len = request.text.len()))]
    pub async fn summarize(
        &self,
        request: &SummarizeRequest,
    ) -> SummarizerResult<SummarizeOutcome> {
        let http_request = self.build_request(request)?;

        let outcome = match self.transport.send(http_request).await {
            Ok(response) => Self::parse_response(response),
            Err(err) => {
                tracing::warn!(error = %err, "Summarize request did not complete");
                SummarizeOutcome::TransportFailure {
                    message: err.to_string(),
                }
            }
        };

        tracing::debug!(outcome = outcome.label(), "Summarize call finished");
        Ok(outcome)
    }

    /// Builds an HTTP request.
    fn build_request(&self, request: &SummarizeRequest) -> SummarizerResult<HttpRequest> {
        let body = serde_json::to_vec(request)?;

        let mut http_request = HttpRequest::post(SUMMARIZE_PATH)
            .with_header("content-type", "application/json")
            .with_body(body);
        self.auth.apply_auth(&mut http_request.headers);

        if let Some(timeout) = self.timeout {
            http_request = http_request.with_timeout(timeout);
        }

        Ok(http_request)
    }

    /// Maps the HTTP response onto an outcome.
    fn parse_response(response: HttpResponse) -> SummarizeOutcome {
        if !response.is_success() {
            tracing::warn!(status = response.status, "API rejected summarize request");
            return SummarizeOutcome::RemoteRejected {
                status: response.status,
                body: response.text(),
            };
        }

        match response.json::<SummarizeResponse>() {
            Ok(payload) => {
                tracing::debug!(
                    action_items = payload.action_items.len(),
                    "Decoded summarize response"
                );
                SummarizeOutcome::Success(payload)
            }
            Err(err) => {
                tracing::warn!(error = %err, "Could not decode summarize response");
                SummarizeOutcome::TransportFailure {
                    message: format!("failed to decode response: {}", err),
                }
            }
        }
    }
}

impl std::fmt::Debug for SummarizeService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SummarizeService")
            .field("timeout", &self.timeout)
            .finish()
    }
}
