//! Meeting Summarization API client.
//!
//! Provides the main client interface for the summarization endpoint.

use std::sync::Arc;

use crate::auth::{AuthProvider, RapidApiAuth};
use crate::config::{SummarizerConfig, SummarizerConfigBuilder};
use crate::errors::{SummarizerError, SummarizerResult};
use crate::services::{SummarizeOutcome, SummarizeService};
use crate::transport::{HttpTransport, HttpTransportImpl};
use crate::types::SummarizeRequest;

/// The main Meeting Summarization client.
///
/// # Example
///
/// ```rust,no_run
/// use meeting_summarizer_client::{MeetingSummarizerClient, SummarizeOutcome};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = MeetingSummarizerClient::builder()
///         .api_key("your-rapidapi-key")
///         .build()?;
///
///     let outcome = client
///         .summarize_text("We reviewed quarterly sales numbers.")
///         .await?;
///
///     if let SummarizeOutcome::Success(response) = outcome {
///         println!("{}", response.summary_or_default());
///     }
///     Ok(())
/// }
/// ```
pub struct MeetingSummarizerClient {
    config: SummarizerConfig,
    summarize_service: SummarizeService,
}

impl MeetingSummarizerClient {
    /// Creates a new client builder.
    pub fn builder() -> MeetingSummarizerClientBuilder {
        MeetingSummarizerClientBuilder::new()
    }

    /// Creates a client from environment variables.
    ///
    /// See [`SummarizerConfig::from_env`] for the variables read.
    pub fn from_env() -> SummarizerResult<Self> {
        let config = SummarizerConfig::from_env()?;
        MeetingSummarizerClientBuilder::from_config(config).build()
    }

    /// Sends a prepared request.
    pub async fn summarize(
        &self,
        request: &SummarizeRequest,
    ) -> SummarizerResult<SummarizeOutcome> {
        self.summarize_service.summarize(request).await
    }

    /// Summarizes `text` using the configured default ratio.
    pub async fn summarize_text(
        &self,
        text: impl Into<String>,
    ) -> SummarizerResult<SummarizeOutcome> {
        let request = SummarizeRequest::builder()
            .text(text)
            .build_with_default(self.config.default_ratio)?;
        self.summarize(&request).await
    }

    /// Returns the configuration.
    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }
}

impl std::fmt::Debug for MeetingSummarizerClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MeetingSummarizerClient")
            .field("config", &self.config)
            .finish()
    }
}

/// Builder for the Meeting Summarization client.
pub struct MeetingSummarizerClientBuilder {
    config_builder: SummarizerConfigBuilder,
    config: Option<SummarizerConfig>,
    transport: Option<Arc<dyn HttpTransport>>,
    auth: Option<Arc<dyn AuthProvider>>,
}

impl MeetingSummarizerClientBuilder {
    /// Creates a new client builder.
    pub fn new() -> Self {
        Self {
            config_builder: SummarizerConfigBuilder::new(),
            config: None,
            transport: None,
            auth: None,
        }
    }

    /// Creates a builder from an existing configuration.
    pub fn from_config(config: SummarizerConfig) -> Self {
        Self {
            config: Some(config),
            ..Self::new()
        }
    }

    /// Sets the API key.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.api_key(api_key);
        self
    }

    /// Sets the `X-RapidAPI-Host` header value.
    pub fn api_host(mut self, api_host: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.api_host(api_host);
        self
    }

    /// Sets the base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.base_url(base_url);
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: std::time::Duration) -> Self {
        self.config_builder = self.config_builder.timeout(timeout);
        self
    }

    /// Sets the default summarization ratio.
    pub fn default_ratio(mut self, ratio: f64) -> Self {
        self.config_builder = self.config_builder.default_ratio(ratio);
        self
    }

    /// Sets a custom transport.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Sets a custom auth provider.
    pub fn auth(mut self, auth: Arc<dyn AuthProvider>) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Builds the client.
    pub fn build(self) -> SummarizerResult<MeetingSummarizerClient> {
        let config = match self.config {
            Some(config) => config,
            None => self.config_builder.build()?,
        };

        let transport: Arc<dyn HttpTransport> = match self.transport {
            Some(t) => t,
            None => Arc::new(
                HttpTransportImpl::new(&config.base_url, config.timeout)
                    .map_err(|e| SummarizerError::configuration(e.to_string()))?,
            ),
        };

        let auth: Arc<dyn AuthProvider> = match self.auth {
            Some(a) => a,
            None => Arc::new(RapidApiAuth::from_string(
                config.api_key(),
                config.api_host.clone(),
            )),
        };
        auth.validate()?;

        tracing::debug!(
            base_url = %config.base_url,
            api_host = %config.api_host,
            key_hint = %config.api_key_hint(),
            "Built meeting summarizer client"
        );

        let summarize_service = SummarizeService::new(transport, auth, config.timeout);

        Ok(MeetingSummarizerClient {
            config,
            summarize_service,
        })
    }
}

impl Default for MeetingSummarizerClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::MockTransport;
    use crate::types::SummarizeResponse;
    use serde_json::json;

    #[test]
    fn test_builder_requires_api_key() {
        let result = MeetingSummarizerClientBuilder::new().build();
        assert!(matches!(result, Err(SummarizerError::Configuration { .. })));
    }

    #[test]
    fn test_builder_with_api_key() {
        let client = MeetingSummarizerClientBuilder::new()
            .api_key("rapid_test_key_12345")
            .build()
            .unwrap();

        assert_eq!(client.config().api_key_hint(), "...2345");
    }

    #[test]
    fn test_from_config_keeps_settings() {
        let config = SummarizerConfig::builder()
            .api_key("rapid_test_key")
            .default_ratio(0.4)
            .build()
            .unwrap();

        let client = MeetingSummarizerClientBuilder::from_config(config).build().unwrap();
        assert_eq!(client.config().default_ratio, 0.4);
    }

    #[tokio::test]
    async fn test_summarize_text_uses_default_ratio() {
        let transport = Arc::new(MockTransport::new());
        transport.queue_json(&json!({"summary": "S", "action_items": ["A"]}));

        let client = MeetingSummarizerClient::builder()
            .api_key("rapid_test_key")
            .default_ratio(0.5)
            .transport(Arc::clone(&transport) as Arc<dyn HttpTransport>)
            .build()
            .unwrap();

        let outcome = client.summarize_text("Sprint planning notes").await.unwrap();
        assert_eq!(
            outcome,
            SummarizeOutcome::Success(SummarizeResponse {
                summary: Some("S".to_string()),
                action_items: vec!["A".to_string()],
            })
        );

        let body: serde_json::Value =
            serde_json::from_slice(transport.last_request().unwrap().body.as_deref().unwrap())
                .unwrap();
        assert_eq!(body, json!({"text": "Sprint planning notes", "ratio": 0.5}));
    }

    #[tokio::test]
    async fn test_summarize_text_rejects_empty_text_without_sending() {
        let transport = Arc::new(MockTransport::new());

        let client = MeetingSummarizerClient::builder()
            .api_key("rapid_test_key")
            .transport(Arc::clone(&transport) as Arc<dyn HttpTransport>)
            .build()
            .unwrap();

        let result = client.summarize_text("").await;
        assert!(matches!(result, Err(SummarizerError::Validation { .. })));
        assert_eq!(transport.request_count(), 0);
    }
}
