//! Configuration module for the Meeting Summarization client.
//!
//! Provides configuration management for the RapidAPI credential, the API
//! host header, the base URL and the optional request timeout.

use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use url::Url;

use crate::errors::{SummarizerError, SummarizerResult};

/// Default base URL for the Meeting Summarization API.
pub const DEFAULT_BASE_URL: &str = "https://meeting-summarization-api.p.rapidapi.com";

/// Default value of the `X-RapidAPI-Host` header.
pub const DEFAULT_API_HOST: &str = "meeting-summarization-api.p.rapidapi.com";

/// Path of the summarization endpoint, relative to the base URL.
pub const SUMMARIZE_PATH: &str = "summarize";

/// Default summarization ratio.
pub const DEFAULT_RATIO: f64 = 0.2;

/// Configuration for the Meeting Summarization client.
#[derive(Clone)]
pub struct SummarizerConfig {
    /// RapidAPI key (stored securely).
    pub(crate) api_key: SecretString,
    /// Value sent in the `X-RapidAPI-Host` header.
    pub api_host: String,
    /// Base URL for API requests.
    pub base_url: String,
    /// Request timeout. `None` waits for the response indefinitely.
    pub timeout: Option<Duration>,
    /// Ratio used when a request does not set its own length.
    pub default_ratio: f64,
}

impl SummarizerConfig {
    /// Creates a new configuration builder.
    pub fn builder() -> SummarizerConfigBuilder {
        SummarizerConfigBuilder::new()
    }

    /// Creates a configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `MEETING_SUMMARIZER_API_KEY` (required): RapidAPI key
    /// - `MEETING_SUMMARIZER_BASE_URL` (optional): Custom base URL
    /// - `MEETING_SUMMARIZER_HOST` (optional): `X-RapidAPI-Host` value
    /// - `MEETING_SUMMARIZER_TIMEOUT` (optional): Request timeout in seconds
    /// - `MEETING_SUMMARIZER_RATIO` (optional): Default summarization ratio
    pub fn from_env() -> SummarizerResult<Self> {
        let api_key = std::env::var("MEETING_SUMMARIZER_API_KEY").map_err(|_| {
            SummarizerError::configuration(
                "MEETING_SUMMARIZER_API_KEY environment variable not set",
            )
        })?;

        let mut builder = SummarizerConfigBuilder::new().api_key(api_key);

        if let Ok(base_url) = std::env::var("MEETING_SUMMARIZER_BASE_URL") {
            builder = builder.base_url(base_url);
        }

        if let Ok(host) = std::env::var("MEETING_SUMMARIZER_HOST") {
            builder = builder.api_host(host);
        }

        if let Ok(timeout_str) = std::env::var("MEETING_SUMMARIZER_TIMEOUT") {
            let timeout_secs = timeout_str.parse::<u64>().map_err(|_| {
                SummarizerError::configuration(format!(
                    "MEETING_SUMMARIZER_TIMEOUT is not a whole number of seconds: {}",
                    timeout_str
                ))
            })?;
            builder = builder.timeout_secs(timeout_secs);
        }

        if let Ok(ratio_str) = std::env::var("MEETING_SUMMARIZER_RATIO") {
            let ratio = ratio_str.parse::<f64>().map_err(|_| {
                SummarizerError::configuration(format!(
                    "MEETING_SUMMARIZER_RATIO is not a number: {}",
                    ratio_str
                ))
            })?;
            builder = builder.default_ratio(ratio);
        }

        builder.build()
    }

    /// Returns the API key (exposing the secret).
    pub(crate) fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }

    /// Returns the API key hint (last 4 characters) for debugging.
    pub fn api_key_hint(&self) -> String {
        key_hint(self.api_key.expose_secret())
    }
}

pub(crate) fn key_hint(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() > 4 {
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("...{}", tail)
    } else {
        "****".to_string()
    }
}

impl std::fmt::Debug for SummarizerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SummarizerConfig")
            .field("api_key", &"[REDACTED]")
            .field("api_host", &self.api_host)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("default_ratio", &self.default_ratio)
            .finish()
    }
}

/// Builder for `SummarizerConfig`.
#[derive(Default)]
pub struct SummarizerConfigBuilder {
    api_key: Option<String>,
    api_host: Option<String>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    default_ratio: Option<f64>,
}

impl SummarizerConfigBuilder {
    /// Creates a new configuration builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Sets the `X-RapidAPI-Host` header value.
    pub fn api_host(mut self, api_host: impl Into<String>) -> Self {
        self.api_host = Some(api_host.into());
        self
    }

    /// Sets the base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets the request timeout. A zero timeout is rejected by [`Self::build`].
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the timeout in seconds.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Some(Duration::from_secs(secs));
        self
    }

    /// Sets the default summarization ratio.
    pub fn default_ratio(mut self, ratio: f64) -> Self {
        self.default_ratio = Some(ratio);
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> SummarizerResult<SummarizerConfig> {
        let api_key = self
            .api_key
            .ok_or_else(|| SummarizerError::configuration("API key is required"))?;

        if api_key.trim().is_empty() {
            return Err(SummarizerError::configuration("API key cannot be empty"));
        }

        if api_key == "YOUR_RAPIDAPI_KEY" {
            tracing::warn!("API key is still the YOUR_RAPIDAPI_KEY placeholder");
        }

        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let parsed = Url::parse(&base_url)?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(SummarizerError::configuration(format!(
                "Base URL must use http or https, got {}",
                parsed.scheme()
            )));
        }
        if parsed.scheme() == "http" {
            tracing::warn!(base_url = %base_url, "Base URL does not use HTTPS");
        }

        let api_host = self.api_host.unwrap_or_else(|| DEFAULT_API_HOST.to_string());
        if api_host.trim().is_empty() {
            return Err(SummarizerError::configuration("API host cannot be empty"));
        }

        if self.timeout == Some(Duration::ZERO) {
            return Err(SummarizerError::configuration(
                "Timeout must be greater than zero",
            ));
        }

        Ok(SummarizerConfig {
            api_key: SecretString::new(api_key),
            api_host,
            base_url,
            timeout: self.timeout,
            default_ratio: self.default_ratio.unwrap_or(DEFAULT_RATIO),
        })
    }
}
