//! Request and response types for the summarization endpoint.

use serde::{Deserialize, Serialize};

use crate::errors::{SummarizerError, SummarizerResult};

/// Placeholder used when the response carries no summary.
pub const MISSING_SUMMARY: &str = "No summary returned.";

/// How long the summary should be.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryLength {
    /// Fraction of the original text to keep, in `(0, 1]`.
    Ratio(f64),
    /// Upper bound on the number of summary sentences.
    MaxSentences(u32),
}

/// Body of a `POST /summarize` request.
///
/// Serializes to exactly `{"text", "ratio"}` or `{"text", "max_sentences"}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummarizeRequest {
    /// The meeting transcript.
    pub text: String,
    /// Requested summary length.
    #[serde(flatten)]
    pub length: SummaryLength,
}

impl SummarizeRequest {
    /// Creates a new request builder.
    pub fn builder() -> SummarizeRequestBuilder {
        SummarizeRequestBuilder::default()
    }
}

/// Builder for `SummarizeRequest`.
#[derive(Debug, Default)]
pub struct SummarizeRequestBuilder {
    text: Option<String>,
    length: Option<SummaryLength>,
}

impl SummarizeRequestBuilder {
    /// Sets the transcript text.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Requests a summary of `ratio` times the input length.
    pub fn ratio(mut self, ratio: f64) -> Self {
        self.length = Some(SummaryLength::Ratio(ratio));
        self
    }

    /// Requests a summary of at most `max_sentences` sentences.
    pub fn max_sentences(mut self, max_sentences: u32) -> Self {
        self.length = Some(SummaryLength::MaxSentences(max_sentences));
        self
    }

    /// Builds the request, using `default_ratio` when no length was set.
    pub fn build_with_default(self, default_ratio: f64) -> SummarizerResult<SummarizeRequest> {
        let length = self.length.unwrap_or(SummaryLength::Ratio(default_ratio));
        Self {
            text: self.text,
            length: Some(length),
        }
        .build()
    }

    /// Builds and validates the request.
    pub fn build(self) -> SummarizerResult<SummarizeRequest> {
        let text = self
            .text
            .ok_or_else(|| {
                SummarizerError::validation_param("Transcript text is required", "text", None)
            })?;

        if text.trim().is_empty() {
            return Err(SummarizerError::validation_param(
                "Transcript text cannot be empty",
                "text",
                None,
            ));
        }

        let length = self.length.ok_or_else(|| {
            SummarizerError::validation_param(
                "Either ratio or max_sentences is required",
                "ratio",
                None,
            )
        })?;

        match length {
            SummaryLength::Ratio(ratio) if !(ratio > 0.0 && ratio <= 1.0) => {
                return Err(SummarizerError::validation_param(
                    "Ratio must be greater than 0 and at most 1",
                    "ratio",
                    Some(ratio.to_string()),
                ));
            }
            SummaryLength::MaxSentences(0) => {
                return Err(SummarizerError::validation_param(
                    "max_sentences must be at least 1",
                    "max_sentences",
                    Some("0".to_string()),
                ));
            }
            _ => {}
        }

        Ok(SummarizeRequest { text, length })
    }
}

/// Body of a successful `POST /summarize` response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizeResponse {
    /// The generated summary.
    #[serde(default)]
    pub summary: Option<String>,
    /// Follow-up tasks extracted from the transcript, in order.
    #[serde(default)]
    pub action_items: Vec<String>,
}

impl SummarizeResponse {
    /// Returns the summary, or a placeholder when the API sent none.
    pub fn summary_or_default(&self) -> &str {
        self.summary.as_deref().unwrap_or(MISSING_SUMMARY)
    }
}
