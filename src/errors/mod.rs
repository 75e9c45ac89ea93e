//! Error types for the Meeting Summarization client.
//!
//! These cover failures that happen before a request leaves the process:
//! bad configuration, invalid request parameters and body encoding. What
//! happens once the request is on the wire is reported as a
//! [`SummarizeOutcome`](crate::services::SummarizeOutcome), not as an error.

use thiserror::Error;

/// Result type alias for client operations.
pub type SummarizerResult<T> = Result<T, SummarizerError>;

/// Error type for client setup and request construction.
#[derive(Debug, Error)]
pub enum SummarizerError {
    /// Configuration error (missing API key, malformed endpoint, etc.)
    #[error("Configuration error: {message}")]
    Configuration {
        /// Error message describing the configuration issue.
        message: String,
    },

    /// Validation error (request parameters out of range).
    #[error("Validation error: {message}")]
    Validation {
        /// Error message describing the validation issue.
        message: String,
        /// The parameter that caused the error.
        param: Option<String>,
        /// The invalid value.
        value: Option<String>,
    },

    /// Serialization error while encoding the request body.
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error message.
        message: String,
    },
}

impl SummarizerError {
    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        SummarizerError::Configuration {
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        SummarizerError::Validation {
            message: message.into(),
            param: None,
            value: None,
        }
    }

    /// Creates a validation error with parameter.
    pub fn validation_param(
        message: impl Into<String>,
        param: impl Into<String>,
        value: Option<String>,
    ) -> Self {
        SummarizerError::Validation {
            message: message.into(),
            param: Some(param.into()),
            value,
        }
    }
}

impl From<serde_json::Error> for SummarizerError {
    fn from(err: serde_json::Error) -> Self {
        SummarizerError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<url::ParseError> for SummarizerError {
    fn from(err: url::ParseError) -> Self {
        SummarizerError::Configuration {
            message: format!("Invalid URL: {}", err),
        }
    }
}
