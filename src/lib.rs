//! Meeting Summarization API Client Library
//!
//! A Rust client for the Meeting Summarization API on RapidAPI. The API takes
//! a meeting transcript and returns a summary plus a list of action items.
//!
//! Each call ends in exactly one [`SummarizeOutcome`]:
//!
//! - **Success**: the decoded summary and action items
//! - **RemoteRejected**: the API answered with a non-2xx status; status and raw body
//! - **TransportFailure**: no usable response; only the transport error message
//!
//! Nothing is retried.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use meeting_summarizer_client::{report, MeetingSummarizerClient, SummarizeRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = MeetingSummarizerClient::builder()
//!         .api_key("your-rapidapi-key")
//!         .build()?;
//!
//!     let request = SummarizeRequest::builder()
//!         .text("In today's meeting we reviewed quarterly sales numbers.")
//!         .ratio(0.2)
//!         .build()?;
//!
//!     let outcome = client.summarize(&request).await?;
//!     report::render(&outcome, &mut std::io::stdout(), &mut std::io::stderr())?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod auth;
pub mod client;
pub mod config;
pub mod errors;
pub mod observability;
pub mod report;
pub mod services;
pub mod transport;
pub mod types;

// Re-exports for convenience
pub use client::{MeetingSummarizerClient, MeetingSummarizerClientBuilder};
pub use config::SummarizerConfig;
pub use errors::{SummarizerError, SummarizerResult};
pub use services::SummarizeOutcome;
pub use types::{SummarizeRequest, SummarizeResponse, SummaryLength};

/// Mock implementations for testing.
#[cfg(any(test, feature = "mocks"))]
pub mod mocks;
