//! Service implementations for the Meeting Summarization API.

mod summarize;

pub use summarize::{SummarizeOutcome, SummarizeService};
