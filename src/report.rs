//! Human-readable rendering of a summarize outcome.

use std::io::{self, Write};

use crate::services::SummarizeOutcome;
use crate::types::SummarizeResponse;

/// Writes `outcome` for a terminal user.
///
/// A successful summary goes to `out`. Rejections and transport failures go
/// to `err`, and nothing is written to `out` for them.
pub fn render<O: Write, E: Write>(
    outcome: &SummarizeOutcome,
    out: &mut O,
    err: &mut E,
) -> io::Result<()> {
    match outcome {
        SummarizeOutcome::Success(response) => render_summary(response, out),
        SummarizeOutcome::RemoteRejected { status, body } => {
            writeln!(err, "API responded with status {}", status)?;
            writeln!(err, "{}", body)
        }
        SummarizeOutcome::TransportFailure { message } => {
            writeln!(err, "Request error: {}", message)
        }
    }
}

/// Writes the summary line and the numbered action items.
pub fn render_summary<O: Write>(response: &SummarizeResponse, out: &mut O) -> io::Result<()> {
    writeln!(out, "Summary: {}", response.summary_or_default())?;

    if response.action_items.is_empty() {
        return Ok(());
    }

    writeln!(out, "Action Items:")?;
    for (idx, item) in response.action_items.iter().enumerate() {
        writeln!(out, "{}. {}", idx + 1, item)?;
    }
    Ok(())
}
