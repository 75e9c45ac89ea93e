//! `meeting-summarizer`: send a meeting transcript to the Meeting
//! Summarization API and print the summary and action items.
//!
//! ```bash
//! export MEETING_SUMMARIZER_API_KEY="your-rapidapi-key"
//! meeting-summarizer "In today's meeting we reviewed quarterly sales numbers..."
//! meeting-summarizer --file standup.txt --max-sentences 3
//! cat transcript.txt | meeting-summarizer --ratio 0.3
//! ```
//!
//! Exit status is 0 when a summary was printed, 1 when the API call failed
//! and 2 when the client could not be set up.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tokio::io::AsyncReadExt;

use meeting_summarizer_client::config::{DEFAULT_API_HOST, DEFAULT_BASE_URL};
use meeting_summarizer_client::observability::{LogFormat, LogLevel, LoggingConfig};
use meeting_summarizer_client::{report, MeetingSummarizerClient, SummarizeRequest};

/// Summarize a meeting transcript and list its action items.
#[derive(Debug, Parser)]
#[command(name = "meeting-summarizer", version, about)]
struct Cli {
    /// Transcript text. Read from --file or stdin when omitted.
    text: Option<String>,

    /// Read the transcript from a file.
    #[arg(long, short, conflicts_with = "text")]
    file: Option<PathBuf>,

    /// RapidAPI key.
    #[arg(long, env = "MEETING_SUMMARIZER_API_KEY", hide_env_values = true)]
    api_key: String,

    /// API base URL.
    #[arg(long, env = "MEETING_SUMMARIZER_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Value of the X-RapidAPI-Host header.
    #[arg(long, env = "MEETING_SUMMARIZER_HOST", default_value = DEFAULT_API_HOST)]
    host: String,

    /// Fraction of the transcript to keep, in (0, 1].
    #[arg(long, conflicts_with = "max_sentences")]
    ratio: Option<f64>,

    /// Maximum number of summary sentences, instead of a ratio.
    #[arg(long)]
    max_sentences: Option<u32>,

    /// Ratio used when neither --ratio nor --max-sentences is given.
    #[arg(long, env = "MEETING_SUMMARIZER_RATIO")]
    default_ratio: Option<f64>,

    /// Request timeout in seconds. Waits indefinitely when unset.
    #[arg(long, env = "MEETING_SUMMARIZER_TIMEOUT")]
    timeout_secs: Option<u64>,

    /// Log level used when RUST_LOG is not set.
    #[arg(long, default_value = "warn")]
    log_level: LogLevel,

    /// Log output format (pretty, json, compact).
    #[arg(long, default_value = "pretty")]
    log_format: LogFormat,
}

const EXIT_SUCCESS: u8 = 0;
const EXIT_FAILED_CALL: u8 = 1;
const EXIT_USAGE: u8 = 2;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = LoggingConfig::new()
        .with_level(cli.log_level)
        .with_format(cli.log_format)
        .init()
    {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let code = execute(cli, &mut stdout.lock(), &mut stderr.lock()).await;
    ExitCode::from(code)
}

/// Runs one invocation and returns its exit status.
async fn execute<O: Write, E: Write>(cli: Cli, out: &mut O, err: &mut E) -> u8 {
    match run(cli, out, err).await {
        Ok(code) => code,
        Err(e) => {
            if let Err(write_err) = writeln!(err, "Error: {}", e) {
                tracing::error!(error = %write_err, "Could not write error report");
            }
            EXIT_USAGE
        }
    }
}

async fn run<O: Write, E: Write>(
    cli: Cli,
    out: &mut O,
    err: &mut E,
) -> Result<u8, Box<dyn std::error::Error>> {
    let text = read_transcript(cli.text, cli.file.as_ref()).await?;

    let mut builder = MeetingSummarizerClient::builder()
        .api_key(cli.api_key)
        .api_host(cli.host)
        .base_url(cli.base_url);
    if let Some(secs) = cli.timeout_secs {
        builder = builder.timeout(std::time::Duration::from_secs(secs));
    }
    if let Some(ratio) = cli.default_ratio {
        builder = builder.default_ratio(ratio);
    }
    let client = builder.build()?;

    let mut request = SummarizeRequest::builder().text(text);
    if let Some(ratio) = cli.ratio {
        request = request.ratio(ratio);
    }
    if let Some(max_sentences) = cli.max_sentences {
        request = request.max_sentences(max_sentences);
    }
    let request = request.build_with_default(client.config().default_ratio)?;

    let outcome = client.summarize(&request).await?;
    report::render(&outcome, out, err)?;

    if outcome.is_success() {
        Ok(EXIT_SUCCESS)
    } else {
        Ok(EXIT_FAILED_CALL)
    }
}

async fn read_transcript(
    text: Option<String>,
    file: Option<&PathBuf>,
) -> Result<String, std::io::Error> {
    if let Some(text) = text {
        return Ok(text);
    }

    if let Some(path) = file {
        return tokio::fs::read_to_string(path).await;
    }

    let mut buf = String::new();
    tokio::io::stdin().read_to_string(&mut buf).await?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::env;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::NamedTempFile;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    // Clap reads MEETING_SUMMARIZER_* while parsing, so parsing and env
    // mutation must not interleave.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn env_lock() -> MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        let _guard = env_lock();
        Cli::try_parse_from(std::iter::once("meeting-summarizer").chain(args.iter().copied()))
    }

    fn with_env_var<F, R>(key: &str, value: &str, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        let _guard = env_lock();
        let original = env::var(key).ok();
        env::set_var(key, value);

        let result = f();

        match original {
            Some(v) => env::set_var(key, v),
            None => env::remove_var(key),
        }
        result
    }

    async fn execute_captured(cli: Cli) -> (u8, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = execute(cli, &mut out, &mut err).await;
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_ratio_conflicts_with_max_sentences() {
        let result = parse(&["--api-key", "k", "--ratio", "0.2", "--max-sentences", "3", "notes"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_ratio_env_does_not_conflict_with_max_sentences() {
        let cli = with_env_var("MEETING_SUMMARIZER_RATIO", "0.3", || {
            Cli::try_parse_from([
                "meeting-summarizer",
                "--api-key",
                "k",
                "--max-sentences",
                "3",
                "notes",
            ])
        })
        .unwrap();

        assert_eq!(cli.max_sentences, Some(3));
        assert_eq!(cli.ratio, None);
        assert_eq!(cli.default_ratio, Some(0.3));
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&["--api-key", "k", "notes"]).unwrap();
        assert_eq!(cli.text.as_deref(), Some("notes"));
        assert_eq!(cli.base_url, DEFAULT_BASE_URL);
        assert_eq!(cli.host, DEFAULT_API_HOST);
        assert_eq!(cli.log_level, LogLevel::Warn);
        assert_eq!(cli.log_format, LogFormat::Pretty);
    }

    #[tokio::test]
    async fn test_read_transcript_prefers_positional_text() {
        let text = read_transcript(Some("inline".to_string()), None).await.unwrap();
        assert_eq!(text, "inline");
    }

    #[tokio::test]
    async fn test_read_transcript_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"Standup: Alice will ship the fix.\n").unwrap();
        file.flush().unwrap();

        let path = file.path().to_path_buf();
        let text = read_transcript(None, Some(&path)).await.unwrap();
        assert_eq!(text, "Standup: Alice will ship the fix.\n");
    }

    #[tokio::test]
    async fn test_read_transcript_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        let result = read_transcript(None, Some(&path)).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_exit_zero_on_summary() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/summarize"))
            .and(body_json(json!({"text": "Sprint review notes", "max_sentences": 3})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "summary": "S",
                "action_items": ["A"]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"Sprint review notes").unwrap();
        file.flush().unwrap();
        let file_path = file.path().to_string_lossy().into_owned();

        let uri = mock_server.uri();
        let cli = parse(&[
            "--api-key",
            "test-api-key",
            "--base-url",
            uri.as_str(),
            "--file",
            file_path.as_str(),
            "--max-sentences",
            "3",
        ])
        .unwrap();

        let (code, out, err) = execute_captured(cli).await;
        assert_eq!(code, 0);
        assert_eq!(out, "Summary: S\nAction Items:\n1. A\n");
        assert_eq!(err, "");
    }

    #[tokio::test]
    async fn test_exit_one_on_rejected_call() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/summarize"))
            .respond_with(
                ResponseTemplate::new(401).set_body_string(r#"{"message":"Invalid API key"}"#),
            )
            .mount(&mock_server)
            .await;

        let uri = mock_server.uri();
        let cli = parse(&["--api-key", "bad-key", "--base-url", uri.as_str(), "notes"]).unwrap();

        let (code, out, err) = execute_captured(cli).await;
        assert_eq!(code, 1);
        assert_eq!(out, "");
        assert!(err.starts_with("API responded with status 401\n"));
    }

    #[tokio::test]
    async fn test_exit_two_on_invalid_base_url() {
        let cli = parse(&[
            "--api-key",
            "k",
            "--base-url",
            "ftp://meeting-summarization-api.p.rapidapi.com",
            "notes",
        ])
        .unwrap();

        let (code, out, err) = execute_captured(cli).await;
        assert_eq!(code, 2);
        assert_eq!(out, "");
        assert!(err.starts_with("Error: "));
    }

    #[tokio::test]
    async fn test_exit_two_on_zero_timeout() {
        let cli = parse(&["--api-key", "k", "--timeout-secs", "0", "notes"]).unwrap();

        let (code, _, err) = execute_captured(cli).await;
        assert_eq!(code, 2);
        assert!(err.contains("Timeout must be greater than zero"));
    }
}
