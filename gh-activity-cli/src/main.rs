//! gh-activity - print a GitHub user's recent public activity
//!
//! Fetches `/users/{username}/events`, renders each event as one line and
//! prints it. Server and network problems are reported as plain messages;
//! the process still exits cleanly.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io::{self, Write};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use gh_activity_core::{
    ActivityConfig, ActivityRenderer, ActivitySource, FetchOutcome, GitHubSource,
};

mod output;

/// Log levels
#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Parser, Debug)]
#[clap(
    name = "gh-activity",
    about = "Prints the recent public GitHub activity of a user",
    version
)]
struct Cli {
    /// GitHub username whose activity to show
    #[clap(short = 'u', long)]
    username: String,

    /// Override the API root (default: https://api.github.com, or $GH_ACTIVITY_API_URL)
    #[clap(long)]
    api_url: Option<String>,

    /// Request timeout in seconds (minimum 5)
    #[clap(long)]
    timeout: Option<u64>,

    /// Set log level
    #[clap(long, default_value = "warn")]
    log_level: LogLevel,

    /// Emit structured JSON logs with source locations
    #[clap(long)]
    trace: bool,
}

impl Cli {
    /// Layer CLI flags over environment and defaults
    fn config(&self) -> ActivityConfig {
        let mut config = ActivityConfig::from_env();
        if let Some(url) = &self.api_url {
            config.api_base_url = url.clone();
        }
        if let Some(seconds) = self.timeout {
            config.timeout_seconds = seconds;
        }
        config
    }
}

/// Initialize tracing with CLI flags
///
/// Logs always go to stderr so stdout carries only activity lines.
fn initialize_tracing(log_level: &LogLevel, trace: bool) {
    let mut filter = EnvFilter::new(log_level.to_filter_directive());

    if trace {
        if let Ok(directive) = "gh_activity_core=trace".parse() {
            filter = filter.add_directive(directive);
        }

        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_writer(io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(io::stderr)
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_tracing(&cli.log_level, cli.trace);

    let config = cli.config();
    debug!(?config, "Resolved configuration");

    let mut out = io::stdout();
    let mut err = io::stderr();

    let source = match GitHubSource::new(config) {
        Ok(source) => source,
        Err(e) => {
            let e = anyhow::Error::from(e);
            debug!("Failed to initialize activity source: {:#}", e);
            writeln!(err, "{}", output::fetch_failed(&e)).context("Failed to write to stderr")?;
            return Ok(());
        }
    };

    show_activity(&source, &cli.username, &mut out, &mut err).await
}

/// Fetch, render and print the activity of `username`
///
/// Only failures writing to `out`/`err` are returned as errors.
async fn show_activity<S, O, E>(
    source: &S,
    username: &str,
    out: &mut O,
    err: &mut E,
) -> Result<()>
where
    S: ActivitySource + ?Sized,
    O: Write,
    E: Write,
{
    let username = username.trim();
    debug!("Using {} source", source.name());

    let outcome = match source.fetch_events(username).await {
        Ok(outcome) => outcome,
        Err(e) => {
            let e = anyhow::Error::from(e);
            debug!("Fetch failed: {:#}", e);
            writeln!(err, "{}", output::fetch_failed(&e)).context("Failed to write to stderr")?;
            return Ok(());
        }
    };

    let events = match outcome {
        FetchOutcome::Events(events) => events,
        FetchOutcome::UserNotFound => {
            writeln!(out, "{}", output::USER_NOT_FOUND).context("Failed to write to stdout")?;
            return Ok(());
        }
        FetchOutcome::UnexpectedStatus(status) => {
            writeln!(out, "{}", output::unexpected_status(status))
                .context("Failed to write to stdout")?;
            return Ok(());
        }
    };

    if events.is_empty() {
        writeln!(out, "{}", output::no_activity(username)).context("Failed to write to stdout")?;
        return Ok(());
    }

    for (index, result) in ActivityRenderer::render(&events).into_iter().enumerate() {
        match result {
            Ok(line) => writeln!(out, "{line}").context("Failed to write to stdout")?,
            Err(e) => writeln!(err, "{}", output::malformed_event(index, &e))
                .context("Failed to write to stderr")?,
        }
    }

    Ok(())
}
