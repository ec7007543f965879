//! Wait for HTTP endpoints to become ready.
//!
//! A run probes every configured check in rounds, at a fixed interval, until
//! each one has returned its expected status (and body, if configured) at
//! least once, or until the overall deadline passes.

pub mod check;
pub mod cli;
pub mod config;
pub mod error;
pub mod observability;
pub mod readiness;
pub mod transport;

pub use check::CheckSpec;
pub use config::WaitForConfig;
pub use error::{RunError, RunResult};
pub use readiness::{ReadinessLoop, RunSettings, RunSummary, TracingReporter};
pub use transport::HttpTransport;

use tracing::Instrument;

/// How a configured run ended, when it did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// `skip` was set; nothing was probed.
    Skipped,
    /// The configuration holds no checks.
    NoChecks,
    /// Every check passed.
    Ready(RunSummary),
}

/// Run the configured checks over HTTP with tracing-based reporting.
pub async fn run_config(config: &WaitForConfig) -> RunResult<Outcome> {
    if config.skip {
        tracing::info!("Checks are skipped.");
        return Ok(Outcome::Skipped);
    }
    if config.checks.is_empty() {
        tracing::warn!("No checks configured");
        return Ok(Outcome::NoChecks);
    }

    let settings = config.run_settings();
    let transport = HttpTransport::new(settings.timeout)?;
    let runner = ReadinessLoop::new(transport, TracingReporter::new(config.verbosity()));

    let span = tracing::info_span!(
        "waitfor",
        checks = config.checks.len(),
        timeout_ms = settings.timeout.as_millis() as u64,
        interval_ms = settings.interval.as_millis() as u64,
    );
    let summary = runner.run(&config.checks, settings).instrument(span).await?;
    Ok(Outcome::Ready(summary))
}
