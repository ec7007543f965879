//! Reporting sink for readiness runs.
//!
//! # Responsibilities
//! - Receive every event the loop emits
//! - Decide how loudly to surface it
//!
//! # Design Decisions
//! - The loop decides *what* happened; the sink owns verbosity
//! - Round starts, passed checks and final success are always logged
//! - Quiet mode drops per-check attempts and soft failures
//! - Response bodies are logged only in chatty mode

use url::Url;

use crate::check::Mismatch;
use crate::readiness::runner::RunSummary;
use crate::transport::{ProbeResponse, TransportError};

/// Receives events from a [`ReadinessLoop`](crate::readiness::ReadinessLoop).
///
/// Events for the checks of one round arrive in configured order.
pub trait Reporter: Send + Sync {
    /// A round is about to start because some checks are still pending.
    fn round_started(&self, round: usize, pending: usize);

    /// Check `index` is about to be requested.
    fn attempt(&self, index: usize, url: &Url);

    /// A response arrived for check `index`, before evaluation.
    fn response_received(&self, index: usize, url: &Url, response: &ProbeResponse);

    /// The response for check `index` did not match its expectations.
    fn mismatch(&self, index: usize, url: &Url, mismatch: &Mismatch);

    /// The request for check `index` failed without a usable response.
    fn transport_failed(&self, index: usize, url: &Url, error: &TransportError);

    /// Check `index` matched and is now resolved.
    fn check_passed(&self, index: usize, url: &Url, status: u16);

    /// Every check has been resolved.
    fn all_passed(&self, summary: &RunSummary);
}

/// Verbosity switches for a [`TracingReporter`].
///
/// The two switches are independent: `quiet` drops per-check diagnostics,
/// `chatty` adds response bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Verbosity {
    pub quiet: bool,
    pub chatty: bool,
}

impl Verbosity {
    pub fn new(quiet: bool, chatty: bool) -> Self {
        Self { quiet, chatty }
    }
}

/// [`Reporter`] that emits `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter {
    verbosity: Verbosity,
}

impl TracingReporter {
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    fn quiet(&self) -> bool {
        self.verbosity.quiet
    }
}

impl Reporter for TracingReporter {
    fn round_started(&self, round: usize, pending: usize) {
        tracing::info!(round, pending, "Not all checks passed. Trying again...");
    }

    fn attempt(&self, index: usize, url: &Url) {
        if !self.quiet() {
            tracing::info!(check = index, url = %url, "Checking {}...", url);
        }
    }

    fn response_received(&self, index: usize, url: &Url, response: &ProbeResponse) {
        if self.verbosity.chatty {
            tracing::info!(
                check = index,
                status = response.status,
                "{} responded with: {}",
                url,
                response.body
            );
        }
    }

    fn mismatch(&self, index: usize, url: &Url, mismatch: &Mismatch) {
        if !self.quiet() {
            tracing::info!(check = index, "{} {}", url, mismatch);
        }
    }

    fn transport_failed(&self, index: usize, url: &Url, error: &TransportError) {
        if !self.quiet() {
            tracing::warn!(check = index, error = %error, "{} failed", url);
        }
    }

    fn check_passed(&self, index: usize, url: &Url, status: u16) {
        tracing::info!(check = index, "{} returned successfully ({})", url, status);
    }

    fn all_passed(&self, summary: &RunSummary) {
        tracing::info!(
            rounds = summary.rounds,
            requests = summary.requests,
            elapsed_ms = summary.elapsed.as_millis() as u64,
            "All checks returned successfully."
        );
    }
}
