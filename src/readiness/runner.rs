//! The round-based readiness loop.
//!
//! # Round structure
//! ```text
//! loop:
//!     all resolved?            → success
//!     elapsed > timeout?       → DeadlineExceeded
//!     round > 0?               → sleep(interval)
//!     for each pending check, in order:
//!         resolve target       → InvalidTarget (fatal)
//!         build request        → UnsupportedMethod / InvalidHeader (fatal)
//!         execute + evaluate   → resolved, or soft failure (retry next round)
//! ```
//!
//! # Design Decisions
//! - The deadline is checked only at the top of a round. Requests issued in a
//!   round may run past it by up to one request timeout; slow-starting
//!   services rely on that slack.
//! - Checks within a round run one after another, in configured order.
//! - `probe` is the single per-check step, so changing the fan-out never
//!   touches evaluation or timeout handling.

use std::time::Duration;

use crate::check::{build_request, evaluate, resolve_target, CheckSpec, ResultTracker, Verdict};
use crate::error::RunResult;
use crate::readiness::deadline::RunDeadline;
use crate::readiness::report::Reporter;
use crate::transport::Transport;

/// Timing parameters of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSettings {
    /// Overall deadline, also used as the per-request timeout.
    pub timeout: Duration,
    /// Delay between rounds.
    pub interval: Duration,
}

impl RunSettings {
    pub fn new(timeout: Duration, interval: Duration) -> Self {
        Self { timeout, interval }
    }
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            interval: Duration::from_millis(500),
        }
    }
}

/// What a successful run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of rounds swept before every check resolved.
    pub rounds: usize,
    /// Number of requests issued across all rounds.
    pub requests: usize,
    pub elapsed: Duration,
}

/// Outcome of a single issued probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    Passed,
    Failed,
}

/// Polls a list of checks until all of them have matched once.
pub struct ReadinessLoop<T, R> {
    transport: T,
    reporter: R,
}

impl<T: Transport, R: Reporter> ReadinessLoop<T, R> {
    pub fn new(transport: T, reporter: R) -> Self {
        Self {
            transport,
            reporter,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// Run rounds until every check resolves or the deadline passes.
    pub async fn run(&self, checks: &[CheckSpec], settings: RunSettings) -> RunResult<RunSummary> {
        let deadline = RunDeadline::start(settings.timeout);
        let mut tracker = ResultTracker::new(checks.len());
        let mut requests = 0;
        let mut round = 0;

        loop {
            if tracker.all_resolved() {
                let summary = RunSummary {
                    rounds: round,
                    requests,
                    elapsed: deadline.elapsed(),
                };
                self.reporter.all_passed(&summary);
                return Ok(summary);
            }
            self.reporter.round_started(round, tracker.pending());

            deadline.check()?;
            if round > 0 {
                tokio::time::sleep(settings.interval).await;
            }

            for (index, check) in checks.iter().enumerate() {
                if tracker.is_resolved(index) {
                    continue;
                }
                let outcome = self.probe(index, check, settings.timeout).await?;
                requests += 1;
                if outcome == ProbeOutcome::Passed {
                    tracker.resolve(index);
                }
            }

            round += 1;
        }
    }

    /// Request check `index` once and evaluate the response.
    ///
    /// Configuration errors are returned before any request is sent.
    /// Transport failures and mismatches are reported and come back as
    /// [`ProbeOutcome::Failed`].
    pub async fn probe(
        &self,
        index: usize,
        check: &CheckSpec,
        timeout: Duration,
    ) -> RunResult<ProbeOutcome> {
        let url = resolve_target(index, &check.target)?;
        let request = build_request(index, check, url.clone(), timeout)?;

        self.reporter.attempt(index, &url);
        let response = match self.transport.execute(request).await {
            Ok(response) => response,
            Err(e) => {
                self.reporter.transport_failed(index, &url, &e);
                return Ok(ProbeOutcome::Failed);
            }
        };
        self.reporter.response_received(index, &url, &response);

        match evaluate(check, &response) {
            Verdict::Matched => {
                self.reporter.check_passed(index, &url, response.status);
                Ok(ProbeOutcome::Passed)
            }
            Verdict::Mismatched(mismatch) => {
                self.reporter.mismatch(index, &url, &mismatch);
                Ok(ProbeOutcome::Failed)
            }
        }
    }
}
