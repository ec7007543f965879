//! Run deadline arithmetic.

use std::time::Duration;
use tokio::time::Instant;

use crate::error::{RunError, RunResult};

/// Start instant of a run and the time it is allowed to take.
#[derive(Debug, Clone, Copy)]
pub struct RunDeadline {
    started_at: Instant,
    timeout: Duration,
}

impl RunDeadline {
    /// Capture the start of a run.
    pub fn start(timeout: Duration) -> Self {
        Self {
            started_at: Instant::now(),
            timeout,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// Fail once the elapsed time, in whole milliseconds, exceeds the timeout.
    pub fn check(&self) -> RunResult<Duration> {
        let elapsed = self.elapsed();
        if elapsed.as_millis() > self.timeout.as_millis() {
            return Err(RunError::DeadlineExceeded {
                elapsed_millis: elapsed.as_millis(),
            });
        }
        Ok(elapsed)
    }
}
