//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML files.
//! Field names and defaults mirror the flags callers already pass to the
//! build step: `timeout_seconds`, `check_every_millis`, `skip`, `quiet`,
//! `chatty` and a list of `checks`.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::check::CheckSpec;
use crate::readiness::{RunSettings, Verbosity};

/// Root configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct WaitForConfig {
    /// Endpoints to wait for, in the order they are probed.
    pub checks: Vec<CheckSpec>,

    /// Overall deadline in seconds; also the per-request timeout.
    pub timeout_seconds: u64,

    /// Delay between rounds in milliseconds.
    pub check_every_millis: u64,

    /// Skip all checks and succeed immediately.
    pub skip: bool,

    /// Only log round starts, passed checks and the final result.
    pub quiet: bool,

    /// Also log every response body.
    pub chatty: bool,
}

impl Default for WaitForConfig {
    fn default() -> Self {
        Self {
            checks: Vec::new(),
            timeout_seconds: 30,
            check_every_millis: 500,
            skip: false,
            quiet: false,
            chatty: false,
        }
    }
}

impl WaitForConfig {
    pub fn run_settings(&self) -> RunSettings {
        RunSettings::new(
            Duration::from_millis(self.timeout_seconds.saturating_mul(1000)),
            Duration::from_millis(self.check_every_millis),
        )
    }

    pub fn verbosity(&self) -> Verbosity {
        Verbosity::new(self.quiet, self.chatty)
    }
}
