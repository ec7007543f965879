//! Readiness engine.
//!
//! # Data Flow
//! ```text
//! ReadinessLoop::run (runner.rs)
//!     → RunDeadline (deadline.rs) checked at the top of every round
//!     → per pending check: ReadinessLoop::probe
//!         → check::request → Transport → check::predicate
//!     → every outcome reported through Reporter (report.rs)
//! ```
//!
//! # Design Decisions
//! - A run is a single sequential flow; the caller awaits it to completion
//! - The resolution table is owned by the run, so no locking is needed
//! - Reporting is injected; the engine has no logging policy of its own

pub mod deadline;
pub mod report;
pub mod runner;

pub use deadline::RunDeadline;
pub use report::{Reporter, TracingReporter, Verbosity};
pub use runner::{ProbeOutcome, ReadinessLoop, RunSettings, RunSummary};
