//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! readiness engine
//!     → Reporter events (readiness/report.rs)
//!     → tracing macros
//!     → logging.rs subscriber (fmt to stderr, EnvFilter)
//! ```
//!
//! # Design Decisions
//! - Structured fields (check index, status, round) on every event
//! - The library never installs a subscriber; only the binary does

pub mod logging;
