//! Check subsystem.
//!
//! # Data Flow
//! ```text
//! CheckSpec (spec.rs, immutable)
//!     → request.rs (resolve target, build OutboundRequest)
//!     → Transport executes it
//!     → predicate.rs (status, then exact body)
//!     → tracker.rs (Pending → Resolved, once)
//! ```
//!
//! # Design Decisions
//! - Methods are a closed enum; anything else is a configuration error
//! - Target and method are interpreted at dispatch time so errors carry the
//!   offending check index
//! - Response bodies are always read in full before evaluation

pub mod predicate;
pub mod request;
pub mod spec;
pub mod tracker;

pub use predicate::{evaluate, Mismatch, Verdict};
pub use request::{build_request, resolve_target, OutboundRequest};
pub use spec::{CheckSpec, Header, Method};
pub use tracker::{Resolution, ResultTracker};
