//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the `tracing` subscriber for the binary
//! - Pick a default filter from the verbosity switches
//!
//! # Design Decisions
//! - `RUST_LOG` always wins over the derived default
//! - Quiet mode keeps `info`: round starts, passed checks and the final
//!   result are always shown; the reporter drops the rest
//! - Chatty mode adds `debug` events from the transport

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::readiness::Verbosity;

/// Default filter directive for the given verbosity.
pub fn default_directive(verbosity: Verbosity) -> &'static str {
    if verbosity.chatty {
        "waitfor=debug"
    } else {
        "waitfor=info"
    }
}

/// Install the global subscriber. Later calls are ignored.
pub fn init_logging(verbosity: Verbosity) {
    let _ = tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directive(verbosity).into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init();
}
