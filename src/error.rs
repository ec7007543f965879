//! Error types shared by the readiness engine.

use thiserror::Error;

/// Fatal outcomes of a readiness run.
///
/// Every variant aborts the run. Per-check transport failures and response
/// mismatches are not errors at this level; they are reported and retried.
#[derive(Debug, Error)]
pub enum RunError {
    /// At least one check was still unresolved when the deadline passed.
    #[error("Timed out after {elapsed_millis}ms")]
    DeadlineExceeded { elapsed_millis: u128 },

    /// A check's target is not an absolute http(s) URL.
    #[error("Invalid url {raw} for check with index {index}")]
    InvalidTarget { index: usize, raw: String },

    /// A check names a method outside GET, HEAD, POST and PUT.
    #[error("Unknown request method {0}")]
    UnsupportedMethod(String),

    /// A configured header cannot be sent as an HTTP header.
    #[error("Invalid header {name:?} for check with index {index}")]
    InvalidHeader { index: usize, name: String },

    /// The HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    Client(String),
}

/// Result type for readiness runs.
pub type RunResult<T> = Result<T, RunError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_identify_the_cause() {
        let err = RunError::DeadlineExceeded { elapsed_millis: 1503 };
        assert_eq!(err.to_string(), "Timed out after 1503ms");

        let err = RunError::InvalidTarget { index: 2, raw: "::nope".into() };
        assert_eq!(err.to_string(), "Invalid url ::nope for check with index 2");

        let err = RunError::UnsupportedMethod("DELETE".into());
        assert_eq!(err.to_string(), "Unknown request method DELETE");
    }
}
