//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeout and interval > 0)
//! - Reject headers without a name
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: WaitForConfig → Result<(), Vec<ValidationError>>
//! - Targets and methods are left to the run, which reports them with the
//!   offending check index

use thiserror::Error;

use crate::config::schema::WaitForConfig;

/// A semantic problem in an otherwise well-formed configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("timeout_seconds must be greater than 0")]
    ZeroTimeout,

    #[error("check_every_millis must be greater than 0")]
    ZeroInterval,

    #[error("check {check} has a header with an empty name")]
    EmptyHeaderName { check: usize },
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &WaitForConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.timeout_seconds == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }
    if config.check_every_millis == 0 {
        errors.push(ValidationError::ZeroInterval);
    }
    for (index, check) in config.checks.iter().enumerate() {
        if check.headers.iter().any(|h| h.name.trim().is_empty()) {
            errors.push(ValidationError::EmptyHeaderName { check: index });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
