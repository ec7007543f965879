//! Response evaluation.
//!
//! The status code is compared first; the body is compared only when the
//! status matches and the check names an expected body. Bodies are compared
//! exactly, without trimming or normalization.

use std::fmt;

use crate::check::spec::CheckSpec;
use crate::transport::ProbeResponse;

/// Why a response did not satisfy its check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mismatch {
    Status { expected: u16, actual: u16 },
    Body { expected: String, actual: String },
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mismatch::Status { expected, actual } => {
                write!(f, "returned {} instead of expected {}", actual, expected)
            }
            Mismatch::Body { expected, actual } => write!(
                f,
                "returned {:?} instead of expected response {:?}",
                actual, expected
            ),
        }
    }
}

/// Outcome of evaluating one response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Matched,
    Mismatched(Mismatch),
}

impl Verdict {
    pub fn is_match(&self) -> bool {
        matches!(self, Verdict::Matched)
    }
}

/// Evaluate `response` against the expectations of `check`.
pub fn evaluate(check: &CheckSpec, response: &ProbeResponse) -> Verdict {
    let expected = check.expected_status();
    if response.status != expected {
        return Verdict::Mismatched(Mismatch::Status {
            expected,
            actual: response.status,
        });
    }

    match &check.expected_body {
        Some(body) if *body != response.body => Verdict::Mismatched(Mismatch::Body {
            expected: body.clone(),
            actual: response.body.clone(),
        }),
        _ => Verdict::Matched,
    }
}
