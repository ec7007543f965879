//! Check definitions.
//!
//! A [`CheckSpec`] is read-only input to every round of a run. Target and
//! method are kept as raw strings and only interpreted at dispatch time, so a
//! bad value surfaces as a run error carrying the check index.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RunError;

/// Status code expected when a check leaves `status_code` unset or zero.
pub const DEFAULT_EXPECTED_STATUS: u16 = 200;

/// Request methods a check may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Get,
    Head,
    Post,
    Put,
}

impl Method {
    /// Resolve an optional configured method, defaulting to GET.
    pub fn resolve(raw: Option<&str>) -> Result<Self, RunError> {
        match raw {
            None => Ok(Method::Get),
            Some(value) => value.parse(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Head => "HEAD",
            Method::Post => "POST",
            Method::Put => "PUT",
        }
    }

    /// Whether requests with this method carry the check's request body.
    pub fn sends_body(&self) -> bool {
        matches!(self, Method::Post | Method::Put)
    }
}

impl FromStr for Method {
    type Err = RunError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Method::Get),
            "HEAD" => Ok(Method::Head),
            "POST" => Ok(Method::Post),
            "PUT" => Ok(Method::Put),
            _ => Err(RunError::UnsupportedMethod(s.to_string())),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single request header.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Header {
    pub name: String,
    pub value: String,
}

/// One endpoint to probe and what counts as ready.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CheckSpec {
    /// Target URL, parsed when the check is first dispatched.
    #[serde(rename = "url", alias = "target")]
    pub target: String,

    /// Request method (GET when unset).
    #[serde(default)]
    pub method: Option<String>,

    /// Payload for POST and PUT (empty when unset).
    #[serde(default)]
    pub request_body: Option<String>,

    /// Headers applied in order; a later entry replaces an earlier one
    /// with the same name.
    #[serde(default)]
    pub headers: Vec<Header>,

    /// Expected status code; 0 means 200.
    #[serde(default, rename = "status_code")]
    pub expected_status: u16,

    /// Exact body the response must carry, if any.
    #[serde(default, rename = "expected_response_body")]
    pub expected_body: Option<String>,
}

impl CheckSpec {
    /// A plain GET check expecting 200 with any body.
    pub fn get(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            method: None,
            request_body: None,
            headers: Vec::new(),
            expected_status: 0,
            expected_body: None,
        }
    }

    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    pub fn with_request_body(mut self, body: impl Into<String>) -> Self {
        self.request_body = Some(body.into());
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push(Header {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    pub fn expect_status(mut self, status: u16) -> Self {
        self.expected_status = status;
        self
    }

    pub fn expect_body(mut self, body: impl Into<String>) -> Self {
        self.expected_body = Some(body.into());
        self
    }

    /// The status code a response must carry, with the zero sentinel applied.
    pub fn expected_status(&self) -> u16 {
        if self.expected_status == 0 {
            DEFAULT_EXPECTED_STATUS
        } else {
            self.expected_status
        }
    }
}
