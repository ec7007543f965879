//! Outbound request construction.
//!
//! # Responsibilities
//! - Resolve a check's raw target into a URL
//! - Select the method and attach the payload for POST/PUT
//! - Apply configured headers with overwrite semantics
//! - Attach the per-request timeout
//!
//! # Design Decisions
//! - Building is pure; nothing here touches the network
//! - Connect and request timeouts are the full run timeout, not the remaining
//!   budget, so one slow request can use up the whole deadline

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use url::Url;

use crate::check::spec::{CheckSpec, Method};
use crate::error::{RunError, RunResult};

/// A fully resolved request, ready for a [`Transport`](crate::transport::Transport).
#[derive(Debug, Clone)]
pub struct OutboundRequest {
    pub method: Method,
    pub url: Url,
    /// Present only for POST and PUT.
    pub body: Option<String>,
    pub headers: HeaderMap,
    /// Bound for connecting and for the whole exchange.
    pub timeout: Duration,
}

/// Parse a check target. Only absolute http and https URLs are accepted.
pub fn resolve_target(index: usize, raw: &str) -> RunResult<Url> {
    let invalid = || RunError::InvalidTarget {
        index,
        raw: raw.to_string(),
    };

    let url = Url::parse(raw).map_err(|_| invalid())?;
    match url.scheme() {
        "http" | "https" if url.host().is_some() => Ok(url),
        _ => Err(invalid()),
    }
}

/// Build the request for check `index` against its resolved `url`.
pub fn build_request(
    index: usize,
    check: &CheckSpec,
    url: Url,
    timeout: Duration,
) -> RunResult<OutboundRequest> {
    let method = Method::resolve(check.method.as_deref())?;

    let body = match method {
        Method::Get | Method::Head => None,
        Method::Post | Method::Put => Some(check.request_body.clone().unwrap_or_default()),
    };

    let mut headers = HeaderMap::with_capacity(check.headers.len());
    for header in &check.headers {
        let invalid = || RunError::InvalidHeader {
            index,
            name: header.name.clone(),
        };
        let name = HeaderName::from_bytes(header.name.as_bytes()).map_err(|_| invalid())?;
        let value = HeaderValue::from_str(&header.value).map_err(|_| invalid())?;
        // insert, not append: the last entry for a name wins
        headers.insert(name, value);
    }

    Ok(OutboundRequest {
        method,
        url,
        body,
        headers,
        timeout,
    })
}
