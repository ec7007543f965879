//! HTTP execution of probe requests.
//!
//! # Responsibilities
//! - Send an [`OutboundRequest`] and read the full response body
//! - Classify failures for diagnostics
//!
//! # Design Decisions
//! - The body is always drained, whatever the verbosity, so no connection is
//!   left half-read
//! - Environment proxies are ignored; probes go straight to the target
//! - Every failure here is soft: the loop reports it and retries next round

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::check::{Method, OutboundRequest};
use crate::error::{RunError, RunResult};

/// Status and full body of a probe response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResponse {
    pub status: u16,
    pub body: String,
}

/// A probe request that produced no usable response.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request timed out")]
    Timeout,

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("reading response body failed: {0}")]
    Body(String),

    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_connect() {
            TransportError::Connect(err.to_string())
        } else if err.is_body() || err.is_decode() {
            TransportError::Body(err.to_string())
        } else {
            TransportError::Other(err.to_string())
        }
    }
}

/// Executes probe requests.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: OutboundRequest) -> Result<ProbeResponse, TransportError>;
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Head => reqwest::Method::HEAD,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
        }
    }
}

/// [`Transport`] backed by a pooled `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport whose connections give up after `connect_timeout`.
    pub fn new(connect_timeout: Duration) -> RunResult<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .no_proxy()
            .user_agent(concat!("waitfor/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| RunError::Client(e.to_string()))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: OutboundRequest) -> Result<ProbeResponse, TransportError> {
        tracing::debug!(
            method = %request.method,
            url = %request.url,
            headers = request.headers.len(),
            timeout_ms = request.timeout.as_millis() as u64,
            "Sending probe request"
        );

        let mut builder = self
            .client
            .request(request.method.into(), request.url)
            .headers(request.headers)
            .timeout(request.timeout);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        tracing::debug!(status, bytes = body.len(), "Probe response received");

        Ok(ProbeResponse { status, body })
    }
}
