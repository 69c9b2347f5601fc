//! The injected HTTP transport capability.
//!
//! # Design
//! `Transport` is the only seam between the client and the network. It is an
//! object-safe async trait so callers can bring any HTTP library: the crate
//! ships [`ReqwestTransport`] for production use, and the client's tests
//! substitute a fake that records requests and replays canned responses.
//!
//! Implementations must return `Ok` for ANY completed HTTP exchange,
//! including 4xx/5xx, because status interpretation belongs to the client.
//! `Err` is reserved for failures where no response was received at all:
//! connection refused, DNS failure, a connection dropped mid-body.

use async_trait::async_trait;
use tracing::debug;

use crate::error::TransportError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Executes one HTTP exchange. See the module docs for the error contract.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Production transport backed by `reqwest`.
///
/// Uses reqwest defaults throughout: no timeout override, no redirect or
/// pool tuning. The wrapped `reqwest::Client` is cheap to clone and shares
/// its connection pool across clones.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        debug!(method = request.method.as_str(), url = %request.path, "sending request");

        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(&request.path),
            HttpMethod::Post => self.client.post(&request.path),
            HttpMethod::Put => self.client.put(&request.path),
            HttpMethod::Delete => self.client.delete(&request.path),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        // Reading the body can still fail on a dropped connection; that is a
        // transport error like any other.
        let body = response.text().await?;

        debug!(status, "received response");
        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        TransportError::new(err)
    }
}
