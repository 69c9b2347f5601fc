//! Error types for the posts API client.
//!
//! # Design
//! The taxonomy separates "the request never completed" (`Transport`) from
//! "the server answered and said no" (`Remote`). A 404 is a `Remote` error
//! like any other non-2xx: the status code stays visible instead of being
//! hidden behind a dedicated variant, and `Error::status` gives callers the
//! code without destructuring. `Serialize` and `Decode` cover the JSON
//! boundaries on the way in and out; both keep their serde source error.

use thiserror::Error;

/// Failure in the HTTP transport before a response was received: connection
/// refused, DNS failure, a dropped connection mid-body.
///
/// Wraps whatever error the underlying transport library produced; the
/// original is reachable through `source()`.
#[derive(Debug, Error)]
#[error("{source}")]
pub struct TransportError {
    #[from]
    source: Box<dyn std::error::Error + Send + Sync + 'static>,
}

impl TransportError {
    pub fn new<E>(source: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
    {
        Self {
            source: source.into(),
        }
    }
}

/// Errors returned by `PostsClient` operations and `HttpResponse::json`.
#[derive(Debug, Error)]
pub enum Error {
    /// The transport failed and no HTTP response was received.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The server responded with a non-2xx status. The raw status and body
    /// are preserved unchanged.
    #[error("HTTP {status}: {body}")]
    Remote { status: u16, body: String },

    /// The request payload could not be serialized to JSON. Raised before
    /// any request is issued.
    #[error("serialization failed: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The response body could not be decoded into the requested type. Only
    /// reachable through the opt-in `HttpResponse::json`.
    #[error("deserialization failed: {0}")]
    Decode(#[source] serde_json::Error),
}

impl Error {
    /// Status code of the server's rejection, if the server rejected at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_error_displays_status_and_body() {
        let err = Error::Remote {
            status: 500,
            body: "internal error".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 500: internal error");
    }

    #[test]
    fn transport_error_displays_source_message() {
        let err = Error::from(TransportError::new("connection refused"));
        assert_eq!(err.to_string(), "transport error: connection refused");
    }

    #[test]
    fn transport_error_preserves_source() {
        use std::error::Error as _;

        let err = TransportError::new("tcp connect error");
        assert_eq!(err.source().unwrap().to_string(), "tcp connect error");
    }

    #[test]
    fn status_is_some_only_for_remote() {
        let remote = Error::Remote {
            status: 404,
            body: String::new(),
        };
        assert_eq!(remote.status(), Some(404));

        let transport = Error::from(TransportError::new("unreachable"));
        assert_eq!(transport.status(), None);
    }
}
