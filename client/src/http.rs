//! Plain-data HTTP request and response types.
//!
//! # Design
//! The client describes each operation as an `HttpRequest` value and hands it
//! to an injected [`Transport`](crate::transport::Transport) for execution.
//! Keeping requests and responses as plain data means the client itself never
//! touches the network, any HTTP library can sit behind the trait, and tests
//! can record and replay exchanges without sockets. All fields use owned
//! types so values move freely across task boundaries.

use serde::de::DeserializeOwned;

use crate::error::Error;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// Wire name of the method.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// An HTTP request described as plain data.
///
/// `path` is the full URL including the base. Headers are set only when the
/// request carries a body (`content-type: application/json`).
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Produced by a transport after executing an `HttpRequest`. The client
/// passes 2xx responses through to the caller untouched.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// True for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON into `T`.
    ///
    /// Opt-in: no operation calls this on the caller's behalf, so responses
    /// with unexpected bodies are still returned intact.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, Error> {
        serde_json::from_str(&self.body).map_err(Error::Decode)
    }
}
