//! Stateless CRUD client for the posts API.
//!
//! # Design
//! `PostsClient` holds a transport and a normalized base URL and carries no
//! mutable state between calls. Each operation builds one `HttpRequest`,
//! hands it to the transport, and maps the outcome: a 2xx response is
//! returned to the caller unmodified, a non-2xx response becomes
//! `Error::Remote`, a transport failure becomes `Error::Transport`. There is
//! no retry, no timeout override, and no ordering between concurrent calls.

use serde::Serialize;

use crate::config::Config;
use crate::error::Error;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport::Transport;

/// Asynchronous client for the `/posts` resource collection.
///
/// Each of the five operations issues exactly one HTTP request. Payloads for
/// `create` and `update` are serialized verbatim: the client injects no
/// fields and performs no schema check. Responses come back as raw
/// [`HttpResponse`] values; decode them with [`HttpResponse::json`] if a
/// typed view is wanted.
#[derive(Debug, Clone)]
pub struct PostsClient<T> {
    transport: T,
    base_url: String,
}

impl<T: Transport> PostsClient<T> {
    /// Client with the default configuration (`http://localhost:5000`).
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, Config::default())
    }

    pub fn with_config(transport: T, config: Config) -> Self {
        Self {
            transport,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn list(&self) -> Result<HttpResponse, Error> {
        self.dispatch(HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/posts", self.base_url),
            headers: Vec::new(),
            body: None,
        })
        .await
    }

    pub async fn get_by_id(&self, id: u64) -> Result<HttpResponse, Error> {
        self.dispatch(HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/posts/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        })
        .await
    }

    /// POST `data` as the JSON request body. Any `Serialize` payload goes.
    pub async fn create<B>(&self, data: &B) -> Result<HttpResponse, Error>
    where
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_string(data).map_err(Error::Serialize)?;
        self.dispatch(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/posts", self.base_url),
            headers: json_headers(),
            body: Some(body),
        })
        .await
    }

    /// PUT `data` as the full replacement body for the record at `id`.
    pub async fn update<B>(&self, id: u64, data: &B) -> Result<HttpResponse, Error>
    where
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_string(data).map_err(Error::Serialize)?;
        self.dispatch(HttpRequest {
            method: HttpMethod::Put,
            path: format!("{}/posts/{id}", self.base_url),
            headers: json_headers(),
            body: Some(body),
        })
        .await
    }

    pub async fn delete(&self, id: u64) -> Result<HttpResponse, Error> {
        self.dispatch(HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/posts/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        })
        .await
    }

    async fn dispatch(&self, request: HttpRequest) -> Result<HttpResponse, Error> {
        let response = self.transport.send(request).await?;
        check_status(response)
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

/// 2xx responses pass through untouched; anything else becomes `Remote`.
fn check_status(response: HttpResponse) -> Result<HttpResponse, Error> {
    if response.is_success() {
        return Ok(response);
    }
    Err(Error::Remote {
        status: response.status,
        body: response.body,
    })
}
