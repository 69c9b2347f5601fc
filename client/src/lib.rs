//! Asynchronous CRUD client for a REST "posts" resource.
//!
//! # Overview
//! Five operations (list, get by id, create, update, delete), each mapping
//! to exactly one HTTP request against `{base_url}/posts[/{id}]`. The base
//! URL defaults to `http://localhost:5000` and is the only configuration.
//!
//! # Design
//! - `PostsClient` is stateless: it holds a transport and a base URL.
//! - The network sits behind the [`Transport`] trait; [`ReqwestTransport`]
//!   is the production implementation, tests substitute fakes.
//! - Operations return the raw [`HttpResponse`] for 2xx statuses unmodified;
//!   non-2xx becomes [`Error::Remote`], transport failures become
//!   [`Error::Transport`]. Nothing is retried, cached, or transformed.
//! - Typed DTOs and [`HttpResponse::json`] are an opt-in layer; payloads are
//!   any `Serialize` value and are sent verbatim.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use client::PostsClient;
pub use config::{Config, DEFAULT_BASE_URL};
pub use error::{Error, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{ReqwestTransport, Transport};
pub use types::{NewPost, Post};
