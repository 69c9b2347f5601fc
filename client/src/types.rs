//! Domain DTOs for the posts API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Field names follow Rust convention and rename to the API's camelCase on
//! the wire (`createdAt`). They are a convenience layer only: the client
//! operations accept any `Serialize` payload and return the raw response, so
//! nothing forces callers through these structs. Integration tests catch any
//! schema drift between the two crates.

use serde::{Deserialize, Serialize};

/// A single post returned by the API.
///
/// `created_at` is kept as an uninterpreted string; the client neither
/// validates nor parses it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub created_at: String,
}

/// Request payload for creating a post. The id is assigned by the server.
///
/// `update` sends the same shape: PUT replaces the stored record wholesale,
/// so every field is required and the id comes from the request path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub created_at: String,
}
