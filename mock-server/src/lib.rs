use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub created_at: String,
}

/// Body accepted by both POST (create) and PUT (replace). Every field is
/// required: PUT overwrites the stored record wholesale and takes the id
/// from the path.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub created_at: String,
}

/// In-memory post store. Ids are assigned sequentially starting at 1, and a
/// `BTreeMap` keeps list output ordered by id.
pub struct Store {
    next_id: u64,
    posts: BTreeMap<u64, Post>,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            next_id: 1,
            posts: BTreeMap::new(),
        }
    }
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/posts", get(list_posts).post(create_post))
        .route("/posts/{id}", get(get_post).put(update_post).delete(delete_post))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_posts(State(db): State<Db>) -> Json<Vec<Post>> {
    let store = db.read().await;
    Json(store.posts.values().cloned().collect())
}

async fn create_post(
    State(db): State<Db>,
    Json(input): Json<NewPost>,
) -> (StatusCode, Json<Post>) {
    let mut store = db.write().await;
    let post = Post {
        id: store.next_id,
        title: input.title,
        content: input.content,
        created_at: input.created_at,
    };
    store.next_id += 1;
    store.posts.insert(post.id, post.clone());
    (StatusCode::CREATED, Json(post))
}

async fn get_post(State(db): State<Db>, Path(id): Path<u64>) -> Result<Json<Post>, StatusCode> {
    let store = db.read().await;
    store.posts.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_post(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<NewPost>,
) -> Result<Json<Post>, StatusCode> {
    let mut store = db.write().await;
    if !store.posts.contains_key(&id) {
        return Err(StatusCode::NOT_FOUND);
    }
    let post = Post {
        id,
        title: input.title,
        content: input.content,
        created_at: input.created_at,
    };
    store.posts.insert(id, post.clone());
    Ok(Json(post))
}

async fn delete_post(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    store.posts.remove(&id).map(|_| StatusCode::NO_CONTENT).ok_or(StatusCode::NOT_FOUND)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_serializes_with_camel_case_created_at() {
        let post = Post {
            id: 1,
            title: "Test".to_string(),
            content: "Body".to_string(),
            created_at: "2020-01-01".to_string(),
        };
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["title"], "Test");
        assert_eq!(json["createdAt"], "2020-01-01");
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn post_roundtrips_through_json() {
        let post = Post {
            id: 3,
            title: "Roundtrip".to_string(),
            content: "내용".to_string(),
            created_at: "2020-03-03".to_string(),
        };
        let json = serde_json::to_string(&post).unwrap();
        let back: Post = serde_json::from_str(&json).unwrap();
        assert_eq!(back, post);
    }

    #[test]
    fn new_post_accepts_camel_case_wire_fields() {
        let input: NewPost = serde_json::from_str(
            r#"{"title":"T","content":"C","createdAt":"2020-01-01"}"#,
        )
        .unwrap();
        assert_eq!(input.title, "T");
        assert_eq!(input.created_at, "2020-01-01");
    }

    #[test]
    fn new_post_rejects_missing_content() {
        let result: Result<NewPost, _> =
            serde_json::from_str(r#"{"title":"T","createdAt":"2020-01-01"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn store_assigns_ids_from_one() {
        let store = Store::default();
        assert_eq!(store.next_id, 1);
        assert!(store.posts.is_empty());
    }
}
