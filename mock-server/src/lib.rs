//! In-memory stand-in for the remote blog service.
//!
//! Implements the `/blogs` wire contract: list in insertion order, create
//! assigns id and creation time, update replaces fields and acknowledges
//! with an empty 204, delete returns an empty 204. Empty fields are
//! rejected with 422 and an error-text body; unknown ids with 404.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Client-supplied fields, shared by create and update (full replacement).
#[derive(Debug, Deserialize)]
pub struct PostFields {
    pub title: String,
    pub content: String,
    pub author: String,
}

// Vec rather than a map: the contract fixes list order to insertion order.
pub type Db = Arc<RwLock<Vec<Post>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Vec::new()));
    Router::new()
        .route("/blogs", get(list_posts).post(create_post))
        .route("/blogs/{id}", put(update_post).delete(delete_post))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn validate(input: &PostFields) -> Result<(), (StatusCode, String)> {
    for (name, value) in [
        ("title", &input.title),
        ("content", &input.content),
        ("author", &input.author),
    ] {
        if value.is_empty() {
            return Err((
                StatusCode::UNPROCESSABLE_ENTITY,
                format!("{name} must not be empty"),
            ));
        }
    }
    Ok(())
}

async fn list_posts(State(db): State<Db>) -> Json<Vec<Post>> {
    Json(db.read().await.clone())
}

async fn create_post(
    State(db): State<Db>,
    Json(input): Json<PostFields>,
) -> Result<(StatusCode, Json<Post>), (StatusCode, String)> {
    validate(&input)?;
    let post = Post {
        id: Uuid::new_v4(),
        title: input.title,
        content: input.content,
        author: input.author,
        created_at: Utc::now(),
    };
    db.write().await.push(post.clone());
    Ok((StatusCode::CREATED, Json(post)))
}

async fn update_post(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
    Json(input): Json<PostFields>,
) -> Result<StatusCode, (StatusCode, String)> {
    validate(&input)?;
    let mut posts = db.write().await;
    let post = posts
        .iter_mut()
        .find(|post| post.id == id)
        .ok_or((StatusCode::NOT_FOUND, "post not found".to_string()))?;
    post.title = input.title;
    post.content = input.content;
    post.author = input.author;
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_post(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, StatusCode> {
    let mut posts = db.write().await;
    let before = posts.len();
    posts.retain(|post| post.id != id);
    if posts.len() == before {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(StatusCode::NO_CONTENT)
}
