use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::debug;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub body: String,
}

#[derive(Deserialize)]
pub struct PostInput {
    pub title: String,
    pub body: String,
}

/// Posts keyed by id, plus the next id to hand out.
#[derive(Debug, Default)]
pub struct Posts {
    by_id: BTreeMap<i64, Post>,
    next_id: i64,
}

impl Posts {
    pub fn seeded(seed: Vec<Post>) -> Self {
        let next_id = seed.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        Self {
            by_id: seed.into_iter().map(|p| (p.id, p)).collect(),
            next_id,
        }
    }
}

pub type Db = Arc<RwLock<Posts>>;

pub fn app() -> Router {
    app_with(Vec::new())
}

pub fn app_with(seed: Vec<Post>) -> Router {
    let db: Db = Arc::new(RwLock::new(Posts::seeded(seed)));
    Router::new()
        .route("/posts", get(list_posts).post(create_post))
        .route("/posts/{id}", get(get_post).put(update_post).delete(delete_post))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with(listener: TcpListener, seed: Vec<Post>) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(seed)).await
}

/// A handful of posts for local development.
pub fn sample_posts() -> Vec<Post> {
    [
        (1, "Groceries", "Milk, eggs and bread"),
        (2, "Book club", "Finish chapter four before Thursday"),
        (3, "bike repair", "Replace the rear inner tube"),
    ]
    .into_iter()
    .map(|(id, title, body)| Post {
        id,
        title: title.to_string(),
        body: body.to_string(),
    })
    .collect()
}

async fn list_posts(State(db): State<Db>) -> Json<Vec<Post>> {
    let posts = db.read().await;
    Json(posts.by_id.values().cloned().collect())
}

async fn create_post(
    State(db): State<Db>,
    Json(input): Json<PostInput>,
) -> (StatusCode, Json<Post>) {
    let mut posts = db.write().await;
    let post = Post {
        id: posts.next_id,
        title: input.title,
        body: input.body,
    };
    posts.next_id += 1;
    posts.by_id.insert(post.id, post.clone());
    debug!(id = post.id, "post created");
    (StatusCode::CREATED, Json(post))
}

async fn get_post(State(db): State<Db>, Path(id): Path<i64>) -> Result<Json<Post>, StatusCode> {
    let posts = db.read().await;
    posts.by_id.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_post(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<PostInput>,
) -> Result<Json<Post>, StatusCode> {
    let mut posts = db.write().await;
    let post = posts.by_id.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    post.title = input.title;
    post.body = input.body;
    debug!(id, "post updated");
    Ok(Json(post.clone()))
}

async fn delete_post(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let mut posts = db.write().await;
    posts.by_id.remove(&id).ok_or(StatusCode::NOT_FOUND)?;
    debug!(id, "post deleted");
    Ok(Json(serde_json::json!({})))
}
