//! Domain model and wire DTOs.
//!
//! # Design
//! `Item` is what the rest of the workspace sees. The remote service speaks
//! in posts (`{id, title, body}`); the `Post*` types exist only to map that
//! shape at the gateway boundary. The mock-server crate defines its own copy
//! of the resource; integration tests catch schema drift between the two.

use serde::{Deserialize, Serialize};

/// Identifier assigned by the remote service.
pub type ItemId = i64;

/// A managed item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub description: String,
}

impl Item {
    pub fn new(id: ItemId, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
        }
    }
}

/// A resource as returned by `GET /posts`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    pub id: ItemId,
    pub title: String,
    pub body: String,
}

impl From<Post> for Item {
    fn from(post: Post) -> Self {
        Item {
            id: post.id,
            title: post.title,
            description: post.body,
        }
    }
}

/// Request payload for `POST /posts` and `PUT /posts/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PostPayload {
    pub title: String,
    pub body: String,
}

impl PostPayload {
    pub fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            body: description.to_string(),
        }
    }
}

impl From<&Item> for PostPayload {
    fn from(item: &Item) -> Self {
        PostPayload::new(&item.title, &item.description)
    }
}

/// The part of a create response we trust. Echoed title/body are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedPost {
    pub id: ItemId,
}
