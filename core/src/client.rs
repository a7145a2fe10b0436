//! Stateless HTTP request builder and response parser for the posts API.
//!
//! # Design
//! `ItemClient` holds only a `base_url`. Each operation is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method that
//! consumes the matching `HttpResponse`, so the mapping between the service's
//! `{id, title, body}` resources and `Item` can be tested without a network.

use crate::error::GatewayError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreatedPost, Item, ItemId, Post, PostPayload};

const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

/// Synchronous, stateless client for the posts API.
#[derive(Debug, Clone)]
pub struct ItemClient {
    base_url: String,
}

impl ItemClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/posts", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create(&self, title: &str, description: &str) -> Result<HttpRequest, GatewayError> {
        let body = encode(&PostPayload::new(title, description))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/posts", self.base_url),
            headers: json_headers(),
            body: Some(body),
        })
    }

    pub fn build_update(&self, item: &Item) -> Result<HttpRequest, GatewayError> {
        let body = encode(&PostPayload::from(item))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: format!("{}/posts/{}", self.base_url, item.id),
            headers: json_headers(),
            body: Some(body),
        })
    }

    pub fn build_delete(&self, id: ItemId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/posts/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list(&self, response: HttpResponse) -> Result<Vec<Item>, GatewayError> {
        check_status(&response)?;
        let posts: Vec<Post> =
            serde_json::from_str(&response.body).map_err(|e| GatewayError::Format(e.to_string()))?;
        Ok(posts.into_iter().map(Item::from).collect())
    }

    /// Only the server-assigned `id` is taken from the response; title and
    /// description are the values the caller submitted.
    pub fn parse_create(
        &self,
        response: HttpResponse,
        title: &str,
        description: &str,
    ) -> Result<Item, GatewayError> {
        check_status(&response)?;
        let created: CreatedPost =
            serde_json::from_str(&response.body).map_err(|e| GatewayError::Format(e.to_string()))?;
        Ok(Item::new(created.id, title, description))
    }

    /// The response body is ignored; the submitted item is the new state.
    pub fn parse_update(&self, response: HttpResponse, item: Item) -> Result<Item, GatewayError> {
        check_status(&response)?;
        Ok(item)
    }

    pub fn parse_delete(&self, response: HttpResponse) -> Result<(), GatewayError> {
        check_status(&response)
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), JSON_CONTENT_TYPE.to_string())]
}

fn encode(payload: &PostPayload) -> Result<String, GatewayError> {
    serde_json::to_string(payload).map_err(|e| GatewayError::Serialization(e.to_string()))
}

/// Map any non-2xx status to `GatewayError::Transport`.
fn check_status(response: &HttpResponse) -> Result<(), GatewayError> {
    if response.is_success() {
        return Ok(());
    }
    Err(GatewayError::Transport {
        status: response.status,
        body: response.body.clone(),
    })
}
