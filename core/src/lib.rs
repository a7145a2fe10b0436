//! Item model, gateway and store for the item manager.
//!
//! # Overview
//! The remote service speaks `{id, title, body}` posts over JSON. This crate
//! maps them to `Item`s, talks to the service, and keeps the session's item
//! collection in an `ItemStore`.
//!
//! # Design
//! - `ItemClient` is sans-IO: `build_*` produces an `HttpRequest`, `parse_*`
//!   consumes an `HttpResponse`. It holds only `base_url`.
//! - `HttpGateway` joins `ItemClient` to a `Transport` (reqwest in
//!   production) behind the async `ItemGateway` trait.
//! - `ItemStore` is generic over `ItemGateway` and only changes its
//!   collection after the gateway confirms a write.
//! - `sort::sorted` derives display order without touching the store.

pub mod client;
pub mod error;
pub mod gateway;
pub mod http;
pub mod sort;
pub mod store;
pub mod types;

pub use client::ItemClient;
pub use error::GatewayError;
pub use gateway::{HttpGateway, ItemGateway};
pub use http::{HttpMethod, HttpRequest, HttpResponse, ReqwestTransport, Transport};
pub use sort::{sorted, SortOrder};
pub use store::{ItemStore, Outcome};
pub use types::{Item, ItemId, Post, PostPayload};
