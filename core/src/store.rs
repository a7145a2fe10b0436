//! In-memory item collection with a shared busy flag and last error.
//!
//! # Design
//! Every mutation calls the gateway first and touches `items` only after the
//! gateway confirms it, so a failed remote write never leaves the collection
//! half-changed. Gateway errors stop here: they are logged and collapsed into
//! one of four fixed messages in `last_error`.
//!
//! Operations take `&mut self`, so at most one is in flight per store. The
//! busy flag is advisory; it is published on a `watch` channel so a renderer
//! can show progress while an operation is pending, and it is lowered by a
//! drop guard on every exit path, panics and dropped futures included.

use tokio::sync::watch;
use tracing::{debug, warn};

use crate::gateway::ItemGateway;
use crate::types::{Item, ItemId};

pub const LOAD_FAILED: &str = "Failed to load items";
pub const ADD_FAILED: &str = "Failed to add item";
pub const UPDATE_FAILED: &str = "Failed to update item";
pub const DELETE_FAILED: &str = "Failed to delete item";

/// What a store operation did to the collection.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The gateway confirmed the operation and the collection reflects it.
    Applied,
    /// A create succeeded, but the service handed back an id we already held.
    /// The older entry with that id was dropped so ids stay unique.
    Replaced(ItemId),
    /// Nothing to do: blank create input, or an update for an id we do not hold.
    Skipped,
    /// The gateway reported an error; `last_error` is set.
    Failed,
}

/// Raises the busy flag for its lifetime.
struct BusyGuard<'a>(&'a watch::Sender<bool>);

impl<'a> BusyGuard<'a> {
    fn raise(flag: &'a watch::Sender<bool>) -> Self {
        flag.send_replace(true);
        Self(flag)
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.send_replace(false);
    }
}

pub struct ItemStore<G> {
    gateway: G,
    items: Vec<Item>,
    busy: watch::Sender<bool>,
    last_error: Option<String>,
}

impl<G: ItemGateway> ItemStore<G> {
    /// An empty store. Call [`initialize`](Self::initialize) to load it.
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            items: Vec::new(),
            busy: watch::Sender::new(false),
            last_error: None,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn is_busy(&self) -> bool {
        *self.busy.borrow()
    }

    /// A receiver that observes every change of the busy flag.
    pub fn subscribe_busy(&self) -> watch::Receiver<bool> {
        self.busy.subscribe()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Load the collection from the service, replacing whatever is held.
    ///
    /// On failure the collection is left as it was.
    pub async fn initialize(&mut self) -> Outcome {
        let _busy = BusyGuard::raise(&self.busy);
        match self.gateway.list().await {
            Ok(items) => {
                self.items = dedup_by_id(items);
                self.last_error = None;
                debug!(count = self.items.len(), "items loaded");
                Outcome::Applied
            }
            Err(err) => {
                warn!(error = %err, "loading items failed");
                self.last_error = Some(LOAD_FAILED.to_string());
                Outcome::Failed
            }
        }
    }

    /// Create an item remotely and prepend it locally.
    ///
    /// Blank (whitespace-only) input is skipped without calling the service.
    pub async fn create(&mut self, title: &str, description: &str) -> Outcome {
        if title.trim().is_empty() || description.trim().is_empty() {
            debug!("create skipped: blank input");
            return Outcome::Skipped;
        }

        let _busy = BusyGuard::raise(&self.busy);
        match self.gateway.create(title, description).await {
            Ok(item) => {
                let id = item.id;
                // Some services hand out the same id for every create.
                let reused = self.items.iter().any(|existing| existing.id == id);
                if reused {
                    warn!(id, "service reused an existing id; replacing entry");
                    self.items.retain(|existing| existing.id != id);
                }
                debug!(id, "item added");
                self.items.insert(0, item);
                if reused {
                    Outcome::Replaced(id)
                } else {
                    Outcome::Applied
                }
            }
            Err(err) => {
                warn!(error = %err, "adding item failed");
                self.last_error = Some(ADD_FAILED.to_string());
                Outcome::Failed
            }
        }
    }

    /// Push `item` to the service, then replace the entry with the same id.
    pub async fn update(&mut self, item: Item) -> Outcome {
        let _busy = BusyGuard::raise(&self.busy);
        match self.gateway.update(item).await {
            Ok(item) => match self.items.iter_mut().find(|existing| existing.id == item.id) {
                Some(existing) => {
                    debug!(id = item.id, "item updated");
                    *existing = item;
                    Outcome::Applied
                }
                None => Outcome::Skipped,
            },
            Err(err) => {
                warn!(error = %err, "updating item failed");
                self.last_error = Some(UPDATE_FAILED.to_string());
                Outcome::Failed
            }
        }
    }

    /// Delete remotely, then drop the local entry.
    pub async fn remove(&mut self, id: ItemId) -> Outcome {
        let _busy = BusyGuard::raise(&self.busy);
        match self.gateway.remove(id).await {
            Ok(()) => {
                self.items.retain(|item| item.id != id);
                debug!(id, "item deleted");
                Outcome::Applied
            }
            Err(err) => {
                warn!(error = %err, id, "deleting item failed");
                self.last_error = Some(DELETE_FAILED.to_string());
                Outcome::Failed
            }
        }
    }
}

/// Keep the first occurrence of each id.
fn dedup_by_id(items: Vec<Item>) -> Vec<Item> {
    let mut seen = std::collections::HashSet::new();
    items.into_iter().filter(|item| seen.insert(item.id)).collect()
}
