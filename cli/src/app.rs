//! Dispatch of parsed commands onto the item store.
//!
//! The sort selection is local UI state; it never reaches the store. Every
//! write goes through one of the store's four operations.

use items_core::{sorted, Item, ItemGateway, ItemStore, Outcome, SortOrder};
use tokio::sync::watch;

use crate::command::{Command, HELP};
use crate::view;

/// What the caller should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    /// Re-render the list.
    Render,
    /// Print a message; the list did not change.
    Notice(String),
    /// Print a warning, then re-render the changed list.
    Warn(String),
    Quit,
}

pub struct App<G> {
    store: ItemStore<G>,
    sort: SortOrder,
}

impl<G: ItemGateway> App<G> {
    pub fn new(gateway: G, sort: SortOrder) -> Self {
        Self {
            store: ItemStore::new(gateway),
            sort,
        }
    }

    pub fn store(&self) -> &ItemStore<G> {
        &self.store
    }

    pub fn subscribe_busy(&self) -> watch::Receiver<bool> {
        self.store.subscribe_busy()
    }

    /// Initial load.
    pub async fn start(&mut self) {
        let _ = self.store.initialize().await;
    }

    pub async fn handle(&mut self, command: Command) -> Flow {
        match command {
            Command::List => Flow::Render,
            Command::Sort(order) => {
                self.sort = order;
                Flow::Render
            }
            Command::Add { title, description } => {
                match self.store.create(&title, &description).await {
                    Outcome::Skipped => {
                        Flow::Notice("Title and description are required.".to_string())
                    }
                    Outcome::Replaced(id) => Flow::Warn(format!(
                        "The service reused id {id}; the earlier item with that id was replaced."
                    )),
                    Outcome::Applied | Outcome::Failed => Flow::Render,
                }
            }
            Command::Edit { id, title, description } => {
                if self.store.get(id).is_none() {
                    return Flow::Notice(format!("No item with id {id}."));
                }
                if title.trim().is_empty() || description.trim().is_empty() {
                    return Flow::Notice("Title and description are required.".to_string());
                }
                let _ = self.store.update(Item::new(id, title, description)).await;
                Flow::Render
            }
            Command::Delete(id) => {
                if self.store.get(id).is_none() {
                    return Flow::Notice(format!("No item with id {id}."));
                }
                let _ = self.store.remove(id).await;
                Flow::Render
            }
            Command::Reload => {
                let _ = self.store.initialize().await;
                Flow::Render
            }
            Command::Help => Flow::Notice(HELP.to_string()),
            Command::Quit => Flow::Quit,
        }
    }

    pub fn render(&self) -> String {
        view::render(
            &sorted(self.store.items(), self.sort),
            self.sort,
            self.store.is_busy(),
            self.store.last_error(),
        )
    }
}
