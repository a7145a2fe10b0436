//! Terminal front end for the item manager.
//!
//! Loads the items once at startup, then reads one command per line from
//! stdin and re-renders the list after each change.

pub mod app;
pub mod command;
pub mod config;
pub mod view;

pub use app::{App, Flow};
pub use config::Config;
