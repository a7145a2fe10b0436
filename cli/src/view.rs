//! Plain-text rendering of the store state.

use std::fmt::Write;

use items_core::{Item, SortOrder};

pub const EMPTY: &str = "No items available.";
pub const LOADING: &str = "Loading...";

/// Render the item list with its header, error and busy lines.
pub fn render(items: &[&Item], order: SortOrder, busy: bool, last_error: Option<&str>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Items ({}, sort: {order})", items.len());

    if let Some(error) = last_error {
        let _ = writeln!(out, "Error: {error}");
    }
    if busy {
        let _ = writeln!(out, "{LOADING}");
    }

    if items.is_empty() {
        let _ = writeln!(out, "{EMPTY}");
    }
    for item in items {
        let _ = writeln!(out, "[{}] {}", item.id, item.title);
        for line in item.description.lines() {
            let _ = writeln!(out, "    {line}");
        }
    }

    out.truncate(out.trim_end().len());
    out
}
