//! Title ordering for display.

use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

use crate::types::Item;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Insertion order.
    #[default]
    None,
    Ascending,
    Descending,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" => Ok(SortOrder::None),
            "asc" | "ascending" => Ok(SortOrder::Ascending),
            "desc" | "descending" => Ok(SortOrder::Descending),
            _ => Err(format!("unknown sort order: {s}")),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::None => write!(f, "none"),
            SortOrder::Ascending => write!(f, "asc"),
            SortOrder::Descending => write!(f, "desc"),
        }
    }
}

/// Sort key for a title: case-folded first, so "apple" sorts before "Banana";
/// case variants of the same word fall back to the exact text.
fn title_key(title: &str) -> (String, &str) {
    (title.to_lowercase(), title)
}

/// A sorted view over `items`. The input is left untouched and equal titles
/// keep their relative order.
pub fn sorted(items: &[Item], order: SortOrder) -> Vec<&Item> {
    let mut view: Vec<&Item> = items.iter().collect();
    match order {
        SortOrder::None => {}
        SortOrder::Ascending => view.sort_by_cached_key(|&item| title_key(&item.title)),
        SortOrder::Descending => view.sort_by_cached_key(|&item| Reverse(title_key(&item.title))),
    }
    view
}
