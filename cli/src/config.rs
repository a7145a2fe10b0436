//! Startup configuration.
//!
//! Environment variables (a `.env` file is loaded first if present):
//!
//! | Variable        | Default                                 | Description              |
//! |-----------------|-----------------------------------------|--------------------------|
//! | `ITEMS_API_URL` | `https://jsonplaceholder.typicode.com`  | Base URL of the service  |
//! | `ITEMS_SORT`    | `none`                                  | Initial sort: none/asc/desc |
//!
//! Command-line flags override both.

use items_core::SortOrder;
use thiserror::Error;

pub const DEFAULT_API_URL: &str = "https://jsonplaceholder.typicode.com";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("ITEMS_SORT: {0}")]
    InvalidSort(String),

    #[error("ITEMS_API_URL must not be empty")]
    EmptyBaseUrl,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub sort: SortOrder,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url = lookup("ITEMS_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        if base_url.trim().is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }

        let sort = match lookup("ITEMS_SORT") {
            Some(raw) => raw.parse::<SortOrder>().map_err(ConfigError::InvalidSort)?,
            None => SortOrder::None,
        };

        Ok(Self { base_url, sort })
    }

    pub fn with_overrides(mut self, base_url: Option<String>, sort: Option<SortOrder>) -> Self {
        if let Some(base_url) = base_url {
            self.base_url = base_url;
        }
        if let Some(sort) = sort {
            self.sort = sort;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_env() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.base_url, DEFAULT_API_URL);
        assert_eq!(config.sort, SortOrder::None);
    }

    #[test]
    fn reads_env_values() {
        let config = Config::from_lookup(lookup(&[
            ("ITEMS_API_URL", "http://127.0.0.1:3000"),
            ("ITEMS_SORT", "desc"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:3000");
        assert_eq!(config.sort, SortOrder::Descending);
    }

    #[test]
    fn invalid_sort_is_an_error() {
        let err = Config::from_lookup(lookup(&[("ITEMS_SORT", "random")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSort(_)));
    }

    #[test]
    fn empty_url_is_an_error() {
        let err = Config::from_lookup(lookup(&[("ITEMS_API_URL", " ")])).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyBaseUrl));
    }

    #[test]
    fn flags_override_env() {
        let config = Config::from_lookup(lookup(&[("ITEMS_SORT", "desc")]))
            .unwrap()
            .with_overrides(Some("http://localhost:9000".to_string()), Some(SortOrder::Ascending));
        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.sort, SortOrder::Ascending);
    }
}
