//! Process configuration read once at startup.

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable holding the number of posts per page.
pub const PAGE_POST_VAR: &str = "PAGE_POST";

/// Posts per page when `PAGE_POST` is not set.
pub const DEFAULT_PAGE_POST: NonZeroUsize = NonZeroUsize::MIN.saturating_add(9);

fn default_page_post() -> NonZeroUsize {
    DEFAULT_PAGE_POST
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid PAGE_POST value {value:?}: expected a positive integer")]
    InvalidPageSize { value: String },
}

/// Listing settings shared by every view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Posts per page.
    #[serde(default = "default_page_post")]
    pub page_post: NonZeroUsize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            page_post: DEFAULT_PAGE_POST,
        }
    }
}

impl Settings {
    /// Reads settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let page_post = match lookup(PAGE_POST_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<NonZeroUsize>()
                .map_err(|_| ConfigError::InvalidPageSize { value: raw })?,
            None => DEFAULT_PAGE_POST,
        };

        tracing::info!(page_post = page_post.get(), "Loaded listing settings");

        Ok(Self { page_post })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_page_post_is_ten() {
        assert_eq!(DEFAULT_PAGE_POST.get(), 10);
        assert_eq!(Settings::default().page_post.get(), 10);
    }

    #[test]
    fn test_missing_variable_uses_default() {
        let settings = Settings::from_lookup(|_| None).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_page_post_from_lookup() {
        let settings = Settings::from_lookup(|key| {
            (key == PAGE_POST_VAR).then(|| " 25 ".to_string())
        })
        .unwrap();
        assert_eq!(settings.page_post.get(), 25);
    }

    #[test]
    fn test_invalid_page_post_rejected() {
        for raw in ["0", "-3", "ten", ""] {
            let result = Settings::from_lookup(|_| Some(raw.to_string()));
            assert_eq!(
                result,
                Err(ConfigError::InvalidPageSize {
                    value: raw.to_string()
                })
            );
        }
    }

    #[test]
    fn test_deserialize_fills_default() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.page_post, DEFAULT_PAGE_POST);

        let settings: Settings = serde_json::from_str(r#"{"page_post": 5}"#).unwrap();
        assert_eq!(settings.page_post.get(), 5);
    }
}
