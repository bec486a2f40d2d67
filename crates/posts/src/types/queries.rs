//! Query parameter types for listing endpoints.

use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::pagination::PageRequest;

/// Page selection for any paginated listing.
///
/// The value is kept as a raw string so that `?page=abc` reaches the
/// paginator and falls back to the first page instead of failing extraction.
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
pub struct PageQuery {
    /// 1-based page number.
    #[serde(default)]
    pub page: Option<String>,
}

impl PageQuery {
    pub fn raw_page(&self) -> Option<&str> {
        self.page.as_deref()
    }

    pub fn request(&self) -> PageRequest {
        PageRequest::parse(self.raw_page())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_page_deserializes_to_none() {
        let query: PageQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.raw_page(), None);
        assert_eq!(query.request(), PageRequest::First);
    }

    #[test]
    fn test_page_value_kept_raw() {
        let query: PageQuery = serde_json::from_str(r#"{"page": "2"}"#).unwrap();
        assert_eq!(query.raw_page(), Some("2"));
        assert_eq!(query.request(), PageRequest::Number(2));
    }
}
