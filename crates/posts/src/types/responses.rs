//! Response types for listing endpoints.

use serde::Serialize;
use utoipa::ToSchema;

/// Owned page object handed to views and templates.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PageResponse<T> {
    pub items: Vec<T>,
    /// Current page, 1-based
    pub number: u64,
    pub num_pages: u64,
    /// Total items across all pages
    pub count: usize,
    pub per_page: usize,
    pub has_next: bool,
    pub has_previous: bool,
    pub next_page_number: Option<u64>,
    pub previous_page_number: Option<u64>,
    pub start_index: usize,
    pub end_index: usize,
}
