//! Page slicing for post listings.
//!
//! Every listing view (index, group page, author profile) hands its ordered
//! posts and the raw `page` query parameter to [`paginate`]. A missing or
//! unparseable page number falls back to the first page; a page past the end
//! is reported as [`PaginationError::OutOfRange`], which the web layer turns
//! into a 404.

use std::num::NonZeroUsize;
use std::ops::RangeInclusive;

use serde::Serialize;
use thiserror::Error;
use tracing::debug;
use utoipa::ToSchema;

use crate::types::PageResponse;

/// Pages shown on each side of the current page in an elided page bar.
pub const DEFAULT_ON_EACH_SIDE: u64 = 3;

/// Pages shown at each end of an elided page bar.
pub const DEFAULT_ON_ENDS: u64 = 2;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationError {
    #[error("Page number is less than 1")]
    BelowFirst,

    #[error("Page {requested} is out of range, last page is {num_pages}")]
    OutOfRange { requested: u64, num_pages: u64 },
}

/// A page number as requested by the client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PageRequest {
    /// No usable number was supplied.
    #[default]
    First,
    Number(u64),
}

impl PageRequest {
    /// Parses the raw `page` query value.
    ///
    /// Missing, blank, non-numeric and non-positive values all mean the first
    /// page. A digit string too large for `u64` saturates to `u64::MAX`.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return Self::First;
        };

        match raw.parse::<i64>() {
            Ok(n) if n >= 1 => Self::Number(n.unsigned_abs()),
            Ok(_) => Self::First,
            Err(_) => {
                let unsigned = raw.strip_prefix('+').unwrap_or(raw);
                if !unsigned.is_empty() && unsigned.bytes().all(|b| b.is_ascii_digit()) {
                    Self::Number(u64::MAX)
                } else {
                    debug!(page = raw, "Unparseable page number, using first page");
                    Self::First
                }
            }
        }
    }

    pub fn number(self) -> u64 {
        match self {
            Self::First => 1,
            Self::Number(n) => n,
        }
    }
}

/// One entry of an elided page bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PageLink {
    Number(u64),
    Ellipsis,
}

/// Splits an ordered slice into pages of a fixed size.
#[derive(Debug)]
pub struct Paginator<'a, T> {
    items: &'a [T],
    per_page: NonZeroUsize,
}

impl<T> Clone for Paginator<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Paginator<'_, T> {}

impl<'a, T> Paginator<'a, T> {
    pub fn new(items: &'a [T], per_page: NonZeroUsize) -> Self {
        Self { items, per_page }
    }

    /// Total number of items across all pages.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn per_page(&self) -> usize {
        self.per_page.get()
    }

    /// Number of pages. An empty list still has one (empty) page.
    pub fn num_pages(&self) -> u64 {
        let pages = self.count().div_ceil(self.per_page());
        pages.max(1) as u64
    }

    /// 1-based range of valid page numbers.
    pub fn page_range(&self) -> RangeInclusive<u64> {
        1..=self.num_pages()
    }

    /// Resolves a request to a page number that exists.
    pub fn validate_number(&self, request: PageRequest) -> Result<u64, PaginationError> {
        let number = request.number();
        if number < 1 {
            return Err(PaginationError::BelowFirst);
        }
        let num_pages = self.num_pages();
        if number > num_pages {
            return Err(PaginationError::OutOfRange {
                requested: number,
                num_pages,
            });
        }
        Ok(number)
    }

    /// Strict lookup of a page by number.
    pub fn page(&self, number: u64) -> Result<Page<'a, T>, PaginationError> {
        let number = self.validate_number(PageRequest::Number(number))?;

        // number <= num_pages, so the offset fits in usize
        let start = (number as usize - 1) * self.per_page();
        let end = start.saturating_add(self.per_page()).min(self.count());

        Ok(Page {
            items: &self.items[start..end],
            number,
            paginator: *self,
        })
    }

    /// Lenient lookup from the raw `page` query value.
    pub fn get_page(&self, raw: Option<&str>) -> Result<Page<'a, T>, PaginationError> {
        let number = self
            .validate_number(PageRequest::parse(raw))
            .inspect_err(|e| debug!(error = %e, "Rejected page request"))?;
        self.page(number)
    }

    /// Page numbers for a page bar around `number`, with gaps collapsed to
    /// [`PageLink::Ellipsis`]. Short ranges are returned in full.
    pub fn elided_page_range(
        &self,
        number: u64,
        on_each_side: u64,
        on_ends: u64,
    ) -> Result<Vec<PageLink>, PaginationError> {
        let number = self.validate_number(PageRequest::Number(number))?;
        Ok(self.elide(number, on_each_side, on_ends))
    }

    fn elide(&self, number: u64, on_each_side: u64, on_ends: u64) -> Vec<PageLink> {
        let num_pages = self.num_pages();
        let numbers = |range: RangeInclusive<u64>| range.map(PageLink::Number);

        let reach = on_each_side.saturating_add(on_ends);

        if num_pages <= reach.saturating_mul(2) {
            return numbers(self.page_range()).collect();
        }

        // num_pages > 2 * reach from here on, so the bounds below cannot overflow
        let mut links = Vec::new();
        if number > reach + 2 {
            links.extend(numbers(1..=on_ends));
            links.push(PageLink::Ellipsis);
            links.extend(numbers(number - on_each_side..=number));
        } else {
            links.extend(numbers(1..=number));
        }

        if number.saturating_add(reach).saturating_add(1) < num_pages {
            links.extend(numbers(number + 1..=number + on_each_side));
            links.push(PageLink::Ellipsis);
            links.extend(numbers(num_pages - on_ends + 1..=num_pages));
        } else {
            links.extend(numbers(number + 1..=num_pages));
        }
        links
    }
}

/// One page of a [`Paginator`].
#[derive(Debug)]
pub struct Page<'a, T> {
    items: &'a [T],
    number: u64,
    paginator: Paginator<'a, T>,
}

impl<T> Clone for Page<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Page<'_, T> {}

impl<T: PartialEq> PartialEq for Page<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.number == other.number
            && self.items == other.items
            && self.paginator.count() == other.paginator.count()
            && self.paginator.per_page() == other.paginator.per_page()
    }
}

impl<'a, T> Page<'a, T> {
    /// 1-based number of this page.
    pub fn number(&self) -> u64 {
        self.number
    }

    pub fn items(&self) -> &'a [T] {
        self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'a, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn num_pages(&self) -> u64 {
        self.paginator.num_pages()
    }

    pub fn count(&self) -> usize {
        self.paginator.count()
    }

    pub fn per_page(&self) -> usize {
        self.paginator.per_page()
    }

    pub fn has_next(&self) -> bool {
        self.number < self.num_pages()
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn has_other_pages(&self) -> bool {
        self.has_next() || self.has_previous()
    }

    pub fn next_page_number(&self) -> Option<u64> {
        self.has_next().then(|| self.number + 1)
    }

    pub fn previous_page_number(&self) -> Option<u64> {
        self.has_previous().then(|| self.number - 1)
    }

    /// 1-based position of the first item on this page, 0 when empty.
    pub fn start_index(&self) -> usize {
        if self.count() == 0 {
            return 0;
        }
        (self.number as usize - 1) * self.per_page() + 1
    }

    /// 1-based position of the last item on this page, 0 when empty.
    pub fn end_index(&self) -> usize {
        if self.number == self.num_pages() {
            return self.count();
        }
        self.number as usize * self.per_page()
    }

    pub fn elided_page_range(&self, on_each_side: u64, on_ends: u64) -> Vec<PageLink> {
        self.paginator.elide(self.number, on_each_side, on_ends)
    }

    /// Owned copy of the page for serialisation.
    pub fn to_response(&self) -> PageResponse<T>
    where
        T: Clone,
    {
        PageResponse {
            items: self.items.to_vec(),
            number: self.number,
            num_pages: self.num_pages(),
            count: self.count(),
            per_page: self.per_page(),
            has_next: self.has_next(),
            has_previous: self.has_previous(),
            next_page_number: self.next_page_number(),
            previous_page_number: self.previous_page_number(),
            start_index: self.start_index(),
            end_index: self.end_index(),
        }
    }
}

impl<'a, T> IntoIterator for Page<'a, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Returns the requested page of `items`.
///
/// `raw_page` is the untouched `page` query parameter.
pub fn paginate<'a, T>(
    items: &'a [T],
    per_page: NonZeroUsize,
    raw_page: Option<&str>,
) -> Result<Page<'a, T>, PaginationError> {
    Paginator::new(items, per_page).get_page(raw_page)
}
