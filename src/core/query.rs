//! Page state, pagination metadata and listing query parameters

use crate::core::{FilterCriteria, SortKey};
use serde::{Deserialize, Serialize};

/// What happens to the current page when the filter changes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PagePolicy {
    /// Every filter change goes back to page 1
    #[default]
    ResetToFirst,
    /// Keep the current page, clamped to the new page count at render time
    Preserve,
}

/// Current page and fixed page size of one presenter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    current_page: usize,
    page_size: usize,
}

impl PageState {
    /// Start on page 1; a zero page size is bumped to 1
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Move to a page (pages start at 1)
    pub fn go_to(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Pull the current page back inside `1..=total_pages`
    pub fn clamp_to(&mut self, total_pages: usize) {
        self.current_page = self.current_page.min(total_pages.max(1));
    }

    /// `ceil(total / page_size)`, 0 for an empty set
    pub fn total_pages(&self, total: usize) -> usize {
        total.div_ceil(self.page_size)
    }

    /// Half-open index range of `page`, clipped to `total`
    ///
    /// Pages past the end give an empty range, never a panic.
    pub fn bounds(&self, page: usize, total: usize) -> (usize, usize) {
        let start = (page.max(1) - 1).saturating_mul(self.page_size);
        let end = start.saturating_add(self.page_size);
        (start.min(total), end.min(total))
    }
}

/// Paginated response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    /// The records on the requested page
    pub data: Vec<T>,

    /// Pagination metadata
    pub pagination: PaginationMeta,
}

/// Pagination metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    /// Current page number (starts at 1)
    pub page: usize,

    /// Number of items per page
    pub limit: usize,

    /// Total number of items (after filters)
    pub total: usize,

    /// Total number of pages
    pub total_pages: usize,

    /// Whether there is a next page
    pub has_next: bool,

    /// Whether there is a previous page
    pub has_prev: bool,
}

impl PaginationMeta {
    pub fn new(page: usize, limit: usize, total: usize) -> Self {
        let page = page.max(1);
        let limit = limit.max(1);
        let total_pages = total.div_ceil(limit);

        Self {
            page,
            limit,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }
}

/// Listing query parameters
///
/// Mirrors the search controls of the listing pages:
///
/// ```text
/// GET /cars?category=SUV&brand=All+Brands&sort=price&page=2
/// GET /hotels?name=inn&sort=rating
/// ```
///
/// Every field is optional; `page` falls back to 1 when missing or not a
/// positive number.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ListQuery {
    /// Page number as sent by the client
    pub page: Option<String>,

    /// Name substring (hotels)
    pub name: Option<String>,

    /// Model substring (cars)
    pub model: Option<String>,

    pub category: Option<String>,

    pub brand: Option<String>,

    /// Sort dropdown value: `price`, `rating`, `name`/`model`
    pub sort: Option<String>,
}

impl ListQuery {
    /// Requested page, at least 1
    pub fn page(&self) -> usize {
        self.page
            .as_deref()
            .and_then(|p| p.trim().parse::<usize>().ok())
            .unwrap_or(1)
            .max(1)
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Build filter criteria from the present parameters
    ///
    /// Text inputs become substring predicates, dropdowns become equality
    /// predicates.
    pub fn criteria(&self) -> FilterCriteria {
        let mut criteria = FilterCriteria::new();
        if let Some(name) = &self.name {
            criteria = criteria.contains("name", name);
        }
        if let Some(model) = &self.model {
            criteria = criteria.contains("model", model);
        }
        if let Some(category) = &self.category {
            criteria = criteria.equals("category", category);
        }
        if let Some(brand) = &self.brand {
            criteria = criteria.equals("brand", brand);
        }
        criteria
    }
}
