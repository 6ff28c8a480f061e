//! Pagination-related DTOs for API requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

fn default_page() -> i64 {
    1
}

fn default_limit() -> i64 {
    10
}

/// Query parameters for the private category listing.
#[derive(Debug, Deserialize, IntoParams, Validate)]
pub struct CategoryListParams {
    /// Case-insensitive substring match on the category title
    pub search: Option<String>,

    /// Page number (1-based)
    #[serde(default = "default_page")]
    #[param(minimum = 1, example = 1)]
    pub page: i64,

    /// Number of items per page (max 100)
    #[serde(default = "default_limit")]
    #[param(minimum = 1, maximum = 100, example = 10)]
    pub limit: i64,
}

/// Query parameters for the private service listing.
#[derive(Debug, Deserialize, IntoParams, Validate)]
pub struct ServiceListParams {
    /// Case-insensitive substring match on the service name
    pub search: Option<String>,

    /// Restrict to one category
    pub category: Option<i32>,

    /// Page number (1-based)
    #[serde(default = "default_page")]
    #[param(minimum = 1, example = 1)]
    pub page: i64,

    /// Number of items per page (max 100)
    #[serde(default = "default_limit")]
    #[param(minimum = 1, maximum = 100, example = 10)]
    pub limit: i64,
}

/// Effective page/limit after clamping out-of-range requests.
///
/// Any requested page below 1 becomes 1; any limit outside [1, 100] is
/// pulled back into that range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: i64,
    pub limit: i64,
}

impl PageWindow {
    /// Clamps raw query values into the supported window.
    pub fn clamp(page: i64, limit: i64) -> Self {
        Self {
            page: page.max(1),
            limit: limit.clamp(1, 100),
        }
    }

    /// Calculates the offset for database queries.
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.limit
    }
}

impl CategoryListParams {
    pub fn window(&self) -> PageWindow {
        PageWindow::clamp(self.page, self.limit)
    }
}

impl ServiceListParams {
    pub fn window(&self) -> PageWindow {
        PageWindow::clamp(self.page, self.limit)
    }
}

/// Generic paged response wrapper.
#[derive(Debug, Serialize, ToSchema)]
pub struct PagedResponse<T> {
    /// The data items for this page
    pub data: Vec<T>,

    /// Pagination metadata
    pub meta: PaginationMeta,
}

/// Pagination metadata.
#[derive(Debug, Serialize, ToSchema)]
pub struct PaginationMeta {
    /// Current page number (1-based)
    #[schema(example = 1)]
    pub page: i64,

    /// Number of items per page
    #[schema(example = 10)]
    pub limit: i64,

    /// Total number of items across all pages
    #[schema(example = 42)]
    pub total: i64,

    /// Total number of pages
    #[schema(example = 5)]
    pub total_pages: i64,
}

impl<T> PagedResponse<T> {
    /// Creates a new paged response from the effective window and total count.
    pub fn new(data: Vec<T>, window: PageWindow, total: i64) -> Self {
        let total_pages = (total + window.limit - 1) / window.limit;
        Self {
            data,
            meta: PaginationMeta {
                page: window.page,
                limit: window.limit,
                total,
                total_pages,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_clamps_page_below_one() {
        let window = PageWindow::clamp(0, 10);
        assert_eq!(window.page, 1);
        let window = PageWindow::clamp(-3, 10);
        assert_eq!(window.page, 1);
    }

    #[test]
    fn test_window_clamps_limit_into_range() {
        assert_eq!(PageWindow::clamp(1, 0).limit, 1);
        assert_eq!(PageWindow::clamp(1, 500).limit, 100);
        assert_eq!(PageWindow::clamp(1, 25).limit, 25);
    }

    #[test]
    fn test_offset() {
        assert_eq!(PageWindow::clamp(1, 10).offset(), 0);
        assert_eq!(PageWindow::clamp(3, 10).offset(), 20);
    }

    #[test]
    fn test_total_pages_is_ceiling() {
        let paged = PagedResponse::new(vec![1, 2, 3], PageWindow::clamp(1, 10), 21);
        assert_eq!(paged.meta.total_pages, 3);

        let paged = PagedResponse::new(vec![1], PageWindow::clamp(1, 10), 10);
        assert_eq!(paged.meta.total_pages, 1);

        let paged: PagedResponse<i32> = PagedResponse::new(vec![], PageWindow::clamp(1, 10), 0);
        assert_eq!(paged.meta.total_pages, 0);
    }
}
