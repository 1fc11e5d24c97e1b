//! Pagination utilities for service layer
//!
//! Validates page/page size against configured limits and derives the
//! row window and page count.

use crate::errors::{ServiceError, ValidationKind};

pub const DEFAULT_PAGE_SIZE: u64 = 20;
pub const MAX_PAGE_SIZE: u64 = 100;

/// Server-side bounds for page sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageLimits {
    pub default_page_size: u64,
    pub max_page_size: u64,
}

impl Default for PageLimits {
    fn default() -> Self { Self { default_page_size: DEFAULT_PAGE_SIZE, max_page_size: MAX_PAGE_SIZE } }
}

/// Validated pagination parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page index
    pub page: u64,
    /// items per page, within `1..=max_page_size`
    pub page_size: u64,
}

impl Pagination {
    /// Apply defaults for absent values, then reject out-of-range ones.
    /// Nothing is clamped: a zero or oversized page size is an error.
    pub fn new(page: Option<u64>, page_size: Option<u64>, limits: PageLimits) -> Result<Self, ServiceError> {
        let page = page.unwrap_or(1);
        if page < 1 {
            return Err(ServiceError::validation(ValidationKind::InvalidPage, "page must be >= 1"));
        }
        let page_size = page_size.unwrap_or(limits.default_page_size);
        if page_size < 1 || page_size > limits.max_page_size {
            return Err(ServiceError::validation(
                ValidationKind::InvalidPageSize,
                format!("pageSize must be between 1 and {}", limits.max_page_size),
            ));
        }
        Ok(Self { page, page_size })
    }

    /// Zero-based row offset of the first item on this page.
    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.page_size)
    }

    /// `ceil(total / page_size)`, and 0 for an empty result.
    pub fn total_pages(&self, total: u64) -> u64 {
        if total == 0 { 0 } else { total.div_ceil(self.page_size) }
    }
}

/// Parse a transport-supplied integer. Absent or blank means "use the default".
pub fn parse_param(raw: Option<&str>, kind: ValidationKind, name: &str) -> Result<Option<u64>, ServiceError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s
            .parse::<u64>()
            .map(Some)
            .map_err(|_| ServiceError::validation(kind, format!("{name} must be a positive integer, got '{s}'"))),
    }
}
