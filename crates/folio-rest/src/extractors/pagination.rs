//! Pagination extractor.
//!
//! Every list endpoint takes the same `page` / `limit` query parameters.
//! Missing or out-of-range values fall back to the system-wide defaults
//! (page 1, limit 20) instead of failing, so the conversion into a
//! [`PageRequest`] can never reject a request.

use folio_core::{PageRequest, DEFAULT_LIMIT, DEFAULT_PAGE};
use serde::Deserialize;
use utoipa::IntoParams;

/// Query parameters for pagination.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct PaginationQuery {
    /// The current page, 1-based.
    #[serde(default)]
    pub page: Option<u64>,
    /// Amount of results per page.
    #[serde(default)]
    pub limit: Option<u64>,
}

impl From<PaginationQuery> for PageRequest {
    fn from(query: PaginationQuery) -> Self {
        PageRequest::new(
            query.page.unwrap_or(DEFAULT_PAGE),
            query.limit.unwrap_or(DEFAULT_LIMIT),
        )
    }
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self {
            page: Some(DEFAULT_PAGE),
            limit: Some(DEFAULT_LIMIT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_parameters_use_defaults() {
        let request: PageRequest = PaginationQuery { page: None, limit: None }.into();
        assert_eq!(request.page(), 1);
        assert_eq!(request.limit(), 20);
    }

    #[test]
    fn test_zero_values_clamp_to_defaults() {
        let request: PageRequest = PaginationQuery {
            page: Some(0),
            limit: Some(0),
        }
        .into();
        assert_eq!(request.page(), 1);
        assert_eq!(request.limit(), 20);
    }

    #[test]
    fn test_explicit_values_pass_through() {
        let request: PageRequest = PaginationQuery {
            page: Some(3),
            limit: Some(50),
        }
        .into();
        assert_eq!(request.page(), 3);
        assert_eq!(request.limit(), 50);
        assert_eq!(request.offset(), 100);
    }
}
