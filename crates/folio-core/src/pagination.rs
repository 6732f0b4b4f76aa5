//! The pagination and decoration contract shared by every list endpoint.
//!
//! A [`CollectionSource`] is anything that can report how many items match and
//! hand back a bounded window of them: an in-memory vector
//! ([`MaterializedSource`]) or a deferred database query (implemented in the
//! repository crate). [`Paginator`] turns a source plus a [`PageRequest`] into
//! a [`PaginatedResult`], optionally pushing every item of the window through
//! a decorator before wrapping it.
//!
//! The paginator holds no state and imposes no ordering of its own; ordering,
//! filtering and authorization are the caller's business.

use crate::FolioResult;
use async_trait::async_trait;
use serde::Serialize;

/// Default page number used when a request omits or under-specifies it.
pub const DEFAULT_PAGE: u64 = 1;
/// Default page size used uniformly by every list endpoint.
pub const DEFAULT_LIMIT: u64 = 20;

/// A request for a page of results.
///
/// `page` is 1-based. Out-of-range inputs are clamped, never rejected:
/// a page below 1 becomes page 1, a limit below 1 becomes [`DEFAULT_LIMIT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    limit: u64,
}

impl PageRequest {
    /// Creates a page request, clamping invalid values.
    #[must_use]
    pub fn new(page: u64, limit: u64) -> Self {
        Self {
            page: if page < 1 { DEFAULT_PAGE } else { page },
            limit: if limit < 1 { DEFAULT_LIMIT } else { limit },
        }
    }

    /// The first page with the default size.
    #[must_use]
    pub fn first() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_LIMIT)
    }

    /// The 1-based page number.
    #[must_use]
    pub const fn page(&self) -> u64 {
        self.page
    }

    /// The maximum number of items returned.
    #[must_use]
    pub const fn limit(&self) -> u64 {
        self.limit
    }

    /// The offset handed to the source windowing call.
    #[must_use]
    pub const fn offset(&self) -> u64 {
        (self.page - 1) * self.limit
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first()
    }
}

/// A bounded, countable, sliceable collection of items.
///
/// `total` and `slice` must be consistent with each other at the moment of
/// evaluation; the paginator performs a single-shot read and assumes no
/// interleaved mutation.
#[async_trait]
pub trait CollectionSource: Send + Sync {
    /// The item type produced by this source.
    type Item: Send;

    /// Counts all matching items, ignoring windowing.
    async fn total(&self) -> FolioResult<u64>;

    /// Returns the items in `[offset, offset + limit)`, in source order.
    async fn slice(&self, offset: u64, limit: u64) -> FolioResult<Vec<Self::Item>>;
}

/// A boxed source, as returned by repository list methods.
pub type DynSource<T> = Box<dyn CollectionSource<Item = T>>;

/// An already-loaded ordered sequence, sliced and counted in memory.
pub struct MaterializedSource<T> {
    items: Vec<T>,
}

impl<T> MaterializedSource<T> {
    /// Wraps a fully-loaded sequence.
    #[must_use]
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }
}

#[async_trait]
impl<T> CollectionSource for MaterializedSource<T>
where
    T: Clone + Send + Sync,
{
    type Item = T;

    async fn total(&self) -> FolioResult<u64> {
        Ok(self.items.len() as u64)
    }

    async fn slice(&self, offset: u64, limit: u64) -> FolioResult<Vec<T>> {
        Ok(self
            .items
            .iter()
            .skip(usize::try_from(offset).unwrap_or(usize::MAX))
            .take(usize::try_from(limit).unwrap_or(usize::MAX))
            .cloned()
            .collect())
    }
}

/// A page of decorated items plus navigation metadata.
///
/// Serializes to the wire envelope `{page, limit, pages, total, items}`;
/// `route` is an opaque hypermedia hint, omitted when absent.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PaginatedResult<T> {
    /// The current 1-based page number.
    pub page: u64,
    /// The page size the window was computed with.
    pub limit: u64,
    /// Total number of pages (`0` when the source is empty).
    pub pages: u64,
    /// Total number of matching items across all pages.
    pub total: u64,
    /// The decorated window, in source order.
    pub items: Vec<T>,
    /// Opaque route hint for hypermedia link building.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
}

impl<T> PaginatedResult<T> {
    /// Attaches a route hint for downstream link building.
    #[must_use]
    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = Some(route.into());
        self
    }

    /// Maps the window to a different item type, keeping the metadata.
    #[must_use]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> PaginatedResult<U> {
        PaginatedResult {
            page: self.page,
            limit: self.limit,
            pages: self.pages,
            total: self.total,
            items: self.items.into_iter().map(f).collect(),
            route: self.route,
        }
    }

    /// Returns true if the window holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of items in the window.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// Stateless pagination entry point.
///
/// Safe to call from any number of concurrent requests; failures from the
/// source or the decorator propagate unchanged, and a failed decoration
/// aborts the whole page (no partial results).
pub struct Paginator;

impl Paginator {
    /// Paginates a source without decoration.
    pub async fn paginate<S>(source: &S, request: PageRequest) -> FolioResult<PaginatedResult<S::Item>>
    where
        S: CollectionSource + ?Sized,
    {
        Self::paginate_with(source, request, Ok).await
    }

    /// Paginates a source, passing every item of the window through
    /// `decorator` in order.
    pub async fn paginate_with<S, U, F>(
        source: &S,
        request: PageRequest,
        mut decorator: F,
    ) -> FolioResult<PaginatedResult<U>>
    where
        S: CollectionSource + ?Sized,
        F: FnMut(S::Item) -> FolioResult<U> + Send,
    {
        let total = source.total().await?;
        let raw = source.slice(request.offset(), request.limit()).await?;

        let mut items = Vec::with_capacity(raw.len());
        for item in raw {
            items.push(decorator(item)?);
        }

        let pages = total.div_ceil(request.limit());

        Ok(PaginatedResult {
            page: request.page(),
            limit: request.limit(),
            pages,
            total,
            items,
            route: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FolioError;

    fn numbers(n: u64) -> MaterializedSource<u64> {
        MaterializedSource::new((1..=n).collect())
    }

    /// Source that fails on every call, standing in for a broken backend.
    struct FailingSource;

    #[async_trait]
    impl CollectionSource for FailingSource {
        type Item = u64;

        async fn total(&self) -> FolioResult<u64> {
            Err(FolioError::Database("count failed".to_string()))
        }

        async fn slice(&self, _offset: u64, _limit: u64) -> FolioResult<Vec<u64>> {
            Err(FolioError::Database("slice failed".to_string()))
        }
    }

    #[test]
    fn test_page_request_clamps_page() {
        assert_eq!(PageRequest::new(0, 10), PageRequest::new(1, 10));
        assert_eq!(PageRequest::new(3, 10).page(), 3);
    }

    #[test]
    fn test_page_request_clamps_limit() {
        assert_eq!(PageRequest::new(2, 0).limit(), DEFAULT_LIMIT);
        assert_eq!(PageRequest::new(2, 50).limit(), 50);
    }

    #[test]
    fn test_page_request_offset() {
        assert_eq!(PageRequest::new(1, 20).offset(), 0);
        assert_eq!(PageRequest::new(3, 20).offset(), 40);
        assert_eq!(PageRequest::new(5, 15).offset(), 60);
    }

    #[tokio::test]
    async fn test_first_page_of_45_items() {
        let source = numbers(45);
        let result = Paginator::paginate(&source, PageRequest::new(1, 20)).await.unwrap();
        assert_eq!(result.items.len(), 20);
        assert_eq!(result.total, 45);
        assert_eq!(result.pages, 3);
        assert_eq!(result.page, 1);
        assert_eq!(result.items[0], 1);
    }

    #[tokio::test]
    async fn test_last_page_is_partial() {
        let source = numbers(45);
        let result = Paginator::paginate(&source, PageRequest::new(3, 20)).await.unwrap();
        assert_eq!(result.items, (41..=45).collect::<Vec<_>>());
        assert_eq!(result.pages, 3);
    }

    #[tokio::test]
    async fn test_page_beyond_range_is_empty_not_an_error() {
        let source = numbers(45);
        let result = Paginator::paginate(&source, PageRequest::new(4, 20)).await.unwrap();
        assert!(result.is_empty());
        assert_eq!(result.total, 45);
        assert_eq!(result.pages, 3);
    }

    #[tokio::test]
    async fn test_empty_source() {
        let source = numbers(0);
        let result = Paginator::paginate(&source, PageRequest::new(7, 10)).await.unwrap();
        assert!(result.is_empty());
        assert_eq!(result.total, 0);
        assert_eq!(result.pages, 0);
    }

    #[tokio::test]
    async fn test_pages_is_ceiling_of_total_over_limit() {
        for (n, limit, expected) in [(0, 5, 0), (1, 5, 1), (5, 5, 1), (6, 5, 2), (11, 5, 3)] {
            let result = Paginator::paginate(&numbers(n), PageRequest::new(1, limit)).await.unwrap();
            assert_eq!(result.pages, expected, "n={} limit={}", n, limit);
        }
    }

    #[tokio::test]
    async fn test_concatenated_pages_reproduce_the_source() {
        let source = numbers(23);
        let mut seen = Vec::new();
        for page in 1..=5 {
            let result = Paginator::paginate(&source, PageRequest::new(page, 5)).await.unwrap();
            seen.extend(result.items);
        }
        assert_eq!(seen, (1..=23).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn test_clamped_request_equals_valid_request() {
        let source = numbers(8);
        let clamped = Paginator::paginate(&source, PageRequest::new(0, 0)).await.unwrap();
        let valid = Paginator::paginate(&source, PageRequest::new(1, 20)).await.unwrap();
        assert_eq!(clamped.items, valid.items);
        assert_eq!(clamped.pages, valid.pages);
    }

    #[tokio::test]
    async fn test_idempotent_over_stable_source() {
        let source = numbers(12);
        let a = Paginator::paginate(&source, PageRequest::new(2, 5)).await.unwrap();
        let b = Paginator::paginate(&source, PageRequest::new(2, 5)).await.unwrap();
        assert_eq!(a.items, b.items);
        assert_eq!(a.total, b.total);
    }

    #[tokio::test]
    async fn test_decorator_preserves_order() {
        let source = MaterializedSource::new(vec!["alpha", "beta", "gamma"]);
        let result = Paginator::paginate_with(&source, PageRequest::new(1, 20), |s| {
            Ok(s.to_uppercase())
        })
        .await
        .unwrap();
        assert_eq!(result.items, vec!["ALPHA", "BETA", "GAMMA"]);
        assert_eq!(result.total, 3);
        assert_eq!(result.pages, 1);
    }

    #[tokio::test]
    async fn test_decorator_failure_aborts_the_page() {
        let source = numbers(5);
        let result = Paginator::paginate_with(&source, PageRequest::new(1, 20), |n| {
            if n == 3 {
                Err(FolioError::internal("decoration failed"))
            } else {
                Ok(n * 10)
            }
        })
        .await;
        assert!(matches!(result, Err(FolioError::Internal(_))));
    }

    #[tokio::test]
    async fn test_source_failure_propagates_unchanged() {
        let result = Paginator::paginate(&FailingSource, PageRequest::first()).await;
        match result {
            Err(FolioError::Database(msg)) => assert_eq!(msg, "count failed"),
            other => panic!("expected database error, got {:?}", other.map(|r| r.total)),
        }
    }

    #[tokio::test]
    async fn test_boxed_source_paginates() {
        let source: DynSource<u64> = Box::new(numbers(3));
        let result = Paginator::paginate(source.as_ref(), PageRequest::first()).await.unwrap();
        assert_eq!(result.items, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_route_hint_is_passthrough() {
        let source = numbers(1);
        let result = Paginator::paginate(&source, PageRequest::first())
            .await
            .unwrap()
            .with_route("get_nodes");
        assert_eq!(result.route.as_deref(), Some("get_nodes"));
    }

    #[test]
    fn test_result_map_keeps_metadata() {
        let result = PaginatedResult {
            page: 2,
            limit: 5,
            pages: 4,
            total: 18,
            items: vec![1, 2, 3],
            route: None,
        };
        let mapped = result.map(|n| n * 2);
        assert_eq!(mapped.items, vec![2, 4, 6]);
        assert_eq!(mapped.pages, 4);
        assert_eq!(mapped.total, 18);
    }
}
