//! Page service trait definition.

use crate::dto::{ApiPage, UpdatePageRequest};
use async_trait::async_trait;
use folio_core::{FolioResult, PageRequest, PageTranslationId, PaginatedResult};
use folio_repository::PageFilter;

/// Page service trait.
///
/// Owns the page aggregate flow: filtered listing with the page decorator,
/// single lookups and the admin update path.
#[async_trait]
pub trait PageService: Send + Sync {
    /// Lists pages matching the filter, decorated into [`ApiPage`] aggregates.
    async fn list_pages(
        &self,
        filter: PageFilter,
        page: PageRequest,
    ) -> FolioResult<PaginatedResult<ApiPage>>;

    /// Gets an online page by translation ID.
    async fn get_public_page(&self, id: PageTranslationId) -> FolioResult<ApiPage>;

    /// Gets a page by translation ID regardless of its online state.
    async fn get_page(&self, id: PageTranslationId) -> FolioResult<ApiPage>;

    /// Updates a page translation.
    async fn update_page(&self, id: PageTranslationId, request: UpdatePageRequest) -> FolioResult<ApiPage>;
}
