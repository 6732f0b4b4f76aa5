//! Page service implementation.

use crate::dto::{ApiPage, UpdatePageRequest};
use crate::page_service::PageService;
use async_trait::async_trait;
use folio_core::{
    FolioError, FolioResult, PageRequest, PageTranslationId, PaginatedResult, Paginator,
    ValidateExt,
};
use folio_repository::{PageFilter, PageRepository};
use std::sync::Arc;
use tracing::{debug, info};

/// Page service implementation.
pub struct PageServiceImpl<R: PageRepository> {
    page_repository: Arc<R>,
}

impl<R: PageRepository> PageServiceImpl<R> {
    /// Creates a new page service.
    pub fn new(page_repository: Arc<R>) -> Self {
        Self { page_repository }
    }
}

#[async_trait]
impl<R: PageRepository + 'static> PageService for PageServiceImpl<R> {
    async fn list_pages(
        &self,
        filter: PageFilter,
        page: PageRequest,
    ) -> FolioResult<PaginatedResult<ApiPage>> {
        debug!("Listing pages, page: {}, limit: {}", page.page(), page.limit());

        let source = self.page_repository.find(&filter);
        Paginator::paginate_with(source.as_ref(), page, |translation| Ok(ApiPage::from(translation)))
            .await
    }

    async fn get_public_page(&self, id: PageTranslationId) -> FolioResult<ApiPage> {
        debug!("Getting public page: {}", id);

        let translation = self
            .page_repository
            .find_online_by_id(id)
            .await?
            .ok_or_else(|| FolioError::not_found("Page", id))?;

        Ok(ApiPage::from(translation))
    }

    async fn get_page(&self, id: PageTranslationId) -> FolioResult<ApiPage> {
        debug!("Getting page: {}", id);

        let translation = self
            .page_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| FolioError::not_found("Page", id))?;

        Ok(ApiPage::from(translation))
    }

    async fn update_page(&self, id: PageTranslationId, request: UpdatePageRequest) -> FolioResult<ApiPage> {
        debug!("Updating page: {}", id);

        request.validate_request()?;

        let mut translation = self
            .page_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| FolioError::not_found("Page", id))?;

        if let Some(title) = request.title {
            translation.title = title;
        }
        if let Some(online) = request.online {
            if online {
                translation.publish();
            } else {
                translation.unpublish();
            }
        }
        if let Some(meta_title) = request.meta_title {
            translation.meta_title = Some(meta_title);
        }
        if let Some(meta_description) = request.meta_description {
            translation.meta_description = Some(meta_description);
        }
        if let Some(author_name) = request.author_name {
            translation.author_name = Some(author_name);
        }
        if let Some(template) = request.template {
            translation.template = Some(template);
        }

        let updated = self.page_repository.update(&translation).await?;

        info!("Page updated: {}", id);
        Ok(ApiPage::from(updated))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{DynSource, MaterializedSource, NodeId, PageTranslation};
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct InMemoryPageRepository {
        translations: Mutex<HashMap<i64, PageTranslation>>,
    }

    impl InMemoryPageRepository {
        fn with_translations(translations: Vec<PageTranslation>) -> Self {
            let map = translations
                .into_iter()
                .map(|t| (t.id.into_inner(), t))
                .collect();
            Self {
                translations: Mutex::new(map),
            }
        }

        fn sorted(&self) -> Vec<PageTranslation> {
            let mut all: Vec<PageTranslation> =
                self.translations.lock().unwrap().values().cloned().collect();
            all.sort_by_key(|t| t.id);
            all
        }
    }

    #[async_trait]
    impl PageRepository for InMemoryPageRepository {
        fn find(&self, filter: &PageFilter) -> DynSource<PageTranslation> {
            let items = self
                .sorted()
                .into_iter()
                .filter(|t| filter.locale.as_ref().map_or(true, |l| &t.locale == l))
                .filter(|t| filter.online.map_or(true, |o| t.online == o))
                .collect();
            Box::new(MaterializedSource::new(items))
        }

        async fn find_by_id(&self, id: PageTranslationId) -> FolioResult<Option<PageTranslation>> {
            Ok(self.translations.lock().unwrap().get(&id.into_inner()).cloned())
        }

        async fn find_online_by_id(&self, id: PageTranslationId) -> FolioResult<Option<PageTranslation>> {
            Ok(self
                .translations
                .lock()
                .unwrap()
                .get(&id.into_inner())
                .filter(|t| t.online)
                .cloned())
        }

        async fn update(&self, translation: &PageTranslation) -> FolioResult<PageTranslation> {
            self.translations
                .lock()
                .unwrap()
                .insert(translation.id.into_inner(), translation.clone());
            Ok(translation.clone())
        }
    }

    fn make_translation(id: i64, locale: &str, title: &str, online: bool) -> PageTranslation {
        let mut t = PageTranslation::new(NodeId::new(id), locale, title, &title.to_lowercase());
        t.id = PageTranslationId::new(id);
        t.online = online;
        t
    }

    #[tokio::test]
    async fn test_list_pages_decorates_into_api_pages() {
        let repo = Arc::new(InMemoryPageRepository::with_translations(vec![
            make_translation(1, "en", "Home", true),
            make_translation(2, "en", "About", true),
        ]));
        let service = PageServiceImpl::new(repo);

        let result = service
            .list_pages(PageFilter::default(), PageRequest::first())
            .await
            .unwrap();

        assert_eq!(result.total, 2);
        assert_eq!(result.items[0].page.title, "Home");
        assert_eq!(result.items[1].page.title, "About");
    }

    #[tokio::test]
    async fn test_list_pages_respects_online_filter() {
        let repo = Arc::new(InMemoryPageRepository::with_translations(vec![
            make_translation(1, "en", "Home", true),
            make_translation(2, "en", "Draft", false),
        ]));
        let service = PageServiceImpl::new(repo);

        let filter = PageFilter {
            online: Some(true),
            ..PageFilter::default()
        };
        let result = service.list_pages(filter, PageRequest::first()).await.unwrap();
        assert_eq!(result.total, 1);
        assert_eq!(result.items[0].page.title, "Home");
    }

    #[tokio::test]
    async fn test_get_public_page_hides_offline_translations() {
        let repo = Arc::new(InMemoryPageRepository::with_translations(vec![make_translation(
            1, "en", "Draft", false,
        )]));
        let service = PageServiceImpl::new(repo);

        let err = service.get_public_page(PageTranslationId::new(1)).await.unwrap_err();
        assert!(matches!(err, FolioError::NotFound { .. }));

        let page = service.get_page(PageTranslationId::new(1)).await.unwrap();
        assert_eq!(page.page.title, "Draft");
    }

    #[tokio::test]
    async fn test_update_page_applies_partial_changes() {
        let repo = Arc::new(InMemoryPageRepository::with_translations(vec![make_translation(
            1, "en", "Home", false,
        )]));
        let service = PageServiceImpl::new(repo.clone());

        let request = UpdatePageRequest {
            title: Some("Homepage".to_string()),
            online: Some(true),
            meta_title: None,
            meta_description: Some("Landing page".to_string()),
            author_name: None,
            template: None,
        };
        let page = service.update_page(PageTranslationId::new(1), request).await.unwrap();

        assert_eq!(page.page.title, "Homepage");
        assert!(page.page.online);
        assert_eq!(page.seo.unwrap().meta_description.as_deref(), Some("Landing page"));

        let stored = repo.find_by_id(PageTranslationId::new(1)).await.unwrap().unwrap();
        assert_eq!(stored.title, "Homepage");
    }

    #[tokio::test]
    async fn test_update_missing_page_is_not_found() {
        let repo = Arc::new(InMemoryPageRepository::with_translations(vec![]));
        let service = PageServiceImpl::new(repo);

        let request = UpdatePageRequest {
            title: Some("Anything".to_string()),
            online: None,
            meta_title: None,
            meta_description: None,
            author_name: None,
            template: None,
        };
        let err = service.update_page(PageTranslationId::new(9), request).await.unwrap_err();
        assert!(matches!(err, FolioError::NotFound { .. }));
    }
}
