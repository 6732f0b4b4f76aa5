//! Application state for Axum handlers.

use folio_repository::{
    AuthorRepository, FormSubmissionRepository, GroupRepository, MediaRepository, MenuRepository,
    NodeRepository, RedirectRepository, RoleRepository, SiteConfigRepository,
    TranslationRepository, UserRepository,
};
use folio_service::{PageService, TranslationService, UserService};
use std::sync::Arc;

/// Shared application state.
///
/// Plain constructor injection: every controller reaches its collaborators
/// through trait objects, so tests swap in in-memory fakes.
#[derive(Clone)]
pub struct AppState {
    pub node_repository: Arc<dyn NodeRepository>,
    pub media_repository: Arc<dyn MediaRepository>,
    pub menu_repository: Arc<dyn MenuRepository>,
    pub user_repository: Arc<dyn UserRepository>,
    pub group_repository: Arc<dyn GroupRepository>,
    pub role_repository: Arc<dyn RoleRepository>,
    pub redirect_repository: Arc<dyn RedirectRepository>,
    pub site_config_repository: Arc<dyn SiteConfigRepository>,
    pub translation_repository: Arc<dyn TranslationRepository>,
    pub author_repository: Arc<dyn AuthorRepository>,
    pub form_submission_repository: Arc<dyn FormSubmissionRepository>,
    pub page_service: Arc<dyn PageService>,
    pub translation_service: Arc<dyn TranslationService>,
    pub user_service: Arc<dyn UserService>,
}
