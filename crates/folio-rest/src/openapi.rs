//! OpenAPI documentation configuration.

use crate::controllers::{
    health_controller::HealthResponse, translations_controller::AffectedResponse,
};
use folio_core::{
    ErrorResponse, FieldError, FormSubmissionField, PageVersionType, PaginatedResult,
    TranslationStatus,
};
use folio_service::{
    ApiPage, ApiPageContent, ApiPageSeo, CreateMediaRequest, CreateUserRequest,
    DisableTranslationsRequest, GroupRequest, MenuItemRequest, MenuRequest, RoleRequest,
    TranslationEntry, TranslationKeywordsRequest, UpdatePageRequest, UpdateUserRequest,
};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// OpenAPI documentation for the Folio content API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Folio Content API",
        version = "1.0.0",
        description = "REST API exposing CMS content: nodes, pages, media, menus, users, \
                       redirects, site configuration and translations",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    paths(
        // Node endpoints
        crate::controllers::nodes_controller::list_nodes,
        crate::controllers::nodes_controller::get_node,
        crate::controllers::nodes_controller::list_node_children,
        crate::controllers::nodes_controller::get_node_parent,
        // Page endpoints
        crate::controllers::pages_controller::list_pages,
        crate::controllers::pages_controller::get_public_page,
        crate::controllers::pages_controller::get_page,
        crate::controllers::pages_controller::update_page,
        // Media endpoints
        crate::controllers::media_controller::list_media,
        crate::controllers::media_controller::get_media,
        crate::controllers::media_controller::list_folder_media,
        crate::controllers::media_controller::create_media,
        crate::controllers::media_controller::delete_media,
        // Menu endpoints
        crate::controllers::menu_controller::list_menus,
        crate::controllers::menu_controller::list_menu_items,
        crate::controllers::menu_controller::create_menu,
        crate::controllers::menu_controller::update_menu,
        crate::controllers::menu_controller::delete_menu,
        crate::controllers::menu_controller::add_menu_item,
        crate::controllers::menu_controller::update_menu_item,
        crate::controllers::menu_controller::delete_menu_item,
        // User endpoints
        crate::controllers::users_controller::list_users,
        crate::controllers::users_controller::get_user,
        crate::controllers::users_controller::create_user,
        crate::controllers::users_controller::update_user,
        crate::controllers::users_controller::delete_user,
        // Group endpoints
        crate::controllers::groups_controller::list_groups,
        crate::controllers::groups_controller::get_group,
        crate::controllers::groups_controller::create_group,
        crate::controllers::groups_controller::update_group,
        crate::controllers::groups_controller::delete_group,
        // Role endpoints
        crate::controllers::roles_controller::list_roles,
        crate::controllers::roles_controller::get_role,
        crate::controllers::roles_controller::create_role,
        crate::controllers::roles_controller::update_role,
        crate::controllers::roles_controller::delete_role,
        // Redirect endpoints
        crate::controllers::redirects_controller::list_redirects,
        // Config endpoints
        crate::controllers::config_controller::get_config,
        // Translation endpoints
        crate::controllers::translations_controller::list_translations,
        crate::controllers::translations_controller::list_domain_translations,
        crate::controllers::translations_controller::get_translation,
        crate::controllers::translations_controller::upload_translations,
        crate::controllers::translations_controller::deprecate_translations,
        crate::controllers::translations_controller::disable_translations,
        crate::controllers::translations_controller::enable_translations,
        // Author endpoints
        crate::controllers::authors_controller::list_authors,
        // Form submission endpoints
        crate::controllers::form_submissions_controller::list_form_submissions,
        // Health endpoints
        crate::controllers::health_controller::health_check,
    ),
    components(
        schemas(
            // Core types
            ErrorResponse,
            FieldError,
            PaginatedResult<ApiPage>,
            PageVersionType,
            TranslationStatus,
            FormSubmissionField,
            // Page DTOs
            ApiPage,
            ApiPageContent,
            ApiPageSeo,
            UpdatePageRequest,
            // Media DTOs
            CreateMediaRequest,
            // Menu DTOs
            MenuRequest,
            MenuItemRequest,
            // User DTOs
            CreateUserRequest,
            UpdateUserRequest,
            GroupRequest,
            RoleRequest,
            // Translation DTOs
            TranslationEntry,
            TranslationKeywordsRequest,
            DisableTranslationsRequest,
            // Responses
            HealthResponse,
            AffectedResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "nodes", description = "Node endpoints"),
        (name = "pages", description = "Page endpoints"),
        (name = "media", description = "Media endpoints"),
        (name = "menu", description = "Menu endpoints"),
        (name = "users", description = "API user management endpoints"),
        (name = "groups", description = "Group management endpoints"),
        (name = "roles", description = "Role management endpoints"),
        (name = "redirects", description = "Redirect endpoints"),
        (name = "config", description = "Site configuration endpoints"),
        (name = "translations", description = "Translation endpoints"),
        (name = "authors", description = "Author endpoints"),
        (name = "form-submissions", description = "Form submission endpoints"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;

/// Security addon for API key authentication.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "api_key",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("X-Api-Key"))),
            );
        }
    }
}
