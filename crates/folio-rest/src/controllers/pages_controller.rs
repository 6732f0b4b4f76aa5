//! Page endpoints.
//!
//! The list endpoint is where the paginator's decorator earns its keep: every
//! windowed translation is folded into an [`ApiPage`] aggregate before the
//! envelope is built.

use crate::{
    extractors::AuthenticatedUser,
    responses::{ok, ApiResult},
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use folio_core::{
    NodeId, PageRequest, PageTranslationId, PageVersionType, PaginatedResult, DEFAULT_LIMIT,
    DEFAULT_PAGE,
};
use folio_repository::PageFilter;
use folio_service::{ApiPage, UpdatePageRequest};
use serde::Deserialize;
use tracing::debug;
use utoipa::IntoParams;

/// Creates the pages router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/public/pages", get(list_pages))
        .route("/public/pages/:id", get(get_public_page))
        .route("/pages/:id", get(get_page).put(update_page))
}

/// Query parameters of the page list.
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct PagesQuery {
    /// The current page, 1-based.
    pub page: Option<u64>,
    /// Amount of results per page.
    pub limit: Option<u64>,
    /// The page type to return.
    #[serde(rename = "type")]
    pub page_type: Option<String>,
    /// The language of your content.
    pub locale: Option<String>,
    /// The internal name of the owning node.
    pub internal_name: Option<String>,
    /// Restrict to one node.
    pub node_id: Option<i64>,
    /// Include only online pages; defaults to true.
    pub online: Option<bool>,
    /// Version type (public or draft).
    pub version_type: Option<String>,
}

/// Retrieve pages of a certain type, decorated into page aggregates.
#[utoipa::path(
    get,
    path = "/api/public/pages",
    tag = "pages",
    params(PagesQuery),
    responses(
        (status = 200, description = "Returned when successful", body = PaginatedResult<ApiPage>)
    )
)]
pub async fn list_pages(
    State(state): State<AppState>,
    Query(query): Query<PagesQuery>,
) -> ApiResult<PaginatedResult<ApiPage>> {
    debug!("List pages request");

    let page = PageRequest::new(
        query.page.unwrap_or(DEFAULT_PAGE),
        query.limit.unwrap_or(DEFAULT_LIMIT),
    );
    let filter = PageFilter {
        ref_entity_name: query.page_type,
        locale: query.locale,
        internal_name: query.internal_name,
        node_id: query.node_id.map(NodeId::new),
        online: Some(query.online.unwrap_or(true)),
        version: query.version_type.as_deref().map(PageVersionType::parse),
    };

    let result = state
        .page_service
        .list_pages(filter, page)
        .await?
        .with_route("get_pages");
    ok(result)
}

/// Get an online page by translation ID.
#[utoipa::path(
    get,
    path = "/api/public/pages/{id}",
    tag = "pages",
    params(("id" = i64, Path, description = "The page translation ID")),
    responses(
        (status = 200, description = "Returned when successful", body = ApiPage),
        (status = 404, description = "Returned when the page does not exist or is offline")
    )
)]
pub async fn get_public_page(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<ApiPage> {
    debug!("Get public page request: {}", id);

    let page = state
        .page_service
        .get_public_page(PageTranslationId::new(id))
        .await?;
    ok(page)
}

/// Get a page by translation ID, regardless of its online state.
#[utoipa::path(
    get,
    path = "/api/pages/{id}",
    tag = "pages",
    params(("id" = i64, Path, description = "The page translation ID")),
    responses(
        (status = 200, description = "Returned when successful", body = ApiPage),
        (status = 404, description = "Returned when the page does not exist")
    )
)]
pub async fn get_page(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Path(id): Path<i64>,
) -> ApiResult<ApiPage> {
    debug!("Get page request: {}", id);

    let page = state.page_service.get_page(PageTranslationId::new(id)).await?;
    ok(page)
}

/// Update a page (admin only).
#[utoipa::path(
    put,
    path = "/api/pages/{id}",
    tag = "pages",
    params(("id" = i64, Path, description = "The page translation ID")),
    request_body = UpdatePageRequest,
    responses(
        (status = 200, description = "Returned when successful", body = ApiPage),
        (status = 403, description = "Returned when the user is not an administrator"),
        (status = 404, description = "Returned when the page does not exist")
    )
)]
pub async fn update_page(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<i64>,
    Json(request): Json<UpdatePageRequest>,
) -> ApiResult<ApiPage> {
    debug!("Update page request: {}", id);

    user.require_admin()?;

    let page = state
        .page_service
        .update_page(PageTranslationId::new(id), request)
        .await?;
    ok(page)
}
