//! Media endpoints.

use crate::{
    extractors::{AuthenticatedUser, PaginationQuery},
    responses::{created, no_content, ok, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use folio_core::{
    FolderId, FolioError, Media, MediaId, PageRequest, PaginatedResult, Paginator, ValidateExt,
    DEFAULT_LIMIT, DEFAULT_PAGE,
};
use folio_repository::MediaFilter;
use folio_service::CreateMediaRequest;
use serde::Deserialize;
use tracing::debug;
use utoipa::IntoParams;

/// Creates the media router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/media", get(list_media).post(create_media))
        .route("/media/:id", get(get_media).delete(delete_media))
        .route("/folder/:id", get(list_folder_media))
}

/// Query parameters of the media list.
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct MediaQuery {
    /// The current page, 1-based.
    pub page: Option<u64>,
    /// Amount of results per page.
    pub limit: Option<u64>,
    /// Substring match on the media name.
    pub name: Option<String>,
    /// Restrict the search to one folder.
    pub folder_id: Option<i64>,
}

/// Retrieve media paginated.
#[utoipa::path(
    get,
    path = "/api/media",
    tag = "media",
    params(MediaQuery),
    responses(
        (status = 200, description = "Returned when successful"),
        (status = 401, description = "Returned without a valid API key")
    )
)]
pub async fn list_media(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Query(query): Query<MediaQuery>,
) -> ApiResult<PaginatedResult<Media>> {
    debug!("List media request");

    let page = PageRequest::new(
        query.page.unwrap_or(DEFAULT_PAGE),
        query.limit.unwrap_or(DEFAULT_LIMIT),
    );
    let filter = MediaFilter {
        name: query.name,
        folder_id: query.folder_id.map(FolderId::new),
    };

    let source = state.media_repository.find(&filter);
    let result = Paginator::paginate(source.as_ref(), page)
        .await?
        .with_route("get_media");
    ok(result)
}

/// Retrieve a single media item.
#[utoipa::path(
    get,
    path = "/api/media/{id}",
    tag = "media",
    params(("id" = i64, Path, description = "The media ID")),
    responses(
        (status = 200, description = "Returned when successful"),
        (status = 404, description = "Returned when the media item does not exist")
    )
)]
pub async fn get_media(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Path(id): Path<i64>,
) -> ApiResult<Media> {
    debug!("Get media request: {}", id);

    let media = state
        .media_repository
        .find_by_id(MediaId::new(id))
        .await?
        .ok_or_else(|| FolioError::not_found("Media", id))?;
    ok(media)
}

/// Retrieve the media of one folder, paginated (admin only).
#[utoipa::path(
    get,
    path = "/api/folder/{id}",
    tag = "media",
    params(("id" = i64, Path, description = "The folder ID"), PaginationQuery),
    responses(
        (status = 200, description = "Returned when successful"),
        (status = 404, description = "Returned when the folder does not exist")
    )
)]
pub async fn list_folder_media(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<i64>,
    Query(pagination): Query<PaginationQuery>,
) -> ApiResult<PaginatedResult<Media>> {
    debug!("List folder media request: {}", id);

    user.require_admin()?;

    state
        .media_repository
        .find_folder(FolderId::new(id))
        .await?
        .ok_or_else(|| FolioError::not_found("Folder", id))?;

    let filter = MediaFilter {
        name: None,
        folder_id: Some(FolderId::new(id)),
    };
    let source = state.media_repository.find(&filter);
    let result = Paginator::paginate(source.as_ref(), pagination.into())
        .await?
        .with_route("get_folder_media");
    ok(result)
}

/// Register a media item (admin only).
#[utoipa::path(
    post,
    path = "/api/media",
    tag = "media",
    request_body = CreateMediaRequest,
    responses(
        (status = 201, description = "Returned when created"),
        (status = 403, description = "Returned when the user is not an administrator"),
        (status = 404, description = "Returned when the folder does not exist")
    )
)]
pub async fn create_media(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(request): Json<CreateMediaRequest>,
) -> Result<(StatusCode, Json<Media>), AppError> {
    debug!("Create media request: {}", request.name);

    user.require_admin()?;
    request.validate_request().map_err(AppError)?;

    let folder_id = FolderId::new(request.folder_id);
    state
        .media_repository
        .find_folder(folder_id)
        .await?
        .ok_or_else(|| FolioError::not_found("Folder", request.folder_id))?;

    let media = Media::new(
        request.name,
        request.content_type,
        request.url,
        request.file_size,
        folder_id,
    );
    let saved = state.media_repository.save(&media).await?;
    Ok(created(saved))
}

/// Soft-delete a media item (admin only).
#[utoipa::path(
    delete,
    path = "/api/media/{id}",
    tag = "media",
    params(("id" = i64, Path, description = "The media ID")),
    responses(
        (status = 204, description = "Returned when deleted"),
        (status = 403, description = "Returned when the user is not an administrator"),
        (status = 404, description = "Returned when the media item does not exist")
    )
)]
pub async fn delete_media(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    debug!("Delete media request: {}", id);

    user.require_admin()?;

    if !state.media_repository.delete(MediaId::new(id)).await? {
        return Err(AppError(FolioError::not_found("Media", id)));
    }
    Ok(no_content())
}
