//! Group endpoints (admin only).

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
use folio_core::{FolioError, Group, GroupId, PaginatedResult, Paginator, ValidateExt};
use folio_service::GroupRequest;
use tracing::debug;

/// Creates the groups router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/group", get(list_groups).post(create_group))
        .route("/group/:id", get(get_group).put(update_group).delete(delete_group))
}

/// Retrieve groups paginated (admin only).
#[utoipa::path(
    get,
    path = "/api/group",
    tag = "groups",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Returned when successful"),
        (status = 403, description = "Returned when the user is not an administrator")
    )
)]
pub async fn list_groups(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Query(pagination): Query<PaginationQuery>,
) -> ApiResult<PaginatedResult<Group>> {
    debug!("List groups request");

    user.require_admin()?;

    let source = state.group_repository.find_all();
    let result = Paginator::paginate(source.as_ref(), pagination.into())
        .await?
        .with_route("get_all_groups");
    ok(result)
}

/// Retrieve a single group (admin only).
#[utoipa::path(
    get,
    path = "/api/group/{id}",
    tag = "groups",
    params(("id" = i64, Path, description = "The group ID")),
    responses(
        (status = 200, description = "Returned when successful"),
        (status = 404, description = "Returned when the group does not exist")
    )
)]
pub async fn get_group(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<i64>,
) -> ApiResult<Group> {
    debug!("Get group request: {}", id);

    user.require_admin()?;

    let group = state
        .group_repository
        .find_by_id(GroupId::new(id))
        .await?
        .ok_or_else(|| FolioError::not_found("Group", id))?;
    ok(group)
}

/// Create a group (admin only).
#[utoipa::path(
    post,
    path = "/api/group",
    tag = "groups",
    request_body = GroupRequest,
    responses(
        (status = 201, description = "Returned when created"),
        (status = 403, description = "Returned when the user is not an administrator")
    )
)]
pub async fn create_group(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(request): Json<GroupRequest>,
) -> Result<(StatusCode, Json<Group>), AppError> {
    debug!("Create group request: {}", request.name);

    user.require_admin()?;
    request.validate_request()?;

    let group = Group::new(request.name, request.roles);
    let saved = state.group_repository.save(&group).await?;
    Ok(created(saved))
}

/// Update a group (admin only).
#[utoipa::path(
    put,
    path = "/api/group/{id}",
    tag = "groups",
    params(("id" = i64, Path, description = "The group ID")),
    request_body = GroupRequest,
    responses(
        (status = 200, description = "Returned when successful"),
        (status = 404, description = "Returned when the group does not exist")
    )
)]
pub async fn update_group(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<i64>,
    Json(request): Json<GroupRequest>,
) -> ApiResult<Group> {
    debug!("Update group request: {}", id);

    user.require_admin()?;
    request.validate_request()?;

    let mut group = state
        .group_repository
        .find_by_id(GroupId::new(id))
        .await?
        .ok_or_else(|| FolioError::not_found("Group", id))?;

    group.name = request.name;
    group.roles = request.roles;

    let updated = state.group_repository.update(&group).await?;
    ok(updated)
}

/// Delete a group (admin only).
#[utoipa::path(
    delete,
    path = "/api/group/{id}",
    tag = "groups",
    params(("id" = i64, Path, description = "The group ID")),
    responses(
        (status = 204, description = "Returned when deleted"),
        (status = 404, description = "Returned when the group does not exist")
    )
)]
pub async fn delete_group(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    debug!("Delete group request: {}", id);

    user.require_admin()?;

    if !state.group_repository.delete(GroupId::new(id)).await? {
        return Err(AppError(FolioError::not_found("Group", id)));
    }
    Ok(no_content())
}
