//! Role endpoints (admin only).

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
use folio_core::{FolioError, PaginatedResult, Paginator, Role, RoleId, ValidateExt};
use folio_service::RoleRequest;
use tracing::debug;

/// Creates the roles router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/role", get(list_roles).post(create_role))
        .route("/role/:id", get(get_role).put(update_role).delete(delete_role))
}

/// Retrieve roles paginated (admin only).
#[utoipa::path(
    get,
    path = "/api/role",
    tag = "roles",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Returned when successful"),
        (status = 403, description = "Returned when the user is not an administrator")
    )
)]
pub async fn list_roles(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Query(pagination): Query<PaginationQuery>,
) -> ApiResult<PaginatedResult<Role>> {
    debug!("List roles request");

    user.require_admin()?;

    let source = state.role_repository.find_all();
    let result = Paginator::paginate(source.as_ref(), pagination.into())
        .await?
        .with_route("get_all_roles");
    ok(result)
}

/// Retrieve a single role (admin only).
#[utoipa::path(
    get,
    path = "/api/role/{id}",
    tag = "roles",
    params(("id" = i64, Path, description = "The role ID")),
    responses(
        (status = 200, description = "Returned when successful"),
        (status = 404, description = "Returned when the role does not exist")
    )
)]
pub async fn get_role(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<i64>,
) -> ApiResult<Role> {
    debug!("Get role request: {}", id);

    user.require_admin()?;

    let role = state
        .role_repository
        .find_by_id(RoleId::new(id))
        .await?
        .ok_or_else(|| FolioError::not_found("Role", id))?;
    ok(role)
}

/// Create a role (admin only); the name is normalized to the `ROLE_`
/// convention.
#[utoipa::path(
    post,
    path = "/api/role",
    tag = "roles",
    request_body = RoleRequest,
    responses(
        (status = 201, description = "Returned when created"),
        (status = 403, description = "Returned when the user is not an administrator")
    )
)]
pub async fn create_role(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(request): Json<RoleRequest>,
) -> Result<(StatusCode, Json<Role>), AppError> {
    debug!("Create role request: {}", request.role);

    user.require_admin()?;
    request.validate_request()?;

    let role = Role::new(request.role);
    let saved = state.role_repository.save(&role).await?;
    Ok(created(saved))
}

/// Update a role (admin only).
#[utoipa::path(
    put,
    path = "/api/role/{id}",
    tag = "roles",
    params(("id" = i64, Path, description = "The role ID")),
    request_body = RoleRequest,
    responses(
        (status = 200, description = "Returned when successful"),
        (status = 404, description = "Returned when the role does not exist")
    )
)]
pub async fn update_role(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<i64>,
    Json(request): Json<RoleRequest>,
) -> ApiResult<Role> {
    debug!("Update role request: {}", id);

    user.require_admin()?;
    request.validate_request()?;

    let mut role = state
        .role_repository
        .find_by_id(RoleId::new(id))
        .await?
        .ok_or_else(|| FolioError::not_found("Role", id))?;

    role.role = Role::new(request.role).role;

    let updated = state.role_repository.update(&role).await?;
    ok(updated)
}

/// Delete a role (admin only).
#[utoipa::path(
    delete,
    path = "/api/role/{id}",
    tag = "roles",
    params(("id" = i64, Path, description = "The role ID")),
    responses(
        (status = 204, description = "Returned when deleted"),
        (status = 404, description = "Returned when the role does not exist")
    )
)]
pub async fn delete_role(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    debug!("Delete role request: {}", id);

    user.require_admin()?;

    if !state.role_repository.delete(RoleId::new(id)).await? {
        return Err(AppError(FolioError::not_found("Role", id)));
    }
    Ok(no_content())
}
