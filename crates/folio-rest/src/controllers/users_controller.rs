//! API user endpoints (admin only).

use crate::{
    extractors::AuthenticatedUser,
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
    ApiUser, FolioError, PageRequest, PaginatedResult, Paginator, UserId, DEFAULT_LIMIT,
    DEFAULT_PAGE,
};
use folio_repository::UserFilter;
use folio_service::{CreateUserRequest, UpdateUserRequest};
use serde::Deserialize;
use tracing::debug;
use utoipa::IntoParams;

/// Creates the users router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/user", get(list_users).post(create_user))
        .route("/user/:id", get(get_user).put(update_user).delete(delete_user))
}

/// Query parameters of the user list.
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct UsersQuery {
    /// The current page, 1-based.
    pub page: Option<u64>,
    /// Amount of results per page.
    pub limit: Option<u64>,
    /// The username of the user.
    pub user_name: Option<String>,
    /// The email of the user.
    pub email: Option<String>,
}

/// Retrieve users paginated (admin only).
#[utoipa::path(
    get,
    path = "/api/user",
    tag = "users",
    params(UsersQuery),
    responses(
        (status = 200, description = "Returned when successful"),
        (status = 403, description = "Returned when the user is not an administrator")
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Query(query): Query<UsersQuery>,
) -> ApiResult<PaginatedResult<ApiUser>> {
    debug!("List users request");

    user.require_admin()?;

    let page = PageRequest::new(
        query.page.unwrap_or(DEFAULT_PAGE),
        query.limit.unwrap_or(DEFAULT_LIMIT),
    );
    let filter = UserFilter {
        username: query.user_name,
        email: query.email,
    };

    let source = state.user_repository.find(&filter);
    let result = Paginator::paginate(source.as_ref(), page)
        .await?
        .with_route("get_users");
    ok(result)
}

/// Retrieve a single user (admin only).
#[utoipa::path(
    get,
    path = "/api/user/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "The user ID")),
    responses(
        (status = 200, description = "Returned when successful"),
        (status = 404, description = "Returned when the user does not exist")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<i64>,
) -> ApiResult<ApiUser> {
    debug!("Get user request: {}", id);

    user.require_admin()?;

    let found = state
        .user_repository
        .find_by_id(UserId::new(id))
        .await?
        .ok_or_else(|| FolioError::not_found("ApiUser", id))?;
    ok(found)
}

/// Create a user (admin only); a fresh API key is generated when none is
/// supplied.
#[utoipa::path(
    post,
    path = "/api/user",
    tag = "users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "Returned when created"),
        (status = 409, description = "Returned when the username already exists")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<ApiUser>), AppError> {
    debug!("Create user request: {}", request.username);

    user.require_admin()?;

    let saved = state.user_service.create_user(request).await?;
    Ok(created(saved))
}

/// Update a user (admin only).
#[utoipa::path(
    put,
    path = "/api/user/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "The user ID")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Returned when successful"),
        (status = 404, description = "Returned when the user does not exist")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<i64>,
    Json(request): Json<UpdateUserRequest>,
) -> ApiResult<ApiUser> {
    debug!("Update user request: {}", id);

    user.require_admin()?;

    let updated = state.user_service.update_user(UserId::new(id), request).await?;
    ok(updated)
}

/// Delete a user (admin only).
#[utoipa::path(
    delete,
    path = "/api/user/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "The user ID")),
    responses(
        (status = 204, description = "Returned when deleted"),
        (status = 404, description = "Returned when the user does not exist")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    debug!("Delete user request: {}", id);

    user.require_admin()?;

    state.user_service.delete_user(UserId::new(id)).await?;
    Ok(no_content())
}
