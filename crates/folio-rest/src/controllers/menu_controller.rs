//! Menu endpoints (admin only).

use crate::{
    extractors::{AuthenticatedUser, PaginationQuery},
    responses::{created, no_content, ok, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use folio_core::{
    FolioError, MaterializedSource, Menu, MenuId, MenuItem, MenuItemId, PaginatedResult,
    Paginator, ValidateExt,
};
use folio_service::{MenuItemRequest, MenuRequest};
use tracing::debug;

/// Creates the menu router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/menu", get(list_menus).post(create_menu))
        .route("/menu/:id", put(update_menu).delete(delete_menu))
        .route("/menu/:id/items", get(list_menu_items))
        .route("/menu/:id/add", post(add_menu_item))
        .route("/menu-item/:id", put(update_menu_item).delete(delete_menu_item))
}

/// Retrieve menus paginated (admin only).
#[utoipa::path(
    get,
    path = "/api/menu",
    tag = "menu",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Returned when successful"),
        (status = 403, description = "Returned when the user is not an administrator")
    )
)]
pub async fn list_menus(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Query(pagination): Query<PaginationQuery>,
) -> ApiResult<PaginatedResult<Menu>> {
    debug!("List menus request");

    user.require_admin()?;

    let source = state.menu_repository.find_all();
    let result = Paginator::paginate(source.as_ref(), pagination.into())
        .await?
        .with_route("get_all_menu");
    ok(result)
}

/// Retrieve the items of a menu, paginated (admin only).
#[utoipa::path(
    get,
    path = "/api/menu/{id}/items",
    tag = "menu",
    params(("id" = i64, Path, description = "The menu ID"), PaginationQuery),
    responses(
        (status = 200, description = "Returned when successful"),
        (status = 404, description = "Returned when the menu does not exist")
    )
)]
pub async fn list_menu_items(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<i64>,
    Query(pagination): Query<PaginationQuery>,
) -> ApiResult<PaginatedResult<MenuItem>> {
    debug!("List menu items request: {}", id);

    user.require_admin()?;

    state
        .menu_repository
        .find_by_id(MenuId::new(id))
        .await?
        .ok_or_else(|| FolioError::not_found("Menu", id))?;

    // Items are loaded as a whole and windowed in memory, weight order.
    let items = state.menu_repository.find_items(MenuId::new(id)).await?;
    let source = MaterializedSource::new(items);

    let result = Paginator::paginate(&source, pagination.into())
        .await?
        .with_route("get_menu_items");
    ok(result)
}

/// Create a menu (admin only).
#[utoipa::path(
    post,
    path = "/api/menu",
    tag = "menu",
    request_body = MenuRequest,
    responses(
        (status = 201, description = "Returned when created"),
        (status = 403, description = "Returned when the user is not an administrator")
    )
)]
pub async fn create_menu(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(request): Json<MenuRequest>,
) -> Result<(StatusCode, Json<Menu>), AppError> {
    debug!("Create menu request: {}", request.name);

    user.require_admin()?;
    request.validate_request()?;

    let menu = Menu::new(request.name, request.locale);
    let saved = state.menu_repository.save(&menu).await?;
    Ok(created(saved))
}

/// Update a menu (admin only).
#[utoipa::path(
    put,
    path = "/api/menu/{id}",
    tag = "menu",
    params(("id" = i64, Path, description = "The menu ID")),
    request_body = MenuRequest,
    responses(
        (status = 200, description = "Returned when successful"),
        (status = 404, description = "Returned when the menu does not exist")
    )
)]
pub async fn update_menu(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<i64>,
    Json(request): Json<MenuRequest>,
) -> ApiResult<Menu> {
    debug!("Update menu request: {}", id);

    user.require_admin()?;
    request.validate_request()?;

    let mut menu = state
        .menu_repository
        .find_by_id(MenuId::new(id))
        .await?
        .ok_or_else(|| FolioError::not_found("Menu", id))?;

    menu.name = request.name;
    menu.locale = request.locale;

    let updated = state.menu_repository.update(&menu).await?;
    ok(updated)
}

/// Delete a menu and its items (admin only).
#[utoipa::path(
    delete,
    path = "/api/menu/{id}",
    tag = "menu",
    params(("id" = i64, Path, description = "The menu ID")),
    responses(
        (status = 204, description = "Returned when deleted"),
        (status = 404, description = "Returned when the menu does not exist")
    )
)]
pub async fn delete_menu(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    debug!("Delete menu request: {}", id);

    user.require_admin()?;

    if !state.menu_repository.delete(MenuId::new(id)).await? {
        return Err(AppError(FolioError::not_found("Menu", id)));
    }
    Ok(no_content())
}

/// Add an item to a menu (admin only).
#[utoipa::path(
    post,
    path = "/api/menu/{id}/add",
    tag = "menu",
    params(("id" = i64, Path, description = "The menu ID")),
    request_body = MenuItemRequest,
    responses(
        (status = 201, description = "Returned when created"),
        (status = 404, description = "Returned when the menu does not exist")
    )
)]
pub async fn add_menu_item(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<i64>,
    Json(request): Json<MenuItemRequest>,
) -> Result<(StatusCode, Json<MenuItem>), AppError> {
    debug!("Add menu item request: {}", id);

    user.require_admin()?;
    request.validate_request()?;

    state
        .menu_repository
        .find_by_id(MenuId::new(id))
        .await?
        .ok_or_else(|| FolioError::not_found("Menu", id))?;

    let mut item = MenuItem::new(MenuId::new(id), request.title, request.url);
    item.new_window = request.new_window;
    item.online = request.online.unwrap_or(true);
    item.weight = request.weight;
    item.parent_id = request.parent_id.map(MenuItemId::new);

    let saved = state.menu_repository.save_item(&item).await?;
    Ok(created(saved))
}

/// Update a menu item (admin only).
#[utoipa::path(
    put,
    path = "/api/menu-item/{id}",
    tag = "menu",
    params(("id" = i64, Path, description = "The menu item ID")),
    request_body = MenuItemRequest,
    responses(
        (status = 200, description = "Returned when successful"),
        (status = 404, description = "Returned when the menu item does not exist")
    )
)]
pub async fn update_menu_item(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<i64>,
    Json(request): Json<MenuItemRequest>,
) -> ApiResult<MenuItem> {
    debug!("Update menu item request: {}", id);

    user.require_admin()?;
    request.validate_request()?;

    let mut item = state
        .menu_repository
        .find_item(MenuItemId::new(id))
        .await?
        .ok_or_else(|| FolioError::not_found("MenuItem", id))?;

    item.title = request.title;
    item.url = request.url;
    item.new_window = request.new_window;
    if let Some(online) = request.online {
        item.online = online;
    }
    item.weight = request.weight;
    item.parent_id = request.parent_id.map(MenuItemId::new);

    let updated = state.menu_repository.update_item(&item).await?;
    ok(updated)
}

/// Delete a menu item (admin only).
#[utoipa::path(
    delete,
    path = "/api/menu-item/{id}",
    tag = "menu",
    params(("id" = i64, Path, description = "The menu item ID")),
    responses(
        (status = 204, description = "Returned when deleted"),
        (status = 404, description = "Returned when the menu item does not exist")
    )
)]
pub async fn delete_menu_item(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    debug!("Delete menu item request: {}", id);

    user.require_admin()?;

    if !state.menu_repository.delete_item(MenuItemId::new(id)).await? {
        return Err(AppError(FolioError::not_found("MenuItem", id)));
    }
    Ok(no_content())
}
