//! Author endpoints (admin only).

use crate::{
    extractors::{AuthenticatedUser, PaginationQuery},
    responses::{ok, ApiResult},
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Router,
};
use folio_core::{Author, PaginatedResult, Paginator};
use tracing::debug;

/// Creates the authors router.
pub fn router() -> Router<AppState> {
    Router::new().route("/authors/:type", get(list_authors))
}

/// Retrieve authors of one type, paginated (admin only).
#[utoipa::path(
    get,
    path = "/api/authors/{type}",
    tag = "authors",
    params(
        ("type" = String, Path, description = "The author type"),
        PaginationQuery
    ),
    responses(
        (status = 200, description = "Returned when successful"),
        (status = 403, description = "Returned when the user is not an administrator")
    )
)]
pub async fn list_authors(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(author_type): Path<String>,
    Query(pagination): Query<PaginationQuery>,
) -> ApiResult<PaginatedResult<Author>> {
    debug!("List authors request: {}", author_type);

    user.require_admin()?;

    let source = state.author_repository.find_by_type(&author_type);
    let result = Paginator::paginate(source.as_ref(), pagination.into())
        .await?
        .with_route("get_authors");
    ok(result)
}
