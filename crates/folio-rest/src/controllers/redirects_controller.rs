//! Redirect endpoints (admin only).

use crate::{
    extractors::{AuthenticatedUser, PaginationQuery},
    responses::{ok, ApiResult},
    state::AppState,
};
use axum::{
    extract::{Query, State},
    routing::get,
    Router,
};
use folio_core::{PaginatedResult, Paginator, Redirect};
use tracing::debug;

/// Creates the redirects router.
pub fn router() -> Router<AppState> {
    Router::new().route("/redirects", get(list_redirects))
}

/// Retrieve redirects paginated (admin only).
#[utoipa::path(
    get,
    path = "/api/redirects",
    tag = "redirects",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Returned when successful"),
        (status = 403, description = "Returned when the user is not an administrator")
    )
)]
pub async fn list_redirects(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Query(pagination): Query<PaginationQuery>,
) -> ApiResult<PaginatedResult<Redirect>> {
    debug!("List redirects request");

    user.require_admin()?;

    let source = state.redirect_repository.find_all();
    let result = Paginator::paginate(source.as_ref(), pagination.into())
        .await?
        .with_route("get_all_redirects");
    ok(result)
}
