//! Form submission endpoints (admin only).

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
use folio_core::{FormSubmission, PaginatedResult, Paginator};
use tracing::debug;

/// Creates the form submissions router.
pub fn router() -> Router<AppState> {
    Router::new().route("/form-submission", get(list_form_submissions))
}

/// Retrieve form submissions, newest first, paginated (admin only).
#[utoipa::path(
    get,
    path = "/api/form-submission",
    tag = "form-submissions",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Returned when successful"),
        (status = 403, description = "Returned when the user is not an administrator")
    )
)]
pub async fn list_form_submissions(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Query(pagination): Query<PaginationQuery>,
) -> ApiResult<PaginatedResult<FormSubmission>> {
    debug!("List form submissions request");

    user.require_admin()?;

    let source = state.form_submission_repository.find_all();
    let result = Paginator::paginate(source.as_ref(), pagination.into())
        .await?
        .with_route("get_form_submissions");
    ok(result)
}
