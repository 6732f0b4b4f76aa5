//! Site configuration endpoints (admin only).

use crate::{
    extractors::AuthenticatedUser,
    responses::{ok, ApiResult},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    routing::get,
    Router,
};
use folio_core::{FolioError, SiteConfig};
use tracing::debug;

/// Creates the config router.
pub fn router() -> Router<AppState> {
    Router::new().route("/config/:internal_name", get(get_config))
}

/// Retrieve one configuration document by internal name (admin only).
#[utoipa::path(
    get,
    path = "/api/config/{internalName}",
    tag = "config",
    params(("internalName" = String, Path, description = "Internal name of the configuration")),
    responses(
        (status = 200, description = "Returned when successful"),
        (status = 403, description = "Returned when the user is not an administrator"),
        (status = 404, description = "Returned when the name is not configured")
    )
)]
pub async fn get_config(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(internal_name): Path<String>,
) -> ApiResult<SiteConfig> {
    debug!("Get config request: {}", internal_name);

    user.require_admin()?;

    let config = state
        .site_config_repository
        .find_by_internal_name(&internal_name)
        .await?
        .ok_or_else(|| FolioError::not_found("SiteConfig", internal_name))?;
    ok(config)
}
