//! Translation endpoints.
//!
//! Reads are public; the lifecycle operations (bulk upload, deprecate,
//! disable, enable) are admin only and delegate to the translation service.

use crate::{
    extractors::AuthenticatedUser,
    responses::{created, ok, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use folio_core::{
    FolioError, MaterializedSource, PageRequest, PaginatedResult, Paginator, Translation,
    TranslationStatus, DEFAULT_LIMIT, DEFAULT_PAGE,
};
use folio_repository::TranslationFilter;
use folio_service::{DisableTranslationsRequest, TranslationEntry, TranslationKeywordsRequest};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::{IntoParams, ToSchema};

/// Creates the translations router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/public/translations", get(list_translations))
        .route("/public/translations/:domain", get(list_domain_translations))
        .route("/public/translations/:domain/:keyword", get(get_translation))
        .route("/translations/:domain", post(upload_translations))
        .route("/translations/deprecate/:domain", put(deprecate_translations))
        .route("/translations/disable/:domain", put(disable_translations))
        .route("/translations/enable/:domain", put(enable_translations))
}

/// Query parameters of the translation list.
#[derive(Debug, Deserialize, IntoParams)]
pub struct TranslationsQuery {
    /// The current page, 1-based.
    pub page: Option<u64>,
    /// Amount of results per page.
    pub limit: Option<u64>,
    /// The language of the translations.
    pub locale: Option<String>,
    /// The domain of the translations.
    pub domain: Option<String>,
    /// The keyword of the translations.
    pub keyword: Option<String>,
}

/// Query parameters restricting a domain listing to one locale.
#[derive(Debug, Deserialize, IntoParams)]
pub struct DomainTranslationsQuery {
    /// The current page, 1-based.
    pub page: Option<u64>,
    /// Amount of results per page.
    pub limit: Option<u64>,
    /// The language of the translations.
    pub locale: Option<String>,
}

/// Query parameters of a single-translation lookup.
#[derive(Debug, Deserialize, IntoParams)]
pub struct TranslationLookupQuery {
    /// The language of the translation.
    pub locale: String,
}

/// Query flag of the bulk upload.
#[derive(Debug, Deserialize, IntoParams)]
pub struct ForceQuery {
    /// Overwrite existing texts instead of keeping them.
    #[serde(default)]
    pub force: bool,
}

/// Number of rows touched by a lifecycle operation.
#[derive(Debug, Serialize, ToSchema)]
pub struct AffectedResponse {
    pub affected: u64,
}

/// Retrieve enabled translations paginated.
#[utoipa::path(
    get,
    path = "/api/public/translations",
    tag = "translations",
    params(TranslationsQuery),
    responses(
        (status = 200, description = "Returned when successful")
    )
)]
pub async fn list_translations(
    State(state): State<AppState>,
    Query(query): Query<TranslationsQuery>,
) -> ApiResult<PaginatedResult<Translation>> {
    debug!("List translations request");

    let page = PageRequest::new(
        query.page.unwrap_or(DEFAULT_PAGE),
        query.limit.unwrap_or(DEFAULT_LIMIT),
    );
    let filter = TranslationFilter {
        locale: query.locale,
        domain: query.domain,
        keyword: query.keyword,
        status: Some(TranslationStatus::Enabled),
    };

    let source = state.translation_repository.find(&filter);
    let result = Paginator::paginate(source.as_ref(), page)
        .await?
        .with_route("get_translations");
    ok(result)
}

/// Retrieve the enabled translations of one domain, paginated.
#[utoipa::path(
    get,
    path = "/api/public/translations/{domain}",
    tag = "translations",
    params(
        ("domain" = String, Path, description = "The translation domain"),
        DomainTranslationsQuery
    ),
    responses(
        (status = 200, description = "Returned when successful")
    )
)]
pub async fn list_domain_translations(
    State(state): State<AppState>,
    Path(domain): Path<String>,
    Query(query): Query<DomainTranslationsQuery>,
) -> ApiResult<PaginatedResult<Translation>> {
    debug!("List domain translations request: {}", domain);

    let page = PageRequest::new(
        query.page.unwrap_or(DEFAULT_PAGE),
        query.limit.unwrap_or(DEFAULT_LIMIT),
    );

    // The domain is loaded as a whole and windowed in memory.
    let translations = state
        .translation_repository
        .find_by_domain(&domain, query.locale.as_deref())
        .await?;
    let source = MaterializedSource::new(translations);

    let result = Paginator::paginate(&source, page)
        .await?
        .with_route("get_translations_by_domain");
    ok(result)
}

/// Retrieve a single enabled translation.
#[utoipa::path(
    get,
    path = "/api/public/translations/{domain}/{keyword}",
    tag = "translations",
    params(
        ("domain" = String, Path, description = "The translation domain"),
        ("keyword" = String, Path, description = "The translation keyword"),
        TranslationLookupQuery
    ),
    responses(
        (status = 200, description = "Returned when successful"),
        (status = 404, description = "Returned when no translation exists for the locale")
    )
)]
pub async fn get_translation(
    State(state): State<AppState>,
    Path((domain, keyword)): Path<(String, String)>,
    Query(query): Query<TranslationLookupQuery>,
) -> ApiResult<Translation> {
    debug!("Get translation request: {}/{}", domain, keyword);

    let translation = state
        .translation_repository
        .find_one(&domain, &keyword, &query.locale)
        .await?
        .ok_or_else(|| FolioError::not_found("Translation", format!("{domain}/{keyword}")))?;
    ok(translation)
}

/// Bulk create or update translations of one domain (admin only).
///
/// Disabled entries are re-enabled; existing texts are only overwritten when
/// the `force` flag is set. An invalid entry fails the whole request.
#[utoipa::path(
    post,
    path = "/api/translations/{domain}",
    tag = "translations",
    params(
        ("domain" = String, Path, description = "The translation domain"),
        ForceQuery
    ),
    request_body = Vec<TranslationEntry>,
    responses(
        (status = 201, description = "Returned when the upload was processed"),
        (status = 400, description = "Returned when an entry is invalid"),
        (status = 403, description = "Returned when the user is not an administrator")
    )
)]
pub async fn upload_translations(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(domain): Path<String>,
    Query(query): Query<ForceQuery>,
    Json(entries): Json<Vec<TranslationEntry>>,
) -> Result<(StatusCode, Json<Vec<Translation>>), AppError> {
    debug!("Upload translations request: {} entries for {}", entries.len(), domain);

    user.require_admin()?;

    let saved = state
        .translation_service
        .create_or_update_collection(&domain, entries, query.force)
        .await?;
    Ok(created(saved))
}

/// Flag keywords of a domain as deprecated (admin only).
#[utoipa::path(
    put,
    path = "/api/translations/deprecate/{domain}",
    tag = "translations",
    params(("domain" = String, Path, description = "The translation domain")),
    request_body = TranslationKeywordsRequest,
    responses(
        (status = 200, description = "Returned when successful", body = AffectedResponse),
        (status = 403, description = "Returned when the user is not an administrator")
    )
)]
pub async fn deprecate_translations(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(domain): Path<String>,
    Json(request): Json<TranslationKeywordsRequest>,
) -> ApiResult<AffectedResponse> {
    debug!("Deprecate translations request: {}", domain);

    user.require_admin()?;

    let affected = state
        .translation_service
        .deprecate(&domain, &request.keywords)
        .await?;
    ok(AffectedResponse { affected })
}

/// Disable entries of a domain deprecated before a cutoff date (admin only).
#[utoipa::path(
    put,
    path = "/api/translations/disable/{domain}",
    tag = "translations",
    params(("domain" = String, Path, description = "The translation domain")),
    request_body = DisableTranslationsRequest,
    responses(
        (status = 200, description = "Returned when successful", body = AffectedResponse),
        (status = 403, description = "Returned when the user is not an administrator")
    )
)]
pub async fn disable_translations(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(domain): Path<String>,
    Json(request): Json<DisableTranslationsRequest>,
) -> ApiResult<AffectedResponse> {
    debug!("Disable translations request: {}", domain);

    user.require_admin()?;

    let affected = state
        .translation_service
        .disable_deprecated_before(&domain, request.date)
        .await?;
    ok(AffectedResponse { affected })
}

/// Re-enable deprecated keywords of a domain (admin only).
#[utoipa::path(
    put,
    path = "/api/translations/enable/{domain}",
    tag = "translations",
    params(("domain" = String, Path, description = "The translation domain")),
    request_body = TranslationKeywordsRequest,
    responses(
        (status = 200, description = "Returned when successful", body = AffectedResponse),
        (status = 403, description = "Returned when the user is not an administrator")
    )
)]
pub async fn enable_translations(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(domain): Path<String>,
    Json(request): Json<TranslationKeywordsRequest>,
) -> ApiResult<AffectedResponse> {
    debug!("Enable translations request: {}", domain);

    user.require_admin()?;

    let affected = state
        .translation_service
        .enable(&domain, &request.keywords)
        .await?;
    ok(AffectedResponse { affected })
}
