//! Main application router.

use crate::{
    controllers::{
        authors_controller, config_controller, form_submissions_controller, groups_controller,
        health_controller, media_controller, menu_controller, nodes_controller, pages_controller,
        redirects_controller, roles_controller, translations_controller, users_controller,
    },
    middleware::{auth_middleware, logging_middleware, AuthMiddlewareState},
    openapi::ApiDoc,
    state::AppState,
};
use axum::{http::HeaderValue, middleware, Router};
use folio_config::{SecurityConfig, ServerConfig};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Creates the main application router.
///
/// Every controller is mounted under `/api`; the auth middleware resolves the
/// API key header for all of them, and each handler decides through the
/// `AuthenticatedUser` extractor whether authentication (and which role) is
/// required, so the `/api/public` routes share the same stack.
pub fn create_router(
    state: AppState,
    security_config: &SecurityConfig,
    server_config: &ServerConfig,
) -> Router {
    let cors = create_cors_layer(server_config);

    let auth_state = AuthMiddlewareState::new(
        state.user_repository.clone(),
        security_config.api_key_header.clone(),
    );

    let api_router = Router::new()
        .merge(nodes_controller::router())
        .merge(pages_controller::router())
        .merge(media_controller::router())
        .merge(menu_controller::router())
        .merge(users_controller::router())
        .merge(groups_controller::router())
        .merge(roles_controller::router())
        .merge(redirects_controller::router())
        .merge(config_controller::router())
        .merge(translations_controller::router())
        .merge(authors_controller::router())
        .merge(form_submissions_controller::router())
        .layer(middleware::from_fn_with_state(auth_state, auth_middleware))
        .with_state(state);

    let router = Router::new()
        // Health endpoint (no auth required)
        .merge(health_controller::router())
        .nest("/api", api_router)
        // Swagger UI and OpenAPI spec
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(logging_middleware));

    info!("Router created with REST endpoints and Swagger UI at /swagger-ui");
    router
}

/// Creates a CORS layer based on server configuration.
fn create_cors_layer(server_config: &ServerConfig) -> CorsLayer {
    if !server_config.cors_enabled {
        return CorsLayer::new();
    }

    if server_config.cors_origins.iter().any(|origin| origin == "*") {
        CorsLayer::permissive()
    } else {
        let origins: Vec<HeaderValue> = server_config
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
