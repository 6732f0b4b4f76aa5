//! API key authentication middleware.

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::Response,
};
use folio_repository::UserRepository;
use std::sync::Arc;
use tracing::debug;

/// Authentication middleware state.
#[derive(Clone)]
pub struct AuthMiddlewareState {
    pub user_repository: Arc<dyn UserRepository>,
    pub api_key_header: String,
}

impl AuthMiddlewareState {
    #[must_use]
    pub fn new(user_repository: Arc<dyn UserRepository>, api_key_header: impl Into<String>) -> Self {
        Self {
            user_repository,
            api_key_header: api_key_header.into(),
        }
    }
}

/// Authentication middleware resolving the API key header.
///
/// A valid, enabled user is stored in the request extensions; an unknown or
/// missing key just leaves the extensions empty. Handlers decide through the
/// `AuthenticatedUser` extractor whether authentication is required, so
/// public routes can share the same middleware stack.
pub async fn auth_middleware(
    State(state): State<AuthMiddlewareState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let api_key = request
        .headers()
        .get(state.api_key_header.as_str())
        .and_then(|h| h.to_str().ok())
        .map(str::to_owned);

    if let Some(api_key) = api_key {
        match state.user_repository.find_by_api_key(&api_key).await {
            Ok(Some(user)) => {
                debug!("Authenticated API user: {}", user.username);
                request.extensions_mut().insert(user);
            }
            Ok(None) => {
                debug!("Unknown or disabled API key presented");
            }
            Err(e) => {
                debug!("API key lookup failed: {}", e);
                return Err(StatusCode::INTERNAL_SERVER_ERROR);
            }
        }
    }

    Ok(next.run(request).await)
}
