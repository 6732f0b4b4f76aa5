//! Authenticated user extractor.

use crate::responses::AppError;
use axum::{extract::FromRequestParts, http::request::Parts};
use folio_core::{ApiUser, FolioError};

/// Extractor for the authenticated API user.
///
/// The auth middleware resolves the `X-Api-Key` header and stores the user in
/// request extensions; this extractor fails with 401 when no valid key was
/// presented.
pub struct AuthenticatedUser(pub ApiUser);

impl AuthenticatedUser {
    /// Fails with 403 unless the user carries the given role.
    pub fn require_role(&self, role: &str) -> Result<(), AppError> {
        if self.0.has_role(role) {
            Ok(())
        } else {
            Err(AppError(FolioError::forbidden(format!(
                "Role {role} is required"
            ))))
        }
    }

    /// Fails with 403 unless the user is an administrator.
    pub fn require_admin(&self) -> Result<(), AppError> {
        self.require_role(folio_core::ROLE_ADMIN)
    }
}

impl std::ops::Deref for AuthenticatedUser {
    type Target = ApiUser;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[async_trait::async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<ApiUser>()
            .cloned()
            .map(AuthenticatedUser)
            .ok_or_else(|| AppError(FolioError::unauthorized("Missing or invalid API key")))
    }
}

/// Optional authenticated user extractor for public endpoints.
pub struct OptionalUser(pub Option<ApiUser>);

#[async_trait::async_trait]
impl<S> FromRequestParts<S> for OptionalUser
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(OptionalUser(parts.extensions.get::<ApiUser>().cloned()))
    }
}
