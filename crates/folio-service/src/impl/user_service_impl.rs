//! User service implementation.

use crate::dto::{CreateUserRequest, UpdateUserRequest};
use crate::user_service::UserService;
use async_trait::async_trait;
use folio_core::{ApiUser, FolioError, FolioResult, UserId, ValidateExt};
use folio_repository::UserRepository;
use std::sync::Arc;
use tracing::{debug, info};

/// User service implementation.
pub struct UserServiceImpl<R: UserRepository> {
    user_repository: Arc<R>,
}

impl<R: UserRepository> UserServiceImpl<R> {
    /// Creates a new user service.
    pub fn new(user_repository: Arc<R>) -> Self {
        Self { user_repository }
    }
}

#[async_trait]
impl<R: UserRepository + 'static> UserService for UserServiceImpl<R> {
    async fn create_user(&self, request: CreateUserRequest) -> FolioResult<ApiUser> {
        debug!("Creating user: {}", request.username);

        request.validate_request()?;

        if self.user_repository.exists_by_username(&request.username).await? {
            return Err(FolioError::Conflict(format!(
                "Username '{}' already exists",
                request.username
            )));
        }

        let mut user = ApiUser::new(request.username, request.email);
        user.roles = request.roles;
        if let Some(enabled) = request.enabled {
            user.enabled = enabled;
        }
        user.api_key = request.api_key;
        user.ensure_api_key();

        let saved = self.user_repository.save(&user).await?;

        info!("User created: {}", saved.id);
        Ok(saved)
    }

    async fn update_user(&self, id: UserId, request: UpdateUserRequest) -> FolioResult<ApiUser> {
        debug!("Updating user: {}", id);

        request.validate_request()?;

        let mut user = self
            .user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| FolioError::not_found("ApiUser", id))?;

        if let Some(email) = request.email {
            user.email = email;
        }
        if let Some(enabled) = request.enabled {
            user.set_enabled(enabled);
        }
        if let Some(roles) = request.roles {
            user.roles = roles;
        }
        if request.regenerate_api_key {
            user.api_key = Some(ApiUser::generate_api_key());
        }

        let updated = self.user_repository.update(&user).await?;

        info!("User updated: {}", id);
        Ok(updated)
    }

    async fn delete_user(&self, id: UserId) -> FolioResult<()> {
        debug!("Deleting user: {}", id);

        if !self.user_repository.delete(id).await? {
            return Err(FolioError::not_found("ApiUser", id));
        }

        info!("User deleted: {}", id);
        Ok(())
    }
}
