//! User service trait definition.

use crate::dto::{CreateUserRequest, UpdateUserRequest};
use async_trait::async_trait;
use folio_core::{ApiUser, FolioResult, UserId};

/// User service trait.
///
/// Owns provisioning of API consumers, including key generation.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Creates a new API user, generating a key when none was supplied.
    async fn create_user(&self, request: CreateUserRequest) -> FolioResult<ApiUser>;

    /// Updates an existing user; optionally rotates the API key.
    async fn update_user(&self, id: UserId, request: UpdateUserRequest) -> FolioResult<ApiUser>;

    /// Deletes a user.
    async fn delete_user(&self, id: UserId) -> FolioResult<()>;
}
