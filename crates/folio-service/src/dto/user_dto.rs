//! User, group and role DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request to create an API user.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[validate(length(min = 3, max = 64, message = "Username must be 3-64 characters"))]
    pub username: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    /// Explicit key; generated when omitted.
    pub api_key: Option<String>,

    #[serde(default)]
    pub roles: Vec<String>,

    /// Defaults to enabled.
    pub enabled: Option<bool>,
}

/// Request to update an API user.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,

    pub enabled: Option<bool>,

    pub roles: Option<Vec<String>>,

    /// `true` rotates the API key.
    #[serde(default)]
    pub regenerate_api_key: bool,
}

/// Request to create or update a group.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct GroupRequest {
    #[validate(length(min = 1, max = 128, message = "Name must be 1-128 characters"))]
    pub name: String,

    #[serde(default)]
    pub roles: Vec<String>,
}

/// Request to create or update a role.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RoleRequest {
    #[validate(length(min = 1, max = 64, message = "Role must be 1-64 characters"))]
    pub role: String,
}
