//! Menu DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request to create or update a menu.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct MenuRequest {
    #[validate(length(min = 1, max = 128, message = "Name must be 1-128 characters"))]
    pub name: String,

    #[validate(custom(function = "folio_core::validation::rules::valid_locale"))]
    pub locale: String,
}

/// Request to create or update a menu item.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct MenuItemRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    #[validate(length(max = 1024))]
    pub url: Option<String>,

    #[serde(default)]
    pub new_window: bool,

    /// Defaults to online.
    pub online: Option<bool>,

    #[serde(default)]
    pub weight: i32,

    pub parent_id: Option<i64>,
}
