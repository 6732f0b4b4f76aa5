//! Media DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request to register a media item.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateMediaRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 128))]
    pub content_type: String,

    #[validate(length(min = 1, max = 1024))]
    pub url: String,

    #[validate(range(min = 0))]
    pub file_size: i64,

    pub folder_id: i64,
}
