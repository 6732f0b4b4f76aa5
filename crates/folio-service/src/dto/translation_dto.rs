//! Translation DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// One entry of a bulk translation upload.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct TranslationEntry {
    #[validate(length(min = 1, max = 255, message = "Keyword must be 1-255 characters"))]
    pub keyword: String,

    #[validate(custom(function = "folio_core::validation::rules::valid_locale"))]
    pub locale: String,

    #[validate(length(min = 1, message = "Text must not be empty"))]
    pub text: String,
}

/// Request naming keywords to deprecate or re-enable.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct TranslationKeywordsRequest {
    #[validate(length(min = 1, message = "At least one keyword is required"))]
    pub keywords: Vec<String>,
}

/// Request to disable entries deprecated before a cutoff date.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DisableTranslationsRequest {
    pub date: DateTime<Utc>,
}
