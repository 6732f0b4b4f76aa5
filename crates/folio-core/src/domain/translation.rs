//! Translation entity.

use crate::TranslationId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a translation.
///
/// Deprecation is a two-step removal: entries are first flagged, then
/// disabled in bulk once the flag is older than a cutoff date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum TranslationStatus {
    Enabled,
    Deprecated,
    Disabled,
}

impl TranslationStatus {
    /// Parses the stored representation; unknown values read as enabled.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "deprecated" => Self::Deprecated,
            "disabled" => Self::Disabled,
            _ => Self::Enabled,
        }
    }

    /// The stored representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Enabled => "enabled",
            Self::Deprecated => "deprecated",
            Self::Disabled => "disabled",
        }
    }
}

impl fmt::Display for TranslationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One localized text for a keyword in a domain.
///
/// Rows sharing a `translation_id` are the same keyword in different locales.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Translation {
    /// Unique identifier of this row.
    pub id: TranslationId,

    /// Group id shared by all locales of the same keyword.
    pub translation_id: i64,

    pub keyword: String,
    pub domain: String,
    pub locale: String,
    pub text: String,

    pub status: TranslationStatus,

    /// Origin marker; API-created entries carry [`Translation::REST_FILE`].
    pub file: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    /// When the entry was flagged deprecated.
    pub deprecated_at: Option<DateTime<Utc>>,
}

impl Translation {
    /// Origin marker for entries created through the REST API.
    pub const REST_FILE: &'static str = "REST";

    /// Creates an enabled, API-originated translation.
    #[must_use]
    pub fn new(
        keyword: impl Into<String>,
        domain: impl Into<String>,
        locale: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: TranslationId::new(0),
            translation_id: 0,
            keyword: keyword.into(),
            domain: domain.into(),
            locale: locale.into(),
            text: text.into(),
            status: TranslationStatus::Enabled,
            file: Self::REST_FILE.to_string(),
            created_at: now,
            updated_at: now,
            deprecated_at: None,
        }
    }

    /// Flags the entry deprecated.
    pub fn deprecate(&mut self) {
        self.status = TranslationStatus::Deprecated;
        self.deprecated_at = Some(Utc::now());
        self.updated_at = Utc::now();
    }

    /// Disables the entry.
    pub fn disable(&mut self) {
        self.status = TranslationStatus::Disabled;
        self.updated_at = Utc::now();
    }

    /// Re-enables the entry and clears the deprecation flag.
    pub fn enable(&mut self) {
        self.status = TranslationStatus::Enabled;
        self.deprecated_at = None;
        self.updated_at = Utc::now();
    }

    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        matches!(self.status, TranslationStatus::Disabled)
    }
}
