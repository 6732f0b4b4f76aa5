//! Translation service trait definition.

use crate::dto::TranslationEntry;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use folio_core::{FolioResult, Translation};

/// Translation service trait.
///
/// Owns the translation lifecycle: bulk create-or-update and the
/// deprecate / disable / enable flows.
#[async_trait]
pub trait TranslationService: Send + Sync {
    /// Creates or updates every entry of a bulk upload for one domain.
    ///
    /// Disabled entries are re-enabled; existing texts are only overwritten
    /// when `force` is set. An invalid entry fails the whole request.
    async fn create_or_update_collection(
        &self,
        domain: &str,
        entries: Vec<TranslationEntry>,
        force: bool,
    ) -> FolioResult<Vec<Translation>>;

    /// Flags all rows of the given keywords as deprecated.
    async fn deprecate(&self, domain: &str, keywords: &[String]) -> FolioResult<u64>;

    /// Disables rows deprecated before the given date.
    async fn disable_deprecated_before(&self, domain: &str, date: DateTime<Utc>) -> FolioResult<u64>;

    /// Re-enables all rows of the given keywords.
    async fn enable(&self, domain: &str, keywords: &[String]) -> FolioResult<u64>;
}
