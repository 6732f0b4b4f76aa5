//! Translation service implementation.

use crate::dto::TranslationEntry;
use crate::translation_service::TranslationService;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use folio_core::{FolioResult, Translation, TranslationStatus, ValidateExt};
use folio_repository::TranslationRepository;
use std::sync::Arc;
use tracing::{debug, info};

/// Translation service implementation.
pub struct TranslationServiceImpl<R: TranslationRepository> {
    translation_repository: Arc<R>,
}

impl<R: TranslationRepository> TranslationServiceImpl<R> {
    /// Creates a new translation service.
    pub fn new(translation_repository: Arc<R>) -> Self {
        Self { translation_repository }
    }
}

impl<R: TranslationRepository> TranslationServiceImpl<R> {
    /// Creates or updates one entry, reusing the keyword's group id when any
    /// locale of it already exists.
    async fn create_or_update_entry(
        &self,
        domain: &str,
        entry: TranslationEntry,
        force: bool,
    ) -> FolioResult<Translation> {
        let siblings = self
            .translation_repository
            .find_by_keyword_and_domain(&entry.keyword, domain)
            .await?;

        if let Some(existing) = siblings.iter().find(|t| t.locale == entry.locale) {
            let mut existing = existing.clone();
            let mut dirty = false;

            if existing.is_disabled() {
                existing.enable();
                dirty = true;
            }
            if force && existing.text != entry.text {
                existing.text = entry.text;
                dirty = true;
            }

            if dirty {
                return self.translation_repository.update(&existing).await;
            }
            return Ok(existing);
        }

        let group_id = match siblings.first() {
            Some(sibling) => sibling.translation_id,
            None => self.translation_repository.next_translation_group_id().await?,
        };

        let mut translation = Translation::new(entry.keyword, domain, entry.locale, entry.text);
        translation.translation_id = group_id;

        self.translation_repository.save(&translation).await
    }

    /// Applies a status change to every row of the given keywords.
    async fn update_status(
        &self,
        domain: &str,
        keywords: &[String],
        apply: fn(&mut Translation) -> bool,
    ) -> FolioResult<u64> {
        let mut changed = 0;
        for keyword in keywords {
            let rows = self
                .translation_repository
                .find_by_keyword_and_domain(keyword, domain)
                .await?;

            for mut row in rows {
                if apply(&mut row) {
                    self.translation_repository.update(&row).await?;
                    changed += 1;
                }
            }
        }
        Ok(changed)
    }
}

#[async_trait]
impl<R: TranslationRepository + 'static> TranslationService for TranslationServiceImpl<R> {
    async fn create_or_update_collection(
        &self,
        domain: &str,
        entries: Vec<TranslationEntry>,
        force: bool,
    ) -> FolioResult<Vec<Translation>> {
        debug!("Upserting {} translations in domain {}", entries.len(), domain);

        // Validate everything up front: one bad entry fails the whole upload.
        for entry in &entries {
            entry.validate_request()?;
        }

        let mut result = Vec::with_capacity(entries.len());
        for entry in entries {
            result.push(self.create_or_update_entry(domain, entry, force).await?);
        }

        info!("Upserted {} translations in domain {}", result.len(), domain);
        Ok(result)
    }

    async fn deprecate(&self, domain: &str, keywords: &[String]) -> FolioResult<u64> {
        debug!("Deprecating {} keywords in domain {}", keywords.len(), domain);

        self.update_status(domain, keywords, |row| {
            if row.status == TranslationStatus::Enabled {
                row.deprecate();
                true
            } else {
                false
            }
        })
        .await
    }

    async fn disable_deprecated_before(&self, domain: &str, date: DateTime<Utc>) -> FolioResult<u64> {
        debug!("Disabling translations deprecated before {} in domain {}", date, domain);

        let rows = self
            .translation_repository
            .find_deprecated_before(date, domain)
            .await?;

        let mut changed = 0;
        for mut row in rows {
            row.disable();
            self.translation_repository.update(&row).await?;
            changed += 1;
        }

        info!("Disabled {} translations in domain {}", changed, domain);
        Ok(changed)
    }

    async fn enable(&self, domain: &str, keywords: &[String]) -> FolioResult<u64> {
        debug!("Enabling {} keywords in domain {}", keywords.len(), domain);

        self.update_status(domain, keywords, |row| {
            if row.status == TranslationStatus::Enabled {
                false
            } else {
                row.enable();
                true
            }
        })
        .await
    }
}
