//! MySQL translation repository implementation.

use crate::source::{SqlArg, SqlFilter, SqlQuerySource};
use crate::traits::{TranslationFilter, TranslationRepository};
use crate::DatabasePool;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use folio_core::{DynSource, FolioError, FolioResult, Translation, TranslationId, TranslationStatus};
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

const TRANSLATION_COLUMNS: &str = "t.id, t.translation_id, t.keyword, t.domain, t.locale, t.text, \
     t.status, t.file, t.created_at, t.updated_at, t.deprecated_at";

/// MySQL translation repository implementation.
#[derive(Clone)]
pub struct MySqlTranslationRepository {
    pool: Arc<DatabasePool>,
}

impl MySqlTranslationRepository {
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a translation.
#[derive(Debug, FromRow)]
struct TranslationRow {
    id: i64,
    translation_id: i64,
    keyword: String,
    domain: String,
    locale: String,
    text: String,
    status: String,
    file: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deprecated_at: Option<DateTime<Utc>>,
}

impl TryFrom<TranslationRow> for Translation {
    type Error = FolioError;

    fn try_from(row: TranslationRow) -> Result<Self, Self::Error> {
        Ok(Translation {
            id: TranslationId::new(row.id),
            translation_id: row.translation_id,
            keyword: row.keyword,
            domain: row.domain,
            locale: row.locale,
            text: row.text,
            status: TranslationStatus::parse(&row.status),
            file: row.file,
            created_at: row.created_at,
            updated_at: row.updated_at,
            deprecated_at: row.deprecated_at,
        })
    }
}

#[async_trait]
impl TranslationRepository for MySqlTranslationRepository {
    fn find(&self, filter: &TranslationFilter) -> DynSource<Translation> {
        let mut sql_filter = SqlFilter::new();

        if let Some(status) = filter.status {
            sql_filter = sql_filter.and("t.status = ?", SqlArg::Str(status.as_str().to_string()));
        }
        if let Some(locale) = &filter.locale {
            sql_filter = sql_filter.and("t.locale = ?", SqlArg::Str(locale.clone()));
        }
        if let Some(domain) = &filter.domain {
            sql_filter = sql_filter.and("t.domain = ?", SqlArg::Str(domain.clone()));
        }
        if let Some(keyword) = &filter.keyword {
            sql_filter = sql_filter.and("t.keyword = ?", SqlArg::Str(keyword.clone()));
        }

        let where_sql = sql_filter.where_sql();
        let select_sql =
            format!("SELECT {TRANSLATION_COLUMNS} FROM translations t{where_sql} ORDER BY t.id");
        let count_sql = format!("SELECT COUNT(*) FROM translations t{where_sql}");

        Box::new(SqlQuerySource::new(
            self.pool.inner().clone(),
            select_sql,
            count_sql,
            sql_filter.into_args(),
            Translation::try_from,
        ))
    }

    async fn find_by_domain(&self, domain: &str, locale: Option<&str>) -> FolioResult<Vec<Translation>> {
        debug!("Finding translations for domain: {}", domain);

        let rows = if let Some(locale) = locale {
            sqlx::query_as::<_, TranslationRow>(&format!(
                "SELECT {TRANSLATION_COLUMNS} FROM translations t \
                 WHERE t.domain = ? AND t.locale = ? AND t.status = 'enabled' ORDER BY t.keyword"
            ))
            .bind(domain)
            .bind(locale)
            .fetch_all(self.pool.inner())
            .await?
        } else {
            sqlx::query_as::<_, TranslationRow>(&format!(
                "SELECT {TRANSLATION_COLUMNS} FROM translations t \
                 WHERE t.domain = ? AND t.status = 'enabled' ORDER BY t.keyword"
            ))
            .bind(domain)
            .fetch_all(self.pool.inner())
            .await?
        };

        rows.into_iter().map(Translation::try_from).collect()
    }

    async fn find_one(&self, domain: &str, keyword: &str, locale: &str) -> FolioResult<Option<Translation>> {
        let row = sqlx::query_as::<_, TranslationRow>(&format!(
            "SELECT {TRANSLATION_COLUMNS} FROM translations t \
             WHERE t.domain = ? AND t.keyword = ? AND t.locale = ? AND t.status = 'enabled'"
        ))
        .bind(domain)
        .bind(keyword)
        .bind(locale)
        .fetch_optional(self.pool.inner())
        .await?;

        row.map(Translation::try_from).transpose()
    }

    async fn find_by_keyword_and_domain(&self, keyword: &str, domain: &str) -> FolioResult<Vec<Translation>> {
        let rows = sqlx::query_as::<_, TranslationRow>(&format!(
            "SELECT {TRANSLATION_COLUMNS} FROM translations t \
             WHERE t.keyword = ? AND t.domain = ? ORDER BY t.locale"
        ))
        .bind(keyword)
        .bind(domain)
        .fetch_all(self.pool.inner())
        .await?;

        rows.into_iter().map(Translation::try_from).collect()
    }

    async fn find_deprecated_before(&self, date: DateTime<Utc>, domain: &str) -> FolioResult<Vec<Translation>> {
        debug!("Finding translations deprecated before {} in domain {}", date, domain);

        let rows = sqlx::query_as::<_, TranslationRow>(&format!(
            "SELECT {TRANSLATION_COLUMNS} FROM translations t \
             WHERE t.domain = ? AND t.status = 'deprecated' AND t.deprecated_at < ? ORDER BY t.id"
        ))
        .bind(domain)
        .bind(date)
        .fetch_all(self.pool.inner())
        .await?;

        rows.into_iter().map(Translation::try_from).collect()
    }

    async fn next_translation_group_id(&self) -> FolioResult<i64> {
        let max: Option<i64> = sqlx::query_scalar("SELECT MAX(translation_id) FROM translations")
            .fetch_one(self.pool.inner())
            .await?;

        Ok(max.unwrap_or(0) + 1)
    }

    async fn save(&self, translation: &Translation) -> FolioResult<Translation> {
        debug!(
            "Saving translation: {} [{}] in {}",
            translation.keyword, translation.locale, translation.domain
        );

        let result = sqlx::query(
            r#"
            INSERT INTO translations (translation_id, keyword, domain, locale, text, status,
                                      file, created_at, updated_at, deprecated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(translation.translation_id)
        .bind(&translation.keyword)
        .bind(&translation.domain)
        .bind(&translation.locale)
        .bind(&translation.text)
        .bind(translation.status.as_str())
        .bind(&translation.file)
        .bind(translation.created_at)
        .bind(translation.updated_at)
        .bind(translation.deprecated_at)
        .execute(self.pool.inner())
        .await?;

        let mut saved = translation.clone();
        saved.id = TranslationId::new(result.last_insert_id() as i64);
        Ok(saved)
    }

    async fn update(&self, translation: &Translation) -> FolioResult<Translation> {
        debug!("Updating translation: {}", translation.id);

        let result = sqlx::query(
            r#"
            UPDATE translations
            SET text = ?, status = ?, updated_at = ?, deprecated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&translation.text)
        .bind(translation.status.as_str())
        .bind(Utc::now())
        .bind(translation.deprecated_at)
        .bind(translation.id.into_inner())
        .execute(self.pool.inner())
        .await?;

        if result.rows_affected() == 0 {
            return Err(FolioError::not_found("Translation", translation.id));
        }
        Ok(translation.clone())
    }
}
