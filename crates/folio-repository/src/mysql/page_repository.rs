//! MySQL page translation repository implementation.

use crate::source::{SqlArg, SqlFilter, SqlQuerySource};
use crate::traits::{PageFilter, PageRepository};
use crate::DatabasePool;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use folio_core::{
    DynSource, FolioError, FolioResult, NodeId, PageTranslation, PageTranslationId, PageVersionType,
};
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

const PAGE_COLUMNS: &str = "pt.id, pt.node_id, pt.locale, pt.title, pt.slug, pt.url, pt.online, \
     pt.weight, pt.version, pt.meta_title, pt.meta_description, pt.author_name, pt.template, \
     pt.created_at, pt.updated_at";

/// MySQL page translation repository implementation.
#[derive(Clone)]
pub struct MySqlPageRepository {
    pool: Arc<DatabasePool>,
}

impl MySqlPageRepository {
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a page translation.
#[derive(Debug, FromRow)]
struct PageTranslationRow {
    id: i64,
    node_id: i64,
    locale: String,
    title: String,
    slug: String,
    url: String,
    online: bool,
    weight: i32,
    version: String,
    meta_title: Option<String>,
    meta_description: Option<String>,
    author_name: Option<String>,
    template: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<PageTranslationRow> for PageTranslation {
    type Error = FolioError;

    fn try_from(row: PageTranslationRow) -> Result<Self, Self::Error> {
        Ok(PageTranslation {
            id: PageTranslationId::new(row.id),
            node_id: NodeId::new(row.node_id),
            locale: row.locale,
            title: row.title,
            slug: row.slug,
            url: row.url,
            online: row.online,
            weight: row.weight,
            version: PageVersionType::parse(&row.version),
            meta_title: row.meta_title,
            meta_description: row.meta_description,
            author_name: row.author_name,
            template: row.template,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl PageRepository for MySqlPageRepository {
    fn find(&self, filter: &PageFilter) -> DynSource<PageTranslation> {
        // Join mirrors the node-translation query builder: page filters live
        // on the owning node, content filters on the translation itself.
        let mut sql_filter = SqlFilter::new().and_clause("n.deleted = 0");

        if let Some(ref_entity_name) = &filter.ref_entity_name {
            sql_filter = sql_filter.and("n.ref_entity_name = ?", SqlArg::Str(ref_entity_name.clone()));
        }
        if let Some(locale) = &filter.locale {
            sql_filter = sql_filter.and("pt.locale = ?", SqlArg::Str(locale.clone()));
        }
        if let Some(internal_name) = &filter.internal_name {
            sql_filter = sql_filter.and("n.internal_name = ?", SqlArg::Str(internal_name.clone()));
        }
        if let Some(node_id) = filter.node_id {
            sql_filter = sql_filter.and("n.id = ?", SqlArg::Int(node_id.into_inner()));
        }
        if let Some(online) = filter.online {
            sql_filter = sql_filter.and("pt.online = ?", SqlArg::Bool(online));
        }
        if let Some(version) = filter.version {
            sql_filter = sql_filter.and("pt.version = ?", SqlArg::Str(version.as_str().to_string()));
        }

        let where_sql = sql_filter.where_sql();
        let select_sql = format!(
            "SELECT {PAGE_COLUMNS} FROM page_translations pt \
             INNER JOIN nodes n ON n.id = pt.node_id{where_sql} ORDER BY pt.id"
        );
        let count_sql = format!(
            "SELECT COUNT(*) FROM page_translations pt \
             INNER JOIN nodes n ON n.id = pt.node_id{where_sql}"
        );

        Box::new(SqlQuerySource::new(
            self.pool.inner().clone(),
            select_sql,
            count_sql,
            sql_filter.into_args(),
            PageTranslation::try_from,
        ))
    }

    async fn find_by_id(&self, id: PageTranslationId) -> FolioResult<Option<PageTranslation>> {
        debug!("Finding page translation by id: {}", id);

        let row = sqlx::query_as::<_, PageTranslationRow>(&format!(
            "SELECT {PAGE_COLUMNS} FROM page_translations pt WHERE pt.id = ?"
        ))
        .bind(id.into_inner())
        .fetch_optional(self.pool.inner())
        .await?;

        row.map(PageTranslation::try_from).transpose()
    }

    async fn find_online_by_id(&self, id: PageTranslationId) -> FolioResult<Option<PageTranslation>> {
        debug!("Finding online page translation by id: {}", id);

        let row = sqlx::query_as::<_, PageTranslationRow>(&format!(
            "SELECT {PAGE_COLUMNS} FROM page_translations pt WHERE pt.id = ? AND pt.online = 1"
        ))
        .bind(id.into_inner())
        .fetch_optional(self.pool.inner())
        .await?;

        row.map(PageTranslation::try_from).transpose()
    }

    async fn update(&self, translation: &PageTranslation) -> FolioResult<PageTranslation> {
        debug!("Updating page translation: {}", translation.id);

        sqlx::query(
            r#"
            UPDATE page_translations
            SET title = ?, slug = ?, url = ?, online = ?, weight = ?, version = ?,
                meta_title = ?, meta_description = ?, author_name = ?, template = ?,
                updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&translation.title)
        .bind(&translation.slug)
        .bind(&translation.url)
        .bind(translation.online)
        .bind(translation.weight)
        .bind(translation.version.as_str())
        .bind(&translation.meta_title)
        .bind(&translation.meta_description)
        .bind(&translation.author_name)
        .bind(&translation.template)
        .bind(Utc::now())
        .bind(translation.id.into_inner())
        .execute(self.pool.inner())
        .await?;

        self.find_by_id(translation.id)
            .await?
            .ok_or_else(|| FolioError::not_found("PageTranslation", translation.id))
    }
}
