//! MySQL media repository implementation.

use crate::source::{escape_like, SqlArg, SqlFilter, SqlQuerySource};
use crate::traits::{MediaFilter, MediaRepository};
use crate::DatabasePool;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use folio_core::{DynSource, Folder, FolderId, FolioError, FolioResult, Media, MediaId};
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

const MEDIA_COLUMNS: &str =
    "m.id, m.uuid, m.name, m.content_type, m.url, m.file_size, m.folder_id, m.deleted, \
     m.created_at, m.updated_at";

/// MySQL media repository implementation.
#[derive(Clone)]
pub struct MySqlMediaRepository {
    pool: Arc<DatabasePool>,
}

impl MySqlMediaRepository {
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a media item.
#[derive(Debug, FromRow)]
struct MediaRow {
    id: i64,
    uuid: String, // stored as CHAR(36)
    name: String,
    content_type: String,
    url: String,
    file_size: i64,
    folder_id: i64,
    deleted: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<MediaRow> for Media {
    type Error = FolioError;

    fn try_from(row: MediaRow) -> Result<Self, Self::Error> {
        let uuid = Uuid::parse_str(&row.uuid)
            .map_err(|e| FolioError::Internal(format!("Invalid UUID in database: {}", e)))?;

        Ok(Media {
            id: MediaId::new(row.id),
            uuid,
            name: row.name,
            content_type: row.content_type,
            url: row.url,
            file_size: row.file_size,
            folder_id: FolderId::new(row.folder_id),
            deleted: row.deleted,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Database row representation of a folder.
#[derive(Debug, FromRow)]
struct FolderRow {
    id: i64,
    name: String,
    rel: Option<String>,
    parent_id: Option<i64>,
    deleted: bool,
}

impl From<FolderRow> for Folder {
    fn from(row: FolderRow) -> Self {
        Self {
            id: FolderId::new(row.id),
            name: row.name,
            rel: row.rel,
            parent_id: row.parent_id.map(FolderId::new),
            deleted: row.deleted,
        }
    }
}

#[async_trait]
impl MediaRepository for MySqlMediaRepository {
    fn find(&self, filter: &MediaFilter) -> DynSource<Media> {
        let mut sql_filter = SqlFilter::new().and_clause("m.deleted = 0");

        if let Some(folder_id) = filter.folder_id {
            sql_filter = sql_filter.and("m.folder_id = ?", SqlArg::Int(folder_id.into_inner()));
        }
        if let Some(name) = &filter.name {
            sql_filter = sql_filter.and(
                "m.name LIKE ?",
                SqlArg::Str(format!("%{}%", escape_like(name))),
            );
        }

        let where_sql = sql_filter.where_sql();
        let select_sql = format!("SELECT {MEDIA_COLUMNS} FROM media m{where_sql} ORDER BY m.id");
        let count_sql = format!("SELECT COUNT(*) FROM media m{where_sql}");

        Box::new(SqlQuerySource::new(
            self.pool.inner().clone(),
            select_sql,
            count_sql,
            sql_filter.into_args(),
            Media::try_from,
        ))
    }

    async fn find_by_id(&self, id: MediaId) -> FolioResult<Option<Media>> {
        debug!("Finding media by id: {}", id);

        let row = sqlx::query_as::<_, MediaRow>(&format!(
            "SELECT {MEDIA_COLUMNS} FROM media m WHERE m.id = ? AND m.deleted = 0"
        ))
        .bind(id.into_inner())
        .fetch_optional(self.pool.inner())
        .await?;

        row.map(Media::try_from).transpose()
    }

    async fn find_folder(&self, id: FolderId) -> FolioResult<Option<Folder>> {
        debug!("Finding folder by id: {}", id);

        let row = sqlx::query_as::<_, FolderRow>(
            "SELECT id, name, rel, parent_id, deleted FROM folders WHERE id = ? AND deleted = 0",
        )
        .bind(id.into_inner())
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(Folder::from))
    }

    async fn save(&self, media: &Media) -> FolioResult<Media> {
        debug!("Saving media: {}", media.name);

        let result = sqlx::query(
            r#"
            INSERT INTO media (uuid, name, content_type, url, file_size, folder_id, deleted,
                               created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(media.uuid.to_string())
        .bind(&media.name)
        .bind(&media.content_type)
        .bind(&media.url)
        .bind(media.file_size)
        .bind(media.folder_id.into_inner())
        .bind(media.deleted)
        .bind(media.created_at)
        .bind(media.updated_at)
        .execute(self.pool.inner())
        .await?;

        let mut saved = media.clone();
        saved.id = MediaId::new(result.last_insert_id() as i64);
        Ok(saved)
    }

    async fn delete(&self, id: MediaId) -> FolioResult<bool> {
        debug!("Soft-deleting media: {}", id);

        let result = sqlx::query("UPDATE media SET deleted = 1, updated_at = ? WHERE id = ? AND deleted = 0")
            .bind(Utc::now())
            .bind(id.into_inner())
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
