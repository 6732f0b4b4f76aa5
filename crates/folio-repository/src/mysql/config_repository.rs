//! MySQL site configuration repository implementation.

use crate::traits::SiteConfigRepository;
use crate::DatabasePool;
use async_trait::async_trait;
use folio_core::{FolioError, FolioResult, SiteConfig, SiteConfigId};
use sqlx::types::Json;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// MySQL site configuration repository implementation.
#[derive(Clone)]
pub struct MySqlSiteConfigRepository {
    pool: Arc<DatabasePool>,
}

impl MySqlSiteConfigRepository {
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct SiteConfigRow {
    id: i64,
    internal_name: String,
    name: String,
    value: Json<serde_json::Value>,
}

impl TryFrom<SiteConfigRow> for SiteConfig {
    type Error = FolioError;

    fn try_from(row: SiteConfigRow) -> Result<Self, Self::Error> {
        Ok(SiteConfig {
            id: SiteConfigId::new(row.id),
            internal_name: row.internal_name,
            name: row.name,
            value: row.value.0,
        })
    }
}

#[async_trait]
impl SiteConfigRepository for MySqlSiteConfigRepository {
    async fn find_by_internal_name(&self, internal_name: &str) -> FolioResult<Option<SiteConfig>> {
        debug!("Finding site config: {}", internal_name);

        let row = sqlx::query_as::<_, SiteConfigRow>(
            "SELECT id, internal_name, name, value FROM site_config WHERE internal_name = ?",
        )
        .bind(internal_name)
        .fetch_optional(self.pool.inner())
        .await?;

        row.map(SiteConfig::try_from).transpose()
    }
}
