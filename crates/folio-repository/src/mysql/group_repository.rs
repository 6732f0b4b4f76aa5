//! MySQL group repository implementation.

use crate::source::{SqlFilter, SqlQuerySource};
use crate::traits::GroupRepository;
use crate::DatabasePool;
use async_trait::async_trait;
use folio_core::{DynSource, FolioError, FolioResult, Group, GroupId};
use sqlx::types::Json;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// MySQL group repository implementation.
#[derive(Clone)]
pub struct MySqlGroupRepository {
    pool: Arc<DatabasePool>,
}

impl MySqlGroupRepository {
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct GroupRow {
    id: i64,
    name: String,
    roles: Json<Vec<String>>,
}

impl TryFrom<GroupRow> for Group {
    type Error = FolioError;

    fn try_from(row: GroupRow) -> Result<Self, Self::Error> {
        Ok(Group {
            id: GroupId::new(row.id),
            name: row.name,
            roles: row.roles.0,
        })
    }
}

#[async_trait]
impl GroupRepository for MySqlGroupRepository {
    fn find_all(&self) -> DynSource<Group> {
        let filter = SqlFilter::new();
        Box::new(SqlQuerySource::new(
            self.pool.inner().clone(),
            "SELECT id, name, roles FROM user_groups ORDER BY id".to_string(),
            "SELECT COUNT(*) FROM user_groups".to_string(),
            filter.into_args(),
            Group::try_from,
        ))
    }

    async fn find_by_id(&self, id: GroupId) -> FolioResult<Option<Group>> {
        debug!("Finding group by id: {}", id);

        let row = sqlx::query_as::<_, GroupRow>("SELECT id, name, roles FROM user_groups WHERE id = ?")
            .bind(id.into_inner())
            .fetch_optional(self.pool.inner())
            .await?;

        row.map(Group::try_from).transpose()
    }

    async fn save(&self, group: &Group) -> FolioResult<Group> {
        debug!("Saving group: {}", group.name);

        let result = sqlx::query("INSERT INTO user_groups (name, roles) VALUES (?, ?)")
            .bind(&group.name)
            .bind(Json(&group.roles))
            .execute(self.pool.inner())
            .await?;

        let mut saved = group.clone();
        saved.id = GroupId::new(result.last_insert_id() as i64);
        Ok(saved)
    }

    async fn update(&self, group: &Group) -> FolioResult<Group> {
        debug!("Updating group: {}", group.id);

        let result = sqlx::query("UPDATE user_groups SET name = ?, roles = ? WHERE id = ?")
            .bind(&group.name)
            .bind(Json(&group.roles))
            .bind(group.id.into_inner())
            .execute(self.pool.inner())
            .await?;

        if result.rows_affected() == 0 {
            return Err(FolioError::not_found("Group", group.id));
        }
        Ok(group.clone())
    }

    async fn delete(&self, id: GroupId) -> FolioResult<bool> {
        debug!("Deleting group: {}", id);

        let result = sqlx::query("DELETE FROM user_groups WHERE id = ?")
            .bind(id.into_inner())
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
