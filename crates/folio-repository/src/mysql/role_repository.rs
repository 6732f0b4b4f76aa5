//! MySQL role repository implementation.

use crate::source::{SqlFilter, SqlQuerySource};
use crate::traits::RoleRepository;
use crate::DatabasePool;
use async_trait::async_trait;
use folio_core::{DynSource, FolioError, FolioResult, Role, RoleId};
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// MySQL role repository implementation.
#[derive(Clone)]
pub struct MySqlRoleRepository {
    pool: Arc<DatabasePool>,
}

impl MySqlRoleRepository {
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct RoleRow {
    id: i64,
    role: String,
}

impl TryFrom<RoleRow> for Role {
    type Error = FolioError;

    fn try_from(row: RoleRow) -> Result<Self, Self::Error> {
        Ok(Role {
            id: RoleId::new(row.id),
            role: row.role,
        })
    }
}

#[async_trait]
impl RoleRepository for MySqlRoleRepository {
    fn find_all(&self) -> DynSource<Role> {
        let filter = SqlFilter::new();
        Box::new(SqlQuerySource::new(
            self.pool.inner().clone(),
            "SELECT id, role FROM roles ORDER BY id".to_string(),
            "SELECT COUNT(*) FROM roles".to_string(),
            filter.into_args(),
            Role::try_from,
        ))
    }

    async fn find_by_id(&self, id: RoleId) -> FolioResult<Option<Role>> {
        debug!("Finding role by id: {}", id);

        let row = sqlx::query_as::<_, RoleRow>("SELECT id, role FROM roles WHERE id = ?")
            .bind(id.into_inner())
            .fetch_optional(self.pool.inner())
            .await?;

        row.map(Role::try_from).transpose()
    }

    async fn save(&self, role: &Role) -> FolioResult<Role> {
        debug!("Saving role: {}", role.role);

        let result = sqlx::query("INSERT INTO roles (role) VALUES (?)")
            .bind(&role.role)
            .execute(self.pool.inner())
            .await?;

        let mut saved = role.clone();
        saved.id = RoleId::new(result.last_insert_id() as i64);
        Ok(saved)
    }

    async fn update(&self, role: &Role) -> FolioResult<Role> {
        debug!("Updating role: {}", role.id);

        let result = sqlx::query("UPDATE roles SET role = ? WHERE id = ?")
            .bind(&role.role)
            .bind(role.id.into_inner())
            .execute(self.pool.inner())
            .await?;

        if result.rows_affected() == 0 {
            return Err(FolioError::not_found("Role", role.id));
        }
        Ok(role.clone())
    }

    async fn delete(&self, id: RoleId) -> FolioResult<bool> {
        debug!("Deleting role: {}", id);

        let result = sqlx::query("DELETE FROM roles WHERE id = ?")
            .bind(id.into_inner())
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
