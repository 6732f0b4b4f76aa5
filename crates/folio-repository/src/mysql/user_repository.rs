//! MySQL API user repository implementation.

use crate::source::{SqlArg, SqlFilter, SqlQuerySource};
use crate::traits::{UserFilter, UserRepository};
use crate::DatabasePool;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use folio_core::{ApiUser, DynSource, FolioError, FolioResult, UserId};
use sqlx::types::Json;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

const USER_COLUMNS: &str =
    "u.id, u.username, u.email, u.enabled, u.api_key, u.roles, u.created_at, u.updated_at";

/// MySQL API user repository implementation.
#[derive(Clone)]
pub struct MySqlUserRepository {
    pool: Arc<DatabasePool>,
}

impl MySqlUserRepository {
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

/// Database row representation of an API user.
#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    username: String,
    email: String,
    enabled: bool,
    api_key: Option<String>,
    roles: Json<Vec<String>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for ApiUser {
    type Error = FolioError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(ApiUser {
            id: UserId::new(row.id),
            username: row.username,
            email: row.email,
            enabled: row.enabled,
            api_key: row.api_key,
            roles: row.roles.0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    fn find(&self, filter: &UserFilter) -> DynSource<ApiUser> {
        let mut sql_filter = SqlFilter::new();

        if let Some(username) = &filter.username {
            sql_filter = sql_filter.and("u.username = ?", SqlArg::Str(username.clone()));
        }
        if let Some(email) = &filter.email {
            sql_filter = sql_filter.and("u.email = ?", SqlArg::Str(email.clone()));
        }

        let where_sql = sql_filter.where_sql();
        let select_sql = format!("SELECT {USER_COLUMNS} FROM users u{where_sql} ORDER BY u.id");
        let count_sql = format!("SELECT COUNT(*) FROM users u{where_sql}");

        Box::new(SqlQuerySource::new(
            self.pool.inner().clone(),
            select_sql,
            count_sql,
            sql_filter.into_args(),
            ApiUser::try_from,
        ))
    }

    async fn find_by_id(&self, id: UserId) -> FolioResult<Option<ApiUser>> {
        debug!("Finding user by id: {}", id);

        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users u WHERE u.id = ?"
        ))
        .bind(id.into_inner())
        .fetch_optional(self.pool.inner())
        .await?;

        row.map(ApiUser::try_from).transpose()
    }

    async fn find_by_api_key(&self, api_key: &str) -> FolioResult<Option<ApiUser>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users u WHERE u.api_key = ? AND u.enabled = 1"
        ))
        .bind(api_key)
        .fetch_optional(self.pool.inner())
        .await?;

        row.map(ApiUser::try_from).transpose()
    }

    async fn exists_by_username(&self, username: &str) -> FolioResult<bool> {
        let result: Option<i32> = sqlx::query_scalar("SELECT 1 FROM users WHERE username = ? LIMIT 1")
            .bind(username)
            .fetch_optional(self.pool.inner())
            .await?;

        Ok(result.is_some())
    }

    async fn save(&self, user: &ApiUser) -> FolioResult<ApiUser> {
        debug!("Saving user: {}", user.username);

        let result = sqlx::query(
            r#"
            INSERT INTO users (username, email, enabled, api_key, roles, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&user.username)
        .bind(&user.email)
        .bind(user.enabled)
        .bind(&user.api_key)
        .bind(Json(&user.roles))
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(self.pool.inner())
        .await?;

        let mut saved = user.clone();
        saved.id = UserId::new(result.last_insert_id() as i64);
        Ok(saved)
    }

    async fn update(&self, user: &ApiUser) -> FolioResult<ApiUser> {
        debug!("Updating user: {}", user.id);

        let result = sqlx::query(
            r#"
            UPDATE users
            SET username = ?, email = ?, enabled = ?, api_key = ?, roles = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&user.username)
        .bind(&user.email)
        .bind(user.enabled)
        .bind(&user.api_key)
        .bind(Json(&user.roles))
        .bind(Utc::now())
        .bind(user.id.into_inner())
        .execute(self.pool.inner())
        .await?;

        if result.rows_affected() == 0 {
            return Err(FolioError::not_found("ApiUser", user.id));
        }
        Ok(user.clone())
    }

    async fn delete(&self, id: UserId) -> FolioResult<bool> {
        debug!("Deleting user: {}", id);

        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id.into_inner())
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
