//! MySQL author repository implementation.

use crate::source::{SqlArg, SqlFilter, SqlQuerySource};
use crate::traits::AuthorRepository;
use crate::DatabasePool;
use async_trait::async_trait;
use folio_core::{Author, AuthorId, DynSource, FolioError};
use sqlx::FromRow;
use std::sync::Arc;

/// MySQL author repository implementation.
#[derive(Clone)]
pub struct MySqlAuthorRepository {
    pool: Arc<DatabasePool>,
}

impl MySqlAuthorRepository {
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AuthorRow {
    id: i64,
    author_type: String,
    name: String,
    link: Option<String>,
}

impl TryFrom<AuthorRow> for Author {
    type Error = FolioError;

    fn try_from(row: AuthorRow) -> Result<Self, Self::Error> {
        Ok(Author {
            id: AuthorId::new(row.id),
            author_type: row.author_type,
            name: row.name,
            link: row.link,
        })
    }
}

#[async_trait]
impl AuthorRepository for MySqlAuthorRepository {
    fn find_by_type(&self, author_type: &str) -> DynSource<Author> {
        let sql_filter = SqlFilter::new().and("a.author_type = ?", SqlArg::Str(author_type.to_string()));

        let where_sql = sql_filter.where_sql();
        let select_sql =
            format!("SELECT a.id, a.author_type, a.name, a.link FROM authors a{where_sql} ORDER BY a.name");
        let count_sql = format!("SELECT COUNT(*) FROM authors a{where_sql}");

        Box::new(SqlQuerySource::new(
            self.pool.inner().clone(),
            select_sql,
            count_sql,
            sql_filter.into_args(),
            Author::try_from,
        ))
    }
}
