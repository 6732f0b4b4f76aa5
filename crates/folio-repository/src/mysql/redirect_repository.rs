//! MySQL redirect repository implementation.

use crate::source::{SqlFilter, SqlQuerySource};
use crate::traits::RedirectRepository;
use crate::DatabasePool;
use async_trait::async_trait;
use folio_core::{DynSource, FolioError, Redirect, RedirectId};
use sqlx::FromRow;
use std::sync::Arc;

/// MySQL redirect repository implementation.
#[derive(Clone)]
pub struct MySqlRedirectRepository {
    pool: Arc<DatabasePool>,
}

impl MySqlRedirectRepository {
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct RedirectRow {
    id: i64,
    domain: Option<String>,
    origin: String,
    target: String,
    permanent: bool,
    note: Option<String>,
}

impl TryFrom<RedirectRow> for Redirect {
    type Error = FolioError;

    fn try_from(row: RedirectRow) -> Result<Self, Self::Error> {
        Ok(Redirect {
            id: RedirectId::new(row.id),
            domain: row.domain,
            origin: row.origin,
            target: row.target,
            permanent: row.permanent,
            note: row.note,
        })
    }
}

#[async_trait]
impl RedirectRepository for MySqlRedirectRepository {
    fn find_all(&self) -> DynSource<Redirect> {
        let filter = SqlFilter::new();
        Box::new(SqlQuerySource::new(
            self.pool.inner().clone(),
            "SELECT id, domain, origin, target, permanent, note FROM redirects ORDER BY id".to_string(),
            "SELECT COUNT(*) FROM redirects".to_string(),
            filter.into_args(),
            Redirect::try_from,
        ))
    }
}
