//! Deferred-query collection sources.
//!
//! [`SqlQuerySource`] is the database-backed counterpart of
//! [`folio_core::MaterializedSource`]: it keeps the WHERE clause and its bind
//! arguments around and only touches MySQL when the paginator asks for a
//! count or a window. Rows are fetched as a `FromRow` type and mapped into
//! the domain entity through a plain conversion function, so a decoding
//! failure surfaces as an error instead of a panic.

use async_trait::async_trait;
use folio_core::{CollectionSource, FolioResult};
use sqlx::mysql::{MySqlPool, MySqlRow};
use sqlx::FromRow;

/// A bind argument captured while building a filtered query.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlArg {
    Str(String),
    Int(i64),
    Bool(bool),
}

macro_rules! bind_args {
    ($query:expr, $args:expr) => {{
        let mut query = $query;
        for arg in $args {
            query = match arg {
                SqlArg::Str(v) => query.bind(v.clone()),
                SqlArg::Int(v) => query.bind(*v),
                SqlArg::Bool(v) => query.bind(*v),
            };
        }
        query
    }};
}

/// An incrementally-built WHERE clause with positional bind arguments.
///
/// The repository layer's replacement for the ORM query builder: each
/// `and(..)` adds one `?` clause and captures its argument.
#[derive(Debug, Default, Clone)]
pub struct SqlFilter {
    clauses: Vec<String>,
    args: Vec<SqlArg>,
}

impl SqlFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a clause containing exactly one `?` placeholder.
    #[must_use]
    pub fn and(mut self, clause: &str, arg: SqlArg) -> Self {
        self.clauses.push(clause.to_string());
        self.args.push(arg);
        self
    }

    /// Adds a clause without bind arguments.
    #[must_use]
    pub fn and_clause(mut self, clause: &str) -> Self {
        self.clauses.push(clause.to_string());
        self
    }

    /// Renders the WHERE fragment, empty when no clause was added.
    #[must_use]
    pub fn where_sql(&self) -> String {
        if self.clauses.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", self.clauses.join(" AND "))
        }
    }

    /// Returns the captured bind arguments.
    #[must_use]
    pub fn into_args(self) -> Vec<SqlArg> {
        self.args
    }
}

/// Escapes `%` and `_` so user input can be embedded in a LIKE pattern.
#[must_use]
pub fn escape_like(value: &str) -> String {
    value.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_")
}

/// A deferred database query satisfying the collection-source contract.
///
/// `select_sql` must carry its own ORDER BY; the window clause is appended at
/// evaluation time. `count_sql` must count the same rows the select matches.
pub struct SqlQuerySource<R, T> {
    pool: MySqlPool,
    select_sql: String,
    count_sql: String,
    args: Vec<SqlArg>,
    map: fn(R) -> FolioResult<T>,
}

impl<R, T> SqlQuerySource<R, T> {
    #[must_use]
    pub fn new(
        pool: MySqlPool,
        select_sql: impl Into<String>,
        count_sql: impl Into<String>,
        args: Vec<SqlArg>,
        map: fn(R) -> FolioResult<T>,
    ) -> Self {
        Self {
            pool,
            select_sql: select_sql.into(),
            count_sql: count_sql.into(),
            args,
            map,
        }
    }
}

#[async_trait]
impl<R, T> CollectionSource for SqlQuerySource<R, T>
where
    R: for<'r> FromRow<'r, MySqlRow> + Send + Unpin,
    T: Send + Sync,
{
    type Item = T;

    async fn total(&self) -> FolioResult<u64> {
        let query = bind_args!(sqlx::query_scalar::<_, i64>(&self.count_sql), &self.args);
        let total = query.fetch_one(&self.pool).await?;
        Ok(u64::try_from(total).unwrap_or(0))
    }

    async fn slice(&self, offset: u64, limit: u64) -> FolioResult<Vec<T>> {
        let sql = format!("{} LIMIT ? OFFSET ?", self.select_sql);
        let query = bind_args!(sqlx::query_as::<_, R>(&sql), &self.args)
            .bind(i64::try_from(limit).unwrap_or(i64::MAX))
            .bind(i64::try_from(offset).unwrap_or(i64::MAX));

        let rows = query.fetch_all(&self.pool).await?;
        rows.into_iter().map(self.map).collect()
    }
}
