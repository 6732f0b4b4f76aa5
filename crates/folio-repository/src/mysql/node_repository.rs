//! MySQL node repository implementation.

use crate::source::{SqlArg, SqlFilter, SqlQuerySource};
use crate::traits::{NodeFilter, NodeRepository};
use crate::DatabasePool;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use folio_core::{DynSource, FolioError, FolioResult, Node, NodeId};
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

const NODE_COLUMNS: &str = "n.id, n.internal_name, n.ref_entity_name, n.hidden_from_nav, \
     n.deleted, n.parent_id, n.created_at, n.updated_at";

/// MySQL node repository implementation.
#[derive(Clone)]
pub struct MySqlNodeRepository {
    pool: Arc<DatabasePool>,
}

impl MySqlNodeRepository {
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a node.
#[derive(Debug, FromRow)]
struct NodeRow {
    id: i64,
    internal_name: Option<String>,
    ref_entity_name: String,
    hidden_from_nav: bool,
    deleted: bool,
    parent_id: Option<i64>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<NodeRow> for Node {
    type Error = FolioError;

    fn try_from(row: NodeRow) -> Result<Self, Self::Error> {
        Ok(Node {
            id: NodeId::new(row.id),
            internal_name: row.internal_name,
            ref_entity_name: row.ref_entity_name,
            hidden_from_nav: row.hidden_from_nav,
            deleted: row.deleted,
            parent_id: row.parent_id.map(NodeId::new),
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl NodeRepository for MySqlNodeRepository {
    fn find(&self, filter: &NodeFilter) -> DynSource<Node> {
        let mut sql_filter = SqlFilter::new().and_clause("n.deleted = 0");

        if let Some(internal_name) = &filter.internal_name {
            sql_filter = sql_filter.and("n.internal_name = ?", SqlArg::Str(internal_name.clone()));
        }
        if let Some(hidden) = filter.hidden_from_nav {
            sql_filter = sql_filter.and("n.hidden_from_nav = ?", SqlArg::Bool(hidden));
        }
        if let Some(ref_entity_name) = &filter.ref_entity_name {
            sql_filter = sql_filter.and("n.ref_entity_name = ?", SqlArg::Str(ref_entity_name.clone()));
        }
        if let Some(locale) = &filter.locale {
            sql_filter = sql_filter.and(
                "EXISTS (SELECT 1 FROM page_translations t WHERE t.node_id = n.id AND t.locale = ?)",
                SqlArg::Str(locale.clone()),
            );
        }

        let where_sql = sql_filter.where_sql();
        let select_sql = format!("SELECT {NODE_COLUMNS} FROM nodes n{where_sql} ORDER BY n.id");
        let count_sql = format!("SELECT COUNT(*) FROM nodes n{where_sql}");

        Box::new(SqlQuerySource::new(
            self.pool.inner().clone(),
            select_sql,
            count_sql,
            sql_filter.into_args(),
            Node::try_from,
        ))
    }

    async fn find_by_id(&self, id: NodeId) -> FolioResult<Option<Node>> {
        debug!("Finding node by id: {}", id);

        let row = sqlx::query_as::<_, NodeRow>(&format!(
            "SELECT {NODE_COLUMNS} FROM nodes n WHERE n.id = ? AND n.deleted = 0"
        ))
        .bind(id.into_inner())
        .fetch_optional(self.pool.inner())
        .await?;

        row.map(Node::try_from).transpose()
    }

    async fn find_children(&self, id: NodeId) -> FolioResult<Vec<Node>> {
        debug!("Finding children of node: {}", id);

        let rows = sqlx::query_as::<_, NodeRow>(&format!(
            "SELECT {NODE_COLUMNS} FROM nodes n WHERE n.parent_id = ? AND n.deleted = 0 ORDER BY n.id"
        ))
        .bind(id.into_inner())
        .fetch_all(self.pool.inner())
        .await?;

        rows.into_iter().map(Node::try_from).collect()
    }
}
