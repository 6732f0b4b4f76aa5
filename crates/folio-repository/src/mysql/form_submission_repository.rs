//! MySQL form submission repository implementation.

use crate::source::{SqlFilter, SqlQuerySource};
use crate::traits::FormSubmissionRepository;
use crate::DatabasePool;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use folio_core::{
    DynSource, FolioError, FormSubmission, FormSubmissionField, FormSubmissionId, NodeId,
};
use sqlx::types::Json;
use sqlx::FromRow;
use std::sync::Arc;

/// MySQL form submission repository implementation.
#[derive(Clone)]
pub struct MySqlFormSubmissionRepository {
    pool: Arc<DatabasePool>,
}

impl MySqlFormSubmissionRepository {
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct FormSubmissionRow {
    id: i64,
    node_id: Option<i64>,
    locale: String,
    ip_address: Option<String>,
    created_at: DateTime<Utc>,
    fields: Json<Vec<FormSubmissionField>>,
}

impl TryFrom<FormSubmissionRow> for FormSubmission {
    type Error = FolioError;

    fn try_from(row: FormSubmissionRow) -> Result<Self, Self::Error> {
        Ok(FormSubmission {
            id: FormSubmissionId::new(row.id),
            node_id: row.node_id.map(NodeId::new),
            locale: row.locale,
            ip_address: row.ip_address,
            created_at: row.created_at,
            fields: row.fields.0,
        })
    }
}

#[async_trait]
impl FormSubmissionRepository for MySqlFormSubmissionRepository {
    fn find_all(&self) -> DynSource<FormSubmission> {
        let filter = SqlFilter::new();
        Box::new(SqlQuerySource::new(
            self.pool.inner().clone(),
            "SELECT f.id, f.node_id, f.locale, f.ip_address, f.created_at, f.fields \
             FROM form_submissions f ORDER BY f.created_at DESC, f.id DESC"
                .to_string(),
            "SELECT COUNT(*) FROM form_submissions f".to_string(),
            filter.into_args(),
            FormSubmission::try_from,
        ))
    }
}
