//! Form submission entity.

use crate::{FormSubmissionId, NodeId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One submitted field of a form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FormSubmissionField {
    pub label: String,
    pub value: String,
}

/// A visitor's submission of a form page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormSubmission {
    pub id: FormSubmissionId,
    /// Node of the form page that produced the submission.
    pub node_id: Option<NodeId>,
    pub locale: String,
    pub ip_address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub fields: Vec<FormSubmissionField>,
}

impl FormSubmission {
    #[must_use]
    pub fn new(locale: impl Into<String>, fields: Vec<FormSubmissionField>) -> Self {
        Self {
            id: FormSubmissionId::new(0),
            node_id: None,
            locale: locale.into(),
            ip_address: None,
            created_at: Utc::now(),
            fields,
        }
    }
}
