//! Site configuration entity.

use crate::SiteConfigId;
use serde::{Deserialize, Serialize};

/// A named configuration document (social links, analytics ids, ...).
///
/// The value is an opaque JSON document owned by the admin interface; the API
/// serves it verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub id: SiteConfigId,
    /// Name the document is addressed by in the API.
    pub internal_name: String,
    /// Human-readable label.
    pub name: String,
    pub value: serde_json::Value,
}

impl SiteConfig {
    #[must_use]
    pub fn new(internal_name: impl Into<String>, name: impl Into<String>, value: serde_json::Value) -> Self {
        Self {
            id: SiteConfigId::new(0),
            internal_name: internal_name.into(),
            name: name.into(),
            value,
        }
    }
}
