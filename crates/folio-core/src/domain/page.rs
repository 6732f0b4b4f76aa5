//! Page translation entity.

use crate::{NodeId, PageTranslationId};
use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use std::fmt;

/// Which version of a page translation a query should address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum PageVersionType {
    /// The published version served to visitors.
    Public,
    /// The editor's working copy.
    Draft,
}

impl PageVersionType {
    /// Parses the wire representation; anything unknown falls back to public.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "draft" => Self::Draft,
            _ => Self::Public,
        }
    }

    /// The wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Draft => "draft",
        }
    }
}

impl fmt::Display for PageVersionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The localized, versioned content of a node.
///
/// One node owns at most one translation per locale and version type. The
/// SEO metadata, author attribution and template name recorded here are what
/// the page decorator folds into the public page aggregate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageTranslation {
    /// Unique identifier.
    pub id: PageTranslationId,

    /// The node this translation belongs to.
    pub node_id: NodeId,

    /// Locale tag of the content (`en`, `nl_BE`, ...).
    pub locale: String,

    /// Page title.
    pub title: String,

    /// URL slug of this translation.
    pub slug: String,

    /// Full materialized URL, including ancestor slugs.
    pub url: String,

    /// Whether the translation is published.
    pub online: bool,

    /// Ordering weight among siblings.
    pub weight: i32,

    /// Version addressed by this row.
    pub version: PageVersionType,

    /// SEO title override.
    pub meta_title: Option<String>,

    /// SEO description.
    pub meta_description: Option<String>,

    /// Display name of the author.
    pub author_name: Option<String>,

    /// Template the page renders with.
    pub template: Option<String>,

    /// Creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl PageTranslation {
    /// Creates a new offline public translation.
    #[must_use]
    pub fn new(node_id: NodeId, locale: impl Into<String>, title: impl Into<String>, slug: impl Into<String>) -> Self {
        let now = Utc::now();
        let slug = slug.into();
        Self {
            id: PageTranslationId::new(0),
            node_id,
            locale: locale.into(),
            title: title.into(),
            url: format!("/{slug}"),
            slug,
            online: false,
            weight: 0,
            version: PageVersionType::Public,
            meta_title: None,
            meta_description: None,
            author_name: None,
            template: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Publishes the translation.
    pub fn publish(&mut self) {
        self.online = true;
        self.updated_at = Utc::now();
    }

    /// Takes the translation offline.
    pub fn unpublish(&mut self) {
        self.online = false;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_type_parse() {
        assert_eq!(PageVersionType::parse("draft"), PageVersionType::Draft);
        assert_eq!(PageVersionType::parse("public"), PageVersionType::Public);
        assert_eq!(PageVersionType::parse("anything"), PageVersionType::Public);
    }

    #[test]
    fn test_new_translation_starts_offline() {
        let translation = PageTranslation::new(NodeId::new(1), "en", "Home", "home");
        assert!(!translation.online);
        assert_eq!(translation.url, "/home");
        assert_eq!(translation.version, PageVersionType::Public);
    }

    #[test]
    fn test_publish_cycle() {
        let mut translation = PageTranslation::new(NodeId::new(1), "en", "Home", "home");
        translation.publish();
        assert!(translation.online);
        translation.unpublish();
        assert!(!translation.online);
    }
}
