//! Page-related DTOs.
//!
//! [`ApiPage`] is the public aggregate every page endpoint returns: the
//! translation's content bundled with its SEO metadata, author attribution
//! and template. Building one from a [`PageTranslation`] is a pure transform,
//! which is exactly what the paginator's decorator hook expects.

use folio_core::{NodeId, PageTranslation, PageTranslationId, PageVersionType};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Content summary of a page translation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiPageContent {
    pub title: String,
    pub slug: String,
    pub url: String,
    pub locale: String,
    pub online: bool,
    pub version: PageVersionType,
}

/// SEO metadata of a page.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiPageSeo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
}

impl ApiPageSeo {
    fn from_translation(translation: &PageTranslation) -> Option<Self> {
        if translation.meta_title.is_none() && translation.meta_description.is_none() {
            return None;
        }
        Some(Self {
            meta_title: translation.meta_title.clone(),
            meta_description: translation.meta_description.clone(),
        })
    }
}

/// The public page aggregate.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiPage {
    pub id: PageTranslationId,
    pub node_id: NodeId,
    pub page: ApiPageContent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo: Option<ApiPageSeo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_template: Option<String>,
}

impl From<PageTranslation> for ApiPage {
    fn from(translation: PageTranslation) -> Self {
        let seo = ApiPageSeo::from_translation(&translation);
        Self {
            id: translation.id,
            node_id: translation.node_id,
            page: ApiPageContent {
                title: translation.title,
                slug: translation.slug,
                url: translation.url,
                locale: translation.locale,
                online: translation.online,
                version: translation.version,
            },
            seo,
            author: translation.author_name,
            page_template: translation.template,
        }
    }
}

/// Request to update a page translation.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdatePageRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: Option<String>,

    pub online: Option<bool>,

    #[validate(length(max = 255))]
    pub meta_title: Option<String>,

    #[validate(length(max = 1000))]
    pub meta_description: Option<String>,

    #[validate(length(max = 255))]
    pub author_name: Option<String>,

    #[validate(length(max = 128))]
    pub template: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::NodeId;
    use validator::Validate;

    fn translation() -> PageTranslation {
        let mut t = PageTranslation::new(NodeId::new(7), "en", "About us", "about");
        t.meta_description = Some("All about us".to_string());
        t.author_name = Some("Jane Editor".to_string());
        t.template = Some("two-columns".to_string());
        t
    }

    #[test]
    fn test_api_page_bundles_seo_author_and_template() {
        let page = ApiPage::from(translation());
        assert_eq!(page.node_id, NodeId::new(7));
        assert_eq!(page.page.title, "About us");
        assert_eq!(page.seo.unwrap().meta_description.as_deref(), Some("All about us"));
        assert_eq!(page.author.as_deref(), Some("Jane Editor"));
        assert_eq!(page.page_template.as_deref(), Some("two-columns"));
    }

    #[test]
    fn test_api_page_omits_empty_seo() {
        let page = ApiPage::from(PageTranslation::new(NodeId::new(1), "en", "Home", "home"));
        assert!(page.seo.is_none());
    }

    #[test]
    fn test_update_request_rejects_empty_title() {
        let request = UpdatePageRequest {
            title: Some(String::new()),
            online: None,
            meta_title: None,
            meta_description: None,
            author_name: None,
            template: None,
        };
        assert!(request.validate().is_err());
    }
}
