//! Typed ID wrappers for domain entities.
//!
//! All CMS entities use database-assigned integer identifiers. Wrapping them
//! keeps a node id from being passed where a folder id is expected.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

macro_rules! entity_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        #[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
        pub struct $name(pub i64);

        impl $name {
            /// Wraps a raw database identifier.
            #[must_use]
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            /// Returns the raw identifier.
            #[must_use]
            pub const fn into_inner(self) -> i64 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

entity_id!(
    /// Identifier of a [`crate::domain::Node`].
    NodeId
);
entity_id!(
    /// Identifier of a [`crate::domain::PageTranslation`].
    PageTranslationId
);
entity_id!(
    /// Identifier of a [`crate::domain::Media`].
    MediaId
);
entity_id!(
    /// Identifier of a [`crate::domain::Folder`].
    FolderId
);
entity_id!(
    /// Identifier of a [`crate::domain::Menu`].
    MenuId
);
entity_id!(
    /// Identifier of a [`crate::domain::MenuItem`].
    MenuItemId
);
entity_id!(
    /// Identifier of an [`crate::domain::ApiUser`].
    UserId
);
entity_id!(
    /// Identifier of a [`crate::domain::Group`].
    GroupId
);
entity_id!(
    /// Identifier of a [`crate::domain::Role`].
    RoleId
);
entity_id!(
    /// Identifier of a [`crate::domain::Redirect`].
    RedirectId
);
entity_id!(
    /// Identifier of a [`crate::domain::Translation`] row.
    TranslationId
);
entity_id!(
    /// Identifier of an [`crate::domain::Author`].
    AuthorId
);
entity_id!(
    /// Identifier of a [`crate::domain::FormSubmission`].
    FormSubmissionId
);
entity_id!(
    /// Identifier of a [`crate::domain::SiteConfig`] document.
    SiteConfigId
);
