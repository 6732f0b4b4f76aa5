//! Author entity.

use crate::AuthorId;
use serde::{Deserialize, Serialize};

/// An article author of a given type (`author`, `reviewer`, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    pub id: AuthorId,
    pub author_type: String,
    pub name: String,
    pub link: Option<String>,
}

impl Author {
    #[must_use]
    pub fn new(author_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: AuthorId::new(0),
            author_type: author_type.into(),
            name: name.into(),
            link: None,
        }
    }
}
