//! Media and folder entities.

use crate::{FolderId, MediaId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A folder in the media library tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Folder {
    pub id: FolderId,
    pub name: String,
    /// Machine name of the folder (`image`, `files`, ...).
    pub rel: Option<String>,
    pub parent_id: Option<FolderId>,
    pub deleted: bool,
}

/// A media item: the stored metadata of an uploaded file.
///
/// Folio keeps metadata only; byte storage is handled elsewhere and referenced
/// through `url`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Media {
    pub id: MediaId,

    /// Stable public identifier, independent of the database id.
    pub uuid: Uuid,

    pub name: String,

    /// MIME type as reported at upload time.
    pub content_type: String,

    /// Public URL of the stored file.
    pub url: String,

    /// File size in bytes.
    pub file_size: i64,

    pub folder_id: FolderId,

    pub deleted: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Media {
    /// Creates a new media item in the given folder.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        content_type: impl Into<String>,
        url: impl Into<String>,
        file_size: i64,
        folder_id: FolderId,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: MediaId::new(0),
            uuid: Uuid::new_v4(),
            name: name.into(),
            content_type: content_type.into(),
            url: url.into(),
            file_size,
            folder_id,
            deleted: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Marks the media item as deleted.
    pub fn soft_delete(&mut self) {
        self.deleted = true;
        self.updated_at = Utc::now();
    }

    /// Returns true for image MIME types.
    #[must_use]
    pub fn is_image(&self) -> bool {
        self.content_type.starts_with("image/")
    }
}
