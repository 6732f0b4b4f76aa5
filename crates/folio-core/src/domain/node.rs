//! Node entity.

use crate::NodeId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A node in the content tree.
///
/// Nodes carry structural information only; the rendered content for a locale
/// lives in a [`crate::domain::PageTranslation`]. Deletion is soft: deleted
/// nodes stay in storage and are filtered out of every query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier for the node.
    pub id: NodeId,

    /// Internal name used by editors to address the node.
    pub internal_name: Option<String>,

    /// Fully-qualified name of the page type this node references.
    pub ref_entity_name: String,

    /// Whether the node is hidden from navigation menus.
    pub hidden_from_nav: bool,

    /// Soft-deletion flag.
    pub deleted: bool,

    /// Parent node, `None` for a root node.
    pub parent_id: Option<NodeId>,

    /// Creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Node {
    /// Creates a new visible node of the given page type.
    #[must_use]
    pub fn new(ref_entity_name: impl Into<String>, parent_id: Option<NodeId>) -> Self {
        let now = Utc::now();
        Self {
            id: NodeId::new(0),
            internal_name: None,
            ref_entity_name: ref_entity_name.into(),
            hidden_from_nav: false,
            deleted: false,
            parent_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns true for a node without a parent.
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Marks the node as deleted.
    pub fn soft_delete(&mut self) {
        self.deleted = true;
        self.updated_at = Utc::now();
    }

    /// Hides or shows the node in navigation.
    pub fn set_hidden_from_nav(&mut self, hidden: bool) {
        self.hidden_from_nav = hidden;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node_is_visible() {
        let node = Node::new("app.page.Homepage", None);
        assert!(!node.deleted);
        assert!(!node.hidden_from_nav);
        assert!(node.is_root());
    }

    #[test]
    fn test_soft_delete() {
        let mut node = Node::new("app.page.Homepage", None);
        node.soft_delete();
        assert!(node.deleted);
    }

    #[test]
    fn test_child_node_is_not_root() {
        let node = Node::new("app.page.ContentPage", Some(NodeId::new(1)));
        assert!(!node.is_root());
    }
}
