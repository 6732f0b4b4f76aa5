//! # Folio Repository
//!
//! SQLx-backed data access for the Folio content API.
//!
//! ```text
//! Controller / Service
//!   ↓  Arc<dyn NodeRepository>      (domain interface, traits.rs)
//! MySqlNodeRepository               (mysql/, plain-string queries)
//!   ↓  SqlQuerySource               (deferred CollectionSource, source.rs)
//! MySQL
//! ```
//!
//! List methods hand back a [`folio_core::DynSource`] instead of a `Vec`, so
//! the HTTP layer picks the window through the shared paginator and the
//! count/slice queries only run when a page is actually requested.

pub mod mysql;
pub mod pool;
pub mod source;
pub mod traits;

pub use mysql::*;
pub use pool::*;
pub use source::{escape_like, SqlArg, SqlFilter, SqlQuerySource};
pub use traits::*;

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use folio_core::{
        CollectionSource, DynSource, FolioResult, MaterializedSource, Node, NodeId, PageRequest,
        Paginator,
    };
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// In-memory node repository backing the trait with a materialized source.
    struct InMemoryNodeRepository {
        nodes: Mutex<HashMap<i64, Node>>,
    }

    impl InMemoryNodeRepository {
        fn with_nodes(nodes: Vec<Node>) -> Self {
            let map = nodes.into_iter().map(|n| (n.id.into_inner(), n)).collect();
            Self {
                nodes: Mutex::new(map),
            }
        }

        fn sorted(&self) -> Vec<Node> {
            let mut nodes: Vec<Node> = self.nodes.lock().unwrap().values().cloned().collect();
            nodes.sort_by_key(|n| n.id);
            nodes
        }
    }

    #[async_trait]
    impl NodeRepository for InMemoryNodeRepository {
        fn find(&self, filter: &NodeFilter) -> DynSource<Node> {
            let nodes = self
                .sorted()
                .into_iter()
                .filter(|n| !n.deleted)
                .filter(|n| {
                    filter
                        .internal_name
                        .as_ref()
                        .map_or(true, |name| n.internal_name.as_deref() == Some(name))
                })
                .filter(|n| {
                    filter
                        .ref_entity_name
                        .as_ref()
                        .map_or(true, |r| &n.ref_entity_name == r)
                })
                .filter(|n| filter.hidden_from_nav.map_or(true, |h| n.hidden_from_nav == h))
                .collect();
            Box::new(MaterializedSource::new(nodes))
        }

        async fn find_by_id(&self, id: NodeId) -> FolioResult<Option<Node>> {
            Ok(self
                .nodes
                .lock()
                .unwrap()
                .get(&id.into_inner())
                .filter(|n| !n.deleted)
                .cloned())
        }

        async fn find_children(&self, id: NodeId) -> FolioResult<Vec<Node>> {
            Ok(self
                .sorted()
                .into_iter()
                .filter(|n| n.parent_id == Some(id) && !n.deleted)
                .collect())
        }
    }

    fn make_node(id: i64, internal_name: &str, parent_id: Option<i64>) -> Node {
        let mut node = Node::new("app.page.ContentPage", parent_id.map(NodeId::new));
        node.id = NodeId::new(id);
        node.internal_name = Some(internal_name.to_string());
        node
    }

    #[tokio::test]
    async fn test_find_builds_source_consistent_with_contents() {
        let repo = InMemoryNodeRepository::with_nodes(vec![
            make_node(1, "home", None),
            make_node(2, "about", Some(1)),
            make_node(3, "contact", Some(1)),
        ]);

        let source = repo.find(&NodeFilter::default());
        assert_eq!(source.total().await.unwrap(), 3);
        let window = source.slice(0, 2).await.unwrap();
        assert_eq!(window.len(), 2);
        assert_eq!(window[0].id, NodeId::new(1));
    }

    #[tokio::test]
    async fn test_filter_by_internal_name() {
        let repo = InMemoryNodeRepository::with_nodes(vec![
            make_node(1, "home", None),
            make_node(2, "about", Some(1)),
        ]);

        let filter = NodeFilter {
            internal_name: Some("about".to_string()),
            ..NodeFilter::default()
        };
        let source = repo.find(&filter);
        let page = Paginator::paginate(source.as_ref(), PageRequest::first()).await.unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].internal_name.as_deref(), Some("about"));
    }

    #[tokio::test]
    async fn test_deleted_nodes_are_invisible() {
        let mut deleted = make_node(2, "old", None);
        deleted.soft_delete();
        let repo = InMemoryNodeRepository::with_nodes(vec![make_node(1, "home", None), deleted]);

        let source = repo.find(&NodeFilter::default());
        assert_eq!(source.total().await.unwrap(), 1);
        assert!(repo.find_by_id(NodeId::new(2)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_children_are_ordered_by_id() {
        let repo = InMemoryNodeRepository::with_nodes(vec![
            make_node(1, "home", None),
            make_node(3, "later", Some(1)),
            make_node(2, "earlier", Some(1)),
        ]);

        let children = repo.find_children(NodeId::new(1)).await.unwrap();
        let ids: Vec<i64> = children.iter().map(|n| n.id.into_inner()).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[tokio::test]
    async fn test_repository_source_paginates_like_any_other() {
        let nodes: Vec<Node> = (1..=45).map(|i| make_node(i, &format!("node-{i}"), None)).collect();
        let repo = InMemoryNodeRepository::with_nodes(nodes);

        let source = repo.find(&NodeFilter::default());
        let page = Paginator::paginate(source.as_ref(), PageRequest::new(3, 20)).await.unwrap();
        assert_eq!(page.items.len(), 5);
        assert_eq!(page.pages, 3);
        assert_eq!(page.total, 45);
    }
}
