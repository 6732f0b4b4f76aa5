//! Node endpoints.

use crate::{
    extractors::{AuthenticatedUser, PaginationQuery},
    responses::{ok, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Router,
};
use folio_core::{
    FolioError, MaterializedSource, Node, NodeId, PageRequest, PaginatedResult, Paginator,
    DEFAULT_LIMIT, DEFAULT_PAGE,
};
use folio_repository::NodeFilter;
use serde::Deserialize;
use tracing::debug;
use utoipa::IntoParams;

/// Creates the nodes router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/nodes", get(list_nodes))
        .route("/nodes/:id", get(get_node))
        .route("/nodes/:id/children", get(list_node_children))
        .route("/nodes/:id/parent", get(get_node_parent))
}

/// Query parameters of the node list.
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct NodesQuery {
    /// The current page, 1-based.
    pub page: Option<u64>,
    /// Amount of results per page.
    pub limit: Option<u64>,
    /// The internal name of the node.
    pub internal_name: Option<String>,
    /// If true, only nodes hidden from navigation are returned.
    pub hidden_from_nav: Option<bool>,
    /// Which page types you want to have returned.
    pub ref_entity_name: Option<String>,
    /// Only nodes with a page translation in this locale.
    pub locale: Option<String>,
}

/// Retrieve nodes paginated.
#[utoipa::path(
    get,
    path = "/api/nodes",
    tag = "nodes",
    params(NodesQuery),
    responses(
        (status = 200, description = "Returned when successful"),
        (status = 401, description = "Returned without a valid API key")
    )
)]
pub async fn list_nodes(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Query(query): Query<NodesQuery>,
) -> ApiResult<PaginatedResult<Node>> {
    debug!("List nodes request");

    let page = PageRequest::new(
        query.page.unwrap_or(DEFAULT_PAGE),
        query.limit.unwrap_or(DEFAULT_LIMIT),
    );
    let filter = NodeFilter {
        internal_name: query.internal_name,
        hidden_from_nav: query.hidden_from_nav,
        ref_entity_name: query.ref_entity_name,
        locale: query.locale,
    };

    let source = state.node_repository.find(&filter);
    let result = Paginator::paginate(source.as_ref(), page)
        .await?
        .with_route("get_nodes");
    ok(result)
}

/// Retrieve a single node.
#[utoipa::path(
    get,
    path = "/api/nodes/{id}",
    tag = "nodes",
    params(("id" = i64, Path, description = "The node ID")),
    responses(
        (status = 200, description = "Returned when successful"),
        (status = 404, description = "Returned when the node does not exist")
    )
)]
pub async fn get_node(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Path(id): Path<i64>,
) -> ApiResult<Node> {
    debug!("Get node request: {}", id);

    let node = state
        .node_repository
        .find_by_id(NodeId::new(id))
        .await?
        .ok_or_else(|| FolioError::not_found("Node", id))?;
    ok(node)
}

/// Retrieve a single node's children, paginated.
#[utoipa::path(
    get,
    path = "/api/nodes/{id}/children",
    tag = "nodes",
    params(("id" = i64, Path, description = "The node ID"), PaginationQuery),
    responses(
        (status = 200, description = "Returned when successful"),
        (status = 404, description = "Returned when the node does not exist")
    )
)]
pub async fn list_node_children(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Path(id): Path<i64>,
    Query(pagination): Query<PaginationQuery>,
) -> ApiResult<PaginatedResult<Node>> {
    debug!("List node children request: {}", id);

    state
        .node_repository
        .find_by_id(NodeId::new(id))
        .await?
        .ok_or_else(|| FolioError::not_found("Node", id))?;

    // The children collection is loaded up front and windowed in memory.
    let children = state.node_repository.find_children(NodeId::new(id)).await?;
    let source = MaterializedSource::new(children);

    let result = Paginator::paginate(&source, pagination.into())
        .await?
        .with_route("get_node_children");
    ok(result)
}

/// Retrieve a single node's parent.
#[utoipa::path(
    get,
    path = "/api/nodes/{id}/parent",
    tag = "nodes",
    params(("id" = i64, Path, description = "The node ID")),
    responses(
        (status = 200, description = "Returned when successful"),
        (status = 404, description = "Returned when the node or its parent does not exist")
    )
)]
pub async fn get_node_parent(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Path(id): Path<i64>,
) -> ApiResult<Node> {
    debug!("Get node parent request: {}", id);

    let node = state
        .node_repository
        .find_by_id(NodeId::new(id))
        .await?
        .ok_or_else(|| FolioError::not_found("Node", id))?;

    let parent_id = node
        .parent_id
        .ok_or_else(|| AppError(FolioError::not_found("Node parent", id)))?;

    let parent = state
        .node_repository
        .find_by_id(parent_id)
        .await?
        .ok_or_else(|| FolioError::not_found("Node", parent_id))?;
    ok(parent)
}
