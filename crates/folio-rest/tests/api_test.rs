//! End-to-end tests of the HTTP layer: full router, auth middleware,
//! paginator and services over in-memory repositories.

mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
};
use common::{test_router, ADMIN_KEY, READER_KEY};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str, api_key: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(key) = api_key {
        builder = builder.header("X-Api-Key", key);
    }
    builder.body(Body::empty()).unwrap()
}

fn send_json(method: &str, uri: &str, api_key: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("X-Api-Key", api_key)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health_is_public() {
    let response = test_router().oneshot(get("/health", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_nodes_require_api_key() {
    let response = test_router().oneshot(get("/api/nodes", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(response).await;
    assert_eq!(body["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_unknown_api_key_is_unauthorized() {
    let response = test_router()
        .oneshot(get("/api/nodes", Some("no-such-key")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_list_nodes_returns_pagination_envelope() {
    let response = test_router()
        .oneshot(get("/api/nodes", Some(READER_KEY)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["page"], 1);
    assert_eq!(body["limit"], 20);
    assert_eq!(body["pages"], 1);
    assert_eq!(body["total"], 3);
    assert_eq!(body["items"].as_array().unwrap().len(), 3);
    assert_eq!(body["route"], "get_nodes");
}

#[tokio::test]
async fn test_list_nodes_windows_by_page_and_limit() {
    let response = test_router()
        .oneshot(get("/api/nodes?page=2&limit=2", Some(READER_KEY)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["page"], 2);
    assert_eq!(body["pages"], 2);
    assert_eq!(body["total"], 3);
    // 3 nodes, window of 2: the second page holds the remainder.
    assert_eq!(body["items"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_node_filter_narrows_the_source() {
    let response = test_router()
        .oneshot(get("/api/nodes?internalName=about", Some(READER_KEY)))
        .await
        .unwrap();

    let body = body_json(response).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["items"][0]["internal_name"], "about");
}

#[tokio::test]
async fn test_unknown_node_is_not_found() {
    let response = test_router()
        .oneshot(get("/api/nodes/999", Some(READER_KEY)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_node_children_are_paginated_in_memory() {
    let response = test_router()
        .oneshot(get("/api/nodes/1/children?limit=1", Some(READER_KEY)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["total"], 2);
    assert_eq!(body["pages"], 2);
    assert_eq!(body["items"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_public_pages_are_decorated_aggregates() {
    let response = test_router()
        .oneshot(get("/api/public/pages", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["total"], 3);
    let first = &body["items"][0];
    // The decorator folded the raw translation into the page aggregate.
    assert_eq!(first["page"]["title"], "Home");
    assert_eq!(first["page"]["url"], "/home");
    assert!(first["page"]["online"].as_bool().unwrap());
}

#[tokio::test]
async fn test_admin_endpoint_rejects_plain_reader() {
    let response = test_router()
        .oneshot(get("/api/user", Some(READER_KEY)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body = body_json(response).await;
    assert_eq!(body["code"], "FORBIDDEN");
}

#[tokio::test]
async fn test_admin_lists_users() {
    let response = test_router()
        .oneshot(get("/api/user", Some(ADMIN_KEY)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["total"], 2);
}

#[tokio::test]
async fn test_created_role_is_normalized() {
    let response = test_router()
        .oneshot(send_json("POST", "/api/role", ADMIN_KEY, json!({"role": "editor"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["role"], "ROLE_EDITOR");
}

#[tokio::test]
async fn test_group_create_then_list() {
    let router = test_router();

    let response = router
        .clone()
        .oneshot(send_json(
            "POST",
            "/api/group",
            ADMIN_KEY,
            json!({"name": "Editors", "roles": ["ROLE_EDITOR"]}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = router.oneshot(get("/api/group", Some(ADMIN_KEY))).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["items"][0]["name"], "Editors");
}

#[tokio::test]
async fn test_public_translations_by_domain_and_locale() {
    let response = test_router()
        .oneshot(get("/api/public/translations/messages?locale=en", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["items"][0]["text"], "Welcome");
}

#[tokio::test]
async fn test_missing_translation_is_not_found() {
    let response = test_router()
        .oneshot(get(
            "/api/public/translations/messages/no.such.keyword?locale=en",
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_translation_upload_roundtrip() {
    let router = test_router();

    let response = router
        .clone()
        .oneshot(send_json(
            "POST",
            "/api/translations/messages",
            ADMIN_KEY,
            json!([{"keyword": "footer.copyright", "locale": "en", "text": "All rights reserved"}]),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = router
        .oneshot(get(
            "/api/public/translations/messages/footer.copyright?locale=en",
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["text"], "All rights reserved");
}

#[tokio::test]
async fn test_translation_upload_requires_admin() {
    let response = test_router()
        .oneshot(send_json(
            "POST",
            "/api/translations/messages",
            READER_KEY,
            json!([{"keyword": "k", "locale": "en", "text": "t"}]),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_config_lookup_by_internal_name() {
    let router = test_router();

    let response = router
        .clone()
        .oneshot(get("/api/config/social", Some(ADMIN_KEY)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["value"]["twitter"], "@folio");

    let response = router
        .oneshot(get("/api/config/unknown", Some(ADMIN_KEY)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
