//! Handler tests for Items domain
//!
//! Drive the items router end to end over the in-memory repository:
//! - Status codes for every operation
//! - JSON bodies for success and 4xx envelopes
//! - Plain-text 404 bodies, identical for read, update and delete

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use domain_items::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

fn app() -> (Router, ItemService<InMemoryItemRepository>) {
    let service = ItemService::new(InMemoryItemRepository::new());
    (handlers::router(service.clone()), service)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_bytes(body: Body) -> Vec<u8> {
    body.collect().await.unwrap().to_bytes().to_vec()
}

async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    serde_json::from_slice(&body_bytes(body).await).unwrap()
}

async fn text_body(body: Body) -> String {
    String::from_utf8(body_bytes(body).await).unwrap()
}

#[tokio::test]
async fn test_create_item_returns_item_with_generated_id() {
    let (app, _) = app();

    let response = app
        .oneshot(json_request("POST", "/", json!({"name": "Sample Item"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let item: Item = json_body(response.into_body()).await;
    assert_eq!(item, Item::with_id(1, "Sample Item"));
}

#[tokio::test]
async fn test_create_item_ignores_client_id() {
    let (app, service) = app();

    let response = app
        .oneshot(json_request("POST", "/", json!({"id": 42, "name": "Sample Item"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let item: Item = json_body(response.into_body()).await;
    assert_eq!(item.id, Some(1));
    assert!(matches!(
        service.get_item_by_id(42).await,
        Err(ItemError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_get_item_returns_stored_item() {
    let (app, service) = app();
    service.create_item(Item::new("Sample Item")).await.unwrap();

    let response = app.oneshot(empty_request("GET", "/1")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let item: Item = json_body(response.into_body()).await;
    assert_eq!(item, Item::with_id(1, "Sample Item"));
}

#[tokio::test]
async fn test_get_missing_item_returns_plain_text_404() {
    let (app, _) = app();

    let response = app.oneshot(empty_request("GET", "/999")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/plain"));
    assert_eq!(
        text_body(response.into_body()).await,
        "Item not found with id: 999"
    );
}

#[tokio::test]
async fn test_list_items_empty_store_returns_empty_array() {
    let (app, _) = app();

    let response = app.oneshot(empty_request("GET", "/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let items: Vec<Item> = json_body(response.into_body()).await;
    assert!(items.is_empty());
}

#[tokio::test]
async fn test_list_items_returns_all_in_id_order() {
    let (app, service) = app();
    service.create_item(Item::new("first")).await.unwrap();
    service.create_item(Item::new("second")).await.unwrap();

    let response = app.oneshot(empty_request("GET", "/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let items: Vec<Item> = json_body(response.into_body()).await;
    assert_eq!(
        items,
        vec![Item::with_id(1, "first"), Item::with_id(2, "second")]
    );
}

#[tokio::test]
async fn test_update_item_renames_and_keeps_id() {
    let (app, service) = app();
    service.create_item(Item::new("Sample Item")).await.unwrap();

    let response = app
        .oneshot(json_request("PUT", "/1", json!({"id": 7, "name": "Renamed"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let item: Item = json_body(response.into_body()).await;
    assert_eq!(item, Item::with_id(1, "Renamed"));
    assert_eq!(
        service.get_item_by_id(1).await.unwrap(),
        Item::with_id(1, "Renamed")
    );
}

#[tokio::test]
async fn test_update_missing_item_returns_404() {
    let (app, _) = app();

    let response = app
        .oneshot(json_request("PUT", "/999", json!({"name": "Renamed"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        text_body(response.into_body()).await,
        "Item not found with id: 999"
    );
}

#[tokio::test]
async fn test_delete_item_returns_204_with_empty_body() {
    let (app, service) = app();
    service.create_item(Item::new("Sample Item")).await.unwrap();

    let response = app.oneshot(empty_request("DELETE", "/1")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(response.into_body()).await.is_empty());
    assert!(service.get_all_items().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_missing_item_matches_get_404() {
    let (app, _) = app();

    let get = app
        .clone()
        .oneshot(empty_request("GET", "/999"))
        .await
        .unwrap();
    let delete = app.oneshot(empty_request("DELETE", "/999")).await.unwrap();

    assert_eq!(get.status(), StatusCode::NOT_FOUND);
    assert_eq!(delete.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        get.headers().get(header::CONTENT_TYPE),
        delete.headers().get(header::CONTENT_TYPE)
    );
    assert_eq!(
        text_body(get.into_body()).await,
        text_body(delete.into_body()).await
    );
}

#[tokio::test]
async fn test_deleted_id_is_not_reused() {
    let (app, service) = app();
    service.create_item(Item::new("first")).await.unwrap();
    service.delete_item(1).await.unwrap();

    let response = app
        .oneshot(json_request("POST", "/", json!({"name": "second"})))
        .await
        .unwrap();

    let item: Item = json_body(response.into_body()).await;
    assert_eq!(item.id, Some(2));
}

#[tokio::test]
async fn test_invalid_id_returns_400() {
    let (app, _) = app();

    let response = app.oneshot(empty_request("GET", "/abc")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "INVALID_ID");
    assert_eq!(body["message"], "Invalid id: abc");
}

#[tokio::test]
async fn test_create_item_rejects_empty_name() {
    let (app, _) = app();

    let response = app
        .oneshot(json_request("POST", "/", json!({"name": ""})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert!(body["details"]["name"].is_array());
}

#[tokio::test]
async fn test_create_item_rejects_malformed_json() {
    let (app, _) = app();

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\":"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "JSON_EXTRACTION");
}
