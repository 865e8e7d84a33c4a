//! OpenAPI description of the items routes.
//!
//! The functions below carry only `#[utoipa::path]` metadata. Each one
//! documents the route of the same name in [`handlers::router`](crate::handlers::router);
//! the tests keep the two tables in step.

#![allow(dead_code)]

use axum_helpers::errors::responses::{
    BadRequestIdResponse, BadRequestValidationResponse, InternalServerErrorResponse,
    ServiceUnavailableResponse,
};
use utoipa::OpenApi;

use crate::models::Item;

/// OpenAPI documentation for Items API
#[derive(OpenApi)]
#[openapi(
    paths(
        get_all_items,
        create_item,
        get_item_by_id,
        update_item,
        delete_item,
    ),
    components(
        schemas(Item),
        responses(
            BadRequestValidationResponse,
            BadRequestIdResponse,
            InternalServerErrorResponse,
            ServiceUnavailableResponse
        )
    ),
    tags(
        (name = "Items", description = "Item management endpoints")
    )
)]
pub struct ApiDoc;

#[utoipa::path(
    get,
    path = "",
    tag = "Items",
    summary = "List all items",
    description = "Returns every stored item in ascending id order. An empty store yields `[]`.",
    responses(
        (status = 200, description = "All items", body = Vec<Item>,
            example = json!([{"id": 1, "name": "Sample Item"}])),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
fn get_all_items() {}

#[utoipa::path(
    post,
    path = "",
    tag = "Items",
    summary = "Create a new item",
    description = "Stores the item and returns it with its generated id. An id in the body is ignored.",
    request_body(content = Item, example = json!({"name": "Sample Item"})),
    responses(
        (status = 200, description = "Item created", body = Item,
            example = json!({"id": 1, "name": "Sample Item"})),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
fn create_item() {}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Items",
    summary = "Get an item by id",
    params(
        ("id" = i64, Path, description = "Item id", example = 1)
    ),
    responses(
        (status = 200, description = "Item found", body = Item,
            example = json!({"id": 1, "name": "Sample Item"})),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, description = "Item not found", body = String,
            content_type = "text/plain", example = json!("Item not found with id: 999")),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
fn get_item_by_id() {}

#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Items",
    summary = "Update an item",
    description = "Replaces the name of an existing item. An id in the body is ignored.",
    params(
        ("id" = i64, Path, description = "Item id", example = 1)
    ),
    request_body(content = Item, example = json!({"name": "Renamed"})),
    responses(
        (status = 200, description = "Item updated", body = Item,
            example = json!({"id": 1, "name": "Renamed"})),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, description = "Item not found", body = String,
            content_type = "text/plain", example = json!("Item not found with id: 999")),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
fn update_item() {}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Items",
    summary = "Delete an item",
    params(
        ("id" = i64, Path, description = "Item id", example = 1)
    ),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, description = "Item not found", body = String,
            content_type = "text/plain", example = json!("Item not found with id: 999")),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
fn delete_item() {}
