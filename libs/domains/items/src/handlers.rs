use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use axum_helpers::{IdPath, ValidatedJson};
use std::sync::Arc;

use crate::error::{ItemError, ItemResult, not_found_response};
use crate::models::Item;
use crate::repository::ItemRepository;
use crate::service::ItemService;

/// Create the items router with all HTTP endpoints
///
/// Paths are relative; the app nests them under `/api/items`. Their
/// documentation lives in [`crate::openapi::ApiDoc`].
pub fn router<R: ItemRepository + 'static>(service: ItemService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(get_all_items).post(create_item))
        .route(
            "/{id}",
            get(get_item_by_id).put(update_item).delete(delete_item),
        )
        .with_state(shared_service)
}

async fn get_all_items<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
) -> ItemResult<Json<Vec<Item>>> {
    let items = service.get_all_items().await?;
    Ok(Json(items))
}

async fn create_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    ValidatedJson(item): ValidatedJson<Item>,
) -> ItemResult<Json<Item>> {
    let item = service.create_item(item).await?;
    Ok(Json(item))
}

async fn get_item_by_id<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    IdPath(id): IdPath,
) -> ItemResult<Json<Item>> {
    let item = service.get_item_by_id(id).await?;
    Ok(Json(item))
}

async fn update_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    IdPath(id): IdPath,
    ValidatedJson(item): ValidatedJson<Item>,
) -> ItemResult<Json<Item>> {
    let item = service.update_item(id, item).await?;
    Ok(Json(item))
}

/// NotFound is answered here rather than through `IntoResponse for ItemError`.
async fn delete_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    IdPath(id): IdPath,
) -> Response {
    match service.delete_item(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(ItemError::NotFound(message)) => not_found_response(message),
        Err(e) => e.into_response(),
    }
}
