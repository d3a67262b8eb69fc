use axum::{
    Json, Router,
    extract::{OriginalUri, State},
    http::StatusCode,
    routing::get,
};
use serde_json::Value;

use crate::{
    dto::items::ItemPayload,
    error::AppResult,
    models::WishlistItem,
    response::{Created, ErrorBody},
    routes::{
        extract::{JsonBody, PathParams, QueryParams},
        params::ItemQuery,
    },
    services::item_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/wishlists/{wishlist_id}/items",
            get(list_items).post(create_item),
        )
        .route(
            "/wishlists/{wishlist_id}/items/",
            get(list_items).post(create_item),
        )
        .route(
            "/wishlists/{wishlist_id}/items/{item_id}",
            get(get_item).put(update_item).delete(delete_item),
        )
}

#[utoipa::path(
    get,
    path = "/api/wishlists/{wishlist_id}/items",
    params(
        ("wishlist_id" = i32, Path, description = "The Wishlist identifier"),
        ItemQuery,
    ),
    responses(
        (status = 200, description = "Items of the wishlist matching the filters", body = Vec<WishlistItem>),
        (status = 400, description = "Malformed query string", body = ErrorBody),
        (status = 404, description = "Wishlist not found", body = ErrorBody),
    ),
    tag = "Wishlist Items"
)]
pub async fn list_items(
    State(state): State<AppState>,
    PathParams(wishlist_id): PathParams<i32>,
    QueryParams(query): QueryParams<ItemQuery>,
) -> AppResult<Json<Vec<WishlistItem>>> {
    let items = item_service::list_items(&state, wishlist_id, query).await?;
    Ok(Json(items))
}

#[utoipa::path(
    post,
    path = "/api/wishlists/{wishlist_id}/items",
    params(("wishlist_id" = i32, Path, description = "The Wishlist identifier")),
    request_body = ItemPayload,
    responses(
        (status = 201, description = "Item added to the wishlist", body = WishlistItem,
            headers(("Location" = String, description = "URL of the new item"))),
        (status = 400, description = "The posted data was not valid", body = ErrorBody),
        (status = 404, description = "Wishlist not found", body = ErrorBody),
        (status = 415, description = "Content-Type was not application/json", body = ErrorBody),
    ),
    tag = "Wishlist Items"
)]
pub async fn create_item(
    State(state): State<AppState>,
    PathParams(wishlist_id): PathParams<i32>,
    OriginalUri(uri): OriginalUri,
    JsonBody(body): JsonBody<Value>,
) -> AppResult<Created<WishlistItem>> {
    let item = item_service::create_item(&state, wishlist_id, body).await?;
    Ok(Created::at(&uri, item.id, item))
}

#[utoipa::path(
    get,
    path = "/api/wishlists/{wishlist_id}/items/{item_id}",
    params(
        ("wishlist_id" = i32, Path, description = "The Wishlist identifier"),
        ("item_id" = i32, Path, description = "The Wishlist Item identifier"),
    ),
    responses(
        (status = 200, description = "Wishlist item", body = WishlistItem),
        (status = 404, description = "Wishlist or item not found", body = ErrorBody),
    ),
    tag = "Wishlist Items"
)]
pub async fn get_item(
    State(state): State<AppState>,
    PathParams((wishlist_id, item_id)): PathParams<(i32, i32)>,
) -> AppResult<Json<WishlistItem>> {
    let item = item_service::get_item(&state, wishlist_id, item_id).await?;
    Ok(Json(item))
}

#[utoipa::path(
    put,
    path = "/api/wishlists/{wishlist_id}/items/{item_id}",
    params(
        ("wishlist_id" = i32, Path, description = "The Wishlist identifier"),
        ("item_id" = i32, Path, description = "The Wishlist Item identifier"),
    ),
    request_body = ItemPayload,
    responses(
        (status = 200, description = "Updated wishlist item", body = WishlistItem),
        (status = 400, description = "The posted Wishlist Item data was not valid", body = ErrorBody),
        (status = 404, description = "Wishlist or item not found", body = ErrorBody),
        (status = 415, description = "Content-Type was not application/json", body = ErrorBody),
    ),
    tag = "Wishlist Items"
)]
pub async fn update_item(
    State(state): State<AppState>,
    PathParams((wishlist_id, item_id)): PathParams<(i32, i32)>,
    JsonBody(body): JsonBody<Value>,
) -> AppResult<Json<WishlistItem>> {
    let item = item_service::update_item(&state, wishlist_id, item_id, body).await?;
    Ok(Json(item))
}

#[utoipa::path(
    delete,
    path = "/api/wishlists/{wishlist_id}/items/{item_id}",
    params(
        ("wishlist_id" = i32, Path, description = "The Wishlist identifier"),
        ("item_id" = i32, Path, description = "The Wishlist Item identifier"),
    ),
    responses(
        (status = 204, description = "Wishlist item deleted"),
    ),
    tag = "Wishlist Items"
)]
pub async fn delete_item(
    State(state): State<AppState>,
    PathParams((wishlist_id, item_id)): PathParams<(i32, i32)>,
) -> AppResult<StatusCode> {
    item_service::delete_item(&state, wishlist_id, item_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
