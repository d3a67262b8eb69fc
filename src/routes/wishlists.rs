use axum::{
    Json, Router,
    extract::{OriginalUri, State},
    http::StatusCode,
    routing::{get, put},
};
use serde_json::Value;

use crate::{
    dto::wishlists::WishlistPayload,
    error::AppResult,
    models::Wishlist,
    response::{Created, ErrorBody},
    routes::{
        extract::{JsonBody, PathParams, QueryParams},
        params::WishlistQuery,
    },
    services::wishlist_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/wishlists", get(list_wishlists).post(create_wishlist))
        .route("/wishlists/", get(list_wishlists).post(create_wishlist))
        .route(
            "/wishlists/{wishlist_id}",
            get(get_wishlist).put(update_wishlist).delete(delete_wishlist),
        )
        .route("/wishlists/{wishlist_id}/publish", put(publish_wishlist))
}

#[utoipa::path(
    get,
    path = "/api/wishlists",
    params(WishlistQuery),
    responses(
        (status = 200, description = "List wishlists", body = Vec<Wishlist>),
        (status = 400, description = "Malformed query string", body = ErrorBody),
    ),
    tag = "Wishlists"
)]
pub async fn list_wishlists(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<WishlistQuery>,
) -> AppResult<Json<Vec<Wishlist>>> {
    let wishlists = wishlist_service::list_wishlists(&state, query).await?;
    Ok(Json(wishlists))
}

#[utoipa::path(
    post,
    path = "/api/wishlists",
    request_body = WishlistPayload,
    responses(
        (status = 201, description = "Wishlist created", body = Wishlist,
            headers(("Location" = String, description = "URL of the new wishlist"))),
        (status = 400, description = "The posted data was not valid", body = ErrorBody),
        (status = 409, description = "Customer already has a wishlist with that name", body = ErrorBody),
        (status = 415, description = "Content-Type was not application/json", body = ErrorBody),
    ),
    tag = "Wishlists"
)]
pub async fn create_wishlist(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    JsonBody(body): JsonBody<Value>,
) -> AppResult<Created<Wishlist>> {
    let wishlist = wishlist_service::create_wishlist(&state, body).await?;
    Ok(Created::at(&uri, wishlist.id, wishlist))
}

#[utoipa::path(
    get,
    path = "/api/wishlists/{wishlist_id}",
    params(("wishlist_id" = i32, Path, description = "The Wishlist identifier")),
    responses(
        (status = 200, description = "Wishlist with its items", body = Wishlist),
        (status = 404, description = "Wishlist not found", body = ErrorBody),
    ),
    tag = "Wishlists"
)]
pub async fn get_wishlist(
    State(state): State<AppState>,
    PathParams(wishlist_id): PathParams<i32>,
) -> AppResult<Json<Wishlist>> {
    let wishlist = wishlist_service::get_wishlist(&state, wishlist_id).await?;
    Ok(Json(wishlist))
}

#[utoipa::path(
    put,
    path = "/api/wishlists/{wishlist_id}",
    params(("wishlist_id" = i32, Path, description = "The Wishlist identifier")),
    request_body = WishlistPayload,
    responses(
        (status = 200, description = "Updated wishlist", body = Wishlist),
        (status = 400, description = "The posted Wishlist data was not valid", body = ErrorBody),
        (status = 404, description = "Wishlist not found", body = ErrorBody),
        (status = 409, description = "Customer already has a wishlist with that name", body = ErrorBody),
        (status = 415, description = "Content-Type was not application/json", body = ErrorBody),
    ),
    tag = "Wishlists"
)]
pub async fn update_wishlist(
    State(state): State<AppState>,
    PathParams(wishlist_id): PathParams<i32>,
    JsonBody(body): JsonBody<Value>,
) -> AppResult<Json<Wishlist>> {
    let wishlist = wishlist_service::update_wishlist(&state, wishlist_id, body).await?;
    Ok(Json(wishlist))
}

#[utoipa::path(
    delete,
    path = "/api/wishlists/{wishlist_id}",
    params(("wishlist_id" = i32, Path, description = "The Wishlist identifier")),
    responses(
        (status = 204, description = "Wishlist deleted together with its items"),
    ),
    tag = "Wishlists"
)]
pub async fn delete_wishlist(
    State(state): State<AppState>,
    PathParams(wishlist_id): PathParams<i32>,
) -> AppResult<StatusCode> {
    wishlist_service::delete_wishlist(&state, wishlist_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    put,
    path = "/api/wishlists/{wishlist_id}/publish",
    params(("wishlist_id" = i32, Path, description = "The Wishlist identifier")),
    responses(
        (status = 200, description = "Wishlist is now public", body = Wishlist),
        (status = 404, description = "Wishlist not found", body = ErrorBody),
    ),
    tag = "Wishlists"
)]
pub async fn publish_wishlist(
    State(state): State<AppState>,
    PathParams(wishlist_id): PathParams<i32>,
) -> AppResult<Json<Wishlist>> {
    let wishlist = wishlist_service::publish_wishlist(&state, wishlist_id).await?;
    Ok(Json(wishlist))
}
