use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Set,
};
use serde_json::Value;

use crate::{
    dto::items::ItemPayload,
    entity::{
        WishlistItems,
        wishlist_items::{ActiveModel, Column, Model as ItemModel},
    },
    error::{AppError, AppResult},
    models::WishlistItem,
    routes::params::ItemQuery,
    services::wishlist_service::find_wishlist,
    state::AppState,
};

pub async fn list_items(
    state: &AppState,
    wishlist_id: i32,
    query: ItemQuery,
) -> AppResult<Vec<WishlistItem>> {
    tracing::info!(wishlist_id, ?query, "listing wishlist items");
    find_wishlist(state, wishlist_id).await?;

    let mut condition = Condition::all().add(Column::WishlistId.eq(wishlist_id));

    if let Some(product_id) = query.product_id {
        condition = condition.add(Column::ProductId.eq(product_id));
    }

    if let Some(name) = query.product_name.as_ref().filter(|s| !s.trim().is_empty()) {
        let pattern = format!("%{}%", name.trim());
        condition = condition.add(Expr::col(Column::ProductName).ilike(pattern));
    }

    if let Some(max_price) = query.product_price {
        condition = condition.add(Column::ProductPrice.lte(max_price));
    }

    if let Some(max_quantity) = query.quantity {
        condition = condition.add(Column::Quantity.lte(max_quantity));
    }

    if let Some(created_date) = query.created_date {
        condition = condition.add(Column::CreatedDate.eq(created_date));
    }

    let items = WishlistItems::find()
        .filter(condition)
        .order_by_asc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(WishlistItem::from)
        .collect();
    Ok(items)
}

pub async fn get_item(state: &AppState, wishlist_id: i32, item_id: i32) -> AppResult<WishlistItem> {
    tracing::info!(wishlist_id, item_id, "reading wishlist item");
    find_wishlist(state, wishlist_id).await?;
    let item = find_item(state, wishlist_id, item_id).await?;
    Ok(item.into())
}

pub async fn create_item(state: &AppState, wishlist_id: i32, body: Value) -> AppResult<WishlistItem> {
    let wishlist = find_wishlist(state, wishlist_id).await?;
    let payload = ItemPayload::from_json(body)?;

    let active = ActiveModel {
        id: NotSet,
        wishlist_id: Set(wishlist.id),
        product_id: Set(payload.product_id),
        product_name: Set(payload.product_name),
        product_price: Set(payload.product_price),
        quantity: Set(payload.quantity),
        created_date: Set(payload.created_date.unwrap_or_else(|| Utc::now().date_naive())),
    };
    let item = active.insert(&state.orm).await?;

    tracing::info!(wishlist_id, item_id = item.id, "wishlist item created");
    Ok(item.into())
}

pub async fn update_item(
    state: &AppState,
    wishlist_id: i32,
    item_id: i32,
    body: Value,
) -> AppResult<WishlistItem> {
    tracing::info!(wishlist_id, item_id, "updating wishlist item");
    find_wishlist(state, wishlist_id).await?;
    let existing = find_item(state, wishlist_id, item_id).await?;
    let payload = ItemPayload::from_json(body)?;

    let mut active: ActiveModel = existing.into();
    active.product_id = Set(payload.product_id);
    active.product_name = Set(payload.product_name);
    active.product_price = Set(payload.product_price);
    active.quantity = Set(payload.quantity);
    if let Some(created_date) = payload.created_date {
        active.created_date = Set(created_date);
    }

    let item = active.update(&state.orm).await?;
    Ok(item.into())
}

/// Deleting an item that does not exist is not an error.
pub async fn delete_item(state: &AppState, wishlist_id: i32, item_id: i32) -> AppResult<()> {
    let result = WishlistItems::delete_many()
        .filter(Column::Id.eq(item_id))
        .filter(Column::WishlistId.eq(wishlist_id))
        .exec(&state.orm)
        .await?;
    if result.rows_affected > 0 {
        tracing::info!(wishlist_id, item_id, "wishlist item deleted");
    } else {
        tracing::info!(wishlist_id, item_id, "wishlist item already absent");
    }
    Ok(())
}

async fn find_item(state: &AppState, wishlist_id: i32, item_id: i32) -> AppResult<ItemModel> {
    WishlistItems::find_by_id(item_id)
        .filter(Column::WishlistId.eq(wishlist_id))
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::item_not_found(wishlist_id, item_id))
}
