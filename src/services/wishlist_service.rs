use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, ModelTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};
use serde_json::Value;

use crate::{
    dto::wishlists::WishlistPayload,
    entity::{
        WishlistItems, Wishlists,
        wishlist_items,
        wishlists::{ActiveModel, Column, Model as WishlistModel},
    },
    error::{AppError, AppResult},
    models::Wishlist,
    routes::params::WishlistQuery,
    state::AppState,
};

pub async fn list_wishlists(state: &AppState, query: WishlistQuery) -> AppResult<Vec<Wishlist>> {
    tracing::info!(?query, "listing wishlists");
    let mut condition = Condition::all();

    if let Some(customer_id) = query.customer_id {
        condition = condition.add(Column::CustomerId.eq(customer_id));
    }

    if let Some(name) = query.wishlist_name.as_ref().filter(|s| !s.trim().is_empty()) {
        let pattern = format!("%{}%", name.trim());
        condition = condition.add(Expr::col(Column::WishlistName).ilike(pattern));
    }

    if let Some(is_public) = query.is_public {
        condition = condition.add(Column::IsPublic.eq(is_public));
    }

    let rows = Wishlists::find()
        .filter(condition)
        .order_by_asc(Column::Id)
        .find_with_related(WishlistItems)
        .order_by_asc(wishlist_items::Column::Id)
        .all(&state.orm)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(wishlist, items)| Wishlist::from_entity(wishlist, items))
        .collect())
}

pub async fn get_wishlist(state: &AppState, id: i32) -> AppResult<Wishlist> {
    tracing::info!(wishlist_id = id, "reading wishlist");
    let wishlist = find_wishlist(state, id).await?;
    with_items(state, wishlist).await
}

pub async fn create_wishlist(state: &AppState, body: Value) -> AppResult<Wishlist> {
    let payload = WishlistPayload::from_json(body)?;
    ensure_unique_name(state, payload.customer_id, &payload.wishlist_name, None).await?;

    let active = ActiveModel {
        id: NotSet,
        customer_id: Set(payload.customer_id),
        wishlist_name: Set(payload.wishlist_name.clone()),
        is_public: Set(payload.is_public.unwrap_or(false)),
        created_date: Set(payload.created_date.unwrap_or_else(|| Utc::now().date_naive())),
    };
    let wishlist = active
        .insert(&state.orm)
        .await
        .map_err(|err| duplicate_name(err, &payload))?;

    tracing::info!(
        wishlist_id = wishlist.id,
        customer_id = wishlist.customer_id,
        "wishlist created"
    );
    Ok(Wishlist::from_entity(wishlist, Vec::new()))
}

pub async fn update_wishlist(state: &AppState, id: i32, body: Value) -> AppResult<Wishlist> {
    tracing::info!(wishlist_id = id, "updating wishlist");
    let existing = find_wishlist(state, id).await?;
    let payload = WishlistPayload::from_json(body)?;
    ensure_unique_name(state, payload.customer_id, &payload.wishlist_name, Some(id)).await?;

    let mut active: ActiveModel = existing.into();
    active.customer_id = Set(payload.customer_id);
    active.wishlist_name = Set(payload.wishlist_name.clone());
    if let Some(is_public) = payload.is_public {
        active.is_public = Set(is_public);
    }
    if let Some(created_date) = payload.created_date {
        active.created_date = Set(created_date);
    }

    let wishlist = active
        .update(&state.orm)
        .await
        .map_err(|err| duplicate_name(err, &payload))?;
    with_items(state, wishlist).await
}

/// Deleting a wishlist that does not exist is not an error.
pub async fn delete_wishlist(state: &AppState, id: i32) -> AppResult<()> {
    let result = Wishlists::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected > 0 {
        tracing::info!(wishlist_id = id, "wishlist deleted");
    } else {
        tracing::info!(wishlist_id = id, "wishlist already absent");
    }
    Ok(())
}

pub async fn publish_wishlist(state: &AppState, id: i32) -> AppResult<Wishlist> {
    let existing = find_wishlist(state, id).await?;
    let wishlist = if existing.is_public {
        existing
    } else {
        let mut active: ActiveModel = existing.into();
        active.is_public = Set(true);
        active.update(&state.orm).await?
    };
    tracing::info!(wishlist_id = id, "wishlist published");
    with_items(state, wishlist).await
}

pub(crate) async fn find_wishlist(state: &AppState, id: i32) -> AppResult<WishlistModel> {
    Wishlists::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::wishlist_not_found(id))
}

async fn with_items(state: &AppState, wishlist: WishlistModel) -> AppResult<Wishlist> {
    let items = wishlist
        .find_related(WishlistItems)
        .order_by_asc(wishlist_items::Column::Id)
        .all(&state.orm)
        .await?;
    Ok(Wishlist::from_entity(wishlist, items))
}

async fn ensure_unique_name(
    state: &AppState,
    customer_id: i32,
    name: &str,
    except: Option<i32>,
) -> AppResult<()> {
    let mut finder = Wishlists::find()
        .filter(Column::CustomerId.eq(customer_id))
        .filter(Column::WishlistName.eq(name));
    if let Some(id) = except {
        finder = finder.filter(Column::Id.ne(id));
    }

    if finder.count(&state.orm).await? > 0 {
        return Err(name_taken(customer_id, name));
    }
    Ok(())
}

fn duplicate_name(err: sea_orm::DbErr, payload: &WishlistPayload) -> AppError {
    let message = name_taken(payload.customer_id, &payload.wishlist_name).to_string();
    AppError::on_unique_violation(err, message)
}

fn name_taken(customer_id: i32, name: &str) -> AppError {
    AppError::Conflict(format!(
        "Customer '{customer_id}' already has a Wishlist named '{name}'."
    ))
}
