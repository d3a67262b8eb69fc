use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::{wishlist_items, wishlists};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Wishlist {
    pub id: i32,
    pub customer_id: i32,
    pub wishlist_name: String,
    pub is_public: bool,
    #[schema(example = "2024-11-05")]
    pub created_date: NaiveDate,
    pub wishlist_items: Vec<WishlistItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WishlistItem {
    pub id: i32,
    pub wishlist_id: i32,
    pub product_id: i32,
    pub product_name: String,
    #[schema(value_type = String, example = "19.99")]
    pub product_price: Decimal,
    pub quantity: i32,
    #[schema(example = "2024-11-05")]
    pub created_date: NaiveDate,
}

impl Wishlist {
    pub fn from_entity(model: wishlists::Model, items: Vec<wishlist_items::Model>) -> Self {
        Self {
            id: model.id,
            customer_id: model.customer_id,
            wishlist_name: model.wishlist_name,
            is_public: model.is_public,
            created_date: model.created_date,
            wishlist_items: items.into_iter().map(WishlistItem::from).collect(),
        }
    }
}

impl From<wishlist_items::Model> for WishlistItem {
    fn from(model: wishlist_items::Model) -> Self {
        Self {
            id: model.id,
            wishlist_id: model.wishlist_id,
            product_id: model.product_id,
            product_name: model.product_name,
            product_price: model.product_price,
            quantity: model.quantity,
            created_date: model.created_date,
        }
    }
}
