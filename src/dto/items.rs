use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;

use super::{decode, lenient_i32, optional_date, require_name};
use crate::error::{AppError, AppResult};

/// Exclusive upper bound of a `NUMERIC(10, 2)` column.
const PRICE_LIMIT: Decimal = Decimal::from_parts(100_000_000, 0, 0, false, 0);

/// Body accepted by item create and update. `wishlist_id` always comes from the path.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ItemPayload {
    #[serde(deserialize_with = "lenient_i32")]
    pub product_id: i32,
    pub product_name: String,
    #[schema(value_type = String, example = "19.99")]
    pub product_price: Decimal,
    #[serde(deserialize_with = "lenient_i32")]
    pub quantity: i32,
    #[serde(default, deserialize_with = "optional_date")]
    #[schema(value_type = Option<String>, example = "2024-11-05")]
    pub created_date: Option<NaiveDate>,
}

impl ItemPayload {
    pub fn from_json(body: Value) -> AppResult<Self> {
        let mut payload: Self = decode("WishlistItem", body)?;
        payload.product_name =
            require_name("WishlistItem", "product_name", &payload.product_name)?;
        payload.product_price = payload
            .product_price
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        if payload.product_price.is_sign_negative() || payload.product_price >= PRICE_LIMIT {
            return Err(AppError::BadRequest(format!(
                "Invalid WishlistItem: product_price must be at least 0 and below {PRICE_LIMIT}"
            )));
        }
        if payload.quantity < 1 {
            return Err(AppError::BadRequest(
                "Invalid WishlistItem: quantity must be greater than 0".to_string(),
            ));
        }
        Ok(payload)
    }
}
