use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::dto::optional_date;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct WishlistQuery {
    /// Only wishlists owned by this customer. `customer-id` is accepted too.
    #[serde(default, alias = "customer-id")]
    pub customer_id: Option<i32>,
    /// Case-insensitive substring of the wishlist name.
    #[serde(default)]
    pub wishlist_name: Option<String>,
    #[serde(default)]
    pub is_public: Option<bool>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ItemQuery {
    #[serde(default)]
    pub product_id: Option<i32>,
    /// Case-insensitive substring of the product name.
    #[serde(default)]
    pub product_name: Option<String>,
    /// Items priced at or below this value.
    #[serde(default)]
    #[param(value_type = Option<String>)]
    pub product_price: Option<Decimal>,
    /// Items with at most this quantity.
    #[serde(default)]
    pub quantity: Option<i32>,
    #[serde(default, deserialize_with = "optional_date")]
    #[param(value_type = Option<String>, example = "2024-11-05")]
    pub created_date: Option<NaiveDate>,
}
