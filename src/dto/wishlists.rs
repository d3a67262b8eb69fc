use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;

use super::{decode, lenient_i32, optional_date, require_name};
use crate::error::AppResult;

/// Body accepted by create and update. `id` and `wishlist_items` are ignored if present.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct WishlistPayload {
    #[serde(deserialize_with = "lenient_i32")]
    pub customer_id: i32,
    pub wishlist_name: String,
    #[serde(default)]
    pub is_public: Option<bool>,
    #[serde(default, deserialize_with = "optional_date")]
    #[schema(value_type = Option<String>, example = "2024-11-05")]
    pub created_date: Option<NaiveDate>,
}

impl WishlistPayload {
    pub fn from_json(body: Value) -> AppResult<Self> {
        let mut payload: Self = decode("Wishlist", body)?;
        payload.wishlist_name = require_name("Wishlist", "wishlist_name", &payload.wishlist_name)?;
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use serde_json::json;

    #[test]
    fn reads_a_complete_wishlist() {
        let payload = WishlistPayload::from_json(json!({
            "customer_id": 42,
            "wishlist_name": " vacation ",
            "is_public": true,
            "created_date": "2024-02-29"
        }))
        .unwrap();
        assert_eq!(payload.customer_id, 42);
        assert_eq!(payload.wishlist_name, "vacation");
        assert_eq!(payload.is_public, Some(true));
        assert_eq!(payload.created_date, NaiveDate::from_ymd_opt(2024, 2, 29));
    }

    #[test]
    fn optional_fields_may_be_omitted() {
        let payload =
            WishlistPayload::from_json(json!({ "customer_id": "7", "wishlist_name": "home" }))
                .unwrap();
        assert_eq!(payload.customer_id, 7);
        assert_eq!(payload.is_public, None);
        assert_eq!(payload.created_date, None);
    }

    #[test]
    fn missing_customer_is_a_bad_request() {
        let err = WishlistPayload::from_json(json!({ "wishlist_name": "my wishlist" }))
            .unwrap_err();
        match err {
            AppError::BadRequest(msg) => assert!(msg.contains("customer_id"), "{msg}"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_object_bodies_are_rejected() {
        assert!(matches!(
            WishlistPayload::from_json(json!([])),
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            WishlistPayload::from_json(json!({})),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn malformed_fields_are_rejected() {
        let bad_date = json!({ "customer_id": 1, "wishlist_name": "a", "created_date": "soon" });
        assert!(WishlistPayload::from_json(bad_date).is_err());

        let bad_customer = json!({ "customer_id": "abc", "wishlist_name": "a" });
        assert!(WishlistPayload::from_json(bad_customer).is_err());

        let blank_name = json!({ "customer_id": 1, "wishlist_name": "  " });
        assert!(WishlistPayload::from_json(blank_name).is_err());
    }
}
