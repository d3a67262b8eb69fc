use utoipa::{
    OpenApi,
    openapi::OpenApi as OpenApiSpec,
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{items::ItemPayload, wishlists::WishlistPayload},
    models::{Wishlist, WishlistItem},
    response::ErrorBody,
    routes::{health, items, wishlists},
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Wishlist REST API Service",
        description = "Create, read, update and delete customer wishlists and the items they hold."
    ),
    paths(
        health::index,
        health::health_check,
        health::readiness,
        wishlists::list_wishlists,
        wishlists::create_wishlist,
        wishlists::get_wishlist,
        wishlists::update_wishlist,
        wishlists::delete_wishlist,
        wishlists::publish_wishlist,
        items::list_items,
        items::create_item,
        items::get_item,
        items::update_item,
        items::delete_item
    ),
    components(
        schemas(
            Wishlist,
            WishlistItem,
            WishlistPayload,
            ItemPayload,
            ErrorBody,
            health::HealthData,
            health::ServiceInfo
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Wishlists", description = "Wishlist endpoints"),
        (name = "Wishlist Items", description = "Endpoints for the items inside a wishlist"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
