use wishlist_service::routes::health::{health_check, index};

#[tokio::test]
async fn health_check_returns_ok() {
    let response = health_check().await;
    assert_eq!(response.0.status, "OK");
}

#[tokio::test]
async fn index_points_at_docs_and_wishlists() {
    let response = index().await;
    assert_eq!(response.0.docs, "/docs");
    assert_eq!(response.0.wishlists, "/api/wishlists");
    assert_eq!(response.0.version, env!("CARGO_PKG_VERSION"));
}
