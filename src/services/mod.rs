pub mod item_service;
pub mod wishlist_service;
