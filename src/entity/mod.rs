pub mod wishlist_items;
pub mod wishlists;

pub use wishlist_items::Entity as WishlistItems;
pub use wishlists::Entity as Wishlists;
