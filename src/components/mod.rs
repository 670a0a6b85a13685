//! UI Components
//!
//! Leptos components for the Foodhub pages.

mod cart_notification;
mod checkout_page;
mod header;
mod home_page;
mod menu_page;
mod order_card;
mod order_page;
mod order_summary;
mod product_card;
mod product_rating;

pub use cart_notification::CartNotification;
pub use checkout_page::CheckoutPage;
pub use header::Header;
pub use home_page::HomePage;
pub use menu_page::MenuPage;
pub use order_card::OrderCard;
pub use order_page::OrderPage;
pub use order_summary::OrderSummary;
pub use product_card::ProductCard;
pub use product_rating::ProductRating;
