//! Domain Layer
//!
//! Catalog and cart entities. Catalog records are build-time data and never
//! mutated at runtime; cart state is owned by [`CartEngine`].

mod cart;
mod product;
mod showcase;

pub use cart::{CartEngine, CartLine, CartNotification};
pub use product::{Category, DietaryTag, Product};
pub use showcase::{Service, Testimonial};
