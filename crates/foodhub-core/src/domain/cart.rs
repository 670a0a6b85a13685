//! Cart Engine
//!
//! Owns the cart line collection, the transient add-to-cart notification,
//! and the hydration flag. All mutations are synchronous; derived totals
//! are recomputed from the lines on every read.

use serde::{Deserialize, Serialize};

use super::product::Product;
use crate::storage::{decode_lines, encode_lines, CartStorage};

/// One chosen product in the cart
///
/// `id` equals the originating [`Product`] id and de-duplicates lines:
/// there is at most one line per id, and `quantity` is always >= 1
/// (a line whose quantity would drop to 0 is removed instead).
/// `price` is captured at add time and never re-synced with the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub image: String,
    pub quantity: u32,
}

impl CartLine {
    fn from_product(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity: 1,
        }
    }

    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// Transient "added to cart" toast payload
///
/// `seq` increases on every add, so the UI can restart its dismiss timer
/// even when the same item is added twice in a row.
#[derive(Debug, Clone, PartialEq)]
pub struct CartNotification {
    pub name: String,
    pub image: String,
    /// Quantity of the affected line after the add
    pub quantity: u32,
    pub seq: u64,
}

/// The cart state machine
///
/// Constructed explicitly and handed to the UI by reference; it is not an
/// ambient singleton. Starts un-hydrated with an empty line list; callers
/// must not treat the cart as authoritative (or persist it) until
/// [`CartEngine::hydrate`] has run once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartEngine {
    lines: Vec<CartLine>,
    notification: Option<CartNotification>,
    next_seq: u64,
    hydrated: bool,
}

impl CartEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn notification(&self) -> Option<&CartNotification> {
        self.notification.as_ref()
    }

    pub fn is_hydrated(&self) -> bool {
        self.hydrated
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of quantities over all lines
    pub fn cart_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Sum of price x quantity over all lines, using add-time prices
    pub fn subtotal(&self) -> f64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Add one unit of `product`, creating the line on first add.
    ///
    /// Always succeeds and always emits a fresh notification carrying the
    /// resulting quantity of the affected line.
    pub fn add_to_cart(&mut self, product: &Product) {
        let quantity = match self.lines.iter().position(|l| l.id == product.id) {
            Some(index) => {
                self.lines[index].quantity += 1;
                self.lines[index].quantity
            }
            None => {
                self.lines.push(CartLine::from_product(product));
                1
            }
        };

        self.next_seq += 1;
        self.notification = Some(CartNotification {
            name: product.name.clone(),
            image: product.image.clone(),
            quantity,
            seq: self.next_seq,
        });
    }

    /// Quantity +1 for the matching line; no-op when `id` is absent.
    pub fn increment_item(&mut self, id: &str) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.id == id) {
            line.quantity += 1;
        }
    }

    /// Quantity -1 for the matching line, removing it at quantity 1;
    /// no-op when `id` is absent.
    pub fn decrement_item(&mut self, id: &str) {
        let Some(index) = self.lines.iter().position(|l| l.id == id) else {
            return;
        };

        if self.lines[index].quantity > 1 {
            self.lines[index].quantity -= 1;
        } else {
            self.lines.remove(index);
        }
    }

    /// Delete the line regardless of quantity; no-op when `id` is absent.
    pub fn remove_item(&mut self, id: &str) {
        self.lines.retain(|l| l.id != id);
    }

    /// Idempotent
    pub fn clear_notification(&mut self) {
        self.notification = None;
    }

    /// One-time load from durable storage.
    ///
    /// Flips the hydration flag regardless of outcome: a missing or corrupt
    /// payload fail-softs to an empty cart and is only logged.
    pub fn hydrate(&mut self, storage: &dyn CartStorage) {
        if let Some(payload) = storage.load() {
            self.lines = decode_lines(&payload);
        }
        self.hydrated = true;
    }

    /// Fire-and-forget write of the current lines.
    ///
    /// Failures leave the in-memory state authoritative for the rest of the
    /// session; nothing is surfaced to the caller.
    pub fn persist_to(&self, storage: &dyn CartStorage) {
        match encode_lines(&self.lines) {
            Ok(payload) => {
                if let Err(err) = storage.save(&payload) {
                    log::warn!("cart persist failed: {err}");
                }
            }
            Err(err) => log::warn!("cart serialization failed: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryCartStore;

    fn product(id: &str, name: &str, price: f64) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            price,
            description: String::new(),
            image: format!("/images/{id}.jpg"),
            category: None,
            tags: Vec::new(),
            rating: None,
            calories: None,
            prep_time: None,
            highlight: None,
        }
    }

    #[test]
    fn test_add_creates_line_with_quantity_one() {
        let mut cart = CartEngine::new();
        cart.add_to_cart(&product("dish-01", "Stracciatella", 11.0));

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 1);
        assert_eq!(cart.cart_count(), 1);
        assert_eq!(cart.subtotal(), 11.0);
    }

    #[test]
    fn test_repeated_add_merges_into_one_line() {
        let mut cart = CartEngine::new();
        let dish = product("dish-01", "Stracciatella", 11.0);
        cart.add_to_cart(&dish);
        cart.add_to_cart(&dish);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.subtotal(), 22.0);
    }

    #[test]
    fn test_notification_sequence_strictly_increases() {
        let mut cart = CartEngine::new();
        let dish = product("dish-01", "Stracciatella", 11.0);

        cart.add_to_cart(&dish);
        let first = cart.notification().unwrap().clone();
        cart.add_to_cart(&dish);
        let second = cart.notification().unwrap().clone();

        assert_eq!(first.quantity, 1);
        assert_eq!(second.quantity, 2);
        assert!(second.seq > first.seq);
    }

    #[test]
    fn test_clear_notification_is_idempotent() {
        let mut cart = CartEngine::new();
        cart.add_to_cart(&product("dish-01", "Stracciatella", 11.0));

        cart.clear_notification();
        assert!(cart.notification().is_none());
        cart.clear_notification();
        assert!(cart.notification().is_none());
    }

    #[test]
    fn test_count_and_subtotal_over_distinct_items() {
        let mut cart = CartEngine::new();
        let a = product("dish-01", "Stracciatella", 11.0);
        let b = product("dish-03", "Saumon Gravlax", 9.0);

        cart.add_to_cart(&a);
        cart.add_to_cart(&b);
        cart.add_to_cart(&a);

        assert_eq!(cart.cart_count(), 3);
        assert_eq!(cart.subtotal(), 11.0 * 2.0 + 9.0);
    }

    #[test]
    fn test_price_captured_at_first_add() {
        let mut cart = CartEngine::new();
        cart.add_to_cart(&product("dish-01", "Stracciatella", 11.0));

        // Catalog price change after the first add must not re-sync the line.
        cart.add_to_cart(&product("dish-01", "Stracciatella", 99.0));

        assert_eq!(cart.lines()[0].price, 11.0);
        assert_eq!(cart.subtotal(), 22.0);
    }

    #[test]
    fn test_decrement_removes_quantity_one_line() {
        let mut cart = CartEngine::new();
        cart.add_to_cart(&product("dish-01", "Stracciatella", 11.0));

        cart.decrement_item("dish-01");

        assert!(cart.is_empty());
        assert_eq!(cart.cart_count(), 0);
        assert_eq!(cart.subtotal(), 0.0);
    }

    #[test]
    fn test_decrement_above_one_keeps_line() {
        let mut cart = CartEngine::new();
        let dish = product("dish-01", "Stracciatella", 11.0);
        cart.add_to_cart(&dish);
        cart.add_to_cart(&dish);

        cart.decrement_item("dish-01");

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 1);
    }

    #[test]
    fn test_mutating_unknown_id_is_a_no_op() {
        let mut cart = CartEngine::new();
        cart.add_to_cart(&product("dish-01", "Stracciatella", 11.0));
        let before = cart.clone();

        cart.increment_item("dish-99");
        cart.decrement_item("dish-99");
        cart.remove_item("dish-99");

        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_deletes_any_quantity() {
        let mut cart = CartEngine::new();
        let dish = product("dish-01", "Stracciatella", 11.0);
        cart.add_to_cart(&dish);
        cart.add_to_cart(&dish);
        cart.add_to_cart(&dish);

        cart.remove_item("dish-01");

        assert!(cart.is_empty());
    }

    #[test]
    fn test_round_trip_through_storage() {
        let storage = MemoryCartStore::new();
        let mut cart = CartEngine::new();
        cart.hydrate(&storage);
        cart.add_to_cart(&product("dish-01", "Stracciatella", 11.0));
        cart.add_to_cart(&product("dish-03", "Saumon Gravlax", 9.0));
        cart.add_to_cart(&product("dish-01", "Stracciatella", 11.0));
        cart.persist_to(&storage);

        let mut reloaded = CartEngine::new();
        assert!(!reloaded.is_hydrated());
        reloaded.hydrate(&storage);

        assert!(reloaded.is_hydrated());
        assert_eq!(reloaded.lines(), cart.lines());
    }

    #[test]
    fn test_hydrate_without_stored_payload() {
        let mut cart = CartEngine::new();
        cart.hydrate(&MemoryCartStore::new());

        assert!(cart.is_hydrated());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_hydrate_swallows_corrupt_payload() {
        let storage = MemoryCartStore::with_payload("{not json");
        let mut cart = CartEngine::new();
        cart.hydrate(&storage);

        assert!(cart.is_hydrated());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_hydrate_drops_zero_quantity_lines() {
        let storage = MemoryCartStore::with_payload(
            r#"[{"id":"dish-01","name":"Stracciatella","price":11,"image":"/images/menu1.jpg","quantity":0},
                {"id":"dish-03","name":"Saumon Gravlax","price":9,"image":"/images/menu3.jpg","quantity":2}]"#,
        );
        let mut cart = CartEngine::new();
        cart.hydrate(&storage);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].id, "dish-03");
        assert_eq!(cart.cart_count(), 2);
    }
}
