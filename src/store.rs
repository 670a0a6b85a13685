//! Global Application State Store
//!
//! Uses Leptos reactive_stores for field-level reactivity over the domain
//! core. The cart engine and menu view state are constructed here and
//! provided via context; all mutations go through the `store_*` helpers so
//! components never touch the store fields directly.

use leptos::prelude::*;
use reactive_stores::Store;

use foodhub_core::domain::{CartEngine, DietaryTag, Product};
use foodhub_core::menu::{CategoryFilter, MenuViewState, SortOrder};
use foodhub_core::storage::{encode_lines, CartStorage};

use crate::storage::LocalStorageCartStore;

/// Global application state
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Cart engine: lines, derived totals, notification, hydration flag
    pub cart: CartEngine,
    /// Menu filter/sort/search selection
    pub menu: MenuViewState,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Construct the store and provide it to the component tree
pub fn provide_app_store() -> AppStore {
    let store = Store::new(AppState::default());
    provide_context(store);
    store
}

/// Get the app store from context; panics outside the provider (wiring bug)
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Read Helpers
// ========================

/// Read the cart engine; tracks the cart field when called reactively
pub fn read_cart<T>(store: &AppStore, f: impl FnOnce(&CartEngine) -> T) -> T {
    f(&store.cart().read())
}

/// Read the menu view state; tracks the menu field when called reactively
pub fn read_menu<T>(store: &AppStore, f: impl FnOnce(&MenuViewState) -> T) -> T {
    f(&store.menu().read())
}

// ========================
// Cart Helper Functions
// ========================

pub fn store_add_to_cart(store: &AppStore, product: &Product) {
    store.cart().write().add_to_cart(product);
}

pub fn store_increment_item(store: &AppStore, id: &str) {
    store.cart().write().increment_item(id);
}

pub fn store_decrement_item(store: &AppStore, id: &str) {
    store.cart().write().decrement_item(id);
}

pub fn store_remove_item(store: &AppStore, id: &str) {
    store.cart().write().remove_item(id);
}

pub fn store_clear_notification(store: &AppStore) {
    store.cart().write().clear_notification();
}

// ========================
// Menu Helper Functions
// ========================

pub fn store_set_category(store: &AppStore, filter: CategoryFilter) {
    store.menu().write().set_category(filter);
}

pub fn store_toggle_tag(store: &AppStore, tag: DietaryTag) {
    store.menu().write().toggle_tag(tag);
}

pub fn store_set_sort(store: &AppStore, sort: SortOrder) {
    store.menu().write().set_sort(sort);
}

pub fn store_set_query(store: &AppStore, query: &str) {
    store.menu().write().set_query(query);
}

pub fn store_reset_filters(store: &AppStore) {
    store.menu().write().reset();
}

// ========================
// Persistence Wiring
// ========================

/// Register the hydration and persistence effects.
///
/// Hydration runs once after mount (durable storage is unreachable before
/// then), so the cart must not be treated as authoritative until the
/// engine's hydration flag flips. Persistence is keyed on the serialized
/// payload and gated on that flag, so a pre-hydration empty cart can never
/// overwrite previously saved lines.
pub fn init_cart_effects(store: AppStore) {
    Effect::new(move |_| {
        let storage = LocalStorageCartStore::new();
        let cart_field = store.cart();
        let mut cart = cart_field.write();
        cart.hydrate(&storage);
        web_sys::console::log_1(
            &format!("[Store] cart hydrated: {} lines", cart.lines().len()).into(),
        );
    });

    let payload = Memo::new(move |_| {
        let cart = store.cart().read();
        if !cart.is_hydrated() {
            return None;
        }
        encode_lines(cart.lines()).ok()
    });

    Effect::new(move |_| {
        if let Some(json) = payload.get() {
            // Fire-and-forget: on failure the in-memory cart stays
            // authoritative for the rest of the session.
            if let Err(err) = LocalStorageCartStore::new().save(&json) {
                web_sys::console::warn_1(&format!("[Store] cart persist failed: {err}").into());
            }
        }
    });
}
