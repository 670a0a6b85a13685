//! Browser Cart Storage
//!
//! localStorage-backed implementation of the core storage port. Storage can
//! be absent or blocked (private browsing, disabled cookies); loads then
//! report None and saves report an error, both of which the engine treats
//! as non-fatal.

use foodhub_core::storage::{CartStorage, StorageError, CART_STORAGE_KEY};

/// localStorage adapter for the serialized cart lines
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageCartStore;

impl LocalStorageCartStore {
    pub fn new() -> Self {
        Self
    }

    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl CartStorage for LocalStorageCartStore {
    fn load(&self) -> Option<String> {
        Self::local_storage()?.get_item(CART_STORAGE_KEY).ok().flatten()
    }

    fn save(&self, payload: &str) -> Result<(), StorageError> {
        let storage = Self::local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(CART_STORAGE_KEY, payload)
            .map_err(|err| StorageError::WriteFailed(format!("{err:?}")))
    }
}
