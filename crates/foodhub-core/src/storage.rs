//! Cart Storage Port
//!
//! Abstract key-value persistence for the cart, so the engine stays
//! storage-agnostic. The browser frontend backs this with localStorage;
//! tests use the in-memory store.

use std::cell::RefCell;
use std::fmt;

use crate::domain::CartLine;

/// Fixed durable-storage key for the serialized cart lines
pub const CART_STORAGE_KEY: &str = "foodhub-cart-items";

/// Storage-level errors
///
/// Never fatal: reads fail-soft to an empty cart and writes are
/// fire-and-forget, so these only ever reach a log line.
#[derive(Debug, Clone, PartialEq)]
pub enum StorageError {
    Unavailable,
    WriteFailed(String),
    Serialize(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Unavailable => write!(f, "durable storage unavailable"),
            StorageError::WriteFailed(msg) => write!(f, "write failed: {}", msg),
            StorageError::Serialize(msg) => write!(f, "serialization failed: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

/// Durable per-device key-value store holding the cart payload
pub trait CartStorage {
    /// Returns the stored payload, or None when nothing is stored or the
    /// store cannot be reached.
    fn load(&self) -> Option<String>;

    /// Stores the payload under the fixed cart key.
    fn save(&self, payload: &str) -> Result<(), StorageError>;
}

/// In-memory storage for tests and non-browser targets
#[derive(Debug, Default)]
pub struct MemoryCartStore {
    payload: RefCell<Option<String>>,
}

impl MemoryCartStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_payload(payload: &str) -> Self {
        Self {
            payload: RefCell::new(Some(payload.to_string())),
        }
    }
}

impl CartStorage for MemoryCartStore {
    fn load(&self) -> Option<String> {
        self.payload.borrow().clone()
    }

    fn save(&self, payload: &str) -> Result<(), StorageError> {
        *self.payload.borrow_mut() = Some(payload.to_string());
        Ok(())
    }
}

pub fn encode_lines(lines: &[CartLine]) -> Result<String, StorageError> {
    serde_json::to_string(lines).map_err(|err| StorageError::Serialize(err.to_string()))
}

/// Decode a stored payload into cart lines.
///
/// Any shape mismatch rejects the whole payload as empty; there is no
/// schema version field and no migration. Entries with a zero quantity
/// violate the line invariant and are dropped.
pub fn decode_lines(payload: &str) -> Vec<CartLine> {
    match serde_json::from_str::<Vec<CartLine>>(payload) {
        Ok(mut lines) => {
            lines.retain(|line| line.quantity >= 1);
            lines
        }
        Err(err) => {
            log::warn!("stored cart payload rejected: {err}");
            Vec::new()
        }
    }
}
