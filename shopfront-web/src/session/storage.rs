//! Where carts are persisted between page loads.

use gloo_storage::errors::StorageError as GlooStorageError;
use gloo_storage::{LocalStorage, Storage};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use thiserror::Error;

use super::cart::Cart;

/// Why a cart could not be read or written.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The record exists but is not a cart.
    #[error("stored cart under `{key}` is corrupt: {reason}")]
    Corrupt {
        /// Storage key of the record.
        key: String,
        /// Decoder message.
        reason: String,
    },
    /// The backend refused the operation, e.g. quota exceeded or storage disabled.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Key/value persistence for carts.
pub trait CartStorage {
    /// The cart stored under `key`; `Ok(None)` when nothing is stored.
    ///
    /// # Errors
    /// [`StorageError::Corrupt`] for unreadable records,
    /// [`StorageError::Unavailable`] when storage cannot be accessed.
    fn load(&self, key: &str) -> Result<Option<Cart>, StorageError>;

    /// Store `cart` under `key`, replacing any previous record.
    ///
    /// # Errors
    /// [`StorageError::Unavailable`] when the write is refused.
    fn save(&self, key: &str, cart: &Cart) -> Result<(), StorageError>;

    /// Drop the record under `key`, if any.
    fn remove(&self, key: &str);
}

/// The browser's `localStorage`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserStorage;

impl CartStorage for BrowserStorage {
    fn load(&self, key: &str) -> Result<Option<Cart>, StorageError> {
        match LocalStorage::get::<Cart>(key) {
            Ok(cart) => Ok(Some(cart)),
            Err(GlooStorageError::KeyNotFound(_)) => Ok(None),
            Err(GlooStorageError::SerdeError(err)) => Err(StorageError::Corrupt {
                key: key.to_string(),
                reason: err.to_string(),
            }),
            Err(err) => Err(StorageError::Unavailable(err.to_string())),
        }
    }

    fn save(&self, key: &str, cart: &Cart) -> Result<(), StorageError> {
        LocalStorage::set(key, cart).map_err(|err| StorageError::Unavailable(err.to_string()))
    }

    fn remove(&self, key: &str) {
        LocalStorage::delete(key);
    }
}

/// In-memory storage holding the same JSON text the browser would.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
}

impl PartialEq for MemoryStorage {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.entries, &other.entries)
    }
}

impl MemoryStorage {
    /// The stored text under `key`.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    /// Store raw text under `key`, bypassing cart encoding.
    pub fn insert_raw(&self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.borrow_mut().insert(key.into(), value.into());
    }

    /// Every key currently stored.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.entries.borrow().keys().cloned().collect()
    }
}

impl CartStorage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<Cart>, StorageError> {
        let Some(text) = self.raw(key) else {
            return Ok(None);
        };
        serde_json::from_str(&text)
            .map(Some)
            .map_err(|err| StorageError::Corrupt {
                key: key.to_string(),
                reason: err.to_string(),
            })
    }

    fn save(&self, key: &str, cart: &Cart) -> Result<(), StorageError> {
        let text = serde_json::to_string(cart)
            .map_err(|err| StorageError::Unavailable(err.to_string()))?;
        self.insert_raw(key, text);
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}
