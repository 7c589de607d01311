//! Durable token slot behind a swappable storage adapter.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session layer only talks to `TokenStore`. In the browser the slot is
//! one `localStorage` entry scoped to the origin; tests and storage-less
//! environments use `MemoryTokenStore` with the same semantics.
//!
//! No expiry is enforced here. A token stays until it is cleared.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Failure to persist or clear the token slot.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("local storage rejected the operation: {0}")]
    Rejected(String),
}

/// Read/write/clear capability over a single token slot.
///
/// Every write is a total overwrite, so implementations need no transaction
/// beyond whatever atomicity the backing primitive gives a single entry.
pub trait TokenStore: Send + Sync {
    /// Current token, or `None` when the slot is empty.
    fn read(&self) -> Option<String>;

    /// Replace the slot with `token`.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` when the backing store is missing or refuses the write.
    fn write(&self, token: &str) -> Result<(), StorageError>;

    /// Empty the slot. Clearing an empty slot succeeds.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` when the backing store is missing or refuses the removal.
    fn clear(&self) -> Result<(), StorageError>;
}

/// In-process token slot.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    slot: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `token` already stored.
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            slot: Mutex::new(Some(token.into())),
        }
    }

    fn slot(&self) -> MutexGuard<'_, Option<String>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl TokenStore for MemoryTokenStore {
    fn read(&self) -> Option<String> {
        self.slot().clone()
    }

    fn write(&self, token: &str) -> Result<(), StorageError> {
        *self.slot() = Some(token.to_owned());
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        *self.slot() = None;
        Ok(())
    }
}

/// `localStorage` slot under a fixed key.
///
/// The `Storage` handle is looked up on every call rather than held, which
/// keeps the adapter `Send + Sync` for Leptos context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrowserTokenStore {
    key: String,
}

impl BrowserTokenStore {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// Whether `localStorage` can be reached in this environment.
    #[must_use]
    pub fn is_available() -> bool {
        #[cfg(feature = "csr")]
        {
            local_storage().is_some()
        }
        #[cfg(not(feature = "csr"))]
        {
            false
        }
    }
}

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

#[cfg(feature = "csr")]
fn js_error_text(err: &wasm_bindgen::JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

impl TokenStore for BrowserTokenStore {
    fn read(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(&self.key).ok()?
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn write(&self, token: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            let storage = local_storage().ok_or(StorageError::Unavailable)?;
            storage
                .set_item(&self.key, token)
                .map_err(|e| StorageError::Rejected(js_error_text(&e)))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
            Err(StorageError::Unavailable)
        }
    }

    fn clear(&self) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            let storage = local_storage().ok_or(StorageError::Unavailable)?;
            storage
                .remove_item(&self.key)
                .map_err(|e| StorageError::Rejected(js_error_text(&e)))
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(StorageError::Unavailable)
        }
    }
}
