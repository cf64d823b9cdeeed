use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use thiserror::Error;
use web_sys::window;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StorageError {
    #[error("localStorage is not available")]
    Unavailable,
    #[error("could not write `{0}` to localStorage")]
    Write(String),
    #[error("could not remove `{0}` from localStorage")]
    Remove(String),
}

/// Durable key-value storage for the session token.
///
/// Values are stored raw (no JSON quoting) so the token stays readable by
/// anything else sharing the origin's storage.
pub trait TokenStorage {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str) -> Result<(), StorageError>;
    fn remove(&self) -> Result<(), StorageError>;
}

/// Browser `localStorage` under a fixed key.
#[derive(Debug, Clone, PartialEq)]
pub struct BrowserStorage {
    key: String,
}

impl BrowserStorage {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn raw() -> Result<web_sys::Storage, StorageError> {
        window()
            .and_then(|win| win.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

impl TokenStorage for BrowserStorage {
    fn load(&self) -> Option<String> {
        Self::raw().ok()?.get_item(&self.key).ok()?
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        Self::raw()?
            .set_item(&self.key, token)
            .map_err(|_| StorageError::Write(self.key.clone()))
    }

    fn remove(&self) -> Result<(), StorageError> {
        Self::raw()?
            .remove_item(&self.key)
            .map_err(|_| StorageError::Remove(self.key.clone()))
    }
}

/// In-memory storage; clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    key: String,
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            entries: Rc::default(),
        }
    }

    pub fn with_token(key: impl Into<String>, token: &str) -> Self {
        let storage = Self::new(key);
        storage
            .entries
            .borrow_mut()
            .insert(storage.key.clone(), token.to_string());
        storage
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl TokenStorage for MemoryStorage {
    fn load(&self) -> Option<String> {
        self.get(&self.key)
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(self.key.clone(), token.to_string());
        Ok(())
    }

    fn remove(&self) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(&self.key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_clones_share_entries() {
        let storage = MemoryStorage::new("token");
        let view = storage.clone();
        storage.save("abc").unwrap();
        assert_eq!(view.load().as_deref(), Some("abc"));
        view.remove().unwrap();
        assert_eq!(storage.load(), None);
    }
}
