//! Key-value slots backing the persisted session.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::auth::error::StorageError;

/// A string key-value store with browser `localStorage` semantics.
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory storage; clones share the same map, so a second service built over a clone
/// observes what the first one wrote, the way a page reload observes `localStorage`.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);

        Ok(())
    }
}

/// `window.localStorage`
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(target_arch = "wasm32")]
impl BrowserStorage {
    fn local_storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::local_storage()?
            .get_item(key)
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::local_storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        Self::local_storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))
    }
}
