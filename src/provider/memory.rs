//! In-memory backend store

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::StorageProvider;

/// In-memory [`StorageProvider`] backed by a shared map.
///
/// Cloning yields another handle to the same map, so a test or application
/// can keep a reference to a store it injects into one or more builders.
/// The lock satisfies the `&self` provider contract only; it provides no
/// atomicity across keys.
#[derive(Debug, Clone, Default)]
pub struct MemoryProvider {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryProvider {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether the store holds no entries
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Whether an entry exists at `key`
    pub fn contains_key(&self, key: &str) -> bool {
        self.read().contains_key(key)
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, String>> {
        self.entries.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, String>> {
        self.entries.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl StorageProvider for MemoryProvider {
    fn get_item(&self, key: &str) -> Option<String> {
        self.read().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        log::debug!("set '{}' ({} bytes)", key, value.len());
        self.write().insert(key.to_string(), value.to_string());
    }

    fn remove_item(&self, key: &str) {
        log::debug!("remove '{}'", key);
        self.write().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let store = MemoryProvider::new();
        assert_eq!(store.get_item("k"), None);

        store.set_item("k", "v");
        assert_eq!(store.get_item("k"), Some("v".to_string()));

        store.remove_item("k");
        assert_eq!(store.get_item("k"), None);
    }

    #[test]
    fn test_remove_absent_key_is_noop() {
        let store = MemoryProvider::new();
        store.remove_item("missing");
        assert!(store.is_empty());
    }

    #[test]
    fn test_clones_share_entries() {
        let store = MemoryProvider::new();
        let alias = store.clone();

        store.set_item("k", "v");
        assert_eq!(alias.get_item("k"), Some("v".to_string()));

        alias.remove_item("k");
        assert!(!store.contains_key("k"));
    }

    #[test]
    fn test_overwrite_replaces_value() {
        let store = MemoryProvider::new();
        store.set_item("k", "first");
        store.set_item("k", "second");
        assert_eq!(store.get_item("k"), Some("second".to_string()));
        assert_eq!(store.len(), 1);
    }
}
