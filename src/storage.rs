//! Storage Adapter
//!
//! Persists the whole item collection under a single key as JSON.
//! Every write replaces the stored collection; there are no partial updates.

#[cfg(test)]
use std::collections::HashMap;

use log::warn;

use crate::error::StorageError;
use crate::models::Item;

/// Minimal key-value backend the adapter writes through
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Browser `localStorage`, looked up on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn area() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        window
            .local_storage()
            .map_err(|e| StorageError::Backend(format!("{:?}", e)))?
            .ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::area()?
            .get_item(key)
            .map_err(|e| StorageError::Backend(format!("{:?}", e)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::area()?
            .set_item(key, value)
            .map_err(|e| StorageError::Backend(format!("{:?}", e)))
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        Self::area()?
            .remove_item(key)
            .map_err(|e| StorageError::Backend(format!("{:?}", e)))
    }
}

/// In-memory backend
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw stored value for a key
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Reads and writes the item collection under one key
#[derive(Debug, Clone)]
pub struct ItemStorage<S> {
    backend: S,
    key: String,
}

impl<S: KeyValueStore> ItemStorage<S> {
    pub fn new(backend: S, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    #[cfg(test)]
    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Load the persisted collection.
    ///
    /// Missing, unreadable or malformed data yields an empty list.
    pub fn load(&self) -> Vec<Item> {
        let raw = match self.backend.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("could not read '{}': {}", self.key, e);
                return Vec::new();
            }
        };
        match serde_json::from_str::<Option<Vec<Item>>>(&raw) {
            Ok(items) => items.unwrap_or_default(),
            Err(e) => {
                warn!("discarding malformed '{}' value: {}", self.key, e);
                Vec::new()
            }
        }
    }

    /// Overwrite the persisted collection with `items`
    pub fn save_all(&mut self, items: &[Item]) -> Result<(), StorageError> {
        let json = serde_json::to_string(items).map_err(|e| StorageError::Serialize(e.to_string()))?;
        self.backend.set(&self.key, &json)
    }

    /// Remove the persisted collection entirely
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.backend.remove(&self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage() -> ItemStorage<MemoryStore> {
        ItemStorage::new(MemoryStore::new(), "shoppingItems")
    }

    fn item(id: &str, name: &str, completed: bool) -> Item {
        Item {
            id: id.to_string(),
            name: name.to_string(),
            completed,
        }
    }

    #[test]
    fn test_save_then_load_keeps_order() {
        let mut storage = storage();
        let items = vec![
            item("3", "Eggs", true),
            item("1", "Milk", false),
            item("2", "Bread", false),
        ];
        storage.save_all(&items).unwrap();
        assert_eq!(storage.load(), items);
    }

    #[test]
    fn test_load_missing_key_is_empty() {
        assert!(storage().load().is_empty());
    }

    #[test]
    fn test_load_malformed_is_empty() {
        let mut backend = MemoryStore::new();
        backend.set("shoppingItems", "{not json").unwrap();
        let storage = ItemStorage::new(backend, "shoppingItems");
        assert!(storage.load().is_empty());
    }

    #[test]
    fn test_load_wrong_shape_is_empty() {
        let mut backend = MemoryStore::new();
        backend.set("shoppingItems", r#"[{"id":1,"label":"x"}]"#).unwrap();
        let storage = ItemStorage::new(backend, "shoppingItems");
        assert!(storage.load().is_empty());
    }

    #[test]
    fn test_load_json_null_is_empty() {
        let mut backend = MemoryStore::new();
        backend.set("shoppingItems", "null").unwrap();
        let storage = ItemStorage::new(backend, "shoppingItems");
        assert!(storage.load().is_empty());
    }

    #[test]
    fn test_clear_removes_key() {
        let mut storage = storage();
        storage.save_all(&[item("1", "Milk", false)]).unwrap();
        storage.clear().unwrap();
        assert_eq!(storage.backend().raw("shoppingItems"), None);
        assert!(storage.load().is_empty());
    }

    #[test]
    fn test_saved_layout() {
        let mut storage = storage();
        storage.save_all(&[item("42", "Tea", true)]).unwrap();
        assert_eq!(
            storage.backend().raw("shoppingItems"),
            Some(r#"[{"id":"42","name":"Tea","completed":true}]"#)
        );
    }
}
