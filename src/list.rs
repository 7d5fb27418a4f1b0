//! Item Store
//!
//! Ordered in-memory collection of items. Insertion order is display order.

use crate::error::{DomainError, DomainResult};
use crate::models::Item;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShoppingList {
    items: Vec<Item>,
}

impl ShoppingList {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    fn get_mut(&mut self, id: &str) -> DomainResult<&mut Item> {
        self.items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("item {}", id)))
    }

    /// Id for an item created at `now_ms`.
    ///
    /// Timestamps that collide with (or precede) an existing id are bumped
    /// past the largest numeric id in the list. When that id is already
    /// `u64::MAX`, the first unused value from `now_ms` onwards is taken.
    pub fn next_id(&self, now_ms: u64) -> String {
        let last = self
            .items
            .iter()
            .filter_map(|item| item.id.parse::<u64>().ok())
            .max();
        let bumped = match last {
            Some(last) if now_ms <= last => last.checked_add(1),
            _ => Some(now_ms),
        };
        if let Some(id) = bumped {
            return id.to_string();
        }
        (now_ms..=u64::MAX)
            .chain(0..now_ms)
            .map(|n| n.to_string())
            .find(|id| self.get(id).is_none())
            .unwrap_or_else(|| now_ms.to_string())
    }

    /// Append a new item; `raw` is trimmed and must not be blank
    pub fn add(&mut self, raw: &str, now_ms: u64) -> DomainResult<&Item> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(DomainError::InvalidInput("item name is empty".to_string()));
        }
        let id = self.next_id(now_ms);
        self.items.push(Item::new(id, name.to_string()));
        Ok(&self.items[self.items.len() - 1])
    }

    pub fn set_completed(&mut self, id: &str, completed: bool) -> DomainResult<&Item> {
        let item = self.get_mut(id)?;
        item.completed = completed;
        Ok(&*item)
    }

    /// Rename an item that is not completed; blank names are rejected
    pub fn rename(&mut self, id: &str, text: &str) -> DomainResult<&Item> {
        let name = text.trim();
        let item = self.get_mut(id)?;
        if item.completed {
            return Err(DomainError::Conflict(format!("item {} is completed", id)));
        }
        if name.is_empty() {
            return Err(DomainError::InvalidInput("item name is empty".to_string()));
        }
        item.name = name.to_string();
        Ok(&*item)
    }

    pub fn remove(&mut self, id: &str) -> DomainResult<Item> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("item {}", id)))?;
        Ok(self.items.remove(index))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
