//! Shopping List Controller
//!
//! Owns the item list, the active filter mode and the storage adapter.
//! Every mutating handler persists the full collection before returning.

use log::{debug, error};

use crate::error::DomainResult;
use crate::filter::{self, FilterMode};
use crate::list::ShoppingList;
use crate::models::Item;
use crate::reconcile::{reconcile, UiState};
use crate::storage::{ItemStorage, KeyValueStore};

pub struct ShoppingController<S> {
    list: ShoppingList,
    filter: FilterMode,
    ui: UiState,
    storage: ItemStorage<S>,
}

impl<S: KeyValueStore> ShoppingController<S> {
    /// Build the controller from whatever the storage holds
    pub fn load(storage: ItemStorage<S>) -> Self {
        let items = storage.load();
        debug!("loaded {} items from '{}'", items.len(), storage.key());
        let ui = reconcile(items.len());
        Self {
            list: ShoppingList::new(items),
            filter: FilterMode::default(),
            ui,
            storage,
        }
    }

    pub fn items(&self) -> &[Item] {
        self.list.items()
    }

    pub fn filter(&self) -> FilterMode {
        self.filter
    }

    pub fn ui_state(&self) -> UiState {
        self.ui
    }

    #[cfg(test)]
    pub fn storage(&self) -> &ItemStorage<S> {
        &self.storage
    }

    /// Visibility of each item under the active filter
    pub fn visibility(&self) -> Vec<bool> {
        filter::apply(self.filter, self.list.items())
    }

    pub fn add_item(&mut self, raw: &str, now_ms: u64) -> DomainResult<Item> {
        let item = self.list.add(raw, now_ms)?.clone();
        debug!("added item {} ({})", item.id, item.name);
        self.persist();
        self.reconcile();
        Ok(item)
    }

    pub fn toggle_completed(&mut self, id: &str, completed: bool) -> DomainResult<Item> {
        let item = self.list.set_completed(id, completed)?.clone();
        debug!("item {} completed={}", id, completed);
        self.persist();
        Ok(item)
    }

    pub fn edit_name(&mut self, id: &str, text: &str) -> DomainResult<Item> {
        let item = self.list.rename(id, text)?.clone();
        debug!("renamed item {} to {}", id, item.name);
        self.persist();
        Ok(item)
    }

    pub fn remove_item(&mut self, id: &str) -> DomainResult<Item> {
        let item = self.list.remove(id)?;
        debug!("removed item {}", id);
        self.persist();
        self.reconcile();
        Ok(item)
    }

    pub fn clear_all(&mut self) {
        self.list.clear();
        if let Err(e) = self.storage.clear() {
            error!("failed to clear '{}': {}", self.storage.key(), e);
        }
        debug!("cleared list");
        self.reconcile();
    }

    pub fn select_filter(&mut self, mode: FilterMode) {
        debug!("filter -> {}", mode.as_str());
        self.filter = mode;
    }

    fn persist(&mut self) {
        if let Err(e) = self.storage.save_all(self.list.items()) {
            error!("failed to persist '{}': {}", self.storage.key(), e);
        }
    }

    fn reconcile(&mut self) {
        self.ui = reconcile(self.list.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DomainError;
    use crate::storage::{KeyValueStore, MemoryStore};

    const KEY: &str = "shoppingItems";

    fn controller() -> ShoppingController<MemoryStore> {
        ShoppingController::load(ItemStorage::new(MemoryStore::new(), KEY))
    }

    fn persisted(c: &ShoppingController<MemoryStore>) -> Vec<Item> {
        c.storage().load()
    }

    #[test]
    fn test_starts_empty() {
        let c = controller();
        assert!(c.items().is_empty());
        assert_eq!(c.filter(), FilterMode::All);
        assert!(c.ui_state().alert_visible);
    }

    #[test]
    fn test_add_persists_and_reconciles() {
        let mut c = controller();
        c.add_item("Bread", 1).unwrap();
        let item = c.add_item("  Milk  ", 2).unwrap();

        assert_eq!(item.name, "Milk");
        assert!(!item.completed);
        assert_eq!(c.items().len(), 2);
        assert_eq!(c.items().last(), Some(&item));
        assert_eq!(persisted(&c), c.items());
        assert!(!c.ui_state().alert_visible);
        assert!(c.ui_state().clear_visible);
    }

    #[test]
    fn test_blank_add_changes_nothing() {
        let mut c = controller();
        c.add_item("Eggs", 1).unwrap();
        let before = c.items().to_vec();

        for raw in ["", "   "] {
            assert!(matches!(c.add_item(raw, 2), Err(DomainError::InvalidInput(_))));
        }
        assert_eq!(c.items(), before.as_slice());
        assert_eq!(persisted(&c), before);
    }

    #[test]
    fn test_delete_last_item_empties_ui() {
        let mut c = controller();
        let item = c.add_item("Milk", 1).unwrap();
        assert!(c.ui_state().filters_visible);

        c.remove_item(&item.id).unwrap();
        let ui = c.ui_state();
        assert!(ui.alert_visible);
        assert!(!ui.clear_visible);
        assert!(!ui.filters_visible);
        assert!(persisted(&c).is_empty());
    }

    #[test]
    fn test_toggle_under_incompleted_filter_hides_item() {
        let mut c = controller();
        let milk = c.add_item("Milk", 1).unwrap();
        c.add_item("Eggs", 2).unwrap();
        c.select_filter(FilterMode::Incompleted);
        assert_eq!(c.visibility(), vec![true, true]);

        c.toggle_completed(&milk.id, true).unwrap();
        assert_eq!(c.visibility(), vec![false, true]);
        assert!(persisted(&c)[0].completed);
    }

    #[test]
    fn test_added_item_respects_active_filter() {
        let mut c = controller();
        c.select_filter(FilterMode::Completed);
        c.add_item("Milk", 1).unwrap();
        assert_eq!(c.visibility(), vec![false]);
    }

    #[test]
    fn test_add_after_max_numeric_id() {
        let max = u64::MAX.to_string();
        let mut backend = MemoryStore::new();
        backend
            .set(KEY, &format!(r#"[{{"id":"{}","name":"Bread","completed":false}}]"#, max))
            .unwrap();
        let mut c = ShoppingController::load(ItemStorage::new(backend, KEY));

        let item = c.add_item("Milk", 1_700_000_000_000).unwrap();
        assert_eq!(item.id, "1700000000000");
        assert_eq!(persisted(&c).len(), 2);
        assert_ne!(persisted(&c)[0].id, persisted(&c)[1].id);
    }

    #[test]
    fn test_edit_name_persists() {
        let mut c = controller();
        let item = c.add_item("Milk", 1).unwrap();
        c.edit_name(&item.id, "Oat milk").unwrap();
        assert_eq!(persisted(&c)[0].name, "Oat milk");

        assert!(c.edit_name(&item.id, "").is_err());
        assert_eq!(persisted(&c)[0].name, "Oat milk");

        c.toggle_completed(&item.id, true).unwrap();
        assert!(matches!(c.edit_name(&item.id, "Cream"), Err(DomainError::Conflict(_))));
    }

    #[test]
    fn test_clear_all_removes_key() {
        let mut c = controller();
        c.add_item("Milk", 1).unwrap();
        c.clear_all();
        assert!(c.items().is_empty());
        assert_eq!(c.storage().backend().raw(KEY), None);
        assert!(c.ui_state().alert_visible);
    }

    #[test]
    fn test_clear_empty_is_noop() {
        let mut c = controller();
        let before = c.ui_state();
        c.clear_all();
        assert_eq!(c.ui_state(), before);
        assert!(c.ui_state().alert_visible);
    }

    #[test]
    fn test_reload_restores_state() {
        let mut c = controller();
        let a = c.add_item("Milk", 1).unwrap();
        c.add_item("Eggs", 2).unwrap();
        c.toggle_completed(&a.id, true).unwrap();

        let backend = c.storage().backend().clone();
        let reloaded = ShoppingController::load(ItemStorage::new(backend, KEY));
        assert_eq!(reloaded.items(), c.items());
        assert!(reloaded.ui_state().clear_visible);
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let mut c = controller();
        assert!(matches!(c.remove_item("missing"), Err(DomainError::NotFound(_))));
        assert!(matches!(c.toggle_completed("missing", true), Err(DomainError::NotFound(_))));
    }
}
