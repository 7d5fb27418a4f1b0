//! View State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store is a
//! projection of the controller; components read it, never write it.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::controller::ShoppingController;
use crate::filter::FilterMode;
use crate::models::Item;
use crate::reconcile::UiState;
use crate::storage::KeyValueStore;

#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Items in display order
    pub items: Vec<Item>,
    /// Active filter mode
    pub filter: FilterMode,
    /// Ids of items the active filter hides
    pub hidden: Vec<String>,
    /// Empty-state dependent visibility
    pub ui: UiState,
}

impl AppState {
    pub fn from_controller<S: KeyValueStore>(controller: &ShoppingController<S>) -> Self {
        let hidden = controller
            .items()
            .iter()
            .zip(controller.visibility())
            .filter(|(_, visible)| !visible)
            .map(|(item, _)| item.id.clone())
            .collect();
        Self {
            items: controller.items().to_vec(),
            filter: controller.filter(),
            hidden,
            ui: controller.ui_state(),
        }
    }
}

pub type AppStore = Store<AppState>;

pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Push the controller's current state into the store, field by field
pub fn store_sync<S: KeyValueStore>(store: &AppStore, controller: &ShoppingController<S>) {
    let next = AppState::from_controller(controller);
    if store.items().with_untracked(|items| *items != next.items) {
        *store.items().write() = next.items;
    }
    if store.filter().get_untracked() != next.filter {
        *store.filter().write() = next.filter;
    }
    if store.hidden().with_untracked(|hidden| *hidden != next.hidden) {
        *store.hidden().write() = next.hidden;
    }
    if store.ui().get_untracked() != next.ui {
        *store.ui().write() = next.ui;
    }
}
